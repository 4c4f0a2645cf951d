//! Action execution with scheme validation.
//!
//! Only `http://` and `https://` URLs may be opened. Rejects
//! `javascript:`, `file://`, `data:`, and all other schemes.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use sanvii_core::{Action, Result, SanviiError};

/// Executes the follow-up action attached to a reply.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    async fn execute(&self, action: &Action) -> Result<()>;
}

fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(SanviiError::Action("URL must not be empty".to_string()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(SanviiError::Action(format!(
            "Unsupported URL scheme. Only http:// and https:// are allowed, got: {}",
            url
        )));
    }
    Ok(())
}

/// Default executor for headless environments: validates and logs.
///
/// Opening the browser is the outer surface's job; this executor only
/// confirms the action would be performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingExecutor;

#[async_trait]
impl ActionExecutor for LoggingExecutor {
    async fn execute(&self, action: &Action) -> Result<()> {
        match action {
            Action::OpenUrl { url, label } => {
                validate_url(url)?;
                tracing::info!(url = %url, label = %label, "Opened URL");
                Ok(())
            }
        }
    }
}

/// Executor that records opened URLs, for testing.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("executor log poisoned").clone()
    }
}

#[async_trait]
impl ActionExecutor for RecordingExecutor {
    async fn execute(&self, action: &Action) -> Result<()> {
        match action {
            Action::OpenUrl { url, .. } => {
                validate_url(url)?;
                self.opened
                    .lock()
                    .expect("executor log poisoned")
                    .push(url.clone());
                Ok(())
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
