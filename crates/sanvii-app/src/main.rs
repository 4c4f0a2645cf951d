//! Sanvii application binary - composition root.
//!
//! Ties the Sanvii crates together into a terminal chat session:
//! 1. Load configuration from TOML
//! 2. Build the intent responder and widget orchestrator
//! 3. Greet by time of day
//! 4. Read typed input from stdin, one utterance per line
//!
//! Speech capture reports unavailable on the terminal, so the session is
//! typed-only; "speech" output is logged rather than synthesized.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use sanvii_core::{Context, SanviiConfig};
use sanvii_intent::IntentResponder;
use sanvii_voice::{ConsoleSynthesis, SpeechCapture, StubCapture};
use sanvii_widget::{LoggingExecutor, WidgetOrchestrator};

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let config = SanviiConfig::load_or_default(&config_file);

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Sanvii v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    let ctx = Context::new(args.resolve_owner(&config.general.owner_name));

    let mut widget_config = config.widget.clone();
    widget_config.muted = args.resolve_muted(widget_config.muted);

    let capture = StubCapture;
    if !capture.is_available() {
        tracing::info!("Speech recognition unavailable on the terminal; typed input only");
    }

    let orchestrator = WidgetOrchestrator::new(
        IntentResponder::new(),
        widget_config,
        ctx,
        Arc::new(ConsoleSynthesis),
        Arc::new(LoggingExecutor),
    );

    let greeting = orchestrator.greet_on_load().await?;
    println!("Sanvii: {}", greeting);

    // Chat loop: one utterance per line until EOF or a quit command.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                let reply = orchestrator.clear_chat().await;
                println!("Sanvii: {}", reply);
                continue;
            }
            "/mute" => {
                let muted = orchestrator.toggle_mute().await;
                tracing::info!(muted, "Mute toggled");
                continue;
            }
            _ => {}
        }

        let Some(response) = orchestrator.handle_typed_message(&line).await? else {
            continue;
        };
        println!("Sanvii: {}", response.text);
        if let Some(action) = &response.action {
            println!("        [{}]", action);
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
