//! CLI argument definitions for the Sanvii application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Sanvii — a conversational assistant widget for the terminal.
#[derive(Parser, Debug)]
#[command(name = "sanvii", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Name Sanvii addresses you by.
    #[arg(short = 'o', long = "owner")]
    pub owner: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Start with speech output muted.
    #[arg(long = "muted")]
    pub muted: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SANVII_CONFIG env var > ~/.sanvii/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SANVII_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the owner name.
    ///
    /// Priority: --owner flag > SANVII_OWNER env var > config file value.
    pub fn resolve_owner(&self, config_owner: &str) -> String {
        if let Some(ref owner) = self.owner {
            return owner.clone();
        }
        if let Ok(owner) = std::env::var("SANVII_OWNER") {
            if !owner.is_empty() {
                return owner;
            }
        }
        config_owner.to_string()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Resolve the initial mute state.
    ///
    /// The flag can only turn muting on; it never unmutes a muted config.
    pub fn resolve_muted(&self, config_muted: bool) -> bool {
        self.muted || config_muted
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".sanvii").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".sanvii").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let a = args(&["sanvii"]);
        assert!(a.config.is_none());
        assert!(a.owner.is_none());
        assert!(a.log_level.is_none());
        assert!(!a.muted);
    }

    #[test]
    fn test_flags() {
        let a = args(&[
            "sanvii",
            "--config",
            "/tmp/sanvii.toml",
            "--owner",
            "Sam",
            "--log-level",
            "debug",
            "--muted",
        ]);
        assert_eq!(a.config, Some(PathBuf::from("/tmp/sanvii.toml")));
        assert_eq!(a.owner.as_deref(), Some("Sam"));
        assert_eq!(a.log_level.as_deref(), Some("debug"));
        assert!(a.muted);
    }

    #[test]
    fn test_config_flag_wins() {
        let a = args(&["sanvii", "-c", "/tmp/custom.toml"]);
        assert_eq!(a.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_owner_flag_wins_over_config() {
        let a = args(&["sanvii", "-o", "Sam"]);
        assert_eq!(a.resolve_owner("Boss"), "Sam");
    }

    #[test]
    fn test_owner_falls_back_to_config() {
        let a = args(&["sanvii"]);
        // Assumes SANVII_OWNER is not set in the test environment.
        assert_eq!(a.resolve_owner("Boss"), "Boss");
    }

    #[test]
    fn test_log_level_flag_wins() {
        let a = args(&["sanvii", "-l", "trace"]);
        assert_eq!(a.resolve_log_level("info"), "trace");
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let a = args(&["sanvii"]);
        assert_eq!(a.resolve_log_level("warn"), "warn");
    }

    #[test]
    fn test_muted_flag_only_mutes() {
        assert!(args(&["sanvii", "--muted"]).resolve_muted(false));
        assert!(args(&["sanvii"]).resolve_muted(true));
        assert!(!args(&["sanvii"]).resolve_muted(false));
    }
}
