//! teams-activity - offline inspector for Teams activity payloads.
//!
//! Reads one Bot Framework activity (JSON) from a file or stdin, applies one
//! of the Teams helpers to it and prints the result as JSON on stdout. Logs go
//! to stderr.
//!
//! # Environment Variables
//!
//! - `TEAMS_LOG_JSON` - Emit logs as JSON lines (default: false)
//! - `TEAMS_PRETTY` - Pretty-print stdout JSON (default: true)
//! - `RUST_LOG` - Log filter directives
//!
//! # Examples
//!
//! ```bash
//! # Classify a conversation update
//! teams-activity --input update.json classify
//!
//! # Tenant id of a message, read from stdin
//! cat message.json | teams-activity tenant
//!
//! # Mention a user at the end of the text
//! teams-activity --input message.json mention --user-id 29:abc --user-name Alice --append
//!
//! # Reply into the general channel
//! teams-activity --input update.json reply --text "Welcome!"
//! ```

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::Commands;
use config::Config;
use teams::Activity;

/// Inspect and transform Teams activity payloads.
#[derive(Parser)]
#[command(name = "teams-activity")]
#[command(about = "Inspect and transform Teams activity payloads")]
#[command(version)]
struct Cli {
    /// Activity JSON file (reads stdin when omitted)
    #[arg(long, short, global = true)]
    input: Option<PathBuf>,

    /// Pretty-print the output (overrides `TEAMS_PRETTY`)
    #[arg(long, global = true, conflicts_with = "compact")]
    pretty: bool,

    /// Print the output on a single line (overrides `TEAMS_PRETTY`)
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn use_pretty(&self, config: &Config) -> bool {
        if self.pretty {
            true
        } else if self.compact {
            false
        } else {
            config.pretty
        }
    }
}

fn env_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env().add_directive("teams=info".parse()?))
}

fn init_tracing(config: &Config) -> Result<()> {
    if config.log_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter()?)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter()?)
            .init();
    }
    Ok(())
}

fn read_activity(input: Option<&Path>) -> Result<Activity> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read activity from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Input is not a valid activity")
}

fn main() -> Result<()> {
    let config = Config::default();
    init_tracing(&config)?;

    let cli = Cli::parse();
    debug!(input = ?cli.input, command = ?cli.command, "Running command");

    let activity = read_activity(cli.input.as_deref())?;
    let output = commands::run(&cli.command, activity)?;

    let rendered = if cli.use_pretty(&config) {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to render output")?;

    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_parses_mention() {
        let cli = Cli::try_parse_from([
            "teams-activity",
            "mention",
            "--user-id",
            "u1",
            "--user-name",
            "Alice",
            "--append",
            "--input",
            "message.json",
        ])
        .unwrap();

        assert_eq!(cli.input.as_deref(), Some(Path::new("message.json")));
        assert!(matches!(
            cli.command,
            Commands::Mention { ref user_id, append: true, .. } if user_id == "u1"
        ));
    }

    #[test]
    fn test_pretty_flags_override_config() {
        let config = Config {
            log_json: false,
            pretty: true,
        };

        let cli = Cli::try_parse_from(["teams-activity", "--compact", "tenant"]).unwrap();
        assert!(!cli.use_pretty(&config));

        let cli = Cli::try_parse_from(["teams-activity", "tenant"]).unwrap();
        assert!(cli.use_pretty(&config));

        assert!(Cli::try_parse_from(["teams-activity", "--pretty", "--compact", "tenant"]).is_err());
    }

    #[test]
    fn test_read_activity_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"type": "message", "text": "hi"}}"#).unwrap();

        let activity = read_activity(Some(file.path())).unwrap();
        assert_eq!(activity.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_read_activity_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(read_activity(Some(file.path())).is_err());
    }

    #[test]
    fn test_read_activity_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_activity(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
