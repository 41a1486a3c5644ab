//! Configuration for the `teams-activity` binary.

use std::env;

/// Environment variable switching log output to JSON lines.
pub const ENV_LOG_JSON: &str = "TEAMS_LOG_JSON";

/// Environment variable controlling pretty-printed stdout JSON.
pub const ENV_PRETTY: &str = "TEAMS_PRETTY";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
    /// Pretty-print the JSON written to stdout.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_json: env_flag(ENV_LOG_JSON).unwrap_or(false),
            pretty: env_flag(ENV_PRETTY).unwrap_or(true),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().map(|v| {
        let v = v.trim();
        v.eq_ignore_ascii_case("true") || v == "1"
    })
}
