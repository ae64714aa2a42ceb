//! Configuration parsing – reads a `KEY=VALUE` file such as
//! `/etc/coalcal/coalcal.conf`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::month::WeekStart;

/// Settings for the calendar front ends.
#[derive(Debug, Clone)]
pub struct Config {
    // ── data service ─────────────────────────────────────────────────
    /// Base URL of the fire / weather / warehouse REST service.
    pub api_base_url: String,
    /// Per-request timeout (seconds).
    pub request_timeout_secs: u64,

    // ── calendar ─────────────────────────────────────────────────────
    pub week_start: WeekStart,
    /// Seed for the per-day fallback status.  `None` draws from the OS RNG
    /// on every month load.
    pub fallback_seed: Option<u64>,
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/coalcal/coalcal.conf"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "http://localhost:8000".into(),
            request_timeout_secs: 30,
            week_start: WeekStart::Monday,
            fallback_seed: None,
        }
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored and malformed values
/// fall back to their defaults.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = from_str(&text);
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Build a [`Config`] from the text of a config file.
pub fn from_str(text: &str) -> Config {
    let map = parse_conf(text);
    let defaults = Config::default();
    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|s| !s.is_empty()) };

    let week_start = match get("WEEK_START").map(|v| v.parse::<WeekStart>()) {
        Some(Ok(ws)) => ws,
        Some(Err(e)) => {
            warn!("Ignoring WEEK_START: {e}");
            defaults.week_start
        }
        None => defaults.week_start,
    };

    Config {
        api_base_url: get("API_BASE_URL").unwrap_or(defaults.api_base_url),
        request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs),
        week_start,
        fallback_seed: get("FALLBACK_SEED").and_then(|v| v.parse().ok()),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────
