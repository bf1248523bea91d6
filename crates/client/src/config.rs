//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use gauge_core::{DisplayMode, GaugeConfig};

/// Settings the binary reads before any command runs.
///
/// Gauge overrides stay optional so they only replace what the settings
/// file says when they are actually set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub display_mode: Option<DisplayMode>,
    pub gm_only: Option<bool>,
    pub is_gm: bool,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAUGE_DISPLAY_MODE` - `right`, `left` or `floating`
    /// - `GAUGE_GM_ONLY` - Restrict the gauge to game masters
    /// - `GAUGE_IS_GM` - Render as a game master (default: false)
    /// - `GAUGE_SESSION_ID` - Log session name (default: `session_<timestamp>`)
    /// - `GAUGE_LOG_DIR` - Log root (default: platform cache directory)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(mode) = read_var::<DisplayMode>(&lookup, "GAUGE_DISPLAY_MODE") {
            config.display_mode = Some(mode);
        }
        config.gm_only = read_bool(&lookup, "GAUGE_GM_ONLY");
        if let Some(is_gm) = read_bool(&lookup, "GAUGE_IS_GM") {
            config.is_gm = is_gm;
        }
        config.session_id = lookup("GAUGE_SESSION_ID").filter(|id| !id.trim().is_empty());
        config.log_dir = lookup("GAUGE_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Applies the environment overrides on top of `base`.
    pub fn apply(&self, mut base: GaugeConfig) -> GaugeConfig {
        if let Some(mode) = self.display_mode {
            base.display_mode = mode;
        }
        if let Some(gm_only) = self.gm_only {
            base.gm_only = gm_only;
        }
        base
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn read_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
