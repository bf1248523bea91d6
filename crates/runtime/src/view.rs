//! Frames handed to the display layer.
//!
//! A [`GaugeFrame`] is the complete template context for one render: the
//! viewer's role, both factions' metrics and the window options derived from
//! the display mode. It serializes with the field names templates expect
//! (`isGM`, `spellSlots`, `popOut`).
use serde::Serialize;

use gauge_core::{DisplayMode, ForceMetrics, GaugeConfig, GaugeReading};

/// The user the gauge is rendered for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewer {
    pub name: String,
    pub is_gm: bool,
}

impl Viewer {
    pub fn gm(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_gm: true,
        }
    }

    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_gm: false,
        }
    }
}

/// Application window options for the host's windowing layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowOptions {
    pub id: &'static str,
    pub title: &'static str,
    pub width: u32,
    /// Floating gauges get their own popout window; docked ones do not.
    pub pop_out: bool,
    pub classes: Vec<String>,
}

impl WindowOptions {
    pub fn for_mode(mode: DisplayMode) -> Self {
        Self {
            id: GaugeConfig::MODULE_ID,
            title: GaugeConfig::TITLE,
            width: GaugeConfig::WIDTH,
            pop_out: mode.is_popout(),
            classes: vec![format!("{}-{}", GaugeConfig::MODULE_ID, mode)],
        }
    }
}

/// Template context for one render cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GaugeFrame {
    #[serde(rename = "isGM")]
    pub is_gm: bool,
    pub friendly: ForceMetrics,
    pub hostile: ForceMetrics,
    pub window: WindowOptions,
}

impl GaugeFrame {
    pub fn new(viewer: &Viewer, reading: GaugeReading, config: &GaugeConfig) -> Self {
        Self {
            is_gm: viewer.is_gm,
            friendly: reading.friendly,
            hostile: reading.hostile,
            window: WindowOptions::for_mode(config.display_mode),
        }
    }

    pub fn reading(&self) -> GaugeReading {
        GaugeReading {
            friendly: self.friendly,
            hostile: self.hostile,
        }
    }

    /// Serializes the frame as a template context.
    pub fn to_context(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
