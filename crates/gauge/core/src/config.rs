/// Where the gauge is placed on screen.
///
/// Irrelevant to aggregation; it only shapes the window options handed to the
/// display layer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DisplayMode {
    /// Docked to the right side of the canvas.
    #[default]
    Right,
    /// Docked to the left side of the canvas.
    Left,
    /// Free-floating popout window.
    Floating,
}

impl DisplayMode {
    /// Floating gauges render in their own popout window.
    pub const fn is_popout(self) -> bool {
        matches!(self, Self::Floating)
    }
}

/// Gauge configuration consumed (never produced) by the core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaugeConfig {
    pub display_mode: DisplayMode,
    /// Restrict the gauge to game masters.
    pub gm_only: bool,
}

impl GaugeConfig {
    /// Identifier of the gauge in the host's module registry.
    pub const MODULE_ID: &'static str = "combat-gauge";
    pub const TITLE: &'static str = "Combat Gauge";
    pub const WIDTH: u32 = 300;

    pub fn new(display_mode: DisplayMode, gm_only: bool) -> Self {
        Self {
            display_mode,
            gm_only,
        }
    }

    /// Returns true if a viewer with the given role may see the gauge.
    pub fn is_visible_to(&self, is_gm: bool) -> bool {
        is_gm || !self.gm_only
    }
}
