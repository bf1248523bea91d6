//! Class to resource lookup table.
//!
//! Only classes with a single signature pool are listed. Any other class name
//! (wizard, rogue, homebrew ...) resolves to nothing and contributes zero to
//! the resource totals.

/// Class-granted resource pool.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ResourceKind {
    Rage,
    Ki,
    SecondWind,
    ChannelDivinity,
    WildShape,
    LayOnHands,
}

/// Classes that grant a tracked resource pool.
///
/// Parsing is case-insensitive so host item names such as `"Monk"` or
/// `"BARBARIAN"` resolve directly.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClassKind {
    Barbarian,
    Monk,
    Fighter,
    Cleric,
    Druid,
    Paladin,
}

impl ClassKind {
    /// Looks up a class by its display name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The single resource pool this class contributes.
    pub const fn resource(self) -> ResourceKind {
        match self {
            Self::Barbarian => ResourceKind::Rage,
            Self::Monk => ResourceKind::Ki,
            Self::Fighter => ResourceKind::SecondWind,
            Self::Cleric => ResourceKind::ChannelDivinity,
            Self::Druid => ResourceKind::WildShape,
            Self::Paladin => ResourceKind::LayOnHands,
        }
    }
}
