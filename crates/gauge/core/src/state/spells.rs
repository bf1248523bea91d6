//! Spell slot block of an actor sheet.

use super::common::ResourceMeter;

/// Per-level spell slots, levels 1 through 9.
///
/// Fields are named after the host's `spell1 ..= spell9` keys so snapshots
/// can be deserialized without renaming. A missing level means the actor has
/// no slots of that level, not an empty meter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellSlots {
    pub spell1: Option<ResourceMeter>,
    pub spell2: Option<ResourceMeter>,
    pub spell3: Option<ResourceMeter>,
    pub spell4: Option<ResourceMeter>,
    pub spell5: Option<ResourceMeter>,
    pub spell6: Option<ResourceMeter>,
    pub spell7: Option<ResourceMeter>,
    pub spell8: Option<ResourceMeter>,
    pub spell9: Option<ResourceMeter>,
}

impl SpellSlots {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 9;

    pub fn new() -> Self {
        Self::default()
    }

    /// Slots of a single level. Out-of-range levels yield `None`.
    pub fn level(&self, level: u8) -> Option<ResourceMeter> {
        match level {
            1 => self.spell1,
            2 => self.spell2,
            3 => self.spell3,
            4 => self.spell4,
            5 => self.spell5,
            6 => self.spell6,
            7 => self.spell7,
            8 => self.spell8,
            9 => self.spell9,
            _ => None,
        }
    }

    fn level_mut(&mut self, level: u8) -> Option<&mut Option<ResourceMeter>> {
        match level {
            1 => Some(&mut self.spell1),
            2 => Some(&mut self.spell2),
            3 => Some(&mut self.spell3),
            4 => Some(&mut self.spell4),
            5 => Some(&mut self.spell5),
            6 => Some(&mut self.spell6),
            7 => Some(&mut self.spell7),
            8 => Some(&mut self.spell8),
            9 => Some(&mut self.spell9),
            _ => None,
        }
    }

    /// Sets the slots of `level` (builder pattern). Levels outside 1..=9 are
    /// ignored.
    #[must_use]
    pub fn with_level(mut self, level: u8, slots: ResourceMeter) -> Self {
        if let Some(entry) = self.level_mut(level) {
            *entry = Some(slots);
        }
        self
    }

    /// Present levels in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, ResourceMeter)> + '_ {
        (Self::MIN_LEVEL..=Self::MAX_LEVEL)
            .filter_map(move |level| self.level(level).map(|slots| (level, slots)))
    }
}
