use std::fmt;

/// Identifier of a combat-tracker entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of an actor sheet.
///
/// Several combatants may share one actor (e.g. unlinked copies of the same
/// creature), so updates are matched by this id rather than by combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Integer resource meter (hit points, slots of one spell level, ki, ...).
///
/// `current` is not required to stay below `maximum`; hosts routinely report
/// temporary overflow and the gauge clamps when it computes percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub const EMPTY: Self = Self::new(0, 0);

    pub const fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Meter filled to its maximum.
    pub const fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }
}
