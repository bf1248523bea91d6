//! Running current/maximum totals for one faction.

use crate::state::{ActorSheet, Combatant, ResourceMeter};

/// Summed current and maximum of one resource family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub current: u64,
    pub maximum: u64,
}

impl Tally {
    pub const ZERO: Self = Self {
        current: 0,
        maximum: 0,
    };

    pub fn add(&mut self, meter: ResourceMeter) {
        self.current += u64::from(meter.current);
        self.maximum += u64::from(meter.maximum);
    }

    /// `current / maximum`, clamped to `[0, 1]`.
    ///
    /// `None` when the maximum is zero, so callers decide how an empty pool
    /// counts instead of receiving NaN.
    pub fn fraction(&self) -> Option<f64> {
        if self.maximum == 0 {
            return None;
        }
        let ratio = self.current as f64 / self.maximum as f64;
        Some(ratio.min(1.0))
    }

    /// Rounded percentage in `[0, 100]`; zero for an empty pool.
    pub fn percent(&self) -> u8 {
        self.fraction().map_or(0, to_percent)
    }
}

/// Scales a `[0, 1]` fraction to a rounded integer percentage.
pub(crate) fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// The six running totals of the aggregation: HP, spell slots and class
/// resource, each as current/maximum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForceTotals {
    pub hp: Tally,
    pub spell_slots: Tally,
    pub resources: Tally,
}

impl ForceTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a combatant's sheet. Combatants without an actor add nothing.
    pub fn add_combatant(&mut self, combatant: &Combatant) {
        if let Some(actor) = &combatant.actor {
            self.add_actor(actor);
        }
    }

    pub fn add_actor(&mut self, actor: &ActorSheet) {
        self.hp.add(actor.hp);

        if let Some(spells) = &actor.spells {
            for (_, slots) in spells.iter() {
                self.spell_slots.add(slots);
            }
        }

        if let Some(pool) = actor.class_resource() {
            self.resources.add(pool);
        }
    }
}

impl<'a> FromIterator<&'a Combatant> for ForceTotals {
    fn from_iter<I: IntoIterator<Item = &'a Combatant>>(iter: I) -> Self {
        let mut totals = Self::new();
        for combatant in iter {
            totals.add_combatant(combatant);
        }
        totals
    }
}
