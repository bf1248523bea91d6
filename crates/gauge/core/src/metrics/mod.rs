//! Force metrics aggregation.
//!
//! ```text
//! combatants ──▶ ForceTotals (six running sums) ──▶ ForceMetrics
//!                      │                                ▲
//!                      └──── PowerWeights::composite ───┘ (total)
//! ```
//!
//! Every percentage is `round(current / max * 100)` in `[0, 100]` and is zero
//! whenever its maximum is zero. Nothing in this module can fail.

mod power;
mod totals;

pub use power::PowerWeights;
pub use totals::{ForceTotals, Tally};

use crate::faction::{Side, partition};
use crate::state::{CombatState, Combatant};

/// Power summary of one faction, recomputed on every evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForceMetrics {
    /// Weighted composite of the three families.
    pub total: u8,
    pub hp: u8,
    pub spell_slots: u8,
    pub resources: u8,
}

impl ForceMetrics {
    pub const ZERO: Self = Self {
        total: 0,
        hp: 0,
        spell_slots: 0,
        resources: 0,
    };

    pub fn from_totals(totals: &ForceTotals, weights: &PowerWeights) -> Self {
        Self {
            total: weights.composite(totals),
            hp: totals.hp.percent(),
            spell_slots: totals.spell_slots.percent(),
            resources: totals.resources.percent(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Metrics of both factions for one render cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaugeReading {
    pub friendly: ForceMetrics,
    pub hostile: ForceMetrics,
}

impl GaugeReading {
    pub const ZERO: Self = Self {
        friendly: ForceMetrics::ZERO,
        hostile: ForceMetrics::ZERO,
    };

    pub fn side(&self, side: Side) -> &ForceMetrics {
        match side {
            Side::Friendly => &self.friendly,
            Side::Hostile => &self.hostile,
        }
    }
}

/// Aggregates one faction with the standard weights.
pub fn aggregate<'a, I>(combatants: I) -> ForceMetrics
where
    I: IntoIterator<Item = &'a Combatant>,
{
    let totals: ForceTotals = combatants.into_iter().collect();
    ForceMetrics::from_totals(&totals, &PowerWeights::STANDARD)
}

/// Evaluates both factions of the active combat.
///
/// Without an active combat no partitioning happens and both sides read
/// zero.
pub fn evaluate(combat: Option<&CombatState>) -> GaugeReading {
    let Some(combat) = combat else {
        return GaugeReading::ZERO;
    };

    let factions = partition(&combat.combatants);
    GaugeReading {
        friendly: aggregate(factions.friendly.iter().copied()),
        hostile: aggregate(factions.hostile.iter().copied()),
    }
}
