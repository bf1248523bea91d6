//! Composite power score.

use super::totals::{ForceTotals, to_percent};

/// Weights of the three families in the composite score.
///
/// The blend uses the unrounded fractions, and each term is zero-guarded on
/// its own: a faction without spell slots loses the spell term but keeps the
/// other two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerWeights {
    pub hp: f64,
    pub spell_slots: f64,
    pub resources: f64,
}

impl PowerWeights {
    /// HP 0.5, spell slots 0.3, class resources 0.2.
    pub const STANDARD: Self = Self {
        hp: 0.5,
        spell_slots: 0.3,
        resources: 0.2,
    };

    /// Weighted blend of the totals' fractions as a rounded percentage.
    pub fn composite(&self, totals: &ForceTotals) -> u8 {
        let blend = totals.hp.fraction().unwrap_or(0.0) * self.hp
            + totals.spell_slots.fraction().unwrap_or(0.0) * self.spell_slots
            + totals.resources.fraction().unwrap_or(0.0) * self.resources;
        to_percent(blend)
    }
}

impl Default for PowerWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Tally;

    fn tally(current: u64, maximum: u64) -> Tally {
        Tally { current, maximum }
    }

    #[test]
    fn standard_weights_sum_to_one() {
        let w = PowerWeights::STANDARD;
        assert!((w.hp + w.spell_slots + w.resources - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn full_force_scores_one_hundred() {
        let totals = ForceTotals {
            hp: tally(10, 10),
            spell_slots: tally(4, 4),
            resources: tally(2, 2),
        };
        assert_eq!(PowerWeights::STANDARD.composite(&totals), 100);
    }

    #[test]
    fn missing_families_only_drop_their_own_term() {
        let totals = ForceTotals {
            hp: tally(10, 10),
            spell_slots: Tally::ZERO,
            resources: tally(1, 2),
        };
        // 1.0 * 0.5 + 0 + 0.5 * 0.2 = 0.6
        assert_eq!(PowerWeights::STANDARD.composite(&totals), 60);
    }

    #[test]
    fn composite_uses_unrounded_fractions() {
        let totals = ForceTotals {
            hp: tally(1, 200), // 0.5%, rounds to 1 on its own
            spell_slots: Tally::ZERO,
            resources: Tally::ZERO,
        };
        // 0.005 * 0.5 * 100 = 0.25 -> 0, whereas 1% * 0.5 would give 0.5 -> 1
        assert_eq!(PowerWeights::STANDARD.composite(&totals), 0);
    }
}
