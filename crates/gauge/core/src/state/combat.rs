//! Combat encounter snapshot.

use super::actor::ActorSheet;
use super::common::{ActorId, CombatantId};
use crate::faction::{Disposition, Side};

/// One entry of the combat tracker.
///
/// `disposition` is `None` when the combatant has no linked token or the
/// token carries a value outside the known set; `actor` is `None` when the
/// entry does not reference an actor sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::faction::deserialize_lenient")
    )]
    pub disposition: Option<Disposition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actor: Option<ActorSheet>,
}

impl Combatant {
    pub fn new(id: CombatantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            disposition: None,
            actor: None,
        }
    }

    #[must_use]
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    #[must_use]
    pub fn with_actor(mut self, actor: ActorSheet) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Faction bucket of this combatant.
    pub fn side(&self) -> Side {
        Side::of(self.disposition)
    }
}

/// The active combat as seen by the host's tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    /// Whether the encounter has begun (initiative rolled, round >= 1).
    #[cfg_attr(feature = "serde", serde(default))]
    pub started: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub round: u32,
    /// Combatants in tracker order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub combatants: Vec<Combatant>,
}

impl CombatState {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self {
            started: false,
            round: 0,
            combatants,
        }
    }

    /// Marks the encounter as running at `round`.
    #[must_use]
    pub fn started_at(mut self, round: u32) -> Self {
        self.started = true;
        self.round = round;
        self
    }

    /// Returns true if any combatant references the actor.
    pub fn involves(&self, actor: ActorId) -> bool {
        self.combatants
            .iter()
            .any(|c| c.actor.as_ref().is_some_and(|a| a.id == actor))
    }

    /// Swaps in a fresher copy of an actor sheet.
    ///
    /// Every combatant linked to `actor.id` receives the new sheet. Returns
    /// the number of combatants updated.
    pub fn replace_actor(&mut self, actor: &ActorSheet) -> usize {
        let mut updated = 0;
        for combatant in &mut self.combatants {
            if let Some(current) = combatant.actor.as_mut()
                && current.id == actor.id
            {
                *current = actor.clone();
                updated += 1;
            }
        }
        updated
    }
}
