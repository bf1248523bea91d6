use serde::{Deserialize, Serialize};

use gauge_core::{ActorSheet, CombatState};

/// Change notifications from the host, one re-evaluation each.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// The combat was created, advanced or otherwise changed. Carries the
    /// tracker snapshot as of the change.
    CombatUpdated(CombatState),
    /// The combat ended and was removed from the tracker.
    CombatDeleted,
    /// An actor sheet changed (damage, healing, spent slots ...).
    ActorUpdated(ActorSheet),
}

impl HostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CombatUpdated(_) => "combat_updated",
            Self::CombatDeleted => "combat_deleted",
            Self::ActorUpdated(_) => "actor_updated",
        }
    }
}

/// Gauge window lifecycle transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Opened,
    Closed,
}
