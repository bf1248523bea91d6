//! Read-only snapshot of the host's combat tracker.
//!
//! These types mirror what the host exposes at the moment of evaluation:
//! a combat with its ordered combatants, each optionally linked to an actor
//! sheet. The gauge never mutates them except when the runtime swaps in a
//! fresher actor sheet (see [`CombatState::replace_actor`]).
pub mod actor;
pub mod combat;
pub mod common;
pub mod resources;
pub mod spells;

pub use actor::{ActorSheet, ItemKind, ItemSheet};
pub use combat::{CombatState, Combatant};
pub use common::{ActorId, CombatantId, ResourceMeter};
pub use resources::ClassResources;
pub use spells::SpellSlots;
