//! Combat power aggregation shared across gauge front ends.
//!
//! `gauge-core` defines the snapshot types a host combat tracker hands over
//! (combatants, actor sheets, spell slots, class resources) and the pure
//! functions that turn them into [`ForceMetrics`]. Nothing here performs I/O
//! or keeps state between calls: every evaluation starts from the snapshot it
//! is given and the caller owns the result.
//!
//! The entry points are [`partition`] (split combatants by disposition),
//! [`aggregate`] (one faction's metrics) and [`evaluate`] (both factions for
//! an optional active combat).
pub mod classes;
pub mod config;
pub mod error;
pub mod faction;
pub mod metrics;
pub mod state;

pub use classes::{ClassKind, ResourceKind};
pub use config::{DisplayMode, GaugeConfig};
pub use error::DispositionError;
pub use faction::{Disposition, Factions, Side, partition};
pub use metrics::{
    ForceMetrics, ForceTotals, GaugeReading, PowerWeights, Tally, aggregate, evaluate,
};
pub use state::{
    ActorId, ActorSheet, ClassResources, CombatState, Combatant, CombatantId, ItemKind, ItemSheet,
    ResourceMeter, SpellSlots,
};
