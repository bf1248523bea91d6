//! Host events in, gauge events out.
//!
//! [`HostEvent`] is what the virtual tabletop reports; [`Event`] is what the
//! runtime publishes on the [`EventBus`] after processing one.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{HostEvent, LifecycleEvent};
