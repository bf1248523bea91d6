//! Runtime orchestration for the combat gauge.
//!
//! This crate owns the per-viewer gauge state and serializes host events onto
//! a single worker so each event is fully evaluated before the next one is
//! looked at. Consumers embed [`GaugeService`] and talk to it through
//! [`GaugeHandle`]; display layers plug in through [`GaugeRenderer`] or by
//! subscribing to the event bus.
//!
//! Modules are organized by responsibility:
//! - [`session`] holds the synchronous gauge state machine
//! - [`view`] builds the frames handed to display layers
//! - [`events`] provides host event types and the topic-based event bus
//! - [`service`] hosts the orchestrator and builder
//! - `worker` keeps the background task internal to the crate
pub mod error;
pub mod events;
pub mod handle;
pub mod renderer;
pub mod service;
pub mod session;
pub mod view;

mod worker;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, HostEvent, LifecycleEvent, Topic};
pub use handle::GaugeHandle;
pub use renderer::GaugeRenderer;
pub use service::{GaugeService, GaugeServiceBuilder, RuntimeConfig};
pub use session::{GaugeSession, IgnoreReason, SessionOutcome};
pub use view::{GaugeFrame, Viewer, WindowOptions};
