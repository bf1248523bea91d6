//! Cloneable façade for feeding the gauge.
//!
//! [`GaugeHandle`] hides channel plumbing and offers async helpers for
//! dispatching host events or streaming gauge events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, HostEvent, Topic};
use crate::session::SessionOutcome;
use crate::view::GaugeFrame;
use crate::worker::Command;

/// Client-facing handle to interact with the gauge
#[derive(Clone)]
pub struct GaugeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl GaugeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Process one host event and wait until it has been rendered.
    ///
    /// Events are handled strictly in the order they are dispatched.
    pub async fn dispatch(&self, event: HostEvent) -> Result<SessionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Dispatch {
                event,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// The frame currently on screen, if the gauge is open.
    pub async fn current_frame(&self) -> Result<Option<GaugeFrame>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryFrame { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Lifecycle` - Gauge opened and closed
    /// - `Topic::Frame` - Every rendered frame
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }
}
