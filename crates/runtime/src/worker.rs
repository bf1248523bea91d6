//! Gauge worker that owns the authoritative [`GaugeSession`].
//!
//! Receives commands from [`GaugeHandle`](crate::GaugeHandle), runs each host
//! event through the session, drives the renderer and publishes the result.
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::events::{Event, EventBus, HostEvent, LifecycleEvent};
use crate::renderer::GaugeRenderer;
use crate::session::{GaugeSession, SessionOutcome};
use crate::view::GaugeFrame;

/// Commands that can be sent to the gauge worker
pub(crate) enum Command {
    /// Process one host event to completion.
    Dispatch {
        event: HostEvent,
        reply: oneshot::Sender<SessionOutcome>,
    },
    /// Current frame, or `None` while the gauge is closed.
    QueryFrame {
        reply: oneshot::Sender<Option<GaugeFrame>>,
    },
}

pub(crate) struct GaugeWorker {
    session: GaugeSession,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    renderer: Option<Box<dyn GaugeRenderer>>,
}

impl GaugeWorker {
    pub(crate) fn new(
        session: GaugeSession,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        renderer: Option<Box<dyn GaugeRenderer>>,
    ) -> Self {
        Self {
            session,
            command_rx,
            event_bus,
            renderer,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub(crate) async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        debug!("gauge worker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Dispatch { event, reply } => {
                let outcome = self.session.handle(event);
                self.present(&outcome).await;
                if reply.send(outcome).is_err() {
                    debug!("Dispatch reply channel closed (caller dropped)");
                }
            }
            Command::QueryFrame { reply } => {
                let frame = self.session.current_frame().cloned();
                if reply.send(frame).is_err() {
                    debug!("QueryFrame reply channel closed (caller dropped)");
                }
            }
        }
    }

    async fn present(&mut self, outcome: &SessionOutcome) {
        match outcome {
            SessionOutcome::Opened(frame) => {
                self.event_bus
                    .publish(Event::Lifecycle(LifecycleEvent::Opened));
                self.render(frame, true).await;
                self.event_bus.publish(Event::Frame(Box::new(frame.clone())));
            }
            SessionOutcome::Rendered(frame) => {
                self.render(frame, false).await;
                self.event_bus.publish(Event::Frame(Box::new(frame.clone())));
            }
            SessionOutcome::Closed => {
                if let Some(renderer) = self.renderer.as_mut()
                    && let Err(error) = renderer.close().await
                {
                    warn!(%error, "renderer failed to close the gauge");
                }
                self.event_bus
                    .publish(Event::Lifecycle(LifecycleEvent::Closed));
            }
            SessionOutcome::Ignored(reason) => {
                debug!(%reason, "host event left the gauge unchanged");
            }
        }
    }

    async fn render(&mut self, frame: &GaugeFrame, opened: bool) {
        if let Some(renderer) = self.renderer.as_mut()
            && let Err(error) = renderer.render(frame, opened).await
        {
            warn!(%error, opened, "renderer failed to draw the gauge");
        }
    }
}
