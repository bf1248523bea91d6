//! High-level gauge orchestrator.
//!
//! The service owns the background worker, wires up command/event channels
//! and exposes a builder-based API for hosts to feed the gauge.
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use gauge_core::GaugeConfig;

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::handle::GaugeHandle;
use crate::renderer::GaugeRenderer;
use crate::session::GaugeSession;
use crate::view::Viewer;
use crate::worker::{Command, GaugeWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub gauge: GaugeConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            gauge: GaugeConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Running gauge for one viewer.
///
/// [`GaugeHandle`] provides a cloneable façade for event sources.
pub struct GaugeService {
    handle: GaugeHandle,
    worker_handle: JoinHandle<()>,
}

impl GaugeService {
    pub fn builder() -> GaugeServiceBuilder {
        GaugeServiceBuilder::new()
    }

    pub fn handle(&self) -> GaugeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the gauge gracefully
    ///
    /// Waits for the worker to drain, so every event dispatched before this
    /// call is rendered. Clones of the handle still alive keep the worker
    /// running until they are dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`GaugeService`].
pub struct GaugeServiceBuilder {
    config: RuntimeConfig,
    viewer: Viewer,
    renderer: Option<Box<dyn GaugeRenderer>>,
}

impl GaugeServiceBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            viewer: Viewer::default(),
            renderer: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the gauge settings
    pub fn gauge_config(mut self, gauge: GaugeConfig) -> Self {
        self.config.gauge = gauge;
        self
    }

    pub fn viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = viewer;
        self
    }

    /// Set the display layer (optional; subscribers still see every frame)
    pub fn renderer(mut self, renderer: impl GaugeRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Spawn the worker. Must be called inside a tokio runtime.
    pub fn start(self) -> GaugeService {
        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        info!(
            viewer = %self.viewer.name,
            gm = self.viewer.is_gm,
            mode = %self.config.gauge.display_mode,
            gm_only = self.config.gauge.gm_only,
            "starting combat gauge"
        );

        let session = GaugeSession::new(self.config.gauge, self.viewer);
        let worker = GaugeWorker::new(session, command_rx, event_bus.clone(), self.renderer);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        GaugeService {
            handle: GaugeHandle::new(command_tx, event_bus),
            worker_handle,
        }
    }
}
