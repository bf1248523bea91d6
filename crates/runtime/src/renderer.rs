//! Asynchronous abstraction for the display layer.
//!
//! Runtime users plug in [`GaugeRenderer`] implementations so the gauge can be
//! drawn on a terminal, pushed to a web client or captured by tests.
use async_trait::async_trait;

use crate::error::Result;
use crate::view::GaugeFrame;

/// Draws gauge frames.
///
/// Failures are reported back to the worker, which logs them and carries on;
/// a broken display never stops the gauge from tracking the combat.
#[async_trait]
pub trait GaugeRenderer: Send {
    /// Draws `frame`. `opened` is true when the gauge was closed before this
    /// frame and must be brought on screen.
    async fn render(&mut self, frame: &GaugeFrame, opened: bool) -> Result<()>;

    /// Takes the gauge off screen.
    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
