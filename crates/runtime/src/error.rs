//! Unified error types surfaced by the runtime API.
//!
//! Session logic never fails; errors only come from worker coordination and
//! from display layers plugged in as renderers.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("gauge worker command channel closed")]
    CommandChannelClosed,

    #[error("gauge worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("gauge worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("renderer failed: {0}")]
    Renderer(String),
}
