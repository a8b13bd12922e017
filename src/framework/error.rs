//! # Framework Errors
//!
//! Failures of the message plumbing between clients and the store actor.
//! Record-level failures (validation, not found, ...) are
//! [`RecordError`](crate::error::RecordError) values carried inside the response.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
