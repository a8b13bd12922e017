//! # Lifecycle Management
//!
//! Starting and stopping the store, wiring the controllers, and installing
//! the tracing subscriber.

pub mod system;
pub mod tracing;

pub use system::ServiceSystem;
pub use self::tracing::setup_tracing;
