//! Generic store engine for record management.
//!
//! This module provides the building blocks that every record kind shares:
//! the [`Entity`] contract, the [`Table`] each kind lives in, the request
//! messages, the [`StoreActor`] that applies them one at a time, and the
//! typed [`ResourceClient`] used to send them.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be managed by the store
//! - [`StoreActor`] - The actor that owns the [`Database`](crate::database::Database)
//! - [`ResourceClient`] - Type-safe client for one record kind
//! - [`FrameworkError`] - Channel failures
//!
//! # Testing
//!
//! See [`mock`] for helpers that exercise clients without a running store.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod table;

pub use actor::StoreActor;
pub use client::{ResourceClient, StoreClient};
pub use entity::Entity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, StoreRequest};
pub use table::Table;
