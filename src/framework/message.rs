//! # Generic Messages
//!
//! This module defines the message types used for communication between
//! [`ResourceClient`](crate::framework::ResourceClient)s and the
//! [`StoreActor`](crate::framework::StoreActor).

use crate::error::RecordError;
use crate::framework::entity::Entity;
use crate::model::{Empresa, OrdenServicio, Profesional, Servicio};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, RecordError>>;

/// Typed request for one record kind.
///
/// # The CRUD Pattern
/// The variants map to list/get/create/update/delete, plus a custom `Action`
/// variant for record-specific logic that doesn't fit the CRUD model.
///
/// - **List**: Uses [`Entity::Filter`] to select and order records.
/// - **Get**: Fetches one record by id.
/// - **Create**: Uses [`Entity::Create`] to build, validate and insert a record.
/// - **Update**: Uses [`Entity::Update`] to modify, re-validate and store a record.
/// - **Delete**: Applies the delete policy to dependents, then removes the record.
/// - **Action**: Executes a custom [`Entity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

/// Envelope carrying a typed request for any record kind to the single store.
///
/// One store processing every kind keeps a mutation and its cascade effects
/// on other tables inside one message.
#[derive(Debug)]
pub enum StoreRequest {
    Empresa(ResourceRequest<Empresa>),
    Servicio(ResourceRequest<Servicio>),
    Profesional(ResourceRequest<Profesional>),
    OrdenServicio(ResourceRequest<OrdenServicio>),
}
