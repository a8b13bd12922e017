//! # Mock Helpers & Testing Guide
//!
//! Controllers and other code built on [`ResourceClient`] can be tested
//! without a running [`StoreActor`](crate::framework::StoreActor): create a
//! client whose channel you hold, await the request it sends, assert on its
//! payload and answer through the responder.
//!
//! ## When to use Mocks vs the Real Store
//!
//! | Feature | Mock channel | Real store |
//! |---------|--------------|------------|
//! | **State** | None, you script each answer | Real tables and cascades |
//! | **Error Injection** | Easy (send any `RecordError`) | Needs specific state |
//! | **Use Case** | Logic *around* the client (auth gates, fan-out) | Validation, filters, cascades |
//!
//! ## Example
//!
//! ```rust
//! use gestion_servicios::framework::mock::{create_mock_client, expect_get};
//! use gestion_servicios::error::RecordError;
//! use gestion_servicios::model::{EntityKind, Servicio, ServicioId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Servicio>(4);
//!
//!     let task = tokio::spawn(async move { client.get(ServicioId(9)).await });
//!
//!     let (id, responder) = expect_get::<Servicio>(&mut receiver).await.unwrap();
//!     assert_eq!(id, ServicioId(9));
//!     responder
//!         .send(Err(RecordError::not_found(EntityKind::Servicio, id)))
//!         .unwrap();
//!
//!     assert!(matches!(
//!         task.await.unwrap(),
//!         Err(RecordError::NotFound { .. })
//!     ));
//! }
//! ```
//!
//! Each `expect_*` helper returns `None` when the channel is closed or the
//! next request is a different operation or record kind.

use crate::framework::client::{ResourceClient, StoreClient};
use crate::framework::entity::Entity;
use crate::framework::message::{ResourceRequest, Response, StoreRequest};
use tokio::sync::mpsc;

/// Creates a client for `T` and the receiver its requests arrive on.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Creates a store handle and the receiver every kind's requests arrive on.
///
/// Use this for code that derives several typed clients from one store.
pub fn create_mock_store(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

async fn next<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<ResourceRequest<T>> {
    T::from_store(receiver.recv().await?).ok()
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(T::Filter, Response<Vec<T>>)> {
    match next::<T>(receiver).await? {
        ResourceRequest::List { filter, respond_to } => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(T::Id, Response<T>)> {
    match next::<T>(receiver).await? {
        ResourceRequest::Get { id, respond_to } => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(T::Create, Response<T>)> {
    match next::<T>(receiver).await? {
        ResourceRequest::Create { params, respond_to } => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match next::<T>(receiver).await? {
        ResourceRequest::Update {
            id,
            update,
            respond_to,
        } => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(T::Id, Response<()>)> {
    match next::<T>(receiver).await? {
        ResourceRequest::Delete { id, respond_to } => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match next::<T>(receiver).await? {
        ResourceRequest::Action {
            id,
            action,
            respond_to,
        } => Some((id, action, respond_to)),
        _ => None,
    }
}
