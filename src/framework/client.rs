//! # Generic Client
//!
//! This module defines the clients used to talk to the store actor.

use crate::error::RecordError;
use crate::framework::entity::Entity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, StoreRequest};
use std::marker::PhantomData;
use tokio::sync::{mpsc, oneshot};

/// Untyped handle to the store. Cheap to clone; hands out typed clients.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// A typed client for one record kind sharing this store.
    pub fn resource<T: Entity>(&self) -> ResourceClient<T> {
        ResourceClient::new(self.sender.clone())
    }
}

/// A type-safe client for one record kind.
///
/// Holds only a sender, so cloning is inexpensive. Every method resolves to
/// the store's answer or to [`RecordError::Store`] when the store is gone.
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<StoreRequest>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self::new(self.sender.clone())
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self {
            sender,
            _kind: PhantomData,
        }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, RecordError>>) -> ResourceRequest<T>,
    ) -> Result<R, RecordError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::into_store(build(respond_to)))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self, filter: T::Filter) -> Result<Vec<T>, RecordError> {
        self.request(|respond_to| ResourceRequest::List { filter, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, RecordError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(&self, params: T::Create) -> Result<T, RecordError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, RecordError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), RecordError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, RecordError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
