//! # Store Actor
//!
//! This module defines the `StoreActor`, the component that owns the
//! [`Database`] and applies requests to it. It implements the "Server" side of
//! the actor model: requests are processed sequentially, so the actor has
//! exclusive access to every table without locks.
//!
//! A single actor serves all four record kinds. A delete and its cascade
//! effects on other tables therefore happen within one message: no other
//! request can observe a half-applied cascade.

use crate::database::Database;
use crate::framework::client::StoreClient;
use crate::framework::entity::Entity;
use crate::framework::message::{ResourceRequest, StoreRequest};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns every table.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the actor (server) and a [`StoreClient`].
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Derive typed clients with [`StoreClient::resource`].
///
/// ```rust
/// use gestion_servicios::framework::StoreActor;
/// use gestion_servicios::model::{Empresa, EmpresaCreate};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, store) = StoreActor::new(10);
///     tokio::spawn(actor.run());
///
///     let empresas = store.resource::<Empresa>();
///     let empresa = empresas
///         .create(EmpresaCreate::new("76.123.456-7", "PYME Ejemplo S.A."))
///         .await
///         .unwrap();
///     assert_eq!(empresa.razon_social, "PYME Ejemplo S.A.");
/// }
/// ```
///
/// The actor stops when every client has been dropped.
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    db: Database,
}

impl StoreActor {
    /// Creates a new `StoreActor` over an empty database.
    ///
    /// `buffer_size` is the capacity of the request channel. If the channel
    /// is full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        Self::with_database(buffer_size, Database::default())
    }

    /// Creates a `StoreActor` serving an existing database.
    pub fn with_database(buffer_size: usize, db: Database) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver, db }, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until the channel closes, then returns
    /// the final database.
    pub async fn run(mut self) -> Database {
        info!("Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Empresa(req) => self.handle(req),
                StoreRequest::Servicio(req) => self.handle(req),
                StoreRequest::Profesional(req) => self.handle(req),
                StoreRequest::OrdenServicio(req) => self.handle(req),
            }
        }

        info!(
            empresas = self.db.empresas.len(),
            servicios = self.db.servicios.len(),
            profesionales = self.db.profesionales.len(),
            ordenes = self.db.ordenes.len(),
            "Shutdown"
        );
        self.db
    }

    fn handle<T: Entity>(&mut self, request: ResourceRequest<T>) {
        let entity_type = T::KIND;
        match request {
            ResourceRequest::List { filter, respond_to } => {
                debug!(%entity_type, ?filter, "List");
                let records = self.db.list::<T>(&filter);
                debug!(%entity_type, count = records.len(), "Listed");
                let _ = respond_to.send(Ok(records));
            }
            ResourceRequest::Get { id, respond_to } => {
                let result = self.db.get::<T>(id);
                debug!(%entity_type, %id, found = result.is_ok(), "Get");
                let _ = respond_to.send(result);
            }
            ResourceRequest::Create { params, respond_to } => {
                debug!(%entity_type, ?params, "Create");
                let result = self.db.create::<T>(params);
                match &result {
                    Ok(record) => {
                        info!(%entity_type, id = %record.id(), size = T::table(&self.db).len(), "Created")
                    }
                    Err(e) => warn!(%entity_type, error = %e, "Create failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(%entity_type, %id, ?update, "Update");
                let result = self.db.update::<T>(id, update);
                match &result {
                    Ok(_) => info!(%entity_type, %id, "Updated"),
                    Err(e) => warn!(%entity_type, %id, error = %e, "Update failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(%entity_type, %id, "Delete");
                let result = self.db.delete::<T>(id);
                match &result {
                    Ok(cascaded) => {
                        info!(%entity_type, %id, cascaded, size = T::table(&self.db).len(), "Deleted")
                    }
                    Err(e) => warn!(%entity_type, %id, error = %e, "Delete failed"),
                }
                let _ = respond_to.send(result.map(|_| ()));
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(%entity_type, %id, ?action, "Action");
                let result = self.db.perform::<T>(id, action);
                match &result {
                    Ok(_) => info!(%entity_type, %id, "Action ok"),
                    Err(e) => warn!(%entity_type, %id, error = %e, "Action failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}
