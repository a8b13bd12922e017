//! # CRUD Controllers
//!
//! The request surface for each record kind. Every controller wraps a typed
//! [`ResourceClient`] and an injected [`Authenticator`]:
//!
//! | Operation | Auth required |
//! |---|---|
//! | `list`, `get` | no |
//! | `create`, `update`, `delete` | yes |
//!
//! The shared behaviour lives in the [`CrudController`] trait's default
//! methods; the per-kind controllers add reverse relations and, for orders,
//! the status actions.

mod empresa;
mod orden;
mod profesional;
mod servicio;

pub use empresa::EmpresaController;
pub use orden::OrdenServicioController;
pub use profesional::ProfesionalController;
pub use servicio::ServicioController;

use crate::auth::{Authenticator, Caller};
use crate::error::RecordError;
use crate::framework::{Entity, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Trait for per-kind controllers to inherit the standard operations.
///
/// Implementors only provide access to their client and authenticator.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use gestion_servicios::auth::{Authenticator, Caller, SessionAuthenticator};
/// use gestion_servicios::controller::CrudController;
/// use gestion_servicios::error::RecordError;
/// use gestion_servicios::framework::{ResourceClient, StoreActor};
/// use gestion_servicios::model::{Servicio, ServicioCreate};
///
/// struct Catalogo {
///     inner: ResourceClient<Servicio>,
///     auth: Arc<dyn Authenticator>,
/// }
///
/// impl CrudController<Servicio> for Catalogo {
///     fn inner(&self) -> &ResourceClient<Servicio> {
///         &self.inner
///     }
///
///     fn authenticator(&self) -> &dyn Authenticator {
///         self.auth.as_ref()
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, store) = StoreActor::new(8);
///     tokio::spawn(actor.run());
///     let catalogo = Catalogo {
///         inner: store.resource(),
///         auth: Arc::new(SessionAuthenticator),
///     };
///
///     let anonimo = catalogo
///         .create(ServicioCreate::new("Soporte"), &Caller::Anonymous)
///         .await;
///     assert_eq!(anonimo, Err(RecordError::Unauthorized));
///
///     let creado = catalogo
///         .create(ServicioCreate::new("Soporte"), &Caller::user("admin"))
///         .await
///         .unwrap();
///     assert_eq!(catalogo.get(creado.id).await.unwrap(), creado);
/// }
/// ```
#[async_trait]
pub trait CrudController<T: Entity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// The gate consulted before every mutation.
    fn authenticator(&self) -> &dyn Authenticator;

    /// Fails with [`RecordError::Unauthorized`] unless `caller` is authenticated.
    fn authorize(&self, caller: &Caller) -> Result<(), RecordError> {
        if self.authenticator().is_authenticated(caller) {
            Ok(())
        } else {
            let entity_type = T::KIND;
            warn!(%entity_type, %caller, "Unauthenticated mutation rejected");
            Err(RecordError::Unauthorized)
        }
    }

    /// Records matching `filter`. Public.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: T::Filter) -> Result<Vec<T>, RecordError> {
        debug!("Sending request");
        self.inner().list(filter).await
    }

    /// One record by id. Public.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, RecordError> {
        debug!("Sending request");
        self.inner().get(id).await
    }

    #[tracing::instrument(skip(self, params))]
    async fn create(&self, params: T::Create, caller: &Caller) -> Result<T, RecordError> {
        self.authorize(caller)?;
        debug!(?params, "Sending request");
        self.inner().create(params).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update(&self, id: T::Id, update: T::Update, caller: &Caller) -> Result<T, RecordError> {
        self.authorize(caller)?;
        debug!(?update, "Sending request");
        self.inner().update(id, update).await
    }

    /// Deletes the record, applying its delete policy to dependent orders.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id, caller: &Caller) -> Result<(), RecordError> {
        self.authorize(caller)?;
        debug!("Sending request");
        self.inner().delete(id).await
    }
}
