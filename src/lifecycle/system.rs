use crate::auth::{Authenticator, SessionAuthenticator};
use crate::config::Settings;
use crate::controller::{
    EmpresaController, OrdenServicioController, ProfesionalController, ServicioController,
};
use crate::database::Database;
use crate::framework::StoreActor;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the service-management system.
///
/// `ServiceSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actor
/// - **Dependency Wiring**: Handing every controller a client to the same
///   store and the shared [`Authenticator`]
///
/// # Example
///
/// ```rust
/// use gestion_servicios::auth::Caller;
/// use gestion_servicios::controller::CrudController;
/// use gestion_servicios::lifecycle::ServiceSystem;
/// use gestion_servicios::model::EmpresaCreate;
///
/// #[tokio::main]
/// async fn main() {
///     let system = ServiceSystem::with_defaults();
///     let admin = Caller::user("admin");
///
///     system
///         .empresas
///         .create(EmpresaCreate::new("76.123.456-7", "PYME Ejemplo S.A."), &admin)
///         .await
///         .unwrap();
///
///     let db = system.shutdown().await.unwrap();
///     assert_eq!(db.empresas.len(), 1);
/// }
/// ```
pub struct ServiceSystem {
    pub empresas: EmpresaController,
    pub servicios: ServicioController,
    pub profesionales: ProfesionalController,
    pub ordenes: OrdenServicioController,

    /// Task running the store actor (used for graceful shutdown)
    handle: JoinHandle<Database>,
}

impl ServiceSystem {
    /// Spawns the store over an empty database and wires the controllers.
    pub fn new(settings: &Settings, auth: Arc<dyn Authenticator>) -> Self {
        Self::with_database(settings, auth, Database::new())
    }

    /// Default settings and the [`SessionAuthenticator`].
    pub fn with_defaults() -> Self {
        Self::new(&Settings::default(), Arc::new(SessionAuthenticator))
    }

    /// Spawns the store over an existing database.
    pub fn with_database(settings: &Settings, auth: Arc<dyn Authenticator>, db: Database) -> Self {
        let (actor, store) = StoreActor::with_database(settings.channel_capacity, db);
        let handle = tokio::spawn(actor.run());
        info!(channel_capacity = settings.channel_capacity, "Store started");

        Self {
            empresas: EmpresaController::new(&store, auth.clone()),
            servicios: ServicioController::new(&store, auth.clone()),
            profesionales: ProfesionalController::new(&store, auth.clone()),
            ordenes: OrdenServicioController::new(&store, auth),
            handle,
        }
    }

    /// Gracefully shuts down the store and returns its final state.
    ///
    /// Dropping the controllers closes the request channel once every clone
    /// handed out elsewhere is gone too; the actor then drains its queue and
    /// exits.
    pub async fn shutdown(self) -> Result<Database, JoinError> {
        info!("Shutting down system...");

        drop(self.empresas);
        drop(self.servicios);
        drop(self.profesionales);
        drop(self.ordenes);

        match self.handle.await {
            Ok(db) => {
                info!("System shutdown complete.");
                Ok(db)
            }
            Err(e) => {
                error!(error = %e, "Store task failed");
                Err(e)
            }
        }
    }
}
