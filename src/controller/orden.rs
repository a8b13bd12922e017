use super::CrudController;
use crate::auth::{Authenticator, Caller};
use crate::error::RecordError;
use crate::framework::{ResourceClient, StoreClient};
use crate::model::{Empresa, OrdenServicio, OrdenServicioId};
use crate::resources::{EstadoCambiado, OrdenAction};
use std::sync::Arc;
use tracing::{info, instrument};

/// Controller for work orders.
///
/// Besides CRUD it exposes the back-office status actions, which apply to
/// one or many orders at once.
#[derive(Clone)]
pub struct OrdenServicioController {
    inner: ResourceClient<OrdenServicio>,
    empresas: ResourceClient<Empresa>,
    auth: Arc<dyn Authenticator>,
}

impl OrdenServicioController {
    pub fn new(store: &StoreClient, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            inner: store.resource(),
            empresas: store.resource(),
            auth,
        }
    }

    /// Moves every order in `ids` to "en ejecución".
    pub async fn marcar_en_ejecucion(
        &self,
        ids: &[OrdenServicioId],
        caller: &Caller,
    ) -> Result<Vec<EstadoCambiado>, RecordError> {
        self.marcar(ids, OrdenAction::MarcarEnEjecucion, caller).await
    }

    /// Moves every order in `ids` to "finalizada".
    pub async fn marcar_finalizada(
        &self,
        ids: &[OrdenServicioId],
        caller: &Caller,
    ) -> Result<Vec<EstadoCambiado>, RecordError> {
        self.marcar(ids, OrdenAction::MarcarFinalizada, caller).await
    }

    /// Applies `action` to each order in turn. Each change is committed on
    /// its own; the first failure stops the run and is returned.
    #[instrument(skip(self))]
    async fn marcar(
        &self,
        ids: &[OrdenServicioId],
        action: OrdenAction,
        caller: &Caller,
    ) -> Result<Vec<EstadoCambiado>, RecordError> {
        self.authorize(caller)?;
        let mut cambios = Vec::with_capacity(ids.len());
        for &id in ids {
            cambios.push(self.inner.perform_action(id, action).await?);
        }
        info!(count = cambios.len(), estado = %action.target(), "Orders updated");
        Ok(cambios)
    }

    /// The order's display form, `Orden #<id> - <empresa> - <estado>`.
    #[instrument(skip(self))]
    pub async fn describe(&self, id: OrdenServicioId) -> Result<String, RecordError> {
        let orden = self.inner.get(id).await?;
        let empresa = self.empresas.get(orden.empresa).await?;
        Ok(orden.describe(&empresa))
    }
}

impl CrudController<OrdenServicio> for OrdenServicioController {
    fn inner(&self) -> &ResourceClient<OrdenServicio> {
        &self.inner
    }

    fn authenticator(&self) -> &dyn Authenticator {
        self.auth.as_ref()
    }
}
