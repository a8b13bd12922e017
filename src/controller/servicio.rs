use super::CrudController;
use crate::auth::Authenticator;
use crate::error::RecordError;
use crate::framework::{ResourceClient, StoreClient};
use crate::model::{OrdenServicio, OrdenServicioFilter, Servicio, ServicioId};
use std::sync::Arc;
use tracing::instrument;

/// Controller for the service catalogue.
#[derive(Clone)]
pub struct ServicioController {
    inner: ResourceClient<Servicio>,
    ordenes: ResourceClient<OrdenServicio>,
    auth: Arc<dyn Authenticator>,
}

impl ServicioController {
    pub fn new(store: &StoreClient, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            inner: store.resource(),
            ordenes: store.resource(),
            auth,
        }
    }

    /// Orders that selected the service, newest first.
    #[instrument(skip(self))]
    pub async fn ordenes(&self, id: ServicioId) -> Result<Vec<OrdenServicio>, RecordError> {
        self.inner.get(id).await?;
        self.ordenes
            .list(OrdenServicioFilter {
                servicio_id: Some(id),
                ..Default::default()
            })
            .await
    }
}

impl CrudController<Servicio> for ServicioController {
    fn inner(&self) -> &ResourceClient<Servicio> {
        &self.inner
    }

    fn authenticator(&self) -> &dyn Authenticator {
        self.auth.as_ref()
    }
}
