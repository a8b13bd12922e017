use super::CrudController;
use crate::auth::Authenticator;
use crate::error::RecordError;
use crate::framework::{ResourceClient, StoreClient};
use crate::model::{Empresa, EmpresaId, OrdenServicio, OrdenServicioFilter};
use std::sync::Arc;
use tracing::instrument;

/// Controller for client companies.
#[derive(Clone)]
pub struct EmpresaController {
    inner: ResourceClient<Empresa>,
    ordenes: ResourceClient<OrdenServicio>,
    auth: Arc<dyn Authenticator>,
}

impl EmpresaController {
    pub fn new(store: &StoreClient, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            inner: store.resource(),
            ordenes: store.resource(),
            auth,
        }
    }

    /// Orders owned by the company, newest first.
    #[instrument(skip(self))]
    pub async fn ordenes(&self, id: EmpresaId) -> Result<Vec<OrdenServicio>, RecordError> {
        self.inner.get(id).await?;
        self.ordenes
            .list(OrdenServicioFilter {
                empresa_id: Some(id),
                ..Default::default()
            })
            .await
    }
}

impl CrudController<Empresa> for EmpresaController {
    fn inner(&self) -> &ResourceClient<Empresa> {
        &self.inner
    }

    fn authenticator(&self) -> &dyn Authenticator {
        self.auth.as_ref()
    }
}
