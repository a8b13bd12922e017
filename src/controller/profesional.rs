use super::CrudController;
use crate::auth::Authenticator;
use crate::error::RecordError;
use crate::framework::{ResourceClient, StoreClient};
use crate::model::{OrdenServicio, OrdenServicioFilter, Profesional, ProfesionalId};
use std::sync::Arc;
use tracing::instrument;

/// Controller for technicians.
#[derive(Clone)]
pub struct ProfesionalController {
    inner: ResourceClient<Profesional>,
    ordenes: ResourceClient<OrdenServicio>,
    auth: Arc<dyn Authenticator>,
}

impl ProfesionalController {
    pub fn new(store: &StoreClient, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            inner: store.resource(),
            ordenes: store.resource(),
            auth,
        }
    }

    /// Orders assigned to the technician, newest first.
    #[instrument(skip(self))]
    pub async fn ordenes(&self, id: ProfesionalId) -> Result<Vec<OrdenServicio>, RecordError> {
        self.inner.get(id).await?;
        self.ordenes
            .list(OrdenServicioFilter {
                profesional_id: Some(id),
                ..Default::default()
            })
            .await
    }
}

impl CrudController<Profesional> for ProfesionalController {
    fn inner(&self) -> &ResourceClient<Profesional> {
        &self.inner
    }

    fn authenticator(&self) -> &dyn Authenticator {
        self.auth.as_ref()
    }
}
