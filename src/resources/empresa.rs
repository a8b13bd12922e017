//! Entity implementation for [`Empresa`].
//!
//! Delete policy: cascade. Removing a company removes every order it owns.

use super::fields::{self, clean, clean_optional};
use crate::database::Database;
use crate::error::{RecordError, ValidationError};
use crate::framework::{Entity, ResourceRequest, StoreRequest, Table};
use crate::model::{Empresa, EmpresaCreate, EmpresaFilter, EmpresaId, EmpresaUpdate, EntityKind};
use crate::query::{self, Predicate};
use tracing::debug;

impl Entity for Empresa {
    type Id = EmpresaId;
    type Create = EmpresaCreate;
    type Update = EmpresaUpdate;
    type Filter = EmpresaFilter;
    type Action = ();
    type ActionResult = ();

    const KIND: EntityKind = EntityKind::Empresa;

    fn table(db: &Database) -> &Table<Self> {
        &db.empresas
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.empresas
    }

    fn into_store(request: ResourceRequest<Self>) -> StoreRequest {
        StoreRequest::Empresa(request)
    }

    fn from_store(request: StoreRequest) -> Result<ResourceRequest<Self>, StoreRequest> {
        match request {
            StoreRequest::Empresa(request) => Ok(request),
            other => Err(other),
        }
    }

    fn id(&self) -> EmpresaId {
        self.id
    }

    fn from_create_params(id: EmpresaId, params: EmpresaCreate) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            rut: clean(params.rut),
            razon_social: clean(params.razon_social),
            giro: clean_optional(params.giro),
            telefono: clean_optional(params.telefono),
            email: clean_optional(params.email),
            direccion: clean_optional(params.direccion),
            comuna: clean_optional(params.comuna),
        })
    }

    fn on_update(&mut self, update: EmpresaUpdate) -> Result<(), ValidationError> {
        if let Some(rut) = update.rut {
            self.rut = clean(rut);
        }
        if let Some(razon_social) = update.razon_social {
            self.razon_social = clean(razon_social);
        }
        if let Some(giro) = update.giro {
            self.giro = clean_optional(Some(giro));
        }
        if let Some(telefono) = update.telefono {
            self.telefono = clean_optional(Some(telefono));
        }
        if let Some(email) = update.email {
            self.email = clean_optional(Some(email));
        }
        if let Some(direccion) = update.direccion {
            self.direccion = clean_optional(Some(direccion));
        }
        if let Some(comuna) = update.comuna {
            self.comuna = clean_optional(Some(comuna));
        }
        Ok(())
    }

    fn validate(&self, db: &Database) -> Result<(), ValidationError> {
        fields::required("rut", &self.rut)?;
        fields::max_length("rut", &self.rut, 12)?;
        fields::required_with(
            "razon_social",
            &self.razon_social,
            "La razón social es obligatoria.",
        )?;
        fields::max_length("razon_social", &self.razon_social, 200)?;
        fields::max_length_optional("giro", self.giro.as_deref(), 200)?;
        fields::max_length_optional("telefono", self.telefono.as_deref(), 50)?;
        fields::email("email", self.email.as_deref())?;
        fields::max_length_optional("direccion", self.direccion.as_deref(), 250)?;
        fields::max_length_optional("comuna", self.comuna.as_deref(), 100)?;
        fields::unique(
            "rut",
            db.empresas
                .iter()
                .any(|other| other.id != self.id && other.rut == self.rut),
        )
    }

    fn on_delete(id: EmpresaId, db: &mut Database) -> usize {
        let removed = db.ordenes.retain(|orden| orden.empresa != id);
        debug!(%id, removed, "Cascaded delete to owned orders");
        removed
    }

    fn filter(filter: &EmpresaFilter) -> Predicate<Self> {
        let mut clauses = Vec::new();
        if let Some(q) = query::supplied(filter.q.as_deref()) {
            clauses.push(Predicate::or([
                query::contains(q, |e: &Empresa, _: &Database| Some(e.razon_social.as_str())),
                query::contains(q, |e: &Empresa, _: &Database| Some(e.rut.as_str())),
                query::contains(q, |e: &Empresa, _: &Database| e.email.as_deref()),
            ]));
        }
        Predicate::and(clauses)
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), RecordError> {
        Ok(())
    }
}
