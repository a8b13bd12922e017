//! Entity implementation for [`Profesional`].
//!
//! Delete policy: nullify. Orders assigned to the technician become
//! unassigned.

use super::fields::{self, clean, clean_optional};
use crate::database::Database;
use crate::error::{RecordError, ValidationError};
use crate::framework::{Entity, ResourceRequest, StoreRequest, Table};
use crate::model::{
    EntityKind, Profesional, ProfesionalCreate, ProfesionalFilter, ProfesionalId,
    ProfesionalUpdate,
};
use crate::query::{self, Predicate};

impl Entity for Profesional {
    type Id = ProfesionalId;
    type Create = ProfesionalCreate;
    type Update = ProfesionalUpdate;
    type Filter = ProfesionalFilter;
    type Action = ();
    type ActionResult = ();

    const KIND: EntityKind = EntityKind::Profesional;

    fn table(db: &Database) -> &Table<Self> {
        &db.profesionales
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.profesionales
    }

    fn into_store(request: ResourceRequest<Self>) -> StoreRequest {
        StoreRequest::Profesional(request)
    }

    fn from_store(request: StoreRequest) -> Result<ResourceRequest<Self>, StoreRequest> {
        match request {
            StoreRequest::Profesional(request) => Ok(request),
            other => Err(other),
        }
    }

    fn id(&self) -> ProfesionalId {
        self.id
    }

    fn from_create_params(
        id: ProfesionalId,
        params: ProfesionalCreate,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            run: clean(params.run),
            nombres: clean(params.nombres),
            apellidos: clean(params.apellidos),
            especialidad: clean_optional(params.especialidad),
            email: clean_optional(params.email),
        })
    }

    fn on_update(&mut self, update: ProfesionalUpdate) -> Result<(), ValidationError> {
        if let Some(run) = update.run {
            self.run = clean(run);
        }
        if let Some(nombres) = update.nombres {
            self.nombres = clean(nombres);
        }
        if let Some(apellidos) = update.apellidos {
            self.apellidos = clean(apellidos);
        }
        if let Some(especialidad) = update.especialidad {
            self.especialidad = clean_optional(Some(especialidad));
        }
        if let Some(email) = update.email {
            self.email = clean_optional(Some(email));
        }
        Ok(())
    }

    fn validate(&self, db: &Database) -> Result<(), ValidationError> {
        fields::required("run", &self.run)?;
        fields::max_length("run", &self.run, 12)?;
        fields::required("nombres", &self.nombres)?;
        fields::max_length("nombres", &self.nombres, 100)?;
        fields::required("apellidos", &self.apellidos)?;
        fields::max_length("apellidos", &self.apellidos, 100)?;
        fields::max_length_optional("especialidad", self.especialidad.as_deref(), 100)?;
        fields::email("email", self.email.as_deref())?;
        fields::unique(
            "run",
            db.profesionales
                .iter()
                .any(|other| other.id != self.id && other.run == self.run),
        )
    }

    fn on_delete(id: ProfesionalId, db: &mut Database) -> usize {
        let mut unassigned = 0;
        for orden in db.ordenes.iter_mut() {
            if orden.profesional_asignado == Some(id) {
                orden.profesional_asignado = None;
                unassigned += 1;
            }
        }
        unassigned
    }

    fn filter(filter: &ProfesionalFilter) -> Predicate<Self> {
        let mut clauses = Vec::new();
        if let Some(q) = query::supplied(filter.q.as_deref()) {
            clauses.push(Predicate::or([
                query::contains(q, |p: &Profesional, _: &Database| Some(p.nombres.as_str())),
                query::contains(q, |p: &Profesional, _: &Database| Some(p.apellidos.as_str())),
                query::contains(q, |p: &Profesional, _: &Database| Some(p.run.as_str())),
                query::contains(q, |p: &Profesional, _: &Database| p.email.as_deref()),
            ]));
        }
        Predicate::and(clauses)
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), RecordError> {
        Ok(())
    }
}
