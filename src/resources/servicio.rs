//! Entity implementation for [`Servicio`].
//!
//! Delete policy: detach. Orders that selected the service keep existing
//! without it.

use super::fields::{self, clean, clean_optional};
use crate::database::Database;
use crate::error::{RecordError, ValidationError};
use crate::framework::{Entity, ResourceRequest, StoreRequest, Table};
use crate::model::{EntityKind, Servicio, ServicioCreate, ServicioFilter, ServicioId, ServicioUpdate};
use crate::query::{self, Predicate};

fn duracion(horas: i64) -> Result<u32, ValidationError> {
    u32::try_from(horas).map_err(|_| {
        ValidationError::new(
            "duracion_estimada_horas",
            format!("{horas} no es una cantidad de horas válida; debe ser mayor o igual a 0."),
        )
    })
}

impl Entity for Servicio {
    type Id = ServicioId;
    type Create = ServicioCreate;
    type Update = ServicioUpdate;
    type Filter = ServicioFilter;
    type Action = ();
    type ActionResult = ();

    const KIND: EntityKind = EntityKind::Servicio;

    fn table(db: &Database) -> &Table<Self> {
        &db.servicios
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.servicios
    }

    fn into_store(request: ResourceRequest<Self>) -> StoreRequest {
        StoreRequest::Servicio(request)
    }

    fn from_store(request: StoreRequest) -> Result<ResourceRequest<Self>, StoreRequest> {
        match request {
            StoreRequest::Servicio(request) => Ok(request),
            other => Err(other),
        }
    }

    fn id(&self) -> ServicioId {
        self.id
    }

    fn from_create_params(id: ServicioId, params: ServicioCreate) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            nombre: clean(params.nombre),
            descripcion: clean_optional(params.descripcion),
            categoria: clean_optional(params.categoria),
            duracion_estimada_horas: duracion(params.duracion_estimada_horas)?,
            activo: params.activo,
        })
    }

    fn on_update(&mut self, update: ServicioUpdate) -> Result<(), ValidationError> {
        if let Some(nombre) = update.nombre {
            self.nombre = clean(nombre);
        }
        if let Some(descripcion) = update.descripcion {
            self.descripcion = clean_optional(Some(descripcion));
        }
        if let Some(categoria) = update.categoria {
            self.categoria = clean_optional(Some(categoria));
        }
        if let Some(horas) = update.duracion_estimada_horas {
            self.duracion_estimada_horas = duracion(horas)?;
        }
        if let Some(activo) = update.activo {
            self.activo = activo;
        }
        Ok(())
    }

    fn validate(&self, db: &Database) -> Result<(), ValidationError> {
        fields::required("nombre", &self.nombre)?;
        fields::max_length("nombre", &self.nombre, 150)?;
        fields::max_length_optional("categoria", self.categoria.as_deref(), 100)?;
        fields::unique(
            "nombre",
            db.servicios
                .iter()
                .any(|other| other.id != self.id && other.nombre == self.nombre),
        )
    }

    fn on_delete(id: ServicioId, db: &mut Database) -> usize {
        let mut detached = 0;
        for orden in db.ordenes.iter_mut() {
            if orden.servicios_seleccionados.remove(&id) {
                detached += 1;
            }
        }
        detached
    }

    fn filter(filter: &ServicioFilter) -> Predicate<Self> {
        let mut clauses = Vec::new();
        if let Some(q) = query::supplied(filter.q.as_deref()) {
            clauses.push(Predicate::or([
                query::contains(q, |s: &Servicio, _: &Database| Some(s.nombre.as_str())),
                query::contains(q, |s: &Servicio, _: &Database| s.descripcion.as_deref()),
                query::contains(q, |s: &Servicio, _: &Database| s.categoria.as_deref()),
            ]));
        }
        if let Some(categoria) = query::supplied(filter.categoria.as_deref()) {
            let categoria = categoria.to_lowercase();
            clauses.push(Predicate::new(move |s: &Servicio, _| {
                s.categoria
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == categoria)
            }));
        }
        if let Some(activo) = filter.activo {
            clauses.push(query::equals(activo, |s: &Servicio| s.activo));
        }
        Predicate::and(clauses)
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), RecordError> {
        Ok(())
    }
}
