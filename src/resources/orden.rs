//! Entity implementation for [`OrdenServicio`].
//!
//! Orders reference one owning company (required), any number of services
//! and at most one technician; every reference must resolve when the order
//! is written. Listings are ordered by `fecha_creacion`, newest first.

use super::actions::{EstadoCambiado, OrdenAction};
use super::fields::clean_optional;
use crate::database::Database;
use crate::error::{RecordError, ValidationError};
use crate::framework::{Entity, ResourceRequest, StoreRequest, Table};
use crate::model::{
    EntityKind, Estado, OrdenServicio, OrdenServicioCreate, OrdenServicioFilter,
    OrdenServicioId, OrdenServicioUpdate, Prioridad,
};
use crate::query::{self, Predicate};
use chrono::Utc;

impl Entity for OrdenServicio {
    type Id = OrdenServicioId;
    type Create = OrdenServicioCreate;
    type Update = OrdenServicioUpdate;
    type Filter = OrdenServicioFilter;
    type Action = OrdenAction;
    type ActionResult = EstadoCambiado;

    const KIND: EntityKind = EntityKind::OrdenServicio;

    fn table(db: &Database) -> &Table<Self> {
        &db.ordenes
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.ordenes
    }

    fn into_store(request: ResourceRequest<Self>) -> StoreRequest {
        StoreRequest::OrdenServicio(request)
    }

    fn from_store(request: StoreRequest) -> Result<ResourceRequest<Self>, StoreRequest> {
        match request {
            StoreRequest::OrdenServicio(request) => Ok(request),
            other => Err(other),
        }
    }

    fn id(&self) -> OrdenServicioId {
        self.id
    }

    fn from_create_params(
        id: OrdenServicioId,
        params: OrdenServicioCreate,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            empresa: params.empresa,
            fecha_creacion: Utc::now(),
            estado: params.estado,
            prioridad: params.prioridad,
            descripcion_requerimiento: clean_optional(params.descripcion_requerimiento),
            servicios_seleccionados: params.servicios_seleccionados,
            profesional_asignado: params.profesional_asignado,
        })
    }

    fn on_update(&mut self, update: OrdenServicioUpdate) -> Result<(), ValidationError> {
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        if let Some(prioridad) = update.prioridad {
            self.prioridad = prioridad;
        }
        if let Some(descripcion) = update.descripcion_requerimiento {
            self.descripcion_requerimiento = clean_optional(Some(descripcion));
        }
        if let Some(servicios) = update.servicios_seleccionados {
            self.servicios_seleccionados = servicios;
        }
        if let Some(profesional) = update.profesional_asignado {
            self.profesional_asignado = profesional;
        }
        Ok(())
    }

    fn validate(&self, db: &Database) -> Result<(), ValidationError> {
        if !db.empresas.contains(&self.empresa) {
            return Err(ValidationError::new(
                "empresa",
                format!("La empresa {} no existe.", self.empresa),
            ));
        }
        if let Some(missing) = self
            .servicios_seleccionados
            .iter()
            .find(|id| !db.servicios.contains(id))
        {
            return Err(ValidationError::new(
                "servicios_seleccionados",
                format!("El servicio {missing} no existe."),
            ));
        }
        match self.profesional_asignado {
            Some(id) if !db.profesionales.contains(&id) => Err(ValidationError::new(
                "profesional_asignado",
                format!("El profesional {id} no existe."),
            )),
            _ => Ok(()),
        }
    }

    fn filter(filter: &OrdenServicioFilter) -> Predicate<Self> {
        let mut clauses = Vec::new();
        if let Some(q) = query::supplied(filter.q.as_deref()) {
            clauses.push(Predicate::or([
                query::contains(q, |o: &OrdenServicio, db: &Database| {
                    db.empresas.get(&o.empresa).map(|e| e.razon_social.as_str())
                }),
                query::contains(q, |o: &OrdenServicio, _: &Database| {
                    o.descripcion_requerimiento.as_deref()
                }),
                query::contains(q, |o: &OrdenServicio, db: &Database| {
                    o.profesional_asignado
                        .and_then(|id| db.profesionales.get(&id))
                        .map(|p| p.nombres.as_str())
                }),
                query::contains(q, |o: &OrdenServicio, db: &Database| {
                    o.profesional_asignado
                        .and_then(|id| db.profesionales.get(&id))
                        .map(|p| p.apellidos.as_str())
                }),
            ]));
        }
        // Unknown status or priority codes are treated as not supplied.
        if let Some(Ok(estado)) = query::supplied(filter.estado.as_deref()).map(str::parse::<Estado>) {
            clauses.push(query::equals(estado, |o: &OrdenServicio| o.estado));
        }
        if let Some(Ok(prioridad)) =
            query::supplied(filter.prioridad.as_deref()).map(str::parse::<Prioridad>)
        {
            clauses.push(query::equals(prioridad, |o: &OrdenServicio| o.prioridad));
        }
        if let Some(empresa) = query::supplied(filter.empresa.as_deref()) {
            clauses.push(Predicate::or([
                query::contains(empresa, |o: &OrdenServicio, db: &Database| {
                    db.empresas.get(&o.empresa).map(|e| e.razon_social.as_str())
                }),
                query::contains(empresa, |o: &OrdenServicio, db: &Database| {
                    db.empresas.get(&o.empresa).map(|e| e.rut.as_str())
                }),
            ]));
        }
        if let Some(empresa_id) = filter.empresa_id {
            clauses.push(query::equals(empresa_id, |o: &OrdenServicio| o.empresa));
        }
        if let Some(profesional_id) = filter.profesional_id {
            clauses.push(query::equals(Some(profesional_id), |o: &OrdenServicio| {
                o.profesional_asignado
            }));
        }
        if let Some(servicio_id) = filter.servicio_id {
            clauses.push(Predicate::new(move |o: &OrdenServicio, _| {
                o.servicios_seleccionados.contains(&servicio_id)
            }));
        }
        Predicate::and(clauses)
    }

    fn order(records: &mut [Self]) {
        records.sort_by(|a, b| {
            b.fecha_creacion
                .cmp(&a.fecha_creacion)
                .then_with(|| b.id.cmp(&a.id))
        });
    }

    fn handle_action(&mut self, action: OrdenAction) -> Result<EstadoCambiado, RecordError> {
        let anterior = self.estado;
        self.estado = action.target();
        Ok(EstadoCambiado {
            anterior,
            actual: self.estado,
        })
    }
}
