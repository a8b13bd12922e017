use serde::{Deserialize, Serialize};
use std::fmt;

record_id!(Servicio, "servicio");

/// A catalogued service offering.
///
/// Deleting a Servicio only drops it from the selection set of the orders
/// that chose it; the orders remain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Servicio {
    pub id: ServicioId,
    /// Unique service name.
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria: Option<String>,
    pub duracion_estimada_horas: u32,
    pub activo: bool,
}

impl fmt::Display for Servicio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nombre)
    }
}

/// Payload for creating a new service.
///
/// `duracion_estimada_horas` is signed so that negative input can be
/// rejected as a validation error rather than a decoding failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicioCreate {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub duracion_estimada_horas: i64,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

impl Default for ServicioCreate {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            descripcion: None,
            categoria: None,
            duracion_estimada_horas: 0,
            activo: default_activo(),
        }
    }
}

impl ServicioCreate {
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            ..Default::default()
        }
    }
}

/// Payload for updating a service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicioUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub categoria: Option<String>,
    pub duracion_estimada_horas: Option<i64>,
    pub activo: Option<bool>,
}

/// List parameters for services.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicioFilter {
    /// Case-insensitive substring of `nombre`, `descripcion` or `categoria`.
    pub q: Option<String>,
    /// Case-insensitive exact category.
    pub categoria: Option<String>,
    pub activo: Option<bool>,
}
