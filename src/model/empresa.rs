use serde::{Deserialize, Serialize};
use std::fmt;

record_id!(Empresa, "empresa");

/// Represents a client company that requests services.
///
/// # Store
/// This struct implements the [`Entity`](crate::framework::Entity) trait
/// (see [`crate::resources::empresa`]), so it is managed by the
/// [`StoreActor`](crate::framework::StoreActor).
///
/// Deleting an Empresa deletes every [`OrdenServicio`](crate::model::OrdenServicio)
/// it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empresa {
    pub id: EmpresaId,
    /// Unique tax identifier, at most 12 characters.
    pub rut: String,
    pub razon_social: String,
    pub giro: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub comuna: Option<String>,
}

impl fmt::Display for Empresa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.razon_social, self.rut)
    }
}

/// Payload for creating a new company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmpresaCreate {
    pub rut: String,
    pub razon_social: String,
    #[serde(default)]
    pub giro: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub comuna: Option<String>,
}

impl EmpresaCreate {
    pub fn new(rut: impl Into<String>, razon_social: impl Into<String>) -> Self {
        Self {
            rut: rut.into(),
            razon_social: razon_social.into(),
            ..Default::default()
        }
    }
}

/// Payload for updating a company. `None` leaves a field untouched; a blank
/// string clears an optional field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmpresaUpdate {
    pub rut: Option<String>,
    pub razon_social: Option<String>,
    pub giro: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub comuna: Option<String>,
}

/// List parameters for companies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmpresaFilter {
    /// Case-insensitive substring of `razon_social`, `rut` or `email`.
    pub q: Option<String>,
}
