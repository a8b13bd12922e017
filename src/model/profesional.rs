use serde::{Deserialize, Serialize};
use std::fmt;

record_id!(Profesional, "profesional");

/// A technician who may be assigned to work orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profesional {
    pub id: ProfesionalId,
    /// Unique personal identifier, at most 12 characters.
    pub run: String,
    pub nombres: String,
    pub apellidos: String,
    pub especialidad: Option<String>,
    pub email: Option<String>,
}

impl fmt::Display for Profesional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.nombres, self.apellidos, self.run)
    }
}

/// Payload for creating a new technician.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfesionalCreate {
    pub run: String,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default)]
    pub especialidad: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ProfesionalCreate {
    pub fn new(
        run: impl Into<String>,
        nombres: impl Into<String>,
        apellidos: impl Into<String>,
    ) -> Self {
        Self {
            run: run.into(),
            nombres: nombres.into(),
            apellidos: apellidos.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfesionalUpdate {
    pub run: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub especialidad: Option<String>,
    pub email: Option<String>,
}

/// List parameters for technicians.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfesionalFilter {
    /// Case-insensitive substring of `nombres`, `apellidos`, `run` or `email`.
    pub q: Option<String>,
}
