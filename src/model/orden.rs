use crate::error::ValidationError;
use crate::model::{Empresa, EmpresaId, ProfesionalId, ServicioId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

record_id!(OrdenServicio, "orden");

/// Lifecycle status of a work order.
///
/// Any status may move to any other; there are no transition guards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estado {
    #[default]
    Nueva,
    EnEjecucion,
    Finalizada,
    Cancelada,
}

impl Estado {
    pub const ALL: [Estado; 4] = [
        Estado::Nueva,
        Estado::EnEjecucion,
        Estado::Finalizada,
        Estado::Cancelada,
    ];

    /// Stored code, e.g. `en_ejecucion`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Estado::Nueva => "nueva",
            Estado::EnEjecucion => "en_ejecucion",
            Estado::Finalizada => "finalizada",
            Estado::Cancelada => "cancelada",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Estado::Nueva => "Nueva",
            Estado::EnEjecucion => "En ejecución",
            Estado::Finalizada => "Finalizada",
            Estado::Cancelada => "Cancelada",
        }
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Estado {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Estado::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new("estado", format!("'{s}' no es un estado válido."))
            })
    }
}

/// Urgency of a work order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prioridad {
    Baja,
    #[default]
    Media,
    Alta,
}

impl Prioridad {
    pub const ALL: [Prioridad; 3] = [Prioridad::Baja, Prioridad::Media, Prioridad::Alta];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prioridad::Baja => "baja",
            Prioridad::Media => "media",
            Prioridad::Alta => "alta",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Prioridad::Baja => "Baja",
            Prioridad::Media => "Media",
            Prioridad::Alta => "Alta",
        }
    }
}

impl fmt::Display for Prioridad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Prioridad {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prioridad::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new("prioridad", format!("'{s}' no es una prioridad válida."))
            })
    }
}

/// A work order owned by one [`Empresa`](crate::model::Empresa).
///
/// `fecha_creacion` is stamped by the store on creation and never changes.
/// Listings are ordered most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdenServicio {
    pub id: OrdenServicioId,
    pub empresa: EmpresaId,
    pub fecha_creacion: DateTime<Utc>,
    pub estado: Estado,
    pub prioridad: Prioridad,
    pub descripcion_requerimiento: Option<String>,
    pub servicios_seleccionados: BTreeSet<ServicioId>,
    pub profesional_asignado: Option<ProfesionalId>,
}

impl OrdenServicio {
    /// Human-readable form, e.g. `Orden #1 - PYME Ejemplo S.A. (76.123.456-7) - Nueva`.
    ///
    /// Takes the owning company since an order only stores its id.
    pub fn describe(&self, empresa: &Empresa) -> String {
        format!("Orden #{} - {} - {}", self.id.0, empresa, self.estado)
    }
}

/// Payload for creating a new work order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdenServicioCreate {
    pub empresa: EmpresaId,
    #[serde(default)]
    pub estado: Estado,
    #[serde(default)]
    pub prioridad: Prioridad,
    #[serde(default)]
    pub descripcion_requerimiento: Option<String>,
    #[serde(default)]
    pub servicios_seleccionados: BTreeSet<ServicioId>,
    #[serde(default)]
    pub profesional_asignado: Option<ProfesionalId>,
}

impl OrdenServicioCreate {
    pub fn new(empresa: EmpresaId) -> Self {
        Self {
            empresa,
            estado: Estado::default(),
            prioridad: Prioridad::default(),
            descripcion_requerimiento: None,
            servicios_seleccionados: BTreeSet::new(),
            profesional_asignado: None,
        }
    }
}

/// Payload for updating a work order.
///
/// The owning `empresa` and `fecha_creacion` are not updatable.
/// `profesional_asignado: Some(None)` clears the assignment.
#[derive(Debug, Clone, Default)]
pub struct OrdenServicioUpdate {
    pub estado: Option<Estado>,
    pub prioridad: Option<Prioridad>,
    pub descripcion_requerimiento: Option<String>,
    pub servicios_seleccionados: Option<BTreeSet<ServicioId>>,
    pub profesional_asignado: Option<Option<ProfesionalId>>,
}

/// List parameters for work orders. Supplied parameters combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrdenServicioFilter {
    /// Case-insensitive substring of the company's `razon_social`,
    /// `descripcion_requerimiento`, or the assigned technician's names.
    pub q: Option<String>,
    /// Exact status code; unknown codes are ignored.
    pub estado: Option<String>,
    /// Exact priority code; unknown codes are ignored.
    pub prioridad: Option<String>,
    /// Case-insensitive substring of the company's `razon_social` or `rut`.
    pub empresa: Option<String>,
    pub empresa_id: Option<EmpresaId>,
    pub profesional_id: Option<ProfesionalId>,
    pub servicio_id: Option<ServicioId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nueva", Estado::Nueva)]
    #[case("en_ejecucion", Estado::EnEjecucion)]
    #[case("finalizada", Estado::Finalizada)]
    #[case("cancelada", Estado::Cancelada)]
    fn test_estado_parses_codes(#[case] code: &str, #[case] expected: Estado) {
        assert_eq!(code.parse::<Estado>().unwrap(), expected);
        assert_eq!(expected.as_str(), code);
    }

    #[test]
    fn test_unknown_codes_are_validation_errors() {
        let err = "pendiente".parse::<Estado>().unwrap_err();
        assert_eq!(err.field, "estado");
        let err = "urgente".parse::<Prioridad>().unwrap_err();
        assert_eq!(err.field, "prioridad");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Estado::EnEjecucion.to_string(), "En ejecución");
        assert_eq!(Prioridad::Alta.to_string(), "Alta");
        assert_eq!(Estado::default(), Estado::Nueva);
        assert_eq!(Prioridad::default(), Prioridad::Media);
    }

    #[test]
    fn test_describe_includes_company_and_status() {
        let empresa = Empresa {
            id: EmpresaId(1),
            rut: "76.123.456-7".into(),
            razon_social: "PYME Ejemplo S.A.".into(),
            giro: None,
            telefono: None,
            email: None,
            direccion: None,
            comuna: None,
        };
        let orden = OrdenServicio {
            id: OrdenServicioId(3),
            empresa: empresa.id,
            fecha_creacion: Utc::now(),
            estado: Estado::Finalizada,
            prioridad: Prioridad::Media,
            descripcion_requerimiento: None,
            servicios_seleccionados: BTreeSet::new(),
            profesional_asignado: None,
        };
        assert_eq!(
            orden.describe(&empresa),
            "Orden #3 - PYME Ejemplo S.A. (76.123.456-7) - Finalizada"
        );
    }

    #[test]
    fn test_create_payload_deserializes_with_defaults() {
        let params: OrdenServicioCreate =
            serde_json::from_str(r#"{"empresa": 1, "prioridad": "alta"}"#).unwrap();
        assert_eq!(params.empresa, EmpresaId(1));
        assert_eq!(params.estado, Estado::Nueva);
        assert_eq!(params.prioridad, Prioridad::Alta);
    }
}
