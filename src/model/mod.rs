//! Record shapes, typed ids, payloads and list filters.
//!
//! The structs here are plain data. Their validation, cascade and filter
//! behaviour lives in [`crate::resources`], where each one implements
//! [`Entity`](crate::framework::Entity).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a `u32`-backed identifier type for one record kind.
macro_rules! record_id {
    ($entity:ident, $prefix:literal) => {
        paste::paste! {
            #[doc = "Type-safe identifier for [`" $entity "`] records."]
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                serde::Serialize,
                serde::Deserialize,
            )]
            #[serde(transparent)]
            pub struct [<$entity Id>](pub u32);

            impl From<u32> for [<$entity Id>] {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }

            impl std::fmt::Display for [<$entity Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}_{}", $prefix, self.0)
                }
            }
        }
    };
}

pub mod empresa;
pub mod orden;
pub mod profesional;
pub mod servicio;

pub use empresa::*;
pub use orden::*;
pub use profesional::*;
pub use servicio::*;

/// The four record kinds managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Empresa,
    Servicio,
    Profesional,
    OrdenServicio,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Empresa => "Empresa",
            EntityKind::Servicio => "Servicio",
            EntityKind::Profesional => "Profesional",
            EntityKind::OrdenServicio => "OrdenServicio",
        };
        f.write_str(name)
    }
}
