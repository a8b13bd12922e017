//! Custom actions for work orders.
//!
//! These are the back-office status shortcuts: move an order straight to
//! "en ejecución" or to "finalizada". They are handled by
//! [`Entity::handle_action`](crate::framework::Entity::handle_action) and,
//! like plain updates, apply no transition guards.

use crate::model::Estado;

/// Status shortcuts for [`OrdenServicio`](crate::model::OrdenServicio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdenAction {
    MarcarEnEjecucion,
    MarcarFinalizada,
}

impl OrdenAction {
    /// The status the action moves an order to.
    pub fn target(&self) -> Estado {
        match self {
            OrdenAction::MarcarEnEjecucion => Estado::EnEjecucion,
            OrdenAction::MarcarFinalizada => Estado::Finalizada,
        }
    }
}

/// The status change an action produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstadoCambiado {
    pub anterior: Estado,
    pub actual: Estado,
}
