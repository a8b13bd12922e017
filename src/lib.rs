//! # Gestión de Servicios
//!
//! Record management for a small technology-services consultancy: client
//! companies ([`Empresa`](model::Empresa)), the service catalogue
//! ([`Servicio`](model::Servicio)), technicians
//! ([`Profesional`](model::Profesional)) and the work orders tying them
//! together ([`OrdenServicio`](model::OrdenServicio)).
//!
//! ## Architecture
//!
//! A single [`StoreActor`](framework::StoreActor) owns every table and
//! processes requests one at a time, so a mutation and its cascade effects on
//! other tables are applied as one unit. Callers never touch the channel
//! directly; they go through typed controllers.
//!
//! ### 1. The Engine ([`framework`], [`database`])
//! The generic [`Entity`](framework::Entity) contract, tables, messages, the
//! store actor and its typed [`ResourceClient`](framework::ResourceClient).
//!
//! ### 2. The Rules ([`resources`], [`query`])
//! Per-record cleaning, validation, delete policies and list filters, built
//! from composable [`Predicate`](query::Predicate)s.
//!
//! ### 3. The Interface ([`controller`], [`auth`])
//! One controller per record kind. Reads are public; mutations pass the
//! injected [`Authenticator`](auth::Authenticator) first.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`ServiceSystem`](lifecycle::ServiceSystem) spawns the store and wires the
//! controllers; [`Settings`](config::Settings) come from the environment.
//!
//! ## Delete policies
//!
//! | Deleted | Effect on orders |
//! |---|---|
//! | Empresa | its orders are deleted |
//! | Servicio | removed from `servicios_seleccionados` |
//! | Profesional | `profesional_asignado` cleared |
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod auth;
pub mod config;
pub mod controller;
pub mod database;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod resources;
