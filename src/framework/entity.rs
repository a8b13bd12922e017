//! # Entity Trait
//!
//! The `Entity` trait defines the contract every record kind (Empresa, Servicio,
//! Profesional, OrdenServicio) implements to be managed by the generic store.
//! It names the payload types for each operation and provides the hooks the
//! store calls: building a record, applying an update, validating it against
//! the rest of the database, cascading a delete, filtering and ordering a
//! listing, and handling custom actions.
//!
//! Because the store owns every table, hooks receive the whole
//! [`Database`] as their context. A hook may read any table, and the delete
//! hook may rewrite dependent tables, all inside one store message.
//!
//! # Provided Methods
//! - [`Entity::on_delete`] defaults to no dependents.
//! - [`Entity::order`] defaults to primary key order.

use crate::database::Database;
use crate::error::{RecordError, ValidationError};
use crate::framework::message::{ResourceRequest, StoreRequest};
use crate::framework::table::Table;
use crate::model::EntityKind;
use crate::query::Predicate;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by the store.
pub trait Entity: Clone + Debug + Send + Sync + Sized + 'static {
    /// The unique identifier for this record kind.
    /// Must be convertible from `u32` for sequential id allocation.
    type Id: Copy + Ord + Hash + Debug + Display + Send + Sync + From<u32>;

    /// The data required to create a new record.
    type Create: Debug + Send;

    /// The data required to update an existing record.
    type Update: Debug + Send;

    /// Named list parameters.
    type Filter: Debug + Default + Send;

    /// Record-specific operations beyond CRUD. Use `()` when there are none.
    type Action: Debug + Send;

    /// The result type returned by custom actions.
    type ActionResult: Debug + Send;

    const KIND: EntityKind;

    fn table(db: &Database) -> &Table<Self>;

    fn table_mut(db: &mut Database) -> &mut Table<Self>;

    /// Wraps a typed request into the store's message envelope.
    fn into_store(request: ResourceRequest<Self>) -> StoreRequest;

    /// Extracts a typed request from the envelope, handing back other kinds.
    fn from_store(request: StoreRequest) -> Result<ResourceRequest<Self>, StoreRequest>;

    fn id(&self) -> Self::Id;

    /// Construct the record from its freshly allocated id and payload.
    /// Input is cleaned here; cross-record rules belong in [`Entity::validate`].
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, ValidationError>;

    /// Apply an update payload to a working copy of the record.
    fn on_update(&mut self, update: Self::Update) -> Result<(), ValidationError>;

    /// Check every invariant of the record against the current database.
    /// Called before any create or update is written.
    fn validate(&self, db: &Database) -> Result<(), ValidationError>;

    /// Apply the delete policy to dependent records before `id` is removed.
    /// Returns the number of dependents touched.
    fn on_delete(_id: Self::Id, _db: &mut Database) -> usize {
        0
    }

    /// Translate list parameters into a predicate over records.
    fn filter(filter: &Self::Filter) -> Predicate<Self>;

    /// Put a filtered listing into its default order.
    fn order(_records: &mut [Self]) {}

    /// Handle a record-specific action on a working copy of the record.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, RecordError>;
}
