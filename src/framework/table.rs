//! # Table
//!
//! Ordered storage for one record kind plus its id sequence.

use crate::error::RecordError;
use crate::framework::entity::Entity;
use std::collections::BTreeMap;

/// Rows of one record kind, keyed and iterated by primary key.
///
/// Ids are allocated sequentially from 1. An id is consumed only when a
/// record is inserted, and never reused after a delete.
#[derive(Debug, Clone)]
pub struct Table<T: Entity> {
    rows: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: Entity> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The id the next inserted record will receive.
    pub fn peek_id(&self) -> T::Id {
        T::Id::from(self.next_id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.rows.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inserts a new record carrying the id from [`Table::peek_id`].
    pub fn insert(&mut self, record: T) -> Result<(), RecordError> {
        let id = record.id();
        if self.rows.contains_key(&id) {
            return Err(RecordError::IntegrityConflict(format!(
                "{} id {id} is already in use",
                T::KIND
            )));
        }
        self.rows.insert(id, record);
        self.next_id += 1;
        Ok(())
    }

    /// Replaces an existing record with a new version of itself.
    pub fn replace(&mut self, record: T) -> Result<(), RecordError> {
        let id = record.id();
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RecordError::not_found(T::KIND, id)),
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.rows.remove(id)
    }

    /// Keeps only the records matching `keep`; returns how many were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, record| keep(record));
        before - self.rows.len()
    }
}
