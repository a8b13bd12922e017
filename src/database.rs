//! The four tables and the generic operations over them.
//!
//! Every operation either fully applies or returns an error without touching
//! any table: creates and updates are validated on a working copy before they
//! are written, and deletes cannot fail once the record is found.

use crate::error::RecordError;
use crate::framework::{Entity, Table};
use crate::model::{Empresa, OrdenServicio, Profesional, Servicio};

#[derive(Debug, Clone, Default)]
pub struct Database {
    pub empresas: Table<Empresa>,
    pub servicios: Table<Servicio>,
    pub profesionales: Table<Profesional>,
    pub ordenes: Table<OrdenServicio>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records matching `filter`, in the kind's default order.
    pub fn list<T: Entity>(&self, filter: &T::Filter) -> Vec<T> {
        let predicate = T::filter(filter);
        let mut records: Vec<T> = T::table(self)
            .iter()
            .filter(|record| predicate.matches(record, self))
            .cloned()
            .collect();
        T::order(&mut records);
        records
    }

    pub fn get<T: Entity>(&self, id: T::Id) -> Result<T, RecordError> {
        T::table(self)
            .get(&id)
            .cloned()
            .ok_or_else(|| RecordError::not_found(T::KIND, id))
    }

    pub fn create<T: Entity>(&mut self, params: T::Create) -> Result<T, RecordError> {
        let id = T::table(self).peek_id();
        let record = T::from_create_params(id, params)?;
        record.validate(self)?;
        T::table_mut(self).insert(record.clone())?;
        Ok(record)
    }

    pub fn update<T: Entity>(&mut self, id: T::Id, update: T::Update) -> Result<T, RecordError> {
        let mut record = self.get::<T>(id)?;
        record.on_update(update)?;
        record.validate(self)?;
        T::table_mut(self).replace(record.clone())?;
        Ok(record)
    }

    /// Removes the record after applying its delete policy to dependents.
    /// Returns the number of dependents deleted or rewritten.
    pub fn delete<T: Entity>(&mut self, id: T::Id) -> Result<usize, RecordError> {
        if !T::table(self).contains(&id) {
            return Err(RecordError::not_found(T::KIND, id));
        }
        let cascaded = T::on_delete(id, self);
        T::table_mut(self).remove(&id);
        Ok(cascaded)
    }

    pub fn perform<T: Entity>(
        &mut self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, RecordError> {
        let mut record = self.get::<T>(id)?;
        let result = record.handle_action(action)?;
        record.validate(self)?;
        T::table_mut(self).replace(record)?;
        Ok(result)
    }
}
