//! Composable record predicates for list filters.
//!
//! A filter is built from field-level predicates ([`contains`], [`equals`])
//! combined with [`Predicate::and`] / [`Predicate::or`]. Predicates see the
//! whole [`Database`] so that a filter on one kind can read related records,
//! e.g. an order's company name.
//!
//! ```rust
//! use gestion_servicios::database::Database;
//! use gestion_servicios::model::{Empresa, EmpresaId};
//! use gestion_servicios::query::{self, Predicate};
//!
//! let empresa = Empresa {
//!     id: EmpresaId(1),
//!     rut: "76.123.456-7".into(),
//!     razon_social: "PYME Ejemplo S.A.".into(),
//!     giro: None,
//!     telefono: None,
//!     email: None,
//!     direccion: None,
//!     comuna: None,
//! };
//! let by_name = Predicate::or([
//!     query::contains("pyme", |e: &Empresa, _: &Database| Some(e.razon_social.as_str())),
//!     query::contains("pyme", |e: &Empresa, _: &Database| e.email.as_deref()),
//! ]);
//! assert!(by_name.matches(&empresa, &Database::new()));
//! ```

use crate::database::Database;

type Test<T> = Box<dyn Fn(&T, &Database) -> bool>;

/// A boolean test over a record of kind `T`.
pub struct Predicate<T> {
    test: Test<T>,
}

impl<T: 'static> Predicate<T> {
    pub fn new(test: impl Fn(&T, &Database) -> bool + 'static) -> Self {
        Self {
            test: Box::new(test),
        }
    }

    /// Matches every record.
    pub fn always() -> Self {
        Self::new(|_, _| true)
    }

    pub fn matches(&self, record: &T, db: &Database) -> bool {
        (self.test)(record, db)
    }

    /// Matches when every predicate matches. An empty set matches everything.
    pub fn and(predicates: impl IntoIterator<Item = Predicate<T>>) -> Self {
        let all: Vec<Predicate<T>> = predicates.into_iter().collect();
        Self::new(move |record, db| all.iter().all(|p| p.matches(record, db)))
    }

    /// Matches when any predicate matches. An empty set matches nothing.
    pub fn or(predicates: impl IntoIterator<Item = Predicate<T>>) -> Self {
        let any: Vec<Predicate<T>> = predicates.into_iter().collect();
        Self::new(move |record, db| any.iter().any(|p| p.matches(record, db)))
    }
}

/// Case-insensitive substring test on a text field. An absent field never matches.
pub fn contains<T, F>(needle: &str, field: F) -> Predicate<T>
where
    T: 'static,
    F: for<'a> Fn(&'a T, &'a Database) -> Option<&'a str> + 'static,
{
    let needle = needle.to_lowercase();
    Predicate::new(move |record, db| {
        field(record, db).is_some_and(|value| value.to_lowercase().contains(&needle))
    })
}

/// Exact equality test on a field.
pub fn equals<T, V, F>(expected: V, field: F) -> Predicate<T>
where
    T: 'static,
    V: PartialEq + 'static,
    F: Fn(&T) -> V + 'static,
{
    Predicate::new(move |record, _| field(record) == expected)
}

/// A filter value, or `None` when it is absent, empty or whitespace-only.
pub fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
