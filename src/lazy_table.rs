use std::sync::OnceLock;

use crate::{LoadError, Resource};

/// A reference table that is materialized on first access.
///
/// The table is built at most once per `LazyTable`, even when first accessed
/// from several threads at the same time; concurrent callers block until the
/// build finishes and then all observe the same table. A failed build is
/// memoized as well, so a broken resource is reported on every access instead
/// of being retried.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use geolookup::{LazyTable, Resource, load_table};
///
/// static NAMES: LazyTable<HashMap<u32, String>> =
///     LazyTable::new(Resource::StateCodeToName, load_table);
///
/// assert!(!NAMES.is_loaded());
/// assert_eq!(NAMES.get()[&6], "California");
/// assert!(NAMES.is_loaded());
/// ```
#[derive(Debug)]
pub struct LazyTable<T> {
    resource: Resource,
    build: fn(Resource) -> Result<T, LoadError>,
    cell: OnceLock<Result<T, LoadError>>,
}

impl<T> LazyTable<T> {
    pub const fn new(resource: Resource, build: fn(Resource) -> Result<T, LoadError>) -> Self {
        Self {
            resource,
            build,
            cell: OnceLock::new(),
        }
    }

    pub fn resource(&self) -> Resource { self.resource }

    /// Returns the table, building it if this is the first access.
    pub fn try_get(&self) -> Result<&T, &LoadError> {
        self.cell.get_or_init(|| (self.build)(self.resource)).as_ref()
    }

    /// Returns the table, building it if this is the first access.
    ///
    /// # Panics
    ///
    /// Panics if the backing resource is missing or malformed. Reference
    /// data that cannot be loaded is a fatal configuration error; use
    /// [`try_get`](Self::try_get) to observe it as a value instead.
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(table) => table,
            Err(error) => panic!("failed to load reference table {}: {error}", self.resource),
        }
    }

    /// Returns `true` once the table has been built successfully.
    pub fn is_loaded(&self) -> bool { self.cell.get().is_some_and(Result::is_ok) }
}
