use std::collections::{BTreeSet, HashMap};

use crate::normalize::{CodeInput, KeyInput, canonical_key, table_code};
use crate::resource::{load_nested_keyed_table, load_table};
use crate::{LatLong, LazyTable, LoadError, Resource};

type PerState<T> = HashMap<u32, T>;

/// County-level lookups, always scoped by the containing state's code.
///
/// County codes are only unique within a state, so every lookup takes the
/// state code first. A state without county data and a county missing from
/// its state both yield `None`.
///
/// # Examples
///
/// ```
/// use geolookup::COUNTIES;
///
/// assert_eq!(COUNTIES.code_to_name(1, 1), Some("AUTAUGA"));
/// assert_eq!(COUNTIES.code_to_name("01", "001"), Some("AUTAUGA"));
/// assert_eq!(COUNTIES.name_to_code(1, "baldwin"), Some(3));
/// assert_eq!(COUNTIES.code_to_name(-1, 1), None);
/// ```
#[derive(Debug)]
pub struct CountyRegistry {
    code_to_name: LazyTable<PerState<HashMap<u32, String>>>,
    name_to_code: LazyTable<PerState<HashMap<String, u32>>>,
    code_to_lat_long: LazyTable<PerState<HashMap<u32, LatLong>>>,
}

impl CountyRegistry {
    pub const fn new() -> Self {
        Self {
            code_to_name: LazyTable::new(Resource::CountyCodeToName, load_table),
            name_to_code: LazyTable::new(Resource::CountyNameToCode, load_nested_keyed_table),
            code_to_lat_long: LazyTable::new(Resource::CountyLatLong, load_table),
        }
    }

    /// Loads every county table now instead of on first use.
    pub fn preload(&self) -> Result<(), &LoadError> {
        self.code_to_name.try_get()?;
        self.name_to_code.try_get()?;
        self.code_to_lat_long.try_get()?;
        Ok(())
    }

    pub fn code_to_name(&self, state_code: impl CodeInput, county_code: impl CodeInput) -> Option<&str> {
        let counties = self.code_to_name.get().get(&table_code(&state_code)?)?;
        counties.get(&table_code(&county_code)?).map(String::as_str)
    }

    pub fn name_to_code(&self, state_code: impl CodeInput, county_name: impl KeyInput) -> Option<u32> {
        let counties = self.name_to_code.get().get(&table_code(&state_code)?)?;
        counties.get(&canonical_key(&county_name)).copied()
    }

    pub fn code_to_lat_long(
        &self,
        state_code: impl CodeInput,
        county_code: impl CodeInput,
    ) -> Option<LatLong> {
        let counties = self.code_to_lat_long.get().get(&table_code(&state_code)?)?;
        counties.get(&table_code(&county_code)?).copied()
    }

    pub fn name_to_lat_long(
        &self,
        state_code: impl CodeInput,
        county_name: impl KeyInput,
    ) -> Option<LatLong> {
        let state_code = table_code(&state_code)?;
        let county_code = self.name_to_code(state_code, county_name)?;
        self.code_to_lat_long(state_code, county_code)
    }

    /// The county names of a state, or `None` when the state has no county data.
    pub fn names(&self, state_code: impl CodeInput) -> Option<BTreeSet<&str>> {
        let counties = self.code_to_name.get().get(&table_code(&state_code)?)?;
        Some(counties.values().map(String::as_str).collect())
    }

    /// The county codes of a state, or `None` when the state has no county data.
    pub fn codes(&self, state_code: impl CodeInput) -> Option<BTreeSet<u32>> {
        let counties = self.code_to_name.get().get(&table_code(&state_code)?)?;
        Some(counties.keys().copied().collect())
    }
}

impl Default for CountyRegistry {
    fn default() -> Self { Self::new() }
}

/// The process-wide county registry.
pub static COUNTIES: CountyRegistry = CountyRegistry::new();
