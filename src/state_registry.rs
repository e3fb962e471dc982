use std::collections::{BTreeSet, HashMap};

use crate::normalize::{CodeInput, KeyInput, canonical_key, table_code};
use crate::resource::{load_keyed_table, load_table};
use crate::{DOMESTIC_STATES, LatLong, LazyTable, LoadError, Resource};

/// State-level lookups between codes, names, abbreviations, and centroids.
///
/// Each backing table is loaded independently the first time a lookup needs
/// it and is then kept for the lifetime of the registry. Most callers use
/// the process-wide [`STATES`] instance.
///
/// Every lookup is total: unknown codes, unknown names, and absent input all
/// produce `None`. Codes may be given as integers or numeric strings, and
/// names and abbreviations are matched case-insensitively (see
/// [`normalize`](crate::normalize)).
///
/// # Panics
///
/// Lookups panic if their backing table cannot be loaded, which only happens
/// when a configured data directory holds a malformed file. Call
/// [`preload`](Self::preload) at startup to receive that failure as a value.
///
/// # Examples
///
/// ```
/// use geolookup::STATES;
///
/// assert_eq!(STATES.code_to_name(6), Some("California"));
/// assert_eq!(STATES.name_to_code("ca"), Some(6));
/// assert_eq!(STATES.name_to_code("california"), Some(6));
/// assert_eq!(STATES.abbreviation_to_name("AL"), Some("Alabama"));
/// assert_eq!(STATES.code_to_lat_long("1"), STATES.code_to_lat_long(1));
/// assert_eq!(STATES.code_to_lat_long("asdf"), None);
/// ```
#[derive(Debug)]
pub struct StateRegistry {
    code_to_name: LazyTable<HashMap<u32, String>>,
    name_to_code: LazyTable<HashMap<String, u32>>,
    code_to_abbreviation: LazyTable<HashMap<u32, String>>,
    abbreviation_to_code: LazyTable<HashMap<String, u32>>,
    code_to_lat_long: LazyTable<HashMap<u32, LatLong>>,
}

impl StateRegistry {
    pub const fn new() -> Self {
        Self {
            code_to_name: LazyTable::new(Resource::StateCodeToName, load_table),
            name_to_code: LazyTable::new(Resource::StateNameToCode, load_keyed_table),
            code_to_abbreviation: LazyTable::new(Resource::StateCodeToAbbreviation, load_table),
            abbreviation_to_code: LazyTable::new(Resource::StateAbbreviationToCode, load_keyed_table),
            code_to_lat_long: LazyTable::new(Resource::StateLatLong, load_table),
        }
    }

    /// Loads every state table now instead of on first use.
    pub fn preload(&self) -> Result<(), &LoadError> {
        self.code_to_name.try_get()?;
        self.name_to_code.try_get()?;
        self.code_to_abbreviation.try_get()?;
        self.abbreviation_to_code.try_get()?;
        self.code_to_lat_long.try_get()?;
        Ok(())
    }

    pub fn code_to_name(&self, code: impl CodeInput) -> Option<&str> {
        let code = table_code(&code)?;
        self.code_to_name.get().get(&code).map(String::as_str)
    }

    pub fn code_to_abbreviation(&self, code: impl CodeInput) -> Option<&str> {
        let code = table_code(&code)?;
        self.code_to_abbreviation.get().get(&code).map(String::as_str)
    }

    /// Accepts numeric input in any form; `"1"` and `1` are the same code,
    /// and non-numeric text such as `"asdf"` is simply not found.
    pub fn code_to_lat_long(&self, code: impl CodeInput) -> Option<LatLong> {
        let code = table_code(&code)?;
        self.code_to_lat_long.get().get(&code).copied()
    }

    /// Looks up a state code by full name or by abbreviation.
    ///
    /// The abbreviation table is consulted first, so an input that is both a
    /// valid abbreviation and a valid name resolves as an abbreviation.
    pub fn name_to_code(&self, name_or_abbreviation: impl KeyInput) -> Option<u32> {
        let key = canonical_key(&name_or_abbreviation);
        self.abbreviation_to_code
            .get()
            .get(&key)
            .or_else(|| self.name_to_code.get().get(&key))
            .copied()
    }

    pub fn name_to_abbreviation(&self, name: impl KeyInput) -> Option<&str> {
        let code = self.code_for_name(&name)?;
        self.code_to_abbreviation(code)
    }

    pub fn name_to_lat_long(&self, name: impl KeyInput) -> Option<LatLong> {
        let code = self.code_for_name(&name)?;
        self.code_to_lat_long(code)
    }

    pub fn abbreviation_to_code(&self, abbreviation: impl KeyInput) -> Option<u32> {
        self.abbreviation_to_code
            .get()
            .get(&canonical_key(&abbreviation))
            .copied()
    }

    pub fn abbreviation_to_name(&self, abbreviation: impl KeyInput) -> Option<&str> {
        let code = self.abbreviation_to_code(abbreviation)?;
        self.code_to_name(code)
    }

    pub fn abbreviation_to_lat_long(&self, abbreviation: impl KeyInput) -> Option<LatLong> {
        let code = self.abbreviation_to_code(abbreviation)?;
        self.code_to_lat_long(code)
    }

    /// All known state codes, territories included.
    pub fn codes(&self) -> BTreeSet<u32> { self.code_to_name.get().keys().copied().collect() }

    /// All known state names, territories included.
    pub fn names(&self) -> BTreeSet<&str> {
        self.code_to_name.get().values().map(String::as_str).collect()
    }

    /// All known abbreviations, territories included.
    pub fn abbreviations(&self) -> BTreeSet<&str> {
        self.code_to_abbreviation.get().values().map(String::as_str).collect()
    }

    pub fn codes_and_names(&self) -> &HashMap<u32, String> { self.code_to_name.get() }

    pub fn codes_and_abbreviations(&self) -> &HashMap<u32, String> {
        self.code_to_abbreviation.get()
    }

    /// Maps every abbreviation to the name that shares its code.
    pub fn abbreviations_and_names(&self) -> HashMap<&str, &str> {
        let names = self.code_to_name.get();
        self.code_to_abbreviation
            .get()
            .iter()
            .filter_map(|(code, abbreviation)| {
                names.get(code).map(|name| (abbreviation.as_str(), name.as_str()))
            })
            .collect()
    }

    /// The abbreviations of the 50 states and the District of Columbia.
    pub fn domestic_abbreviations(&self) -> BTreeSet<&'static str> {
        DOMESTIC_STATES.iter().map(|state| state.abbreviation()).collect()
    }

    /// The names of the 50 states and the District of Columbia, as spelled
    /// in the loaded name table.
    pub fn domestic_names(&self) -> BTreeSet<&str> {
        DOMESTIC_STATES
            .iter()
            .filter_map(|state| self.code_to_name(state.code()))
            .collect()
    }

    pub fn is_domestic_code(&self, code: impl CodeInput) -> bool {
        table_code(&code).is_some_and(|code| DOMESTIC_STATES.iter().any(|state| state.code() == code))
    }

    fn code_for_name(&self, name: &impl KeyInput) -> Option<u32> {
        self.name_to_code.get().get(&canonical_key(name)).copied()
    }
}

impl Default for StateRegistry {
    fn default() -> Self { Self::new() }
}

/// The process-wide state registry, backed by the bundled datasets unless a
/// data directory has been configured before first use.
pub static STATES: StateRegistry = StateRegistry::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_to_name() {
        let states = StateRegistry::new();
        assert_eq!(states.code_to_name(1), Some("Alabama"));
        assert_eq!(states.code_to_name("06"), Some("California"));
        assert_eq!(states.code_to_name(-1), None);
        assert_eq!(states.code_to_name(0), None);
    }

    #[test]
    fn test_tables_load_lazily() {
        let states = StateRegistry::new();
        assert!(!states.code_to_name.is_loaded());
        states.code_to_abbreviation(1);
        assert!(states.code_to_abbreviation.is_loaded());
        assert!(!states.code_to_name.is_loaded());
        assert!(!states.code_to_lat_long.is_loaded());
    }

    #[test]
    fn test_preload() {
        let states = StateRegistry::new();
        assert!(states.preload().is_ok());
        assert!(states.code_to_name.is_loaded());
        assert!(states.abbreviation_to_code.is_loaded());
        assert!(states.code_to_lat_long.is_loaded());
    }

    #[test]
    fn test_name_lookup_does_not_accept_abbreviation() {
        let states = StateRegistry::new();
        assert_eq!(states.name_to_abbreviation("CA"), None);
        assert_eq!(states.name_to_abbreviation("california"), Some("CA"));
        assert_eq!(states.name_to_lat_long("AL"), None);
    }

    #[test]
    fn test_is_domestic_code() {
        let states = StateRegistry::new();
        assert!(states.is_domestic_code(11));
        assert!(states.is_domestic_code("56"));
        assert!(!states.is_domestic_code(66));
        assert!(!states.is_domestic_code("asdf"));
    }
}
