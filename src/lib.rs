//! Geolookup: United States state and county reference data.
//!
//! This crate maps between the numeric codes, names, two-letter
//! abbreviations, and latitude/longitude centroids of US states, the District
//! of Columbia, the inhabited territories, and counties. It is meant for
//! normalizing and enriching location records, not for geocoding free text.
//!
//! # Basic Usage
//!
//! ```rust
//! use geolookup::{COUNTIES, STATES, CALIFORNIA};
//!
//! // State lookups accept codes as integers or numeric strings, and names
//! // or abbreviations in any case
//! assert_eq!(STATES.code_to_name(1), Some("Alabama"));
//! assert_eq!(STATES.code_to_abbreviation("6"), Some("CA"));
//! assert_eq!(STATES.name_to_code("california"), Some(CALIFORNIA.code()));
//! assert_eq!(STATES.name_to_code("foo"), None);
//!
//! // Counties are addressed relative to their state
//! assert_eq!(COUNTIES.code_to_name(1, 1), Some("AUTAUGA"));
//!
//! // The 50 states and DC
//! assert_eq!(STATES.domestic_names().len(), 51);
//! assert!(!STATES.domestic_names().contains("Guam"));
//! ```
//!
//! # Reference Tables
//!
//! Lookups are served from eight immutable tables, one per JSON resource
//! compiled into the crate. A table is loaded the first time a lookup needs
//! it and is kept for the rest of the process; see [`LazyTable`].
//!
//! Unknown input never fails: unknown codes, unknown names, blank input and
//! non-numeric codes all return `None`.
//!
//! # Directory Loading Feature
//!
//! When the `directory-loading` feature is enabled (default), the bundled
//! tables can be replaced by JSON files from one or more directories, for
//! example to supply a complete nationwide county dataset.
//!
//! ## Custom Configuration
//!
//! Configure search paths before first access (requires `directory-loading`
//! feature):
//!
//! ```rust,ignore
//! use geolookup::{set_data_config, DataConfig};
//!
//! set_data_config(DataConfig::with_paths(vec![
//!     "/usr/share/geolookup".into(),
//! ])).unwrap();
//! ```
//!
//! Files must use the same layout as the bundled resources (see
//! [`resource`]). A directory may provide any subset of the tables.
//!
//! ## Disabling Directory Loading
//!
//! To disable at compile time:
//!
//! ```toml
//! [dependencies]
//! geolookup = { version = "0.4", default-features = false }
//! ```

mod lat_long;
pub use lat_long::LatLong;

mod state;
pub use state::State;

mod states;
pub use states::*;

pub mod normalize;

pub mod resource;
pub use resource::{
    LoadError, Origin, Resource, load_table, load_table_from_directory, parse_table,
};

mod lazy_table;
pub use lazy_table::LazyTable;

mod state_registry;
pub use state_registry::{STATES, StateRegistry};

mod county_registry;
pub use county_registry::{COUNTIES, CountyRegistry};

#[cfg(feature = "directory-loading")]
mod directory_config;

#[cfg(feature = "directory-loading")]
pub use directory_config::{
    ConfigError, DataConfig, add_search_paths, is_config_locked, set_data_config,
};
