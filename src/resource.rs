//! Loading of the reference tables from their JSON resources.
//!
//! Every table is backed by one JSON resource. The eight resources are
//! compiled into the library from the crate's `data/` directory, so a lookup
//! never depends on the filesystem unless a data directory has been
//! configured (see [`DataConfig`](crate::DataConfig)).
//!
//! # Resource Format
//!
//! Integer keys are written as JSON strings and centroids as
//! `[latitude, longitude]` arrays:
//!
//! ```json
//! {
//!   "1": { "1": "AUTAUGA", "3": "BALDWIN" },
//!   "10": { "1": "KENT" }
//! }
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

macro_rules! bundled {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/", $file, ".json"))
    };
}

/// One of the reference tables backing the registries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    StateCodeToName,
    StateNameToCode,
    StateCodeToAbbreviation,
    StateAbbreviationToCode,
    StateLatLong,
    CountyCodeToName,
    CountyNameToCode,
    CountyLatLong,
}

impl Resource {
    /// Every resource, state tables first.
    pub const ALL: [Resource; 8] = [
        Resource::StateCodeToName,
        Resource::StateNameToCode,
        Resource::StateCodeToAbbreviation,
        Resource::StateAbbreviationToCode,
        Resource::StateLatLong,
        Resource::CountyCodeToName,
        Resource::CountyNameToCode,
        Resource::CountyLatLong,
    ];

    /// The resource name, which is also the file stem of its JSON file.
    pub const fn name(self) -> &'static str {
        match self {
            Resource::StateCodeToName => "STATE_CODE_TO_NAME",
            Resource::StateNameToCode => "STATE_NAME_TO_CODE",
            Resource::StateCodeToAbbreviation => "STATE_CODE_TO_ABBREVIATION",
            Resource::StateAbbreviationToCode => "STATE_ABBREVIATION_TO_CODE",
            Resource::StateLatLong => "STATE_LAT_LONG",
            Resource::CountyCodeToName => "COUNTY_CODE_TO_NAME",
            Resource::CountyNameToCode => "COUNTY_NAME_TO_CODE",
            Resource::CountyLatLong => "COUNTY_LAT_LONG",
        }
    }

    /// The file name looked up in a data directory, e.g. `STATE_LAT_LONG.json`.
    pub fn file_name(self) -> String { format!("{}.json", self.name()) }

    /// The JSON text compiled into the library for this resource.
    pub const fn bundled(self) -> &'static str {
        match self {
            Resource::StateCodeToName => bundled!("STATE_CODE_TO_NAME"),
            Resource::StateNameToCode => bundled!("STATE_NAME_TO_CODE"),
            Resource::StateCodeToAbbreviation => bundled!("STATE_CODE_TO_ABBREVIATION"),
            Resource::StateAbbreviationToCode => bundled!("STATE_ABBREVIATION_TO_CODE"),
            Resource::StateLatLong => bundled!("STATE_LAT_LONG"),
            Resource::CountyCodeToName => bundled!("COUNTY_CODE_TO_NAME"),
            Resource::CountyNameToCode => bundled!("COUNTY_NAME_TO_CODE"),
            Resource::CountyLatLong => bundled!("COUNTY_LAT_LONG"),
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// Where the text of a resource came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Bundled,
    File(PathBuf),
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Bundled => f.write_str("bundled data"),
            Origin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors that can occur when materializing a reference table.
///
/// A load error means the reference data itself is unusable. It is never
/// produced by an unknown code or name; those are plain `None` results.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource file does not exist in the requested directory.
    #[error("resource {resource} not found in {}", .directory.display())]
    Missing {
        resource: Resource,
        directory: PathBuf,
    },

    /// The resource file exists but could not be read.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// The resource text is not a table of the expected shape.
    #[error("JSON parse error in {resource} ({origin}): {source}")]
    Json {
        resource: Resource,
        origin: Origin,
        source: serde_json::Error,
    },
}

/// Loads `resource`, preferring a configured data directory over the
/// bundled copy.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use geolookup::{Resource, load_table};
///
/// let names: HashMap<u32, String> = load_table(Resource::StateCodeToName).unwrap();
/// assert_eq!(names[&6], "California");
/// ```
pub fn load_table<T: DeserializeOwned>(resource: Resource) -> Result<T, LoadError> {
    let (text, origin) = read_resource(resource)?;
    parse_table(resource, &text, origin)
}

/// Loads `resource` from `directory`, ignoring the bundled copy.
pub fn load_table_from_directory<T: DeserializeOwned>(
    resource: Resource,
    directory: &Path,
) -> Result<T, LoadError> {
    let path = directory.join(resource.file_name());
    if !path.is_file() {
        return Err(LoadError::Missing { resource, directory: directory.to_path_buf() });
    }
    let text = read_file(&path)?;
    parse_table(resource, &text, Origin::File(path))
}

/// Parses the JSON text of `resource`.
pub fn parse_table<T: DeserializeOwned>(
    resource: Resource,
    text: &str,
    origin: Origin,
) -> Result<T, LoadError> {
    let table = serde_json::from_str(text).map_err(|source| LoadError::Json {
        resource,
        origin: origin.clone(),
        source,
    })?;
    debug!("loaded {} from {}", resource, origin);
    Ok(table)
}

/// Loads a table keyed by name or abbreviation, uppercasing every key.
pub(crate) fn load_keyed_table<V: DeserializeOwned>(
    resource: Resource,
) -> Result<HashMap<String, V>, LoadError> {
    let table: HashMap<String, V> = load_table(resource)?;
    Ok(uppercase_keys(table))
}

/// Loads a per-state table whose inner keys are names, uppercasing them.
pub(crate) fn load_nested_keyed_table<V: DeserializeOwned>(
    resource: Resource,
) -> Result<HashMap<u32, HashMap<String, V>>, LoadError> {
    let table: HashMap<u32, HashMap<String, V>> = load_table(resource)?;
    Ok(table
        .into_iter()
        .map(|(state, inner)| (state, uppercase_keys(inner)))
        .collect())
}

fn uppercase_keys<V>(table: HashMap<String, V>) -> HashMap<String, V> {
    table
        .into_iter()
        .map(|(key, value)| (key.to_uppercase(), value))
        .collect()
}

fn read_resource(resource: Resource) -> Result<(Cow<'static, str>, Origin), LoadError> {
    match locate_override(resource) {
        Some(path) => {
            let text = read_file(&path)?;
            Ok((Cow::Owned(text), Origin::File(path)))
        }
        None => Ok((Cow::Borrowed(resource.bundled()), Origin::Bundled)),
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

#[cfg(feature = "directory-loading")]
fn locate_override(resource: Resource) -> Option<PathBuf> {
    crate::directory_config::get_and_lock_config().locate(resource)
}

#[cfg(not(feature = "directory-loading"))]
fn locate_override(_resource: Resource) -> Option<PathBuf> { None }
