use std::fmt::{Display, Formatter};

/// A US state, federal district, or territory known at compile time.
///
/// `State` carries the three identifiers that are fixed by policy rather than
/// by dataset: the numeric code, the two-letter postal abbreviation, and the
/// canonical name. Centroids and county tables are looked up through
/// [`StateRegistry`](crate::StateRegistry).
///
/// # Examples
///
/// ```
/// use geolookup::{ALABAMA, GUAM, State};
///
/// assert_eq!(ALABAMA.code(), 1);
/// assert_eq!(ALABAMA.abbreviation(), "AL");
/// assert_eq!(ALABAMA.name(), "Alabama");
/// assert!(ALABAMA.is_domestic());
/// assert!(!GUAM.is_domestic());
///
/// let custom = State::new(99, "ZZ", "Nowhere");
/// assert_eq!(custom.to_string(), "Nowhere (ZZ)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    code: u32,
    abbreviation: &'static str,
    name: &'static str,
}

impl State {
    pub const fn new(code: u32, abbreviation: &'static str, name: &'static str) -> Self {
        Self { code, abbreviation, name }
    }

    pub const fn code(&self) -> u32 { self.code }

    pub const fn abbreviation(&self) -> &'static str { self.abbreviation }

    pub const fn name(&self) -> &'static str { self.name }

    /// Returns `true` for the 50 states and the District of Columbia.
    pub fn is_domestic(&self) -> bool {
        crate::DOMESTIC_STATES.iter().any(|state| state.code == self.code)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}
