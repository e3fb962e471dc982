use paste::paste;

use crate::State;
use crate::normalize::{KeyInput, canonical_key};

/// A macro that declares a state at compile time.
///
/// This macro creates two constants:
/// - A raw `u32` code constant with the suffix `_CODE`
/// - A [`State`] constant with the given code, abbreviation, and name
///
/// This is used internally to define every state, district, and territory
/// in the bundled dataset.
///
/// # Examples
///
/// ```
/// use geolookup::*;
/// use paste::paste;
///
/// const_state!(99, ATLANTIS, "ZZ", "Atlantis");
///
/// assert_eq!(ATLANTIS.code(), 99);
/// assert_eq!(ATLANTIS.abbreviation(), "ZZ");
///
/// paste! {
///     assert_eq!([<ATLANTIS _CODE>], 99);
/// }
/// ```
#[macro_export]
macro_rules! const_state {
    ($code:expr, $const_name:ident, $abbreviation:expr, $name:expr) => {
        paste! {
            pub const [<$const_name _CODE>]: u32 = $code;
        }
        pub const $const_name: $crate::State = $crate::State::new($code, $abbreviation, $name);
    };
}

// Codes follow the two-digit FIPS state codes; gaps (3, 7, 14, 43, 52) are
// reserved and never assigned.

//
// States
//

const_state!(1, ALABAMA, "AL", "Alabama");
const_state!(2, ALASKA, "AK", "Alaska");
const_state!(4, ARIZONA, "AZ", "Arizona");
const_state!(5, ARKANSAS, "AR", "Arkansas");
const_state!(6, CALIFORNIA, "CA", "California");
const_state!(8, COLORADO, "CO", "Colorado");
const_state!(9, CONNECTICUT, "CT", "Connecticut");
const_state!(10, DELAWARE, "DE", "Delaware");
const_state!(12, FLORIDA, "FL", "Florida");
const_state!(13, GEORGIA, "GA", "Georgia");
const_state!(15, HAWAII, "HI", "Hawaii");
const_state!(16, IDAHO, "ID", "Idaho");
const_state!(17, ILLINOIS, "IL", "Illinois");
const_state!(18, INDIANA, "IN", "Indiana");
const_state!(19, IOWA, "IA", "Iowa");
const_state!(20, KANSAS, "KS", "Kansas");
const_state!(21, KENTUCKY, "KY", "Kentucky");
const_state!(22, LOUISIANA, "LA", "Louisiana");
const_state!(23, MAINE, "ME", "Maine");
const_state!(24, MARYLAND, "MD", "Maryland");
const_state!(25, MASSACHUSETTS, "MA", "Massachusetts");
const_state!(26, MICHIGAN, "MI", "Michigan");
const_state!(27, MINNESOTA, "MN", "Minnesota");
const_state!(28, MISSISSIPPI, "MS", "Mississippi");
const_state!(29, MISSOURI, "MO", "Missouri");
const_state!(30, MONTANA, "MT", "Montana");
const_state!(31, NEBRASKA, "NE", "Nebraska");
const_state!(32, NEVADA, "NV", "Nevada");
const_state!(33, NEW_HAMPSHIRE, "NH", "New Hampshire");
const_state!(34, NEW_JERSEY, "NJ", "New Jersey");
const_state!(35, NEW_MEXICO, "NM", "New Mexico");
const_state!(36, NEW_YORK, "NY", "New York");
const_state!(37, NORTH_CAROLINA, "NC", "North Carolina");
const_state!(38, NORTH_DAKOTA, "ND", "North Dakota");
const_state!(39, OHIO, "OH", "Ohio");
const_state!(40, OKLAHOMA, "OK", "Oklahoma");
const_state!(41, OREGON, "OR", "Oregon");
const_state!(42, PENNSYLVANIA, "PA", "Pennsylvania");
const_state!(44, RHODE_ISLAND, "RI", "Rhode Island");
const_state!(45, SOUTH_CAROLINA, "SC", "South Carolina");
const_state!(46, SOUTH_DAKOTA, "SD", "South Dakota");
const_state!(47, TENNESSEE, "TN", "Tennessee");
const_state!(48, TEXAS, "TX", "Texas");
const_state!(49, UTAH, "UT", "Utah");
const_state!(50, VERMONT, "VT", "Vermont");
const_state!(51, VIRGINIA, "VA", "Virginia");
const_state!(53, WASHINGTON, "WA", "Washington");
const_state!(54, WEST_VIRGINIA, "WV", "West Virginia");
const_state!(55, WISCONSIN, "WI", "Wisconsin");
const_state!(56, WYOMING, "WY", "Wyoming");

//
// Federal district
//

const_state!(11, DISTRICT_OF_COLUMBIA, "DC", "District of Columbia");

//
// Territories
//

const_state!(60, AMERICAN_SAMOA, "AS", "American Samoa");
const_state!(66, GUAM, "GU", "Guam");
const_state!(69, NORTHERN_MARIANA_ISLANDS, "MP", "Northern Mariana Islands");
const_state!(72, PUERTO_RICO, "PR", "Puerto Rico");
const_state!(78, US_VIRGIN_ISLANDS, "VI", "U.S. Virgin Islands");

/// The 50 states and the District of Columbia, in code order.
///
/// This list is fixed policy and is not derived from any dataset; replacing
/// the reference tables through a data directory does not change it.
pub const DOMESTIC_STATES: [State; 51] = [
    ALABAMA,
    ALASKA,
    ARIZONA,
    ARKANSAS,
    CALIFORNIA,
    COLORADO,
    CONNECTICUT,
    DELAWARE,
    DISTRICT_OF_COLUMBIA,
    FLORIDA,
    GEORGIA,
    HAWAII,
    IDAHO,
    ILLINOIS,
    INDIANA,
    IOWA,
    KANSAS,
    KENTUCKY,
    LOUISIANA,
    MAINE,
    MARYLAND,
    MASSACHUSETTS,
    MICHIGAN,
    MINNESOTA,
    MISSISSIPPI,
    MISSOURI,
    MONTANA,
    NEBRASKA,
    NEVADA,
    NEW_HAMPSHIRE,
    NEW_JERSEY,
    NEW_MEXICO,
    NEW_YORK,
    NORTH_CAROLINA,
    NORTH_DAKOTA,
    OHIO,
    OKLAHOMA,
    OREGON,
    PENNSYLVANIA,
    RHODE_ISLAND,
    SOUTH_CAROLINA,
    SOUTH_DAKOTA,
    TENNESSEE,
    TEXAS,
    UTAH,
    VERMONT,
    VIRGINIA,
    WASHINGTON,
    WEST_VIRGINIA,
    WISCONSIN,
    WYOMING,
];

/// The inhabited territories present in the bundled dataset.
pub const TERRITORIES: [State; 5] = [
    AMERICAN_SAMOA,
    GUAM,
    NORTHERN_MARIANA_ISLANDS,
    PUERTO_RICO,
    US_VIRGIN_ISLANDS,
];

/// Returns `true` when `abbreviation` names one of the [`DOMESTIC_STATES`].
///
/// The comparison is case-insensitive.
///
/// ```
/// use geolookup::is_domestic;
///
/// assert!(is_domestic("dc"));
/// assert!(!is_domestic("GU"));
/// assert!(!is_domestic(None::<&str>));
/// ```
pub fn is_domestic(abbreviation: impl KeyInput) -> bool {
    let key = canonical_key(&abbreviation);
    DOMESTIC_STATES.iter().any(|state| state.abbreviation() == key)
}
