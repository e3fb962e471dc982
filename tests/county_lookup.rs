//! Integration tests for county-level lookups against the bundled data.

use geolookup::{ALABAMA_CODE, COUNTIES, STATES};

#[test]
fn test_code_to_name() {
    assert_eq!(COUNTIES.code_to_name(1, 1), Some("AUTAUGA"));
    assert_eq!(COUNTIES.code_to_name("1", "1"), Some("AUTAUGA"));
    assert_eq!(COUNTIES.code_to_name(ALABAMA_CODE, 133), Some("WINSTON"));
}

#[test]
fn test_invalid_state_scopes_out_county() {
    assert_eq!(COUNTIES.code_to_name(-1, 1), None);
    assert_eq!(COUNTIES.code_to_name(0, 1), None);
    assert_eq!(COUNTIES.code_to_name("asdf", 1), None);
    assert_eq!(COUNTIES.name_to_code(-1, "AUTAUGA"), None);
    assert_eq!(COUNTIES.code_to_lat_long(-1, 1), None);
}

#[test]
fn test_name_to_code() {
    assert_eq!(COUNTIES.name_to_code(1, "baldwin"), Some(3));
    assert_eq!(COUNTIES.name_to_code(1, "St. Clair"), Some(115));
    assert_eq!(COUNTIES.name_to_code(1, "DeKalb"), Some(49));
    assert_eq!(COUNTIES.name_to_code(1, "nowhere"), None);
    assert_eq!(COUNTIES.name_to_code(1, None::<&str>), None);
}

#[test]
fn test_code_to_lat_long() {
    let autauga = COUNTIES.code_to_lat_long(1, 1).unwrap();
    assert!((32.0..33.0).contains(&autauga.latitude));
    assert!((-87.0..-86.0).contains(&autauga.longitude));
    assert_eq!(COUNTIES.code_to_lat_long("01", "001"), Some(autauga));
    assert_eq!(COUNTIES.code_to_lat_long(1, 2), None);
}

#[test]
fn test_tables_are_consistent() {
    for state_code in STATES.codes() {
        let Some(codes) = COUNTIES.codes(state_code) else {
            continue;
        };
        for county_code in codes {
            let name = COUNTIES.code_to_name(state_code, county_code).unwrap();
            assert_eq!(COUNTIES.name_to_code(state_code, name), Some(county_code));
            assert!(COUNTIES.code_to_lat_long(state_code, county_code).is_some());
        }
    }
}

#[test]
fn test_counties_only_for_known_states() {
    let states = STATES.codes();
    for state_code in [1, 10, 11, 15, 44] {
        assert!(states.contains(&state_code));
        assert!(COUNTIES.names(state_code).is_some());
    }
    assert_eq!(COUNTIES.names(1).map(|names| names.len()), Some(67));
}
