use serde::{Deserialize, Serialize};

/// A latitude/longitude centroid in decimal degrees.
///
/// Serialized as a two-element `[latitude, longitude]` array, which is the
/// shape used by the bundled datasets.
///
/// # Examples
///
/// ```
/// use geolookup::LatLong;
///
/// let centroid: LatLong = serde_json::from_str("[32.8, -86.7]").unwrap();
/// assert_eq!(centroid, LatLong::new(32.8, -86.7));
/// assert_eq!(<(f64, f64)>::from(centroid), (32.8, -86.7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLong {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for LatLong {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<LatLong> for (f64, f64) {
    fn from(lat_long: LatLong) -> Self { (lat_long.latitude, lat_long.longitude) }
}
