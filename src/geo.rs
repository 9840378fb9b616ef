use crate::errors::GeoError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Unchecked constructor. Out-of-range values are kept as-is.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Point { lat, lon }
    }

    /// Builds a point only when both components are finite and inside their
    /// natural ranges (lat in [-90, 90], lon in [-180, 180]).
    pub fn validated(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::invalid_coordinate(lat, lon, "not finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::invalid_coordinate(
                lat,
                lon,
                "latitude outside [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::invalid_coordinate(
                lat,
                lon,
                "longitude outside [-180, 180]",
            ));
        }
        Ok(Point { lat, lon })
    }

    pub fn is_in_range(&self) -> bool {
        Point::validated(self.lat, self.lon).is_ok()
    }
}

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in meters.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Distance in meters between two points. Symmetric in its arguments.
pub fn distance(a: Point, b: Point) -> f64 {
    haversine_meters(a.lat, a.lon, b.lat, b.lon)
}
