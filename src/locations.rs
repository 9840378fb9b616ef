use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::errors::GeoError;
use crate::geo::Point;

/// A labeled point. Built once from input and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedLocation {
    pub name: String,
    pub point: Point,
}

impl NamedLocation {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        NamedLocation {
            name: name.into(),
            point: Point::new(lat, lon),
        }
    }

    /// Checks the point against the natural coordinate ranges.
    pub fn validate(&self) -> Result<Point, GeoError> {
        Point::validated(self.point.lat, self.point.lon)
    }
}

/// The dataset used when no `--locations` file is given.
pub fn reference_dataset() -> Vec<NamedLocation> {
    vec![
        NamedLocation::new("Home", 11.1848505, 75.8435999),
        NamedLocation::new("Grand Bakes", 11.1838543, 75.8435412),
        NamedLocation::new("Grand Hotel", 11.1828665, 75.8458570),
        NamedLocation::new("Ramanattukara", 11.177580, 75.864940),
    ]
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

/// Reads `name,latitude,longitude` rows (with a header line).
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NamedLocation>, GeoError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut locations = Vec::new();
    for result in rdr.deserialize::<LocationRecord>() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            GeoError::dataset(line, e.to_string())
        })?;
        locations.push(NamedLocation::new(
            record.name,
            record.latitude,
            record.longitude,
        ));
    }
    Ok(locations)
}

pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<NamedLocation>> {
    let file = std::fs::File::open(path.as_ref())?;
    Ok(from_reader(file)?)
}
