use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeoError {
    /// Latitude or longitude is not finite or lies outside its natural range.
    #[error("Invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        latitude: f64,
        longitude: f64,
        reason: String,
    },

    /// A location row could not be read.
    #[error("Bad location record at line {line}: {message}")]
    Dataset { line: u64, message: String },
}

impl GeoError {
    pub fn invalid_coordinate(latitude: f64, longitude: f64, reason: impl Into<String>) -> Self {
        GeoError::InvalidCoordinate {
            latitude,
            longitude,
            reason: reason.into(),
        }
    }

    pub fn dataset(line: u64, message: impl Into<String>) -> Self {
        GeoError::Dataset {
            line,
            message: message.into(),
        }
    }
}
