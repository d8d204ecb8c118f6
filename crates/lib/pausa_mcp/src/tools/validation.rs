//! Range checks applied after argument deserialization.

use rmcp::model::{ErrorCode, ErrorData};
use thiserror::Error;

use super::types::{
    CoachMessageRequest, FindNearbyPlacesRequest, GenerateWalkRouteRequest,
    SuggestSoundtrackRequest,
};

pub const MIN_RADIUS_M: u32 = 1;
pub const MAX_RADIUS_M: u32 = 5_000;
pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 180;

/// Argument that deserialized fine but is out of bounds.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

impl From<ValidationError> for ErrorData {
    fn from(e: ValidationError) -> Self {
        ErrorData::new(ErrorCode::INVALID_PARAMS, e.to_string(), None)
    }
}

/// Tool parameters that carry extra constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    // NaN fails both comparisons and is rejected too.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

fn coordinate(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    in_range("latitude", latitude, -90.0, 90.0)?;
    in_range("longitude", longitude, -180.0, 180.0)
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty(field))
    } else {
        Ok(())
    }
}

impl Validate for FindNearbyPlacesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        coordinate(self.latitude, self.longitude)?;
        if let Some(radius) = self.radius {
            in_range(
                "radius",
                f64::from(radius),
                f64::from(MIN_RADIUS_M),
                f64::from(MAX_RADIUS_M),
            )?;
        }
        Ok(())
    }
}

impl Validate for GenerateWalkRouteRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        coordinate(self.latitude, self.longitude)?;
        in_range(
            "duration_minutes",
            f64::from(self.duration_minutes),
            f64::from(MIN_DURATION_MINUTES),
            f64::from(MAX_DURATION_MINUTES),
        )
    }
}

impl Validate for SuggestSoundtrackRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("mood", &self.mood)
    }
}

impl Validate for CoachMessageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("mood", &self.mood)?;
        non_empty("experience", &self.experience)
    }
}
