//! Error handling

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors for host-supplied values.
///
/// The selection engine itself never fails; inert input is reported as
/// [`crate::Outcome::Ignored`] instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("unknown severity filter: {0}")]
    UnknownSeverity(String),

    #[error("coordinates out of range: lat={lat}, lng={lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("zoom out of range: {0}")]
    InvalidZoom(f64),
}
