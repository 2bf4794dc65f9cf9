use axum::http::StatusCode;
use thiserror::Error;

/// Validation failures raised by the record store, the profile and the
/// metrics calculator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("'{0}' is not a weekday (expected Monday..Sunday)")]
    InvalidDay(String),

    #[error("distance {0} km is outside 0..=1000")]
    OutOfRangeDistance(f64),

    #[error("age {0} is outside 1..=120")]
    InvalidAge(u32),

    #[error("no travel days recorded")]
    EmptyTravelSubset,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::EmptyTravelSubset => Self::not_found(err.to_string()),
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_errors_map_to_client_statuses() {
        let err: AppError = TrackerError::InvalidDay("monday".into()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("monday"));

        let err: AppError = TrackerError::OutOfRangeDistance(1001.0).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: AppError = TrackerError::EmptyTravelSubset.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
