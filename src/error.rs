use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::booking::Verdict;
use crate::fare::FareError;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        transport_error(err)
    }
}

impl From<FareError> for Error {
    fn from(err: FareError) -> Self {
        let code = match err {
            FareError::NegativeDistance => 102,
            FareError::UnsupportedCarType(_) => 103,
        };

        Error {
            code,
            message: err.message(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            100..=199 => (StatusCode::BAD_REQUEST, self.message.as_str()),
            _ => (StatusCode::BAD_GATEWAY, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn rejected_booking_error(verdict: Verdict) -> Error {
    Error {
        code: 104,
        message: verdict.alert().message,
    }
}

pub fn transport_error(_: reqwest::Error) -> Error {
    Error {
        code: 201,
        message: "Failed to fetch cars from the server.".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 202,
        message: "The car catalog returned an error response.".into(),
    }
}

pub fn empty_response_error() -> Error {
    Error {
        code: 203,
        message: "No data received from the server.".into(),
    }
}

pub fn malformed_response_error() -> Error {
    Error {
        code: 204,
        message: "Failed to parse the car data received from the server.".into(),
    }
}

#[test]
fn fare_errors_carry_their_messages() {
    let error: Error = FareError::NegativeDistance.into();
    assert_eq!(error.code, 102);
    assert_eq!(error.message, "Distance Cannot be negative.");

    let error: Error = FareError::UnsupportedCarType("Unknown".to_string()).into();
    assert_eq!(error.code, 103);
    assert_eq!(
        error.message,
        "Unsupported car type 'Unknown'. Please choose Economy, Luxury, or SUV."
    );
}

#[test]
fn rejected_bookings_carry_the_verdict_message() {
    let error = rejected_booking_error(Verdict::SameLocation);

    assert_eq!(error.code, 104);
    assert_eq!(
        error.message,
        "Your pick-up and drop-off locations are identical. Please provide different locations."
    );
}

#[test]
fn catalog_errors_are_distinguishable() {
    let codes = [
        upstream_error().code,
        empty_response_error().code,
        malformed_response_error().code,
    ];

    assert_eq!(codes, [202, 203, 204]);
}
