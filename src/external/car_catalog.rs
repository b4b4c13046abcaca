use std::env;

use crate::entities::Car;
use crate::error::{empty_response_error, malformed_response_error, upstream_error, Error};

const DEFAULT_API_URL: &str = "https://run.mocky.io/v3/242a7a65-ce2e-48df-a5ae-7ac88400a5e8";

// single GET, no retry, no pagination. the body is read as bytes first so an
// empty response and an undecodable one report differently
#[tracing::instrument]
pub async fn list_available_cars() -> Result<Vec<Car>, Error> {
    let url = env::var("CAR_CATALOG_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

    let res = reqwest::Client::new().get(url).send().await?;

    let status_code = res.status().as_u16();

    if status_code != 200 {
        return Err(upstream_error());
    }

    let body = res.bytes().await?;

    if body.is_empty() {
        return Err(empty_response_error());
    }

    let cars: Vec<Car> = serde_json::from_slice(&body).map_err(|_| malformed_response_error())?;

    Ok(cars)
}

#[test]
fn catalog_body_with_wrong_shape_is_malformed() {
    // an object where the array is expected, as the decode step would see it
    let body = br#"{"cars": []}"#;

    let result: Result<Vec<Car>, _> =
        serde_json::from_slice(body).map_err(|_| malformed_response_error());

    assert_eq!(result.unwrap_err().code, 204);
}

#[test]
fn empty_catalog_array_is_not_an_error() {
    let body = b"[]";

    let cars: Vec<Car> = serde_json::from_slice(body).unwrap();

    assert!(cars.is_empty());
}
