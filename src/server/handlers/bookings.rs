use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{Alert, Booking};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
    pickup_location: String,
    dropoff_location: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api
        .create_booking(params.name, params.pickup_location, params.dropoff_location)
        .await?;

    Ok(booking.into())
}

// classification only: every verdict renders as its alert, Success included
pub async fn validate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Alert>, Error> {
    let verdict = api
        .validate_booking(params.name, params.pickup_location, params.dropoff_location)
        .await?;

    Ok(verdict.alert().into())
}
