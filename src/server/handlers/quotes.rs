use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::Quote;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    distance: f64,
    car_type: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api.create_quote(params.distance, params.car_type).await?;

    Ok(quote.into())
}
