use axum::extract::{Extension, Json};

use crate::entities::Car;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Car>>, Error> {
    let cars = api.list_cars().await?;

    Ok(cars.into())
}
