use async_trait::async_trait;

use crate::booking::Verdict;
use crate::entities::{Booking, Car, Quote};
use crate::error::Error;

#[async_trait]
pub trait BookingAPI {
    async fn create_booking(
        &self,
        name: String,
        pickup_location: String,
        dropoff_location: String,
    ) -> Result<Booking, Error>;

    async fn validate_booking(
        &self,
        name: String,
        pickup_location: String,
        dropoff_location: String,
    ) -> Result<Verdict, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(&self, distance: f64, car_type: String) -> Result<Quote, Error>;
}

#[async_trait]
pub trait CarCatalogAPI {
    async fn list_cars(&self) -> Result<Vec<Car>, Error>;
}

pub trait API: BookingAPI + QuoteAPI + CarCatalogAPI {}
