use async_trait::async_trait;

use crate::{
    api::{BookingAPI, CarCatalogAPI, QuoteAPI, API},
    booking::{self, Verdict},
    entities::{Booking, Car, Quote},
    error::{rejected_booking_error, Error},
    external::car_catalog,
    fare,
};

#[derive(Debug)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_booking(
        &self,
        name: String,
        pickup_location: String,
        dropoff_location: String,
    ) -> Result<Booking, Error> {
        match booking::validate_inputs(&name, &pickup_location, &dropoff_location) {
            Verdict::Valid => Ok(Booking::new(name, pickup_location, dropoff_location)),
            verdict => Err(rejected_booking_error(verdict)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn validate_booking(
        &self,
        name: String,
        pickup_location: String,
        dropoff_location: String,
    ) -> Result<Verdict, Error> {
        Ok(booking::validate_inputs(
            &name,
            &pickup_location,
            &dropoff_location,
        ))
    }
}

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(&self, distance: f64, car_type: String) -> Result<Quote, Error> {
        let fare = fare::calculate_fare(distance, &car_type)?;

        Ok(Quote::new(distance, car_type, fare))
    }
}

#[async_trait]
impl CarCatalogAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_cars(&self) -> Result<Vec<Car>, Error> {
        car_catalog::list_available_cars().await
    }
}

impl API for Engine {}

#[test]
fn create_quote_prices_the_ride() {
    use tokio_test::block_on;

    let engine = Engine::new();

    let quote = block_on(engine.create_quote(12.5, "Luxury".to_string())).unwrap();

    assert_eq!(quote.distance, 12.5);
    assert_eq!(quote.car_type, "Luxury");
    assert_eq!(quote.fare, 250.0);
}

#[test]
fn create_quote_rejects_bad_input() {
    use tokio_test::block_on;

    let engine = Engine::new();

    let error = block_on(engine.create_quote(-5.0, "Economy".to_string())).unwrap_err();
    assert_eq!(error.code, 102);

    let error = block_on(engine.create_quote(10.0, "Unknown".to_string())).unwrap_err();
    assert_eq!(error.code, 103);
    assert_eq!(
        error.message,
        "Unsupported car type 'Unknown'. Please choose Economy, Luxury, or SUV."
    );
}

#[test]
fn create_booking_confirms_valid_input() {
    use tokio_test::block_on;

    let engine = Engine::new();

    let booking = block_on(engine.create_booking(
        "Jo".to_string(),
        "Lagos".to_string(),
        "Abuja".to_string(),
    ))
    .unwrap();

    assert_eq!(booking.name, "Jo");
    assert_eq!(booking.pickup_location, "Lagos");
    assert_eq!(booking.dropoff_location, "Abuja");
}

#[test]
fn create_booking_surfaces_the_verdict_message() {
    use tokio_test::block_on;

    let engine = Engine::new();

    let error = block_on(engine.create_booking(
        "".to_string(),
        "Lagos".to_string(),
        "Abuja".to_string(),
    ))
    .unwrap_err();

    assert_eq!(error.code, 104);
    assert_eq!(
        error.message,
        "The name field cannot be empty. Please enter your name to proceed."
    );
}

#[test]
fn validate_booking_reports_the_verdict() {
    use tokio_test::block_on;

    let engine = Engine::new();

    let verdict = block_on(engine.validate_booking(
        "Jo".to_string(),
        "Lagos".to_string(),
        "Lagos".to_string(),
    ))
    .unwrap();

    assert_eq!(verdict, Verdict::SameLocation);
}
