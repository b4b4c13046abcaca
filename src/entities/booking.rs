use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub token: Uuid,
    pub name: String,
    pub pickup_location: String,
    pub dropoff_location: String,
}

impl Booking {
    pub fn new(name: String, pickup_location: String, dropoff_location: String) -> Self {
        Self {
            token: Uuid::new_v4(),
            name,
            pickup_location,
            dropoff_location,
        }
    }
}
