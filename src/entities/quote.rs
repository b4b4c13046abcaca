use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub distance: f64,
    pub car_type: String,
    pub fare: f64,
}

impl Quote {
    pub fn new(distance: f64, car_type: String, fare: f64) -> Self {
        Self {
            token: Uuid::new_v4(),
            distance,
            car_type,
            fare,
        }
    }
}
