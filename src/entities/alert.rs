use serde::{Deserialize, Serialize};

// modal payload shown to the rider; one alert per verdict
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}
