use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarType {
    Economy,
    Luxury,
    SUV,
}

impl CarType {
    // per-kilometer rate
    pub fn rate(&self) -> f64 {
        match self {
            Self::Economy => 10.0,
            Self::Luxury => 20.0,
            Self::SUV => 15.0,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Economy => "Economy".to_string(),
            Self::Luxury => "Luxury".to_string(),
            Self::SUV => "SUV".to_string(),
        }
    }

    // labels are case sensitive; the raw label travels with the error so the
    // caller can show it back to the user
    pub fn parse(label: &str) -> Result<Self, FareError> {
        match label {
            "Economy" => Ok(Self::Economy),
            "Luxury" => Ok(Self::Luxury),
            "SUV" => Ok(Self::SUV),
            other => Err(FareError::UnsupportedCarType(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FareError {
    NegativeDistance,
    UnsupportedCarType(String),
}

impl FareError {
    pub fn message(&self) -> String {
        match self {
            Self::NegativeDistance => "Distance Cannot be negative.".to_string(),
            Self::UnsupportedCarType(car_type) => format!(
                "Unsupported car type '{}'. Please choose Economy, Luxury, or SUV.",
                car_type
            ),
        }
    }
}

// distance is in kilometers; the distance check runs before the label is
// parsed, so a negative distance wins over an unknown car type
pub fn calculate_fare(distance: f64, car_type: &str) -> Result<f64, FareError> {
    if distance < 0.0 {
        return Err(FareError::NegativeDistance);
    }

    let car_type = CarType::parse(car_type)?;

    Ok(distance * car_type.rate())
}

#[test]
fn fare_is_distance_times_rate() {
    assert_eq!(calculate_fare(12.5, "Luxury").unwrap(), 250.0);
    assert_eq!(calculate_fare(3.0, "Economy").unwrap(), 30.0);
    assert_eq!(calculate_fare(4.0, "SUV").unwrap(), 60.0);
}

#[test]
fn zero_distance_is_a_valid_fare() {
    assert_eq!(calculate_fare(0.0, "Economy").unwrap(), 0.0);
}

#[test]
fn negative_distance_is_rejected() {
    assert_eq!(
        calculate_fare(-5.0, "Economy").unwrap_err(),
        FareError::NegativeDistance
    );
}

#[test]
fn negative_distance_wins_over_unknown_car_type() {
    assert_eq!(
        calculate_fare(-1.0, "Unknown").unwrap_err(),
        FareError::NegativeDistance
    );
}

#[test]
fn unknown_car_type_keeps_the_raw_label() {
    assert_eq!(
        calculate_fare(10.0, "Unknown").unwrap_err(),
        FareError::UnsupportedCarType("Unknown".to_string())
    );
}

#[test]
fn car_type_labels_are_case_sensitive() {
    assert_eq!(
        calculate_fare(1.0, "economy").unwrap_err(),
        FareError::UnsupportedCarType("economy".to_string())
    );
}

#[test]
fn parse_round_trips_every_label() {
    for car_type in [CarType::Economy, CarType::Luxury, CarType::SUV] {
        assert_eq!(CarType::parse(&car_type.label()).unwrap(), car_type);
    }
}

#[test]
fn unsupported_car_type_message_names_the_label() {
    let message = FareError::UnsupportedCarType("Rickshaw".to_string()).message();

    assert_eq!(
        message,
        "Unsupported car type 'Rickshaw'. Please choose Economy, Luxury, or SUV."
    );
}
