use serde::{Deserialize, Serialize};

use crate::entities::Alert;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    InvalidName,
    InvalidPickupLocation,
    InvalidDropoffLocation,
    SameLocation,
    Valid,
}

impl Verdict {
    pub fn alert(&self) -> Alert {
        let (title, message) = match self {
            Self::InvalidName => (
                "Invalid Name",
                "The name field cannot be empty. Please enter your name to proceed.",
            ),
            Self::InvalidPickupLocation => (
                "Invalid Pick-Up Location",
                "Please enter a valid pick-up location to book your ride.",
            ),
            Self::InvalidDropoffLocation => (
                "Invalid Drop-Off Location",
                "Please enter a valid drop-off location to continue.",
            ),
            Self::SameLocation => (
                "Locations Cannot Be the Same",
                "Your pick-up and drop-off locations are identical. Please provide different locations.",
            ),
            Self::Valid => ("Success", "Your Ride Has Successfully been booked"),
        };

        Alert {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

// checks run in order and the first failing one wins. the emptiness checks
// trim whitespace and newlines; the same-location check compares the raw
// strings, so " Lagos" and "Lagos" count as different locations
pub fn validate_inputs(name: &str, pickup_location: &str, dropoff_location: &str) -> Verdict {
    if name.trim().is_empty() {
        return Verdict::InvalidName;
    }

    if pickup_location.trim().is_empty() {
        return Verdict::InvalidPickupLocation;
    }

    if dropoff_location.trim().is_empty() {
        return Verdict::InvalidDropoffLocation;
    }

    if pickup_location == dropoff_location {
        return Verdict::SameLocation;
    }

    Verdict::Valid
}

#[test]
fn blank_name_is_rejected() {
    assert_eq!(validate_inputs("", "A", "B"), Verdict::InvalidName);
    assert_eq!(validate_inputs("  \t\n", "A", "B"), Verdict::InvalidName);
}

#[test]
fn blank_name_wins_over_every_other_check() {
    assert_eq!(validate_inputs("", "", ""), Verdict::InvalidName);
    assert_eq!(validate_inputs(" ", "Lagos", "Lagos"), Verdict::InvalidName);
}

#[test]
fn blank_pickup_location_is_rejected() {
    assert_eq!(validate_inputs("Jo", "", "B"), Verdict::InvalidPickupLocation);
    assert_eq!(
        validate_inputs("Jo", " \n", ""),
        Verdict::InvalidPickupLocation
    );
}

#[test]
fn blank_dropoff_location_is_rejected() {
    assert_eq!(
        validate_inputs("Jo", "A", ""),
        Verdict::InvalidDropoffLocation
    );
    assert_eq!(
        validate_inputs("Jo", "A", "   "),
        Verdict::InvalidDropoffLocation
    );
}

#[test]
fn identical_locations_are_rejected() {
    assert_eq!(
        validate_inputs("Jo", "Lagos", "Lagos"),
        Verdict::SameLocation
    );
}

#[test]
fn location_equality_is_on_untrimmed_input() {
    // the equality check does not trim, so these pass as different locations
    assert_eq!(validate_inputs("Jo", " Lagos", "Lagos"), Verdict::Valid);
    assert_eq!(validate_inputs("Jo", "Lagos", "Lagos "), Verdict::Valid);
}

#[test]
fn well_formed_inputs_are_valid() {
    assert_eq!(validate_inputs("Jo", "Lagos", "Abuja"), Verdict::Valid);
}

#[test]
fn every_verdict_has_an_alert() {
    let alert = Verdict::InvalidName.alert();
    assert_eq!(alert.title, "Invalid Name");

    let alert = Verdict::InvalidPickupLocation.alert();
    assert_eq!(alert.title, "Invalid Pick-Up Location");

    let alert = Verdict::InvalidDropoffLocation.alert();
    assert_eq!(alert.title, "Invalid Drop-Off Location");

    let alert = Verdict::SameLocation.alert();
    assert_eq!(alert.title, "Locations Cannot Be the Same");

    let alert = Verdict::Valid.alert();
    assert_eq!(alert.title, "Success");
    assert_eq!(alert.message, "Your Ride Has Successfully been booked");
}
