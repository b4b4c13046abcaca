use serde::{Deserialize, Serialize};

// catalog record; `type` is whatever label the catalog chose to send and is
// not checked against CarType
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub fare: f64,
    #[serde(rename = "type")]
    pub car_type: String,
}

#[test]
fn car_list_decodes_from_catalog_json() {
    let body = r#"[
        {"id": 1, "name": "Toyota Corolla", "fare": 2500.0, "type": "Economy"},
        {"id": 2, "name": "Lexus RX", "fare": 7000.5, "type": "Luxury"},
        {"id": 3, "name": "Keke Napep", "fare": 300.0, "type": "Tricycle"}
    ]"#;

    let cars: Vec<Car> = serde_json::from_str(body).unwrap();

    assert_eq!(cars.len(), 3);
    assert_eq!(cars[0].id, 1);
    assert_eq!(cars[0].name, "Toyota Corolla");
    assert_eq!(cars[1].fare, 7000.5);
    // labels outside the CarType enumeration are kept as-is
    assert_eq!(cars[2].car_type, "Tricycle");
}

#[test]
fn car_type_serializes_under_the_type_key() {
    let car = Car {
        id: 7,
        name: "Honda Accord".to_string(),
        fare: 1800.0,
        car_type: "Economy".to_string(),
    };

    let value = serde_json::to_value(&car).unwrap();

    assert_eq!(value["type"], "Economy");
    assert!(value.get("car_type").is_none());
}
