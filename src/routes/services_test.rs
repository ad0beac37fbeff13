use super::*;

#[test]
fn create_body_accepts_minimal_payload() {
    let body: CreateServiceBody = serde_json::from_str(r#"{"name":"Wash","price":100}"#).unwrap();
    assert_eq!(body.name.as_deref(), Some("Wash"));
    assert_eq!(body.price, Some(100.0));
    assert!(body.duration.is_none());
}

#[test]
fn create_body_price_zero_is_present() {
    // Zero is a valid price; only an absent price is a validation error.
    let body: CreateServiceBody = serde_json::from_str(r#"{"name":"Free","price":0}"#).unwrap();
    assert_eq!(body.price, Some(0.0));
}

#[test]
fn create_body_missing_price_is_none() {
    let body: CreateServiceBody = serde_json::from_str(r#"{"name":"Wash"}"#).unwrap();
    assert!(body.price.is_none());
}
