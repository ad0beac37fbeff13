use super::*;

// =============================================================================
// bearer_token
// =============================================================================

#[test]
fn bearer_token_strips_scheme() {
    assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
}

#[test]
fn bearer_token_rejects_missing_scheme() {
    assert_eq!(bearer_token("abc.def.ghi"), None);
}

#[test]
fn bearer_token_rejects_empty_header() {
    assert_eq!(bearer_token(""), None);
}

#[test]
fn bearer_token_rejects_bare_scheme() {
    assert_eq!(bearer_token("Bearer "), None);
}

#[test]
fn bearer_token_scheme_is_case_sensitive() {
    assert_eq!(bearer_token("bearer abc"), None);
}

// =============================================================================
// Request body parsing
// =============================================================================

#[test]
fn signup_body_missing_field_deserializes_to_none() {
    let body: SignupBody =
        serde_json::from_str(r#"{"name":"A","email":"a@x.com","phone":"1"}"#).unwrap();
    assert!(body.password.is_none());
    assert_eq!(body.name.as_deref(), Some("A"));
}

#[test]
fn login_body_ignores_extra_fields() {
    let body: LoginBody =
        serde_json::from_str(r#"{"email":"a@x.com","password":"p","remember":true}"#).unwrap();
    assert_eq!(body.email.as_deref(), Some("a@x.com"));
    assert_eq!(body.password.as_deref(), Some("p"));
}

// =============================================================================
// Response shape
// =============================================================================

#[test]
fn token_response_serializes_token_and_customer() {
    let response = TokenResponse {
        token: "jwt-here".into(),
        customer: Customer {
            id: 1,
            name: "A".into(),
            email: "a@x.com".into(),
            phone: "1".into(),
            password_hash: "$argon2id$fake".into(),
            created_at: "2026-01-01T00:00:00".into(),
        },
    };
    let json = serde_json::to_value(response).unwrap();
    assert_eq!(json["token"], "jwt-here");
    assert_eq!(json["customer"]["email"], "a@x.com");
    assert!(json["customer"].get("password_hash").is_none());
}
