use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_311__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_7__"), None);
}

// =============================================================================
// render_login_page
// =============================================================================

#[test]
fn login_page_without_error_has_no_placeholder() {
    let html = render_login_page(None);
    assert!(!html.contains("{{ERROR}}"));
    assert!(!html.contains(r#"class="error""#));
}

#[test]
fn login_page_with_error_renders_message() {
    let html = render_login_page(Some("Invalid credentials"));
    assert!(html.contains("Invalid credentials"));
    assert!(html.contains(r#"class="error""#));
    assert!(!html.contains("{{ERROR}}"));
}

#[test]
fn login_page_posts_back_to_login_route() {
    let html = render_login_page(None);
    assert!(html.contains(r#"action="/admin/login""#));
    assert!(html.contains(r#"name="username""#));
    assert!(html.contains(r#"name="password""#));
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("tok123".into());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok123");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// Request body parsing
// =============================================================================

#[test]
fn admin_login_body_from_json() {
    let body: AdminLoginBody =
        serde_json::from_str(r#"{"username":"admin","password":"pw"}"#).unwrap();
    assert_eq!(body.username.as_deref(), Some("admin"));
    assert_eq!(body.password.as_deref(), Some("pw"));
}

#[test]
fn admin_login_body_missing_fields_are_none() {
    let body: AdminLoginBody = serde_json::from_str("{}").unwrap();
    assert!(body.username.is_none());
    assert!(body.password.is_none());
}
