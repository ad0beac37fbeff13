//! Admin routes — static-credential login, session management, admin views,
//! and the session-gated SPA.
//!
//! ARCHITECTURE
//! ============
//! Admin auth is cookie-backed server-side session state, entirely separate
//! from the customer bearer tokens. `POST /admin/login` accepts either JSON
//! (from the SPA) or a form post (from the HTML login page) and branches on
//! content type. The SPA itself is served from disk only when a valid
//! session cookie is presented; everything else redirects to the login page.

use axum::Json;
use axum::body::Body;
use axum::extract::{FromRef, FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::errors::ApiError;
use crate::services::{customer, order, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "admin_session";
const LOGIN_TEMPLATE: &str = include_str!("../../templates/admin_login.html");

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

// =============================================================================
// SESSION EXTRACTOR
// =============================================================================

/// Valid admin session extracted from the session cookie.
/// Use as a handler parameter to require admin authentication.
pub struct AdminSession {
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::unauthorized());
        }

        let app_state = AppState::from_ref(state);
        let valid = session::validate_session(&app_state.pool, token).await?;
        if !valid {
            return Err(ApiError::unauthorized());
        }

        Ok(Self { token: token.to_owned() })
    }
}

// =============================================================================
// LOGIN / LOGOUT
// =============================================================================

#[derive(Deserialize)]
pub struct AdminLoginBody {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub(crate) fn render_login_page(error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| format!(r#"<p class="error">{msg}</p>"#))
        .unwrap_or_default();
    LOGIN_TEMPLATE.replace("{{ERROR}}", &error_html)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

/// `GET /admin/login` — serve the HTML login page.
pub async fn login_page() -> Html<String> {
    Html(render_login_page(None))
}

/// `POST /admin/login` — check the static credential pair and start a
/// session. JSON requests get a JSON reply; form posts get a redirect to the
/// SPA or the login page re-rendered with an error.
pub async fn admin_login(State(state): State<AppState>, req: Request) -> Response {
    let is_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    let body = if is_json {
        match Json::<AdminLoginBody>::from_request(req, &()).await {
            Ok(Json(body)) => body,
            Err(_) => return ApiError::bad_request("Missing fields").into_response(),
        }
    } else {
        match axum::extract::Form::<AdminLoginBody>::from_request(req, &()).await {
            Ok(axum::extract::Form(body)) => body,
            Err(_) => {
                return (StatusCode::BAD_REQUEST, Html(render_login_page(Some("Invalid credentials"))))
                    .into_response();
            }
        }
    };

    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    if !session::credentials_match(&state.config, &username, &password) {
        tracing::warn!(%username, "admin login rejected");
        if is_json {
            return ApiError::Unauthorized("Invalid credentials".into()).into_response();
        }
        return (StatusCode::UNAUTHORIZED, Html(render_login_page(Some("Invalid credentials"))))
            .into_response();
    }

    let token = match session::create_session(&state.pool).await {
        Ok(token) => token,
        Err(e) => return ApiError::from(e).into_response(),
    };
    tracing::info!("admin logged in");

    let jar = CookieJar::new().add(session_cookie(token));
    if is_json {
        (jar, Json(serde_json::json!({ "message": "Admin login successful" }))).into_response()
    } else {
        (jar, Redirect::to("/admin")).into_response()
    }
}

/// `POST /admin/logout` — delete the session, clear the cookie.
pub async fn admin_logout(
    State(state): State<AppState>,
    admin: AdminSession,
) -> Result<impl IntoResponse, ApiError> {
    session::delete_session(&state.pool, &admin.token).await?;
    let jar = CookieJar::new().add(clear_session_cookie());
    Ok((jar, Json(serde_json::json!({ "message": "Admin logged out" }))))
}

// =============================================================================
// ADMIN VIEWS
// =============================================================================

#[derive(Deserialize)]
pub struct CreateCustomerBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Password assigned to admin-created customer accounts. The customer is
/// expected to log in with it and keep it; there is no reset flow here.
const DEFAULT_CUSTOMER_PASSWORD: &str = "defaultpass";

/// `GET /admin/api/customers` — list all customers.
pub async fn list_customers(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Json<Vec<customer::Customer>>, ApiError> {
    let rows = customer::list_customers(&state.pool).await?;
    Ok(Json(rows))
}

/// `POST /admin/api/customers` — create a customer with the default password.
pub async fn create_customer(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(body): Json<CreateCustomerBody>,
) -> Result<(StatusCode, Json<customer::Customer>), ApiError> {
    let (Some(name), Some(email), Some(phone)) = (body.name, body.email, body.phone) else {
        return Err(ApiError::bad_request("Missing fields"));
    };

    let created =
        customer::create_customer(&state.pool, &name, &email, &phone, DEFAULT_CUSTOMER_PASSWORD)
            .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /admin/api/orders` — list all orders.
pub async fn list_orders(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Json<Vec<order::Order>>, ApiError> {
    let rows = order::list_all(&state.pool).await?;
    Ok(Json(rows))
}

// =============================================================================
// STATIC SPA
// =============================================================================

/// `GET /admin` — serve the SPA index, session-gated.
pub async fn serve_admin_index(State(state): State<AppState>, jar: CookieJar) -> Response {
    serve_spa(&state, &jar, "").await
}

/// `GET /admin/*path` — serve SPA assets, session-gated. Unknown paths fall
/// back to `index.html` so client-side routing works on refresh.
pub async fn serve_admin_asset(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(path): Path<String>,
) -> Response {
    serve_spa(&state, &jar, &path).await
}

async fn serve_spa(state: &AppState, jar: &CookieJar, path: &str) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    let logged_in = !token.is_empty()
        && session::validate_session(&state.pool, token).await.unwrap_or(false);
    if !logged_in {
        return Redirect::to("/admin/login").into_response();
    }

    let dist = &state.config.admin_dist_dir;
    let serve = ServeDir::new(dist)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dist.join("index.html")));

    let req = match Request::builder().uri(format!("/{path}")).body(Body::empty()) {
        Ok(req) => req,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match serve.oneshot(req).await {
        Ok(res) => res.map(Body::new).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
