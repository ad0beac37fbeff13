//! Customer auth routes — signup, login, bearer-token extractor.

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::services::customer::{self, Customer};
use crate::services::token;
use crate::state::AppState;

pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated customer extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require customer authentication. Identity
/// comes from the signed token; the profile row is loaded so ownership
/// checks can compare stored name+phone.
pub struct AuthCustomer(pub Customer);

impl<S> axum::extract::FromRequestParts<S> for AuthCustomer
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let Some(raw) = bearer_token(header) else {
            return Err(ApiError::unauthorized());
        };

        let app_state = AppState::from_ref(state);
        let customer_id = token::verify(&app_state.config.jwt_secret, raw)
            .map_err(|_| ApiError::unauthorized())?;

        let customer = customer::find_by_id(&app_state.pool, customer_id)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(ApiError::unauthorized)?;

        Ok(Self(customer))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct SignupBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub customer: Customer,
}

fn issue_token(state: &AppState, customer_id: i64) -> Result<String, ApiError> {
    token::issue(&state.config.jwt_secret, customer_id).map_err(|e| ApiError::Internal(e.to_string()))
}

/// `POST /auth/signup` — register a customer and issue a bearer token.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let (Some(name), Some(email), Some(phone), Some(password)) =
        (body.name, body.email, body.phone, body.password)
    else {
        return Err(ApiError::bad_request("Missing fields"));
    };

    let created = customer::create_customer(&state.pool, &name, &email, &phone, &password).await?;
    let token = issue_token(&state, created.id)?;
    tracing::info!(customer_id = created.id, "customer signed up");

    Ok((StatusCode::CREATED, Json(TokenResponse { token, customer: created })))
}

/// `POST /auth/login` — verify the password hash and issue a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Missing fields"));
    }

    let Some(found) = customer::authenticate(&state.pool, &email, &password).await? else {
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    };
    let token = issue_token(&state, found.id)?;

    Ok(Json(TokenResponse { token, customer: found }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
