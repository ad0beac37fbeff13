//! Service catalog routes — public listing, admin CRUD.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::routes::admin::AdminSession;
use crate::services::catalog::{self, Service, ServiceChanges};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateServiceBody {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
}

/// `GET /api/services` — public catalog listing, no auth.
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    let rows = catalog::list_services(&state.pool).await?;
    Ok(Json(rows))
}

/// `POST /admin/api/services` — create a catalog entry.
pub async fn create_service(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(body): Json<CreateServiceBody>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let name = body.name.unwrap_or_default();
    let Some(price) = body.price else {
        return Err(ApiError::bad_request("Missing fields"));
    };
    if name.is_empty() {
        return Err(ApiError::bad_request("Missing fields"));
    }

    let created = catalog::create_service(&state.pool, &name, price, body.duration.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /admin/api/services/:id` — partial update; absent fields keep their
/// stored values.
pub async fn update_service(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(changes): Json<ServiceChanges>,
) -> Result<Json<Service>, ApiError> {
    let updated = catalog::update_service(&state.pool, &id, &changes).await?;
    Ok(Json(updated))
}

/// `DELETE /admin/api/services/:id` — unconditional removal.
pub async fn delete_service(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    catalog::delete_service(&state.pool, &id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

#[cfg(test)]
#[path = "services_test.rs"]
mod tests;
