//! Order routes — public creation, customer-authenticated reads and
//! mutations.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::routes::auth::AuthCustomer;
use crate::services::order::{self, Order, OrderChanges};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub service_id: Option<String>,
    pub total: Option<f64>,
    pub pickup_date: Option<String>,
    pub special_instructions: Option<String>,
}

/// Presence-and-nonempty validation for order creation. A zero total reads
/// as missing; see DESIGN.md.
pub(crate) fn validate_create(body: &CreateOrderBody) -> Option<(String, String, String, f64)> {
    let name = body.customer_name.clone().filter(|v| !v.is_empty())?;
    let phone = body.customer_phone.clone().filter(|v| !v.is_empty())?;
    let service_id = body.service_id.clone().filter(|v| !v.is_empty())?;
    let total = body.total.filter(|t| *t != 0.0)?;
    Some((name, phone, service_id, total))
}

/// `POST /api/orders` — public, unauthenticated order placement.
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderBody>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Some((name, phone, service_id, total)) = validate_create(&body) else {
        return Err(ApiError::bad_request("Missing fields"));
    };

    let created = order::create_order(
        &state.pool,
        &name,
        &phone,
        &service_id,
        body.pickup_date.as_deref().unwrap_or(""),
        body.special_instructions.as_deref().unwrap_or(""),
        total,
    )
    .await?;
    tracing::info!(order_id = %created.id, service_id = %created.service_id, "order placed");

    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/orders` — the authenticated customer's orders, matched by
/// stored name+phone.
pub async fn list_my_orders(
    State(state): State<AppState>,
    AuthCustomer(me): AuthCustomer,
) -> Result<Json<Vec<Order>>, ApiError> {
    let rows = order::list_for_customer(&state.pool, &me).await?;
    Ok(Json(rows))
}

/// `PUT /api/orders/:id` — partial update of an owned order.
pub async fn update_order(
    State(state): State<AppState>,
    AuthCustomer(me): AuthCustomer,
    Path(id): Path<String>,
    Json(changes): Json<OrderChanges>,
) -> Result<Json<Order>, ApiError> {
    let updated = order::update_order(&state.pool, &id, &me, &changes).await?;
    Ok(Json(updated))
}

/// `DELETE /api/orders/:id` — delete an owned order.
pub async fn delete_order(
    State(state): State<AppState>,
    AuthCustomer(me): AuthCustomer,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    order::delete_order(&state.pool, &id, &me).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
