//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the public API, the two auth surfaces, and the session-gated admin
//! SPA under a single Axum router. Static routes win over the `/admin`
//! wildcard, so the login page and `/admin/api/*` endpoints are matched
//! before the SPA catch-all.

pub mod admin;
pub mod auth;
pub mod orders;
pub mod services;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/admin/login", get(admin::login_page).post(admin::admin_login))
        .route("/admin/logout", post(admin::admin_logout))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/api/services", get(services::list_services))
        .route("/admin/api/services", post(services::create_service))
        .route(
            "/admin/api/services/{id}",
            put(services::update_service).delete(services::delete_service),
        )
        .route(
            "/admin/api/customers",
            get(admin::list_customers).post(admin::create_customer),
        )
        .route("/admin/api/orders", get(admin::list_orders))
        .route("/api/orders", get(orders::list_my_orders).post(orders::create_order))
        .route(
            "/api/orders/{id}",
            put(orders::update_order).delete(orders::delete_order),
        )
        .route("/admin", get(admin::serve_admin_index))
        .route("/admin/{*path}", get(admin::serve_admin_asset))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
