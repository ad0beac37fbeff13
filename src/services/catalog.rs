//! Service catalog — CRUD over the laundry services table.
//!
//! DESIGN
//! ======
//! Updates are partial merges: only fields present in the payload overwrite
//! stored values. Deletion is unconditional and does not check for orders
//! referencing the service; orders carry a denormalized copy of the service
//! name, so history survives the orphaning.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::short_id;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("service not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Catalog row. Serializes with snake_case keys, `usage_count` included —
/// the one entity the clients consume in snake_case.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration: Option<String>,
    pub status: String,
    pub usage_count: i32,
}

/// Partial-update payload for `PUT /admin/api/services/:id`. Absent fields
/// keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub status: Option<String>,
}

impl ServiceChanges {
    /// Merge the payload into an existing row.
    pub fn apply(&self, service: &mut Service) {
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(price) = self.price {
            service.price = price;
        }
        if let Some(duration) = &self.duration {
            service.duration = Some(duration.clone());
        }
        if let Some(status) = &self.status {
            service.status = status.clone();
        }
    }
}

/// List the whole catalog in store-natural order.
pub async fn list_services(pool: &PgPool) -> Result<Vec<Service>, CatalogError> {
    let rows = sqlx::query_as::<_, Service>(
        "SELECT id, name, price, duration, status, usage_count FROM services",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch one service by id.
pub async fn get_service(pool: &PgPool, id: &str) -> Result<Option<Service>, CatalogError> {
    let row = sqlx::query_as::<_, Service>(
        "SELECT id, name, price, duration, status, usage_count FROM services WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create a catalog entry. Status defaults to "Active", usage count to 0.
pub async fn create_service(
    pool: &PgPool,
    name: &str,
    price: f64,
    duration: Option<&str>,
) -> Result<Service, CatalogError> {
    let id = short_id();
    let row = sqlx::query_as::<_, Service>(
        "INSERT INTO services (id, name, price, duration)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, price, duration, status, usage_count",
    )
    .bind(&id)
    .bind(name)
    .bind(price)
    .bind(duration)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Partially update a service. Read-merge-write inside one transaction.
pub async fn update_service(
    pool: &PgPool,
    id: &str,
    changes: &ServiceChanges,
) -> Result<Service, CatalogError> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, Service>(
        "SELECT id, name, price, duration, status, usage_count FROM services WHERE id = $1 FOR UPDATE",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(mut service) = row else {
        return Err(CatalogError::NotFound(id.to_owned()));
    };
    changes.apply(&mut service);

    sqlx::query("UPDATE services SET name = $2, price = $3, duration = $4, status = $5 WHERE id = $1")
        .bind(&service.id)
        .bind(&service.name)
        .bind(service.price)
        .bind(&service.duration)
        .bind(&service.status)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(service)
}

/// Delete a service unconditionally. Orders referencing it keep their
/// denormalized name and now-dangling service id.
pub async fn delete_service(pool: &PgPool, id: &str) -> Result<(), CatalogError> {
    let deleted: Option<String> = sqlx::query_scalar("DELETE FROM services WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match deleted {
        Some(_) => Ok(()),
        None => Err(CatalogError::NotFound(id.to_owned())),
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
