//! Order management — public creation, customer-owned mutation.
//!
//! DESIGN
//! ======
//! Orders are created unauthenticated; ownership for later reads and
//! mutations is the (customer_name, customer_phone) pair matched against the
//! authenticated customer's profile, not a foreign key. The referenced
//! service's name is denormalized onto the order at creation time so later
//! renames never rewrite order history.
//!
//! COUNTER SEMANTICS
//! =================
//! Reassigning an order to a different service increments the new service's
//! usage counter and never decrements the old one. Deliberate; see
//! DESIGN.md before "fixing" this.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::customer::Customer;
use crate::db::short_id;

const ORDER_COLUMNS: &str = r#"id, customer_name, customer_phone, service_id, service_name,
    pickup_date, special_instructions, total,
    to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS') AS created_at"#;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(String),
    #[error("Invalid service")]
    InvalidService,
    #[error("order does not belong to this customer")]
    NotOwner,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Order row. Serializes with camelCase keys; the denormalized service name
/// goes out under the key `service`, as the admin UI expects.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: String,
    #[serde(rename = "service")]
    pub service_name: String,
    pub pickup_date: String,
    pub special_instructions: String,
    pub total: f64,
    pub created_at: String,
}

impl Order {
    /// Ownership check: the stored name+phone pair must match the
    /// authenticated customer's profile fields exactly.
    #[must_use]
    pub fn owned_by(&self, customer: &Customer) -> bool {
        self.customer_name == customer.name && self.customer_phone == customer.phone
    }
}

/// Partial-update payload for `PUT /api/orders/:id`. Absent fields keep
/// their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderChanges {
    pub pickup_date: Option<String>,
    pub special_instructions: Option<String>,
    pub total: Option<f64>,
    pub service_id: Option<String>,
}

impl OrderChanges {
    /// Merge the service-independent fields into an existing row. The
    /// service reassignment is handled separately because it touches the
    /// catalog.
    pub fn apply_plain(&self, order: &mut Order) {
        if let Some(pickup_date) = &self.pickup_date {
            order.pickup_date = pickup_date.clone();
        }
        if let Some(instructions) = &self.special_instructions {
            order.special_instructions = instructions.clone();
        }
        if let Some(total) = self.total {
            order.total = total;
        }
    }
}

/// Claim a usage slot on a service: increments its counter and returns its
/// current name, or `None` if the service does not exist.
async fn claim_service(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    service_id: &str,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("UPDATE services SET usage_count = usage_count + 1 WHERE id = $1 RETURNING name")
        .bind(service_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Create an order against an existing service. Atomically increments the
/// service's usage counter and denormalizes its name onto the order; if the
/// service does not exist nothing is written.
pub async fn create_order(
    pool: &PgPool,
    customer_name: &str,
    customer_phone: &str,
    service_id: &str,
    pickup_date: &str,
    special_instructions: &str,
    total: f64,
) -> Result<Order, OrderError> {
    let mut tx = pool.begin().await?;

    let Some(service_name) = claim_service(&mut tx, service_id).await? else {
        return Err(OrderError::InvalidService);
    };

    let id = short_id();
    let query = format!(
        "INSERT INTO orders (id, customer_name, customer_phone, service_id, service_name,
                             pickup_date, special_instructions, total)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {ORDER_COLUMNS}"
    );
    let order = sqlx::query_as::<_, Order>(&query)
        .bind(&id)
        .bind(customer_name)
        .bind(customer_phone)
        .bind(service_id)
        .bind(&service_name)
        .bind(pickup_date)
        .bind(special_instructions)
        .bind(total)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(order)
}

/// List the authenticated customer's orders: rows whose stored name+phone
/// equal the profile fields.
pub async fn list_for_customer(pool: &PgPool, customer: &Customer) -> Result<Vec<Order>, OrderError> {
    let query = format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE customer_name = $1 AND customer_phone = $2"
    );
    let rows = sqlx::query_as::<_, Order>(&query)
        .bind(&customer.name)
        .bind(&customer.phone)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// List all orders in store-natural order (admin view).
pub async fn list_all(pool: &PgPool) -> Result<Vec<Order>, OrderError> {
    let query = format!("SELECT {ORDER_COLUMNS} FROM orders");
    let rows = sqlx::query_as::<_, Order>(&query).fetch_all(pool).await?;
    Ok(rows)
}

/// Partially update an order owned by the given customer.
///
/// A service reassignment validates the new service, re-denormalizes its
/// name, and increments the new service's usage counter. The old service's
/// counter is left untouched.
pub async fn update_order(
    pool: &PgPool,
    id: &str,
    customer: &Customer,
    changes: &OrderChanges,
) -> Result<Order, OrderError> {
    let mut tx = pool.begin().await?;

    let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 FOR UPDATE");
    let row = sqlx::query_as::<_, Order>(&query)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    let Some(mut order) = row else {
        return Err(OrderError::NotFound(id.to_owned()));
    };
    if !order.owned_by(customer) {
        return Err(OrderError::NotOwner);
    }

    changes.apply_plain(&mut order);

    if let Some(service_id) = &changes.service_id {
        let Some(service_name) = claim_service(&mut tx, service_id).await? else {
            return Err(OrderError::InvalidService);
        };
        order.service_id = service_id.clone();
        order.service_name = service_name;
    }

    sqlx::query(
        "UPDATE orders
         SET service_id = $2, service_name = $3, pickup_date = $4,
             special_instructions = $5, total = $6
         WHERE id = $1",
    )
    .bind(&order.id)
    .bind(&order.service_id)
    .bind(&order.service_name)
    .bind(&order.pickup_date)
    .bind(&order.special_instructions)
    .bind(order.total)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(order)
}

/// Delete an order owned by the given customer.
pub async fn delete_order(pool: &PgPool, id: &str, customer: &Customer) -> Result<(), OrderError> {
    let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
    let row = sqlx::query_as::<_, Order>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let Some(order) = row else {
        return Err(OrderError::NotFound(id.to_owned()));
    };
    if !order.owned_by(customer) {
        return Err(OrderError::NotOwner);
    }

    sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;
