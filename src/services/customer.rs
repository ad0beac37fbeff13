//! Customer accounts — signup, login verification, admin listing.
//!
//! DESIGN
//! ======
//! Email is the unique key. The duplicate check runs before insert to give
//! the API its "Email exists" error, and the unique index backstops the
//! race between check and insert. Timestamps are formatted in SQL so rows
//! map straight to the response shape.

use serde::Serialize;
use sqlx::PgPool;

use super::password::{self, PasswordError};

const CUSTOMER_COLUMNS: &str = r#"id, name, email, phone, password_hash,
    to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS') AS created_at"#;

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Email exists")]
    EmailExists,
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Customer row. Serializes with camelCase keys and never exposes the
/// password hash.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

/// Create a customer with a hashed password. Fails if the email is taken.
pub async fn create_customer(
    pool: &PgPool,
    name: &str,
    email: &str,
    phone: &str,
    raw_password: &str,
) -> Result<Customer, CustomerError> {
    let taken: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    if taken.is_some() {
        return Err(CustomerError::EmailExists);
    }

    let hash = password::hash_password(raw_password)?;

    let query = format!(
        "INSERT INTO customers (name, email, phone, password_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING {CUSTOMER_COLUMNS}"
    );
    let row = sqlx::query_as::<_, Customer>(&query)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(&hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => CustomerError::EmailExists,
            _ => CustomerError::Database(e),
        })?;

    Ok(row)
}

/// Look up a customer by email and verify the password. `None` covers both
/// unknown email and wrong password so callers cannot distinguish them.
pub async fn authenticate(
    pool: &PgPool,
    email: &str,
    raw_password: &str,
) -> Result<Option<Customer>, CustomerError> {
    let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE email = $1");
    let row = sqlx::query_as::<_, Customer>(&query)
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.filter(|c| password::verify_password(raw_password, &c.password_hash)))
}

/// Fetch a customer by id. Used by the bearer-token extractor.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Customer>, CustomerError> {
    let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1");
    let row = sqlx::query_as::<_, Customer>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// List all customers in store-natural order (admin view).
pub async fn list_customers(pool: &PgPool) -> Result<Vec<Customer>, CustomerError> {
    let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers");
    let rows = sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await?;
    Ok(rows)
}

#[cfg(test)]
#[path = "customer_test.rs"]
mod tests;
