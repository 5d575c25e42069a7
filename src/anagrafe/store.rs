//! Account persistence, one row per email

use sqlx::{FromRow, PgPool};
use thiserror::Error;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS accounts (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    age INTEGER NOT NULL,
    address TEXT NOT NULL
)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already exists")]
    DuplicateEmail,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// A stored account, created once by registration and read by login
#[derive(FromRow, Debug, Clone)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct AccountStore {
    pool: PgPool,
}

impl AccountStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bootstrap the accounts table. The UNIQUE constraint on email is the
    /// authoritative duplicate guard, concurrent inserts for the same email
    /// resolve with exactly one winner.
    /// # Errors
    /// Return error if the database is unreachable or the DDL fails
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;

        Ok(())
    }

    /// Exact-match lookup by email
    /// # Errors
    /// Return error if the query fails
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            "SELECT name, email, password_hash, age, address FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a new account, a unique-constraint violation on email maps to
    /// `StoreError::DuplicateEmail`
    /// # Errors
    /// Return `DuplicateEmail` if the email is taken, `Database` otherwise
    pub async fn create(&self, account: &Account) -> Result<(), StoreError> {
        match sqlx::query(
            "INSERT INTO accounts (name, email, password_hash, age, address) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.age)
        .bind(&account.address)
        .execute(&self.pool)
        .await
        {
            Ok(_) => Ok(()),
            Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    /// Close the pool at shutdown
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_message() {
        let err = StoreError::DuplicateEmail;

        assert_eq!(err.to_string(), "email already exists");
    }

    #[test]
    fn test_database_error_is_transparent() {
        let err = StoreError::from(sqlx::Error::RowNotFound);

        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }

    #[test]
    fn test_schema_enforces_unique_email() {
        assert!(SCHEMA.contains("email TEXT NOT NULL UNIQUE"));
    }
}
