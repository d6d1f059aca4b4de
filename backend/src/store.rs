//! Persistence layer for contacts.
//!
//! [`ContactStore`] is the seam between the service layer and Postgres; tests
//! substitute an in-memory implementation behind the same trait.

use async_trait::async_trait;
use rolodex_shared::Contact;
use sqlx::PgPool;

/// A validated, normalized contact ready to be written. Produced by the
/// service layer; string fields are trimmed and blank optionals are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn all(&self) -> sqlx::Result<Vec<Contact>>;

    async fn find(&self, id: i32) -> sqlx::Result<Option<Contact>>;

    async fn find_by_phone(&self, phone: &str) -> sqlx::Result<Option<Contact>>;

    /// Contacts whose first or last name contains the term, case-insensitive.
    async fn search_by_name(&self, name: &str) -> sqlx::Result<Vec<Contact>>;

    async fn insert(&self, contact: &NewContact) -> sqlx::Result<Contact>;

    /// Returns `None` when no row with that id exists.
    async fn update(&self, id: i32, contact: &NewContact) -> sqlx::Result<Option<Contact>>;

    /// Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> sqlx::Result<bool>;

    async fn count(&self) -> sqlx::Result<i64>;
}

const CONTACT_COLUMNS: &str =
    "id, first_name, last_name, phone, email, address, created_at, updated_at";

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn all(&self) -> sqlx::Result<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
    }

    async fn find(&self, id: i32) -> sqlx::Result<Option<Contact>> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_by_phone(&self, phone: &str) -> sqlx::Result<Option<Contact>> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE phone = $1"
        ))
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
    }

    async fn search_by_name(&self, name: &str) -> sqlx::Result<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts \
             WHERE first_name ILIKE $1 OR last_name ILIKE $1 ORDER BY id"
        ))
        .bind(format!("%{}%", name))
        .fetch_all(&self.pool)
        .await
    }

    async fn insert(&self, contact: &NewContact) -> sqlx::Result<Contact> {
        sqlx::query_as::<_, Contact>(&format!(
            "INSERT INTO contacts (first_name, last_name, phone, email, address) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(&contact.address)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i32, contact: &NewContact) -> sqlx::Result<Option<Contact>> {
        sqlx::query_as::<_, Contact>(&format!(
            "UPDATE contacts SET \
             first_name = $2, last_name = $3, phone = $4, email = $5, address = $6, \
             updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(&contact.address)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i32) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await
    }
}
