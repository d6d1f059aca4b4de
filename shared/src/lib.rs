use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact record as stored by the backend and rendered by the client.
///
/// The JSON contract uses camelCase field names (`firstName`, `createdAt`, …)
/// on both sides of the wire.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Full name as displayed and filtered: first name, a space, then the
    /// last name or nothing. The trailing space for a missing last name is
    /// intentional and matches the rendered table cell.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.as_deref().unwrap_or(""))
    }
}

/// Request body for creating or updating a contact.
///
/// `id` is absent from the serialized body on create and present on update.
/// The optional fields are always serialized, as explicit `null` when blank;
/// consumers never have to distinguish "missing" from "null".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Error response body: `{"error": "..."}` on every non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Success envelope for endpoints that have no entity to return (DELETE).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Response body of `GET /contacts/count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountBody {
    pub count: i64,
}
