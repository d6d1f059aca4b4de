//! Business rules for contact operations.
//!
//! The service validates and normalizes input before it reaches the store,
//! and turns store misses into the API's not-found errors. Handlers stay
//! thin; everything a test would want to pin down lives here.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use rolodex_shared::{Contact, ContactPayload};

use crate::error::{ApiResult, AppError};
use crate::store::{ContactStore, NewContact};

const MAX_NAME_LEN: usize = 50;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
    })
}

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> ApiResult<Vec<Contact>> {
        Ok(self.store.all().await?)
    }

    pub async fn get(&self, id: i32) -> ApiResult<Contact> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found_contact(id))
    }

    /// Name search is a no-op on a blank term; the store is not consulted.
    pub async fn search(&self, name: &str) -> ApiResult<Vec<Contact>> {
        let term = name.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.search_by_name(term).await?)
    }

    pub async fn create(&self, payload: &ContactPayload) -> ApiResult<Contact> {
        let contact = validate(payload)?;

        if self.store.find_by_phone(&contact.phone).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A contact with phone number {} already exists",
                contact.phone
            )));
        }

        let created = self.store.insert(&contact).await?;
        tracing::info!(id = created.id, "contact created");
        Ok(created)
    }

    pub async fn update(&self, id: i32, payload: &ContactPayload) -> ApiResult<Contact> {
        let contact = validate(payload)?;

        let updated = self
            .store
            .update(id, &contact)
            .await?
            .ok_or_else(|| AppError::not_found_contact(id))?;
        tracing::info!(id = updated.id, "contact updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> ApiResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::not_found_contact(id));
        }
        tracing::info!(id, "contact deleted");
        Ok(())
    }

    pub async fn count(&self) -> ApiResult<i64> {
        Ok(self.store.count().await?)
    }
}

/// Validate a payload and produce the normalized record to store: required
/// strings trimmed, blank optional fields collapsed to `None`.
fn validate(payload: &ContactPayload) -> Result<NewContact, AppError> {
    let first_name = payload.first_name.trim();
    if first_name.is_empty() {
        return Err(AppError::BadRequest("First name is required".into()));
    }
    if first_name.len() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "First name must be {} characters or less",
            MAX_NAME_LEN
        )));
    }

    let phone = payload.phone.trim();
    if phone.is_empty() {
        return Err(AppError::BadRequest("Phone number is required".into()));
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=15).contains(&digits) {
        return Err(AppError::BadRequest(
            "Phone number must be 10-15 digits".into(),
        ));
    }

    let email = normalize(&payload.email);
    if let Some(ref email) = email {
        if !email_regex().is_match(email) {
            return Err(AppError::BadRequest("Invalid email format".into()));
        }
    }

    Ok(NewContact {
        first_name: first_name.to_string(),
        last_name: normalize(&payload.last_name),
        phone: phone.to_string(),
        email,
        address: normalize(&payload.address),
    })
}

fn normalize(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
