use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use rolodex_shared::Contact;
use serde::Serialize;

use crate::service::ContactService;
use crate::store::{ContactStore, NewContact};
use crate::{app, AppState};

/// In-memory [`ContactStore`] so the whole HTTP surface can be exercised
/// without a database.
pub struct MemoryContactStore {
    contacts: Mutex<Vec<Contact>>,
    next_id: AtomicI32,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self {
            contacts: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn all(&self) -> sqlx::Result<Vec<Contact>> {
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn find(&self, id: i32) -> sqlx::Result<Option<Contact>> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> sqlx::Result<Option<Contact>> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.phone == phone)
            .cloned())
    }

    async fn search_by_name(&self, name: &str) -> sqlx::Result<Vec<Contact>> {
        let term = name.to_lowercase();
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| {
                c.first_name.to_lowercase().contains(&term)
                    || c.last_name
                        .as_deref()
                        .map(|l| l.to_lowercase().contains(&term))
                        .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    async fn insert(&self, contact: &NewContact) -> sqlx::Result<Contact> {
        let created = Contact {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            address: contact.address.clone(),
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.contacts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, contact: &NewContact) -> sqlx::Result<Option<Contact>> {
        let mut contacts = self.contacts.lock().unwrap();
        let Some(existing) = contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        existing.first_name = contact.first_name.clone();
        existing.last_name = contact.last_name.clone();
        existing.phone = contact.phone.clone();
        existing.email = contact.email.clone();
        existing.address = contact.address.clone();
        existing.updated_at = Some(Utc::now());
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i32) -> sqlx::Result<bool> {
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() < before)
    }

    async fn count(&self) -> sqlx::Result<i64> {
        Ok(self.contacts.lock().unwrap().len() as i64)
    }
}

/// Router backed by a fresh in-memory store.
pub fn test_app() -> Router {
    let store = Arc::new(MemoryContactStore::new());
    let state = Arc::new(AppState {
        service: ContactService::new(store),
    });
    app(state)
}

pub fn json_request(method: &str, uri: &str, body: &impl Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
