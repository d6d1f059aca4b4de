// API service layer for communicating with the backend
use gloo_net::http::{Request, Response};
use rolodex_shared::ErrorBody;
use serde::{de::DeserializeOwned, Serialize};

const API_BASE_URL: &str = "http://localhost:7000/api";

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    async fn handle<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            // Non-2xx bodies are `{"error": "..."}`; surface that message
            let status = response.status();
            let error = match response.json::<ErrorBody>().await {
                Ok(body) => ApiError {
                    message: body.error,
                    code: Some(format!("HTTP_{}", status)),
                },
                Err(_) => ApiError {
                    message: format!("HTTP Error: {}", status),
                    code: Some(format!("HTTP_{}", status)),
                },
            };
            Err(error)
        }
    }

    fn network_error(e: gloo_net::Error) -> ApiError {
        ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        }
    }

    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);
        let response = Request::put(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle(response).await
    }

    pub async fn delete<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle(response).await
    }
}

// ============================================
// CONTACTS SERVICE
// ============================================

pub mod contacts {
    use super::*;
    use rolodex_shared::{Contact, ContactPayload, MessageBody};

    pub async fn list() -> ApiResult<Vec<Contact>> {
        ApiClient::get("/contacts").await
    }

    pub async fn create(contact: &ContactPayload) -> ApiResult<Contact> {
        ApiClient::post("/contacts", contact).await
    }

    pub async fn update(id: i32, contact: &ContactPayload) -> ApiResult<Contact> {
        ApiClient::put(&format!("/contacts/{}", id), contact).await
    }

    pub async fn delete(id: i32) -> ApiResult<MessageBody> {
        ApiClient::delete(&format!("/contacts/{}", id)).await
    }
}
