use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use rolodex_shared::{Contact, ContactPayload, CountBody, MessageBody};

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

pub fn contact_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route("/search", get(search_contacts))
        .route("/count", get(count_contacts))
        .route(
            "/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

async fn list_contacts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Contact>>> {
    Ok(Json(state.service.list().await?))
}

async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Contact>> {
    Ok(Json(state.service.get(id).await?))
}

async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let created = state.service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<Json<Contact>> {
    Ok(Json(state.service.update(id, &payload).await?))
}

async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageBody>> {
    state.service.delete(id).await?;
    Ok(Json(MessageBody {
        message: "Contact deleted successfully".to_string(),
    }))
}

async fn search_contacts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Contact>>> {
    Ok(Json(state.service.search(&params.name).await?))
}

async fn count_contacts(State(state): State<Arc<AppState>>) -> ApiResult<Json<CountBody>> {
    let count = state.service.count().await?;
    Ok(Json(CountBody { count }))
}
