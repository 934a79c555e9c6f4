//! Route handlers. Each mutation is load, apply a domain op, save.
//!
//! The store serializes individual loads and saves, not the sequence. Two
//! concurrent mutations can load the same list, and the later save replaces
//! the earlier one: both `/add` calls may return 201 with the same ID while
//! only one item ends up on disk.

use askama::Template;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::{Deserialize, Serialize};
use todo_core::{Item, RequestContext, Status, ops};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Deserialize)]
pub struct GetQuery {
    pub id: Option<String>,
}

/// `GET /get` returns the whole list, `GET /get?id=N` a single item.
pub async fn get(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    query: Result<Query<GetQuery>, QueryRejection>,
) -> ApiResult<Json<serde_json::Value>> {
    let Query(query) = query?;
    let items = state.store.load(&ctx).await?;

    let raw = query.id.as_deref().map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(Json(to_value(&items)?));
    }
    let id = parse_id(raw)?;
    let item = ops::find_by_id(&items, id).ok_or(todo_core::CoreError::NotFound { id })?;
    Ok(Json(to_value(item)?))
}

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

pub async fn add(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Json<AddRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let Json(request) = body?;
    let status = request
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(Status::NotStarted.as_str());

    let mut items = state.store.load(&ctx).await?;
    let item = ops::add(&mut items, &request.description, status)?;
    state.store.save(&ctx, items).await?;

    tracing::info!(id = item.id, "to-do added");
    Ok((StatusCode::CREATED, Json(item)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Empty strings count as "not provided"; whitespace-only ones reach the
/// domain op and fail validation there.
pub async fn update(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Json(request) = body?;
    let id = require_id(request.id)?;
    let description = request.description.filter(|d| !d.is_empty());
    let status = request.status.filter(|s| !s.is_empty());
    if description.is_none() && status.is_none() {
        return Err(ApiError::bad_request(
            "nothing to update: provide description and/or status",
        ));
    }

    let mut items = state.store.load(&ctx).await?;
    if let Some(description) = description.as_deref() {
        ops::update_description(&mut items, id, description)?;
    }
    if let Some(status) = status.as_deref() {
        ops::update_status(&mut items, id, status)?;
    }
    let updated = ops::find_by_id(&items, id)
        .cloned()
        .ok_or(todo_core::CoreError::NotFound { id })?;
    state.store.save(&ctx, items).await?;

    tracing::info!(id, "to-do updated");
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: u64,
}

/// Responds `204 No Content` once the removal is persisted.
pub async fn delete(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = body?;
    let id = require_id(request.id)?;

    let mut items = state.store.load(&ctx).await?;
    ops::delete(&mut items, id)?;
    state.store.save(&ctx, items).await?;

    tracing::info!(id, "to-do deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /list` renders the list as a minimal HTML page.
pub async fn list(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Html<String>> {
    let items = state.store.load(&ctx).await?;
    Ok(Html(render_list(&items)?))
}

#[derive(Template)]
#[template(
    ext = "html",
    source = "<!doctype html><html><head><meta charset=\"utf-8\"><title>Todos</title></head>\
<body><h1>Todos</h1><ul>\
{% if items.is_empty() %}<li>none</li>{% endif %}\
{% for item in items %}<li>{{ item.id }} - {{ item.description }} - {{ item.status }}</li>{% endfor %}\
</ul></body></html>"
)]
struct ListPage<'a> {
    items: &'a [Item],
}

fn render_list(items: &[Item]) -> ApiResult<String> {
    Ok(ListPage { items }.render()?)
}

fn parse_id(raw: &str) -> ApiResult<u64> {
    let id = raw
        .parse::<u64>()
        .map_err(|_| ApiError::bad_request(format!("invalid id: {raw:?}")))?;
    require_id(id)
}

fn require_id(id: u64) -> ApiResult<u64> {
    if id == 0 {
        return Err(ApiError::bad_request("id is required and must be positive"));
    }
    Ok(id)
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::Store(todo_store::StoreError::Encode(e)))
}
