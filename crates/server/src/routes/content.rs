//! CRUD handlers shared by every list collection.
//!
//! One generic set of handlers is mounted per collection under
//! `/api/{name}` and `/api/{name}/:id`, each with its own `CollectionService`
//! as router state.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use models::Record;
use service::{content::CollectionService, storage::Collection};

use crate::errors::JsonApiError;
use crate::observability::record_mutation;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// `sort=step` lists by ordinal instead of newest first.
    #[serde(default)]
    pub sort: Option<String>,
}

/// Router for one collection: list/create on the base path, get/update/delete by id.
pub fn routes<T, S>(svc: CollectionService<T>) -> Router<S>
where
    T: Collection,
    S: Clone + Send + Sync + 'static,
{
    let base = format!("/api/{}", T::NAME);
    Router::new()
        .route(&base, get(list::<T>).post(create::<T>))
        .route(&format!("{base}/:id"), get(get_one::<T>).put(update::<T>).delete(delete::<T>))
        .with_state(svc)
}

pub async fn list<T: Collection>(
    State(svc): State<CollectionService<T>>,
    Query(q): Query<ListQuery>,
) -> Json<Vec<Record<T>>> {
    let items = match q.sort.as_deref() {
        Some("step") => svc.list_ordered().await,
        _ => svc.list().await,
    };
    Json(items)
}

pub async fn get_one<T: Collection>(
    State(svc): State<CollectionService<T>>,
    Path(id): Path<String>,
) -> Result<Json<Record<T>>, JsonApiError> {
    Ok(Json(svc.get(&id).await?))
}

pub async fn create<T: Collection>(
    State(svc): State<CollectionService<T>>,
    Json(body): Json<T>,
) -> Result<(StatusCode, Json<Record<T>>), JsonApiError> {
    let rec = svc.create(body).await?;
    record_mutation(T::NAME, "create");
    info!(collection = T::NAME, id = %rec.id, "api create");
    Ok((StatusCode::CREATED, Json(rec)))
}

pub async fn update<T: Collection>(
    State(svc): State<CollectionService<T>>,
    Path(id): Path<String>,
    Json(body): Json<T>,
) -> Result<Json<Record<T>>, JsonApiError> {
    let rec = svc.update(&id, body).await?;
    record_mutation(T::NAME, "update");
    info!(collection = T::NAME, id = %rec.id, "api update");
    Ok(Json(rec))
}

pub async fn delete<T: Collection>(
    State(svc): State<CollectionService<T>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    svc.delete(&id).await?;
    record_mutation(T::NAME, "delete");
    info!(collection = T::NAME, %id, "api delete");
    Ok(Json(json!({ "message": format!("{} deleted successfully", T::NAME) })))
}
