use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use models::hero::Hero;

use crate::errors::JsonApiError;
use crate::observability::record_mutation;
use crate::state::AppState;

// 尚未设置时返回空对象，前端据此走默认文案
fn hero_body(hero: Option<Hero>) -> Result<Json<Value>, JsonApiError> {
    let body = match hero {
        Some(h) => serde_json::to_value(h).map_err(|e| {
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read hero data", Some(e.to_string()))
        })?,
        None => json!({}),
    };
    Ok(Json(body))
}

#[utoipa::path(get, path = "/api/hero", tag = "content", responses((status = 200, description = "Hero content, or {} when never set", body = crate::openapi::HeroDoc)))]
pub async fn get(State(state): State<AppState>) -> Result<Json<Value>, JsonApiError> {
    hero_body(state.hero.get().await)
}

#[utoipa::path(put, path = "/api/hero", tag = "content", request_body = crate::openapi::HeroDoc, responses((status = 200, description = "Stored hero", body = crate::openapi::HeroDoc), (status = 500, description = "Write failed")))]
pub async fn replace(State(state): State<AppState>, Json(input): Json<Hero>) -> Result<Json<Value>, JsonApiError> {
    let stored = state.hero.replace(input).await?;
    record_mutation("hero", "replace");
    hero_body(stored)
}
