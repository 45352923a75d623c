use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::AppState;
use crate::entities::movie;
use crate::error::AppResult;
use crate::models::{CreateMovie, MovieWithFact, UpdateMovie};

/// GET /movies
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<MovieWithFact>>> {
    Ok(Json(state.service.list_all().await?))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieWithFact>> {
    Ok(Json(state.service.get(id).await?))
}

/// GET /movies/year/{year}
pub async fn list_by_year(
    State(state): State<AppState>,
    Path(year): Path<i16>,
) -> AppResult<Json<Vec<movie::Model>>> {
    Ok(Json(state.service.by_year(year).await?))
}

/// GET /movies/genre/{genre}
pub async fn list_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<Vec<movie::Model>>> {
    Ok(Json(state.service.by_genre(&genre).await?))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<Json<Value>> {
    state.service.create(input).await?;
    Ok(Json(json!({ "message": "Movie saved successfully" })))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateMovie>,
) -> AppResult<Json<Value>> {
    state.service.update(id, changes).await?;
    Ok(Json(json!({ "message": "Movie updated successfully" })))
}

/// DELETE /movies/{id}
pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Value>> {
    state.service.delete(id).await?;
    Ok(Json(json!({ "message": "Movie deleted successfully" })))
}
