use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use cinema_db::entities::genre;
use cinema_db::repositories::GenreRepository;
use cinema_db::AppState;

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for GenreResponse {
    fn from(g: genre::Model) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}

/// GET /genres/
pub async fn list_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GenreResponse>>, ApiError> {
    let genres = GenreRepository::list(&state.db).await?;
    if genres.is_empty() {
        return Err(ApiError::NotFound(String::new()));
    }
    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

/// GET /genres/:id
pub async fn get_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<GenreResponse>, ApiError> {
    let genre = GenreRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("genre {id} not found")))?;
    Ok(Json(GenreResponse::from(genre)))
}
