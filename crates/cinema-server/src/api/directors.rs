use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use cinema_db::entities::director;
use cinema_db::repositories::DirectorRepository;
use cinema_db::AppState;

#[derive(Debug, Serialize)]
pub struct DirectorResponse {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for DirectorResponse {
    fn from(d: director::Model) -> Self {
        Self {
            id: d.id,
            name: d.name,
        }
    }
}

/// GET /directors/
pub async fn list_directors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DirectorResponse>>, ApiError> {
    let directors = DirectorRepository::list(&state.db).await?;
    if directors.is_empty() {
        return Err(ApiError::NotFound(String::new()));
    }
    Ok(Json(directors.into_iter().map(DirectorResponse::from).collect()))
}

/// GET /directors/:id
pub async fn get_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DirectorResponse>, ApiError> {
    let director = DirectorRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("director {id} not found")))?;
    Ok(Json(DirectorResponse::from(director)))
}
