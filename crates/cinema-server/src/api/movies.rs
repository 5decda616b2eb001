use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use cinema_db::repositories::{MovieFilter, MovieRecord, MovieRepository, NewMovie};
use cinema_db::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub director_id: Option<i32>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub genre_id: Option<i32>,
}

impl From<MovieQuery> for MovieFilter {
    fn from(q: MovieQuery) -> Self {
        Self {
            director_id: q.director_id,
            genre_id: q.genre_id,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GenreNameResponse {
    pub name: Option<String>,
}

/// Public movie shape. The genre is nested, the director is flattened to its name.
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub rating: Option<f64>,
    pub genre: Option<GenreNameResponse>,
    pub director: Option<String>,
}

impl From<MovieRecord> for MovieResponse {
    fn from(r: MovieRecord) -> Self {
        Self {
            id: r.movie.id,
            title: r.movie.title,
            description: r.movie.description,
            trailer: r.movie.trailer,
            rating: r.movie.rating,
            genre: r.genre.map(|g| GenreNameResponse { name: g.name }),
            director: r.director.and_then(|d| d.name),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl CreateMovieRequest {
    /// Decode a raw request body. Missing, `null` and empty JSON bodies are
    /// rejected with an empty message. Fields only bind by name, so anything
    /// other than a JSON object is rejected.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::BadRequest(String::new()));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;

        match &value {
            Value::Null => return Err(ApiError::BadRequest(String::new())),
            Value::Array(items) if items.is_empty() => {
                return Err(ApiError::BadRequest(String::new()))
            }
            Value::Object(fields) if fields.is_empty() => {
                return Err(ApiError::BadRequest(String::new()))
            }
            Value::Object(_) => {}
            _ => {
                return Err(ApiError::BadRequest(
                    "movie body must be a JSON object".to_string(),
                ))
            }
        }

        serde_json::from_value(value)
            .map_err(|e| ApiError::BadRequest(format!("invalid movie: {e}")))
    }
}

impl From<CreateMovieRequest> for NewMovie {
    fn from(r: CreateMovieRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            trailer: r.trailer,
            year: r.year,
            rating: r.rating,
            genre_id: r.genre_id,
            director_id: r.director_id,
        }
    }
}

/// GET /movies/?director_id=&genre_id=
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MovieQuery>,
) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let filter = MovieFilter::from(query);
    let records = MovieRepository::list(&state.db, filter).await?;

    if records.is_empty() {
        tracing::debug!(?filter, "no movies matched");
        return Err(ApiError::NotFound(String::new()));
    }

    Ok(Json(records.into_iter().map(MovieResponse::from).collect()))
}

/// POST /movies/ — responds 201 with an empty body and a Location header
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request = CreateMovieRequest::parse(&body)?;
    let movie = MovieRepository::create(&state.db, request.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/movies/{}", movie.id))],
    ))
}

/// GET /movies/:id
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MovieResponse>, ApiError> {
    let record = MovieRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("movie {id} not found")))?;

    Ok(Json(MovieResponse::from(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_db::entities::{director, genre, movie};

    fn make_record() -> MovieRecord {
        MovieRecord {
            movie: movie::Model {
                id: 7,
                title: Some("Solaris".into()),
                description: Some("A psychologist visits a space station".into()),
                trailer: Some("https://example.com/solaris".into()),
                year: Some(1972),
                rating: Some(8.1),
                genre_id: Some(2),
                director_id: Some(3),
            },
            director: Some(director::Model {
                id: 3,
                name: Some("Andrei Tarkovsky".into()),
            }),
            genre: Some(genre::Model {
                id: 2,
                name: Some("Drama".into()),
            }),
        }
    }

    #[test]
    fn test_movie_response_from_record() {
        let resp = MovieResponse::from(make_record());
        assert_eq!(resp.id, 7);
        assert_eq!(resp.title.as_deref(), Some("Solaris"));
        assert_eq!(resp.rating, Some(8.1));
        assert_eq!(resp.director.as_deref(), Some("Andrei Tarkovsky"));
        assert_eq!(
            resp.genre,
            Some(GenreNameResponse {
                name: Some("Drama".into())
            })
        );
    }

    #[test]
    fn test_movie_response_serialization_shape() {
        let json = serde_json::to_value(MovieResponse::from(make_record())).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["description", "director", "genre", "id", "rating", "title", "trailer"]
        );
        assert_eq!(json["genre"], serde_json::json!({ "name": "Drama" }));
        assert_eq!(json["director"], "Andrei Tarkovsky");
    }

    #[test]
    fn test_movie_response_without_relations() {
        let mut record = make_record();
        record.director = None;
        record.genre = None;
        let json = serde_json::to_value(MovieResponse::from(record)).unwrap();
        assert!(json["genre"].is_null());
        assert!(json["director"].is_null());
    }

    #[test]
    fn test_movie_query_empty_value_is_absent() {
        let query: MovieQuery = serde_json::from_str(r#"{"director_id": "", "genre_id": "4"}"#).unwrap();
        assert_eq!(query.director_id, None);
        assert_eq!(query.genre_id, Some(4));
    }

    #[test]
    fn test_movie_query_rejects_non_integer() {
        let result: Result<MovieQuery, _> = serde_json::from_str(r#"{"director_id": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_body() {
        let bodies: [&[u8]; 5] = [b"", b"   ", b"null", b"{}", b"[]"];
        for body in bodies {
            let err = CreateMovieRequest::parse(body).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref m) if m.is_empty()));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = CreateMovieRequest::parse(br#"{"title": "x", "budget": 10}"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("budget"), "{err}");
    }

    #[test]
    fn test_parse_rejects_store_assigned_id() {
        let err = CreateMovieRequest::parse(br#"{"id": 1, "title": "x"}"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_rejects_non_object_body() {
        let bodies: [&[u8]; 3] = [
            br#"["Positional", "d", "t", 1999, 7.5, null, null]"#,
            b"42",
            br#""Alien""#,
        ];
        for body in bodies {
            let err = CreateMovieRequest::parse(body).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), "movie body must be a JSON object");
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = CreateMovieRequest::parse(b"{title").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON body"));
    }

    #[test]
    fn test_parse_accepts_subset() {
        let req = CreateMovieRequest::parse(br#"{"title": "Alien", "rating": 8.5, "director_id": 1}"#)
            .unwrap();
        let new_movie = NewMovie::from(req);
        assert_eq!(new_movie.title.as_deref(), Some("Alien"));
        assert_eq!(new_movie.rating, Some(8.5));
        assert_eq!(new_movie.director_id, Some(1));
        assert_eq!(new_movie.genre_id, None);
        assert_eq!(new_movie.year, None);
    }
}
