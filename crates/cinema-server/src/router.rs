use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::api;
use crate::config::ServerConfig;
use cinema_db::AppState;

#[derive(Serialize)]
struct ApiStatus {
    status: &'static str,
    version: &'static str,
}

/// Build the full application router.
///
/// Collection routes answer both with and without the trailing slash.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let movies = get(api::movies::list_movies).post(api::movies::create_movie);
    let directors = get(api::directors::list_directors);
    let genres = get(api::genres::list_genres);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/movies", movies.clone())
        .route("/movies/", movies)
        .route("/movies/{id}", get(api::movies::get_movie))
        .route("/directors", directors.clone())
        .route("/directors/", directors)
        .route("/directors/{id}", get(api::directors::get_director))
        .route("/genres", genres.clone())
        .route("/genres/", genres)
        .route("/genres/{id}", get(api::genres::get_genre))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        tracing::info!("CORS allowed origins: {:?}", origins);
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn healthz() -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
