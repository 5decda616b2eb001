// Shared test utilities for integration tests
#![allow(dead_code)]

use axum_test::TestServer;
use cinema_db::entities::{director, genre};
use cinema_db::{AppState, DatabaseConfig};
use cinema_migration::{Migrator, MigratorTrait};
use cinema_server::{config::ServerConfig, router};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

/// Create a test AppState backed by a migrated in-memory SQLite database
pub async fn test_app_state() -> Arc<AppState> {
    let db = cinema_db::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    Arc::new(AppState::new(db))
}

pub fn test_server(state: Arc<AppState>) -> TestServer {
    TestServer::new(router::build_router(state, &ServerConfig::default()))
        .expect("test server")
}

pub async fn add_director(db: &DatabaseConnection, name: &str) -> i32 {
    director::ActiveModel {
        name: Set(Some(name.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert director")
    .id
}

pub async fn add_genre(db: &DatabaseConnection, name: &str) -> i32 {
    genre::ActiveModel {
        name: Set(Some(name.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert genre")
    .id
}
