mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{add_director, add_genre, test_app_state, test_server};

#[tokio::test]
async fn test_directors_empty_is_not_found() {
    let server = test_server(test_app_state().await);
    let resp = server.get("/directors/").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert!(resp.text().is_empty());
}

#[tokio::test]
async fn test_directors_list_and_lookup() {
    let state = test_app_state().await;
    let varda = add_director(&state.db, "Agnès Varda").await;
    let ozu = add_director(&state.db, "Yasujirō Ozu").await;
    let server = test_server(state);

    let body: Value = server.get("/directors").await.json();
    assert_eq!(
        body,
        json!([
            { "id": varda, "name": "Agnès Varda" },
            { "id": ozu, "name": "Yasujirō Ozu" }
        ])
    );

    let one: Value = server.get(&format!("/directors/{ozu}")).await.json();
    assert_eq!(one, json!({ "id": ozu, "name": "Yasujirō Ozu" }));

    let missing = server.get("/directors/999").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(missing.text(), "director 999 not found");
}

#[tokio::test]
async fn test_genres_list_and_lookup() {
    let state = test_app_state().await;
    let western = add_genre(&state.db, "Western").await;
    let server = test_server(state);

    let body: Value = server.get("/genres/").await.json();
    assert_eq!(body, json!([{ "id": western, "name": "Western" }]));

    let one: Value = server.get(&format!("/genres/{western}")).await.json();
    assert_eq!(one["name"], "Western");

    let missing = server.get("/genres/31").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(missing.text(), "genre 31 not found");
}

#[tokio::test]
async fn test_genres_empty_is_not_found() {
    let server = test_server(test_app_state().await);
    server
        .get("/genres/")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_healthz_reports_ok() {
    let server = test_server(test_app_state().await);
    let body: Value = server.get("/healthz").await.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
