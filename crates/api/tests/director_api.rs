//! HTTP-level integration tests for the director endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_director_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/director/", serde_json::json!({ "name": "Nolan" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Nolan");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_directors(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/director/", serde_json::json!({ "name": "D1" })).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/director/", serde_json::json!({ "name": "D2" })).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/director/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_director_by_id(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/director/", serde_json::json!({ "name": "Kubrick" })).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/director/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Kubrick");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_director_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/director/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_director_replaces_the_name(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/director/", serde_json::json!({ "name": "Nolan" })).await)
            .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/director/{id}"),
        serde_json::json!({ "name": "Christopher Nolan" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/director/{id}")).await).await;
    assert_eq!(json["name"], "Christopher Nolan");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_director_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/director/999999",
        serde_json::json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_director_with_missing_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/director/", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete policy: rejected while referenced
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_referenced_director_returns_409(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let director =
        body_json(post_json(app, "/director/", serde_json::json!({ "name": "Nolan" })).await)
            .await;
    let director_id = director["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let movie = body_json(
        post_json(
            app,
            "/movies/",
            serde_json::json!({ "title": "Inception", "director_id": director_id }),
        )
        .await,
    )
    .await;
    let movie_id = movie["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/director/{director_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    // Once the referencing movie is gone, the delete goes through.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/movies/{movie_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/director/{director_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/director/{director_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_nonexistent_director_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/director/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
