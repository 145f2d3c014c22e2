//! HTTP-level integration tests for the `/api/objects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_object(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/objects", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn bulbasaur() -> serde_json::Value {
    json!({
        "identifier": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "is_default": true
    })
}

async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_returns_201_with_mapped_object(pool: PgPool) {
    let json = create_object(&pool, bulbasaur()).await;

    assert!(json["id"].is_number());
    assert_eq!(json["identifier"], "bulbasaur");
    assert_eq!(json["height"], 7);
    assert_eq!(json["weight"], 69);
    assert_eq!(json["base_experience"], 64);
    assert_eq!(json["is_default"], true);
    assert!(json["color"].is_null());
    assert!(json["shape_id"].is_null());
    assert!(json["generation_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_resolves_color_and_shape_identifiers(pool: PgPool) {
    let json = create_object(
        &pool,
        json!({"identifier": "squirtle", "color_id": 2, "shape_id": 6, "generation_id": 1}),
    )
    .await;

    assert_eq!(json["color"], "blue");
    assert_eq!(json["shape_id"], "upright");
    assert_eq!(json["generation_id"], 1);
    assert!(json.get("color_id").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_returns_same_payload_as_create(pool: PgPool) {
    let created = create_object(&pool, bulbasaur()).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/objects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/objects/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_unknown_color_returns_422_and_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/objects",
        json!({"identifier": "glitch", "color_id": 9999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    assert_eq!(count_rows(&pool, "pokemon_species").await, 0);
    assert_eq!(count_rows(&pool, "pokemon").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_without_identifier_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/objects", json!({"height": 7})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_scenario_keeps_unset_species_fields(pool: PgPool) {
    let created = create_object(&pool, bulbasaur()).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/objects/{id}"),
        json!({
            "identifier": "bulbasaur",
            "height": 8,
            "weight": 69,
            "base_experience": 64,
            "is_default": true,
            "generation_id": null,
            "color_id": null,
            "capture_rate": null
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["height"], 8);
    assert!(json["generation_id"].is_null());
    assert!(json["color"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_nulls_keeps_species_but_replaces_pokemon_fields(pool: PgPool) {
    let created = create_object(
        &pool,
        json!({
            "identifier": "charmander",
            "generation_id": 1,
            "color_id": 8,
            "capture_rate": 45,
            "height": 6,
            "weight": 85,
            "base_experience": 62
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Only the identifier is given: pokemon fields fall back to their defaults.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/objects/{id}"),
        json!({"identifier": "charmander"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["generation_id"], 1);
    assert_eq!(json["color"], "red");
    assert_eq!(json["capture_rate"], 45);
    assert_eq!(json["height"], 0);
    assert_eq!(json["weight"], 0);
    assert_eq!(json["base_experience"], 0);
    assert_eq!(json["is_default"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_response_matches_get(pool: PgPool) {
    let created = create_object(&pool, bulbasaur()).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/objects/{id}"),
        json!({"identifier": "ivysaur", "color_id": 5, "shape_id": 8, "height": 10}),
    )
    .await;
    let updated = body_json(response).await;
    assert_eq!(updated["identifier"], "ivysaur");
    assert_eq!(updated["color"], "green");
    assert_eq!(updated["shape_id"], "quadruped");

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/objects/{id}")).await).await;
    assert_eq!(updated, fetched);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/objects/999999", json!({"identifier": "ghost"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_unknown_shape_returns_422(pool: PgPool) {
    let created = create_object(&pool, bulbasaur()).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/objects/{id}"),
        json!({"identifier": "bulbasaur", "shape_id": 9999, "height": 99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/objects/{id}")).await).await;
    assert_eq!(fetched, created);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_returns_204_and_retains_species(pool: PgPool) {
    let created = create_object(&pool, bulbasaur()).await;
    let id = created["id"].as_i64().unwrap() as i32;

    sqlx::query(
        "INSERT INTO pokemon_types (pokemon_id, type_id, slot) VALUES ($1, 12, 1), ($1, 4, 2)",
    )
    .bind(id)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/objects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/objects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(count_rows(&pool, "pokemon_types").await, 0);
    assert_eq!(count_rows(&pool, "pokemon_species").await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/objects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// List / pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_defaults_on_empty_catalogue(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/objects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["items"], json!([]));
    assert_eq!(json["total"], 0);
    assert_eq!(json["page"], 1);
    assert_eq!(json["size"], 20);
    assert_eq!(json["pages"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_paginates_in_id_order(pool: PgPool) {
    let mut ids = Vec::new();
    for name in ["bulbasaur", "ivysaur", "venusaur"] {
        let created = create_object(&pool, json!({"identifier": name})).await;
        ids.push(created["id"].as_i64().unwrap());
    }

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/api/objects?page=1&size=2").await).await;
    assert_eq!(first["total"], 3);
    assert_eq!(first["pages"], 2);
    let first_ids: Vec<i64> = first["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(first_ids, ids[0..2].to_vec());

    let app = common::build_test_app(pool);
    let second = body_json(get(app, "/api/objects?page=2&size=2").await).await;
    assert_eq!(second["page"], 2);
    assert_eq!(second["items"].as_array().unwrap().len(), 1);
    assert_eq!(second["items"][0]["identifier"], "venusaur");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_rejects_invalid_pagination_params(pool: PgPool) {
    for query in ["page=0", "size=0", "page=-3", "size=abc", "page=1.5"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/objects?{query}")).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "query {query} should be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_lookup_tables_are_seeded(pool: PgPool) {
    assert_eq!(count_rows(&pool, "pokemon_colors").await, 10);
    assert_eq!(count_rows(&pool, "pokemon_shapes").await, 14);
    assert_eq!(count_rows(&pool, "types").await, 18);
}
