//! Integration tests for the admin content-management API.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete, get, get_auth, post_json, put_json, reader_token, token_for,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Admin gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_routes_require_sign_in(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/novels").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_routes_reject_other_users(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/novels", &reader_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Signed in, but the provider shared no email.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/novels", &token_for("user_x", None)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_email_match_ignores_case(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/novels", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["items"], json!([]));
    assert_eq!(data["total"], 0);
}

// ---------------------------------------------------------------------------
// Novels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_novel_returns_slug_taxonomy_and_revalidate(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/novels",
        &admin_token(),
        json!({
            "title": "Sang Pencari!!",
            "author": "Ahmad",
            "description": "Kisah seorang pencari.",
            "status": "complete",
            "genres": ["Fantasy", "fantasy", " Adventure "],
            "tags": ["sihir", ""],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["slug"], "sang-pencari");
    assert_eq!(data["status"], "complete");
    assert_eq!(data["genres"].as_array().unwrap().len(), 2);
    assert_eq!(data["tags"][0]["name"], "sihir");

    let revalidate: Vec<&str> = json["revalidate"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(revalidate.contains(&"/"));
    assert!(revalidate.contains(&"/admin"));
    assert!(revalidate.contains(&"/novel/sang-pencari"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_title_twice_gets_distinct_slugs(pool: PgPool) {
    let first = common::create_novel(&pool, json!({ "title": "Hujan", "author": "A" })).await;
    let second = common::create_novel(&pool, json!({ "title": "Hujan", "author": "B" })).await;

    assert_eq!(first["slug"], "hujan");
    assert_ne!(first["slug"], second["slug"]);
    assert!(second["slug"].as_str().unwrap().starts_with("hujan-"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_novel_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/novels",
        &admin_token(),
        json!({ "title": "   ", "author": "Ahmad" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/novels",
        &admin_token(),
        json!({ "title": "Judul", "author": "Ahmad", "status": "paused" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_form_lists_statuses_and_predefined_genres(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Lentera", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/admin/novels/{id}"), &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["title"], "Lentera");
    assert_eq!(data["statuses"].as_array().unwrap().len(), 4);
    assert!(data["statuses"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["value"] == "dropped" && s["label"] == "Drop"));
    assert!(!data["predefined_genres"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_novel_replaces_taxonomy_and_keeps_slug(pool: PgPool) {
    let novel = common::create_novel(
        &pool,
        json!({ "title": "Lentera", "author": "A", "genres": ["Drama"], "tags": ["lama"] }),
    )
    .await;
    let id = novel["id"].as_i64().unwrap();
    common::create_chapter(&pool, id, 1, "Bab 1").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/admin/novels/{id}"),
        &admin_token(),
        json!({
            "title": "Lentera Baru",
            "author": "A",
            "status": "hiatus",
            "genres": ["Action"],
            "tags": [],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Lentera Baru");
    assert_eq!(json["data"]["slug"], "lentera");
    assert_eq!(json["data"]["status"], "hiatus");
    assert_eq!(json["data"]["genres"][0]["name"], "Action");
    assert_eq!(json["data"]["genres"].as_array().unwrap().len(), 1);
    assert!(json["data"]["tags"].as_array().unwrap().is_empty());
    assert!(json["revalidate"]
        .as_array()
        .unwrap()
        .contains(&json!("/novel/lentera/chapter-1")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_novel_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/admin/novels/999999",
        &admin_token(),
        json!({ "title": "Judul", "author": "A" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_novel_removes_it_and_its_chapters(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Hapus", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();
    let chapter = common::create_chapter(&pool, id, 1, "Bab 1").await;
    let chapter_id = chapter["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/admin/novels/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/novels/hapus").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response =
        get_auth(app, &format!("/api/v1/admin/chapters/{chapter_id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Chapters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn chapter_management_suggests_next_order(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Bab Bab", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        get_auth(app, &format!("/api/v1/admin/novels/{id}/chapters"), &admin_token()).await;
    assert_eq!(body_json(response).await["data"]["next_order"], 1);

    common::create_chapter(&pool, id, 1, "Bab 1").await;
    common::create_chapter(&pool, id, 4, "Bab 4").await;

    let app = common::build_test_app(pool);
    let response =
        get_auth(app, &format!("/api/v1/admin/novels/{id}/chapters"), &admin_token()).await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["next_order"], 5);
    assert_eq!(data["chapters"].as_array().unwrap().len(), 2);
    assert!(data["chapters"][0].get("content").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_chapter_accepts_string_order(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Urutan", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/admin/novels/{id}/chapters"),
        &admin_token(),
        json!({ "title": "Bab 2", "content": "Isi.", "order": "2" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["order"], 2);
    let revalidate = json["revalidate"].as_array().unwrap();
    assert!(revalidate.contains(&json!("/novel/urutan/chapter-2")));
    // Chapter counts on the listing pages change too.
    assert!(revalidate.contains(&json!("/")));
    assert!(revalidate.contains(&json!("/browse")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_chapter_rejects_non_numeric_order(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Urutan", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/admin/novels/{id}/chapters"),
        &admin_token(),
        json!({ "title": "Bab", "content": "Isi.", "order": "dua" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_chapter_order_returns_409(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Ganda", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();
    common::create_chapter(&pool, id, 1, "Bab 1").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/admin/novels/{id}/chapters"),
        &admin_token(),
        json!({ "title": "Bab 1 lagi", "content": "Isi.", "order": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn chapter_for_missing_novel_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/novels/424242/chapters",
        &admin_token(),
        json!({ "title": "Bab", "content": "Isi.", "order": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_chapter(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Ubah", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();
    common::create_chapter(&pool, id, 1, "Bab 1").await;
    let second = common::create_chapter(&pool, id, 2, "Bab 2").await;
    let chapter_id = second["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/admin/chapters/{chapter_id}"),
        &admin_token(),
        json!({ "title": "Bab Tiga", "content": "Isi baru.", "order": 3 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["order"], 3);
    let revalidate = json["revalidate"].as_array().unwrap();
    assert!(revalidate.contains(&json!("/novel/ubah/chapter-2")));
    assert!(revalidate.contains(&json!("/novel/ubah/chapter-3")));
    assert!(revalidate.contains(&json!("/novel/ubah/chapter-1")));
    assert!(revalidate.contains(&json!("/")));
    assert!(revalidate.contains(&json!("/browse")));

    let app = common::build_test_app(pool.clone());
    let response =
        delete(app, &format!("/api/v1/admin/chapters/{chapter_id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let revalidate = body_json(response).await["revalidate"].clone();
    assert!(revalidate.as_array().unwrap().contains(&json!("/")));
    assert!(revalidate.as_array().unwrap().contains(&json!("/browse")));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/novels/ubah/chapter-3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
