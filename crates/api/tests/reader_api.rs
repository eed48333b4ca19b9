//! Integration tests for the novel overview, the reader, and legacy
//! chapter addresses.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, location};
use serde_json::{json, Value};
use sqlx::PgPool;

/// A novel with chapters at orders 1, 2, 3, and 5.
async fn novel_with_gap(pool: &PgPool) -> (i64, Vec<Value>) {
    let novel = common::create_novel(
        pool,
        json!({ "title": "Cahaya di Ujung Terowongan", "author": "Lentera", "genres": ["Drama"] }),
    )
    .await;
    let id = novel["id"].as_i64().unwrap();

    let mut chapters = Vec::new();
    for order in [1, 2, 3, 5] {
        chapters.push(common::create_chapter(pool, id, order, &format!("Bab {order}")).await);
    }
    (id, chapters)
}

const SLUG: &str = "cahaya-di-ujung-terowongan";

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_lists_chapters_with_links(pool: PgPool) {
    novel_with_gap(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/novels/{SLUG}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["title"], "Cahaya di Ujung Terowongan");
    assert_eq!(data["status_label"], "On-going");
    assert_eq!(data["genres"][0]["name"], "Drama");
    assert_eq!(data["first_chapter_order"], 1);
    assert_eq!(data["chapters"].as_array().unwrap().len(), 4);
    assert_eq!(
        data["chapters"][3]["href"],
        format!("/novel/{SLUG}/chapter-5")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_without_chapters_has_no_first_order(pool: PgPool) {
    common::create_novel(&pool, json!({ "title": "Kosong", "author": "A" })).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/novels/kosong").await;

    let data = body_json(response).await["data"].clone();
    assert!(data["first_chapter_order"].is_null());
    assert!(data["chapters"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_novel_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/novels/tidak-ada").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reader_navigation_steps_over_gaps(pool: PgPool) {
    let (novel_id, chapters) = novel_with_gap(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/novels/{SLUG}/chapter-3")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["chapter"]["title"], "Bab 3");
    assert_eq!(data["chapter"]["content"], "Isi Bab 3.");
    assert_eq!(data["prev"]["order"], 2);
    assert_eq!(data["next"]["order"], 5);
    assert_eq!(data["next"]["href"], format!("/novel/{SLUG}/chapter-5"));

    let history = &data["history"];
    assert_eq!(history["novelId"], novel_id.to_string());
    assert_eq!(history["chapterId"], chapters[2]["id"].as_i64().unwrap().to_string());
    assert_eq!(history["chapterOrder"], 3);
    assert_eq!(history["chapterTitle"], "Bab 3");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_and_last_chapters_have_one_neighbour(pool: PgPool) {
    novel_with_gap(&pool).await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, &format!("/api/v1/novels/{SLUG}/chapter-1")).await).await;
    assert!(first["data"]["prev"].is_null());
    assert_eq!(first["data"]["next"]["order"], 2);

    let app = common::build_test_app(pool);
    let last = body_json(get(app, &format!("/api/v1/novels/{SLUG}/chapter-5")).await).await;
    assert_eq!(last["data"]["prev"]["order"], 3);
    assert!(last["data"]["next"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_chapter_order_returns_404(pool: PgPool) {
    novel_with_gap(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/novels/{SLUG}/chapter-4")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_chapter_segment_returns_400(pool: PgPool) {
    novel_with_gap(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/novels/{SLUG}/chapter-abc")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Legacy addresses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn chapter_id_segment_redirects_to_order(pool: PgPool) {
    let (_, chapters) = novel_with_gap(&pool).await;
    let chapter_id = chapters[3]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/novels/{SLUG}/{chapter_id}")).await;

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        location(&response),
        format!("/api/v1/novels/{SLUG}/chapter-5")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn legacy_chapter_path_redirects(pool: PgPool) {
    let (_, chapters) = novel_with_gap(&pool).await;
    let chapter_id = chapters[1]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/novels/{SLUG}/chapter/{chapter_id}")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), format!("/api/v1/novels/{SLUG}/chapter-2"));

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/novels/{SLUG}/chapter/chapter-3")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), format!("/api/v1/novels/{SLUG}/chapter-3"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn chapter_id_from_another_novel_returns_404(pool: PgPool) {
    novel_with_gap(&pool).await;
    let other = common::create_novel(&pool, json!({ "title": "Lain", "author": "A" })).await;
    let other_chapter =
        common::create_chapter(&pool, other["id"].as_i64().unwrap(), 1, "Bab Lain").await;
    let other_chapter_id = other_chapter["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/novels/{SLUG}/{other_chapter_id}")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn read_chapter_by_id_redirects_to_order(pool: PgPool) {
    let (_, chapters) = novel_with_gap(&pool).await;
    let chapter_id = chapters[2]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/read/chapter/{chapter_id}")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), format!("/api/v1/novels/{SLUG}/chapter-3"));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/read/chapter/987654").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn read_novel_by_id_redirects_to_first_chapter(pool: PgPool) {
    let (novel_id, _) = novel_with_gap(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/read/novel/{novel_id}")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), format!("/api/v1/novels/{SLUG}/chapter-1"));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/read/novel/987654").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn novel_and_chapter_ids_sharing_a_number_resolve_separately(pool: PgPool) {
    // Alpha gets novel id 1 and no chapters; Beta's first chapter gets chapter id 1.
    let alpha = common::create_novel(&pool, json!({ "title": "Alpha", "author": "A" })).await;
    let beta = common::create_novel(&pool, json!({ "title": "Beta", "author": "B" })).await;
    let chapter =
        common::create_chapter(&pool, beta["id"].as_i64().unwrap(), 1, "Bab Beta").await;
    let alpha_id = alpha["id"].as_i64().unwrap();
    let chapter_id = chapter["id"].as_i64().unwrap();
    assert_eq!(alpha_id, chapter_id);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/read/novel/{alpha_id}")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), "/api/v1/novels/alpha");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/read/chapter/{chapter_id}")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), "/api/v1/novels/beta/chapter-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn read_novel_by_id_for_empty_novel_redirects_to_overview(pool: PgPool) {
    let novel = common::create_novel(&pool, json!({ "title": "Kosong", "author": "A" })).await;
    let id = novel["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/read/novel/{id}")).await;

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&response), "/api/v1/novels/kosong");
}
