use lentera_core::theme::Theme;
use lentera_db::repositories::UserPreferenceRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn theme_upsert_creates_then_updates(pool: PgPool) {
    assert!(UserPreferenceRepo::find_by_subject(&pool, "user_123")
        .await
        .unwrap()
        .is_none());

    let created = UserPreferenceRepo::upsert_theme(&pool, "user_123", Theme::Dark)
        .await
        .unwrap();
    assert_eq!(created.theme, "dark");

    let updated = UserPreferenceRepo::upsert_theme(&pool, "user_123", Theme::Light)
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.theme, "light");

    let stored = UserPreferenceRepo::find_by_subject(&pool, "user_123")
        .await
        .unwrap()
        .expect("preference row");
    assert_eq!(Theme::from_stored(Some(&stored.theme)), Theme::Light);
}
