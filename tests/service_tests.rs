use proptest::prelude::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

use lang_portal_backend::db::{migrate, seed};
use lang_portal_backend::service::StudyService;

mod common;

async fn setup_service() -> (StudyService, TempDir) {
    setup_service_with_threshold(3).await
}

async fn setup_service_with_threshold(mastery_threshold: u32) -> (StudyService, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let db = common::connect_temp_db(&temp_dir).await;

    migrate::run_migrations(db.pool())
        .await
        .expect("migration failed");
    seed::seed(db.pool()).await.expect("seed failed");

    (StudyService::new(db, mastery_threshold), temp_dir)
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!(r#"SELECT COUNT(*) FROM "{table}""#))
        .fetch_one(pool)
        .await
        .expect("count query failed")
}

#[tokio::test]
async fn seed_inserts_canonical_rows() {
    let (service, _dir) = setup_service().await;
    let pool = service.db().pool();

    assert_eq!(count(pool, "words").await, 1);
    assert_eq!(count(pool, "groups").await, 1);
    assert_eq!(count(pool, "study_sessions").await, 1);
    assert_eq!(count(pool, "study_activities").await, 1);
    assert_eq!(count(pool, "word_review_items").await, 1);
    assert_eq!(count(pool, "word_groups").await, 0);

    let word = service.get_word(1).await.unwrap();
    assert_eq!(word.japanese, "こんにちは");
    assert_eq!(word.romaji, "konnichiwa");
    assert_eq!(word.english, "hello");
    assert!(word.parts.is_none());

    // The seeded session and activity back-reference each other.
    let session = service.get_study_session(1).await.unwrap();
    assert_eq!(session.study_activity_id, 1);
    let activity = service.get_study_activity(1).await.unwrap();
    assert_eq!(activity.study_session_id, 1);
}

#[tokio::test]
async fn migrations_run_twice_without_reapplying() {
    let temp_dir = TempDir::new().unwrap();
    let db = common::connect_temp_db(&temp_dir).await;

    migrate::run_migrations(db.pool()).await.unwrap();
    migrate::run_migrations(db.pool()).await.unwrap();

    let applied: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "_migrations""#)
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);
}

#[tokio::test]
async fn reset_history_preserves_vocabulary_and_sessions() {
    let (service, _dir) = setup_service().await;
    let pool = service.db().pool();

    service.reset_history().await.unwrap();

    assert_eq!(count(pool, "word_review_items").await, 0);
    assert_eq!(count(pool, "words").await, 1);
    assert_eq!(count(pool, "groups").await, 1);
    assert_eq!(count(pool, "study_sessions").await, 1);
    assert_eq!(count(pool, "study_activities").await, 1);
}

#[tokio::test]
async fn full_reset_discards_mutations_and_reseeds() {
    let (service, _dir) = setup_service().await;
    let pool = service.db().pool();

    service
        .create_word("さようなら", "sayounara", "goodbye", None)
        .await
        .unwrap();
    service.create_group("Numbers").await.unwrap();
    service.add_word_to_group(1, 1).await.unwrap();

    service.full_reset().await.unwrap();

    assert_eq!(count(pool, "words").await, 1);
    assert_eq!(count(pool, "groups").await, 1);
    assert_eq!(count(pool, "word_groups").await, 0);
    assert_eq!(count(pool, "word_review_items").await, 1);

    // Autoincrement counters restart, so the seed rows get id 1 again.
    let words = service.list_words().await.unwrap();
    assert_eq!(words[0].id, 1);
    let groups = service.list_groups().await.unwrap();
    assert_eq!(groups[0].name, "Basic Greetings");
}

#[tokio::test]
async fn repeated_review_replaces_outcome_in_place() {
    let (service, _dir) = setup_service().await;
    let pool = service.db().pool();

    service.review_word(1, 1, true).await.unwrap();
    service.review_word(1, 1, false).await.unwrap();

    assert_eq!(count(pool, "word_review_items").await, 1);

    let correct: bool = sqlx::query_scalar(
        r#"SELECT "correct" FROM "word_review_items" WHERE "word_id" = 1 AND "study_session_id" = 1"#,
    )
    .fetch_one(pool)
    .await
    .unwrap();
    assert!(!correct);
}

#[tokio::test]
async fn review_requires_existing_session_and_word() {
    let (service, _dir) = setup_service().await;

    let err = service.review_word(42, 1, true).await.unwrap_err();
    assert!(err.is_not_found());

    let err = service.review_word(1, 42, true).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn study_progress_counts_distinct_studied_words() {
    let (service, _dir) = setup_service().await;

    service
        .create_word("さようなら", "sayounara", "goodbye", None)
        .await
        .unwrap();
    service
        .create_word("はい", "hai", "yes", None)
        .await
        .unwrap();

    // Word 1 reviewed in two sessions still counts once.
    let session = service.create_study_session(1, 1).await.unwrap();
    service.review_word(session.id, 1, true).await.unwrap();
    service.review_word(session.id, 2, false).await.unwrap();

    let progress = service.dashboard_study_progress().await.unwrap();
    assert_eq!(progress.total_words_studied, 2);
    assert_eq!(progress.total_available_words, 3);
    assert!(progress.total_words_studied <= progress.total_available_words);
}

#[tokio::test]
async fn quick_stats_accuracy_is_zero_without_reviews() {
    let (service, _dir) = setup_service().await;

    service.reset_history().await.unwrap();

    let stats = service.dashboard_quick_stats().await.unwrap();
    assert_eq!(stats.total_words, 1);
    assert_eq!(stats.total_groups, 1);
    assert_eq!(stats.words_mastered, 0);
    assert_eq!(stats.recent_accuracy, 0.0);
}

#[tokio::test]
async fn words_mastered_respects_threshold() {
    let (service, _dir) = setup_service_with_threshold(3).await;

    // Seed already holds one correct review for word 1 in session 1; two
    // more correct reviews in fresh sessions reach the threshold of 3.
    for _ in 0..2 {
        let session = service.create_study_session(1, 1).await.unwrap();
        service.review_word(session.id, 1, true).await.unwrap();
    }

    let stats = service.dashboard_quick_stats().await.unwrap();
    assert_eq!(stats.words_mastered, 1);

    // An incorrect review in yet another session does not count toward it.
    service
        .create_word("いいえ", "iie", "no", None)
        .await
        .unwrap();
    let session = service.create_study_session(1, 1).await.unwrap();
    service.review_word(session.id, 2, false).await.unwrap();

    let stats = service.dashboard_quick_stats().await.unwrap();
    assert_eq!(stats.words_mastered, 1);
}

#[tokio::test]
async fn deleting_word_cascades_memberships_and_reviews() {
    let (service, _dir) = setup_service().await;
    let pool = service.db().pool();

    service.add_word_to_group(1, 1).await.unwrap();
    assert_eq!(count(pool, "word_groups").await, 1);
    assert_eq!(count(pool, "word_review_items").await, 1);

    service.delete_word(1).await.unwrap();

    assert_eq!(count(pool, "word_groups").await, 0);
    assert_eq!(count(pool, "word_review_items").await, 0);
}

#[tokio::test]
async fn deleting_group_orphans_its_sessions() {
    let (service, _dir) = setup_service().await;
    let pool = service.db().pool();

    service.add_word_to_group(1, 1).await.unwrap();
    service.delete_group(1).await.unwrap();

    // Memberships cascade; session and activity history survives.
    assert_eq!(count(pool, "word_groups").await, 0);
    assert_eq!(count(pool, "study_sessions").await, 1);
    assert_eq!(count(pool, "study_activities").await, 1);

    let session = service.get_study_session(1).await.unwrap();
    assert_eq!(session.group_id, 1);
}

#[tokio::test]
async fn last_study_session_prefers_newest() {
    let (service, _dir) = setup_service().await;

    let newer = service.create_study_session(1, 1).await.unwrap();

    let last = service.dashboard_last_study_session().await.unwrap();
    assert_eq!(last.id, newer.id);
    assert_eq!(last.group_name, "Basic Greetings");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// recent_accuracy is always 100 * correct / total over the recorded
    /// outcomes, regardless of how they are distributed across sessions.
    #[test]
    fn recent_accuracy_matches_outcome_ratio(outcomes in proptest::collection::vec(any::<bool>(), 1..10)) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let (service, _dir) = setup_service().await;
            service.reset_history().await.unwrap();

            for &correct in &outcomes {
                let session = service.create_study_session(1, 1).await.unwrap();
                service.review_word(session.id, 1, correct).await.unwrap();
            }

            let stats = service.dashboard_quick_stats().await.unwrap();
            let correct_count = outcomes.iter().filter(|&&c| c).count() as f64;
            let expected = correct_count / outcomes.len() as f64 * 100.0;
            assert!((stats.recent_accuracy - expected).abs() < 1e-9);
        });
    }
}
