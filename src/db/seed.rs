use sqlx::SqlitePool;

/// Tables in child-before-parent delete order.
pub const TABLES_CHILD_FIRST: &[&str] = &[
    "word_review_items",
    "study_activities",
    "study_sessions",
    "word_groups",
    "words",
    "groups",
];

/// Wipes all six tables and inserts the canonical starter dataset: one
/// group, one word, one session, one activity, one review item. Determinism
/// matters more than preservation here; callers that want to keep existing
/// data must not call this.
pub async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    wipe_all(pool).await?;

    sqlx::query(r#"INSERT INTO "groups" ("name") VALUES (?)"#)
        .bind("Basic Greetings")
        .execute(pool)
        .await?;

    sqlx::query(r#"INSERT INTO "words" ("japanese", "romaji", "english", "parts") VALUES (?, ?, ?, ?)"#)
        .bind("こんにちは")
        .bind("konnichiwa")
        .bind("hello")
        .bind(Option::<String>::None)
        .execute(pool)
        .await?;

    // Two-phase session/activity insert: the session must exist before the
    // activity can back-reference it, so the session starts with a
    // placeholder activity id and is patched afterwards.
    sqlx::query(
        r#"INSERT INTO "study_sessions" ("group_id", "study_activity_id", "created_at") VALUES (?, ?, CURRENT_TIMESTAMP)"#,
    )
    .bind(1_i64)
    .bind(0_i64)
    .execute(pool)
    .await?;

    sqlx::query(r#"INSERT INTO "study_activities" ("study_session_id", "group_id") VALUES (?, ?)"#)
        .bind(1_i64)
        .bind(1_i64)
        .execute(pool)
        .await?;

    sqlx::query(r#"UPDATE "study_sessions" SET "study_activity_id" = ? WHERE "id" = ?"#)
        .bind(1_i64)
        .bind(1_i64)
        .execute(pool)
        .await?;

    sqlx::query(
        r#"INSERT INTO "word_review_items" ("word_id", "study_session_id", "correct") VALUES (?, ?, ?)"#,
    )
    .bind(1_i64)
    .bind(1_i64)
    .bind(true)
    .execute(pool)
    .await?;

    tracing::info!("seeded canonical starter data");

    Ok(())
}

/// Deletes every row from every table and resets the autoincrement
/// counters so fresh inserts start at id 1 again.
pub async fn wipe_all(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in TABLES_CHILD_FIRST {
        sqlx::query(&format!(r#"DELETE FROM "{table}""#))
            .execute(pool)
            .await?;
    }

    // sqlite_sequence only exists once an AUTOINCREMENT table has been
    // written to; ignore the lookup error on a brand-new database.
    let _ = sqlx::query(r#"DELETE FROM "sqlite_sequence""#)
        .execute(pool)
        .await;

    Ok(())
}
