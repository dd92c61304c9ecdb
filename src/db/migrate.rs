use sqlx::SqlitePool;

/// Migration scripts in apply order, embedded at compile time so the server
/// does not depend on its working directory to find them.
const MIGRATIONS: &[(&str, &str)] = &[("0001_init", include_str!("../../sql/0001_init.sql"))];

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrationError> {
    tracing::info!("running database migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "_migrations" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL UNIQUE,
            "applied_at" DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(MigrationError::Sqlx)?;

    let applied: Vec<String> =
        sqlx::query_scalar(r#"SELECT "name" FROM "_migrations" ORDER BY "id""#)
            .fetch_all(pool)
            .await
            .map_err(MigrationError::Sqlx)?;

    let mut applied_count = 0;

    for (name, sql) in MIGRATIONS {
        if applied.iter().any(|n| n == name) {
            tracing::debug!(migration = name, "already applied, skipping");
            continue;
        }

        tracing::info!(migration = name, "applying migration");

        // All-or-nothing: the script and its ledger row commit together.
        let mut tx = pool.begin().await.map_err(MigrationError::Sqlx)?;
        for stmt in split_sql_statements(sql) {
            sqlx::query(&stmt)
                .execute(&mut *tx)
                .await
                .map_err(|e| MigrationError::Migration {
                    name: name.to_string(),
                    source: e,
                })?;
        }
        sqlx::query(r#"INSERT INTO "_migrations" ("name") VALUES (?)"#)
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(MigrationError::Sqlx)?;
        tx.commit().await.map_err(MigrationError::Sqlx)?;

        applied_count += 1;
    }

    if applied_count > 0 {
        tracing::info!(count = applied_count, "database migrations completed");
    } else {
        tracing::info!("database is up to date, no migrations needed");
    }

    Ok(())
}

/// Splits a migration script into statements on `;`, ignoring semicolons
/// inside quoted strings, and strips comment-only lines.
pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for ch in sql.chars() {
        match ch {
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
            }
            ';' if !in_single_quote && !in_double_quote => {
                push_statement(&mut statements, &current);
                current.clear();
                continue;
            }
            _ => {}
        }

        current.push(ch);
    }

    push_statement(&mut statements, &current);
    statements
}

fn push_statement(statements: &mut Vec<String>, raw: &str) {
    let cleaned: String = raw
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");
    let trimmed = cleaned.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("migration '{name}' failed: {source}")]
    Migration {
        name: String,
        #[source]
        source: sqlx::Error,
    },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::split_sql_statements;

    #[test]
    fn splits_on_statement_boundaries() {
        let stmts = split_sql_statements("CREATE TABLE a (x INT);\nCREATE TABLE b (y INT);");
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].starts_with("CREATE TABLE a"));
    }

    #[test]
    fn ignores_semicolons_in_quotes() {
        let stmts = split_sql_statements("INSERT INTO t VALUES ('a;b');");
        assert_eq!(stmts.len(), 1);
        assert!(stmts[0].contains("'a;b'"));
    }

    #[test]
    fn drops_comment_lines_and_blanks() {
        let stmts = split_sql_statements("-- header\n\n-- only comments here\n;SELECT 1;");
        assert_eq!(stmts, vec!["SELECT 1".to_string()]);
    }
}
