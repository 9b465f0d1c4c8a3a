use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::{Path, PathBuf};
use tokio::fs;

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<OrmConn> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Executes the SQL files in `dir` in filename order, skipping files already
/// recorded in `schema_migrations`.
pub async fn run_migrations(conn: &OrmConn, dir: impl AsRef<Path>) -> Result<usize> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(
        backend,
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );",
    ))
    .await?;

    let mut entries = fs::read_dir(dir.as_ref()).await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let mut applied = 0;
    for file in files {
        let version = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let seen = conn
            .query_one(Statement::from_sql_and_values(
                backend,
                "SELECT version FROM schema_migrations WHERE version = $1",
                [version.clone().into()],
            ))
            .await?;
        if seen.is_some() {
            continue;
        }

        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in split_statements(&sql) {
            conn.execute(Statement::from_string(backend, stmt)).await?;
        }

        conn.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO schema_migrations (version) VALUES ($1)",
            [version.clone().into()],
        ))
        .await?;
        tracing::info!(%version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}

/// Splits a migration script on `;`, dropping blank fragments.
pub fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .map(|stmt| format!("{stmt};"))
        .collect()
}

/// Round-trips a trivial query; used by the readiness check.
pub async fn ping(conn: &OrmConn) -> Result<(), sea_orm::DbErr> {
    conn.ping().await
}
