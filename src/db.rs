use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Opens the database at `url`, creating the file if needed, and brings the
/// schema up to date.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    // SQLite creates the file but not the directory holding it.
    if let Some(dir) = options.get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir).await?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// A private in-memory database. Each connection would get its own empty
/// database, so the pool is pinned to a single connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_creates_the_missing_data_dir() {
        let root = std::env::temp_dir().join(format!("jugador-equipo-{}", std::process::id()));
        let file = root.join("nested").join("test.db");
        let url = format!("sqlite://{}", file.display());

        let pool = connect(&url).await.unwrap();
        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('equipo', 'jugador') ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();
        pool.close().await;

        assert!(file.exists());
        assert_eq!(tables, vec![("equipo".to_string(),), ("jugador".to_string(),)]);
        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
