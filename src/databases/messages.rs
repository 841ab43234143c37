use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Inserts one message. The store assigns `timestamp` via the column
/// default; callers are responsible for rejecting empty content first.
pub async fn save_message(pool: &SqlitePool, content: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO messages (content) VALUES (?)")
        .bind(content)
        .execute(pool)
        .await?;

    Ok(())
}

/// Messages from the last `window_minutes`, newest first. The window is
/// evaluated by SQLite against the same UTC clock that assigned the
/// timestamps, so stored and cutoff values compare in one format.
pub async fn recent_messages(
    pool: &SqlitePool,
    window_minutes: i64,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        "SELECT id, content, timestamp
         FROM messages
         WHERE timestamp >= datetime('now', '-' || ? || ' minutes')
         ORDER BY timestamp DESC",
    )
    .bind(window_minutes)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::databases::setup_test_pool;

    async fn insert_with_age(pool: &SqlitePool, content: &str, minutes_ago: i64) {
        sqlx::query(
            "INSERT INTO messages (content, timestamp)
             VALUES (?, datetime('now', '-' || ? || ' minutes'))",
        )
        .bind(content)
        .bind(minutes_ago)
        .execute(pool)
        .await
        .expect("failed to insert test row");
    }

    #[tokio::test]
    async fn recent_is_empty_on_fresh_database() {
        let pool = setup_test_pool().await;

        let rows = recent_messages(&pool, 30).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn save_assigns_a_current_timestamp() {
        let pool = setup_test_pool().await;

        save_message(&pool, "hello").await.unwrap();

        let rows = recent_messages(&pool, 30).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content, "hello");

        let age = Utc::now() - rows[0].timestamp;
        assert!(age.num_seconds().abs() < 5, "timestamp too far from now: {age:?}");
    }

    #[tokio::test]
    async fn recent_excludes_rows_older_than_the_window() {
        let pool = setup_test_pool().await;

        insert_with_age(&pool, "stale", 40).await;
        save_message(&pool, "fresh").await.unwrap();

        let rows = recent_messages(&pool, 30).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content, "fresh");
    }

    #[tokio::test]
    async fn recent_sorts_newest_first() {
        let pool = setup_test_pool().await;

        insert_with_age(&pool, "oldest", 20).await;
        insert_with_age(&pool, "middle", 10).await;
        insert_with_age(&pool, "newest", 1).await;

        let rows = recent_messages(&pool, 30).await.unwrap();
        let contents: Vec<&str> = rows.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn saved_content_is_kept_verbatim() {
        let pool = setup_test_pool().await;

        let raw = "  spaced   <b>and marked up</b>  ";
        save_message(&pool, raw).await.unwrap();

        let rows = recent_messages(&pool, 30).await.unwrap();
        assert_eq!(rows[0].content, raw);
    }
}
