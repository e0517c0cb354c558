//! SQLite transcript store: one row per turn, replayed in insertion order.
//!
//! Uses SqlitePoolManager; callers go through the [`TranscriptStore`] trait.

use crate::error::StoreError;
use crate::sqlite_pool::SqlitePoolManager;
use crate::store::TranscriptStore;
use async_trait::async_trait;
use chrono::Utc;
use gembot_core::{Role, Transcript, Turn};
use tracing::info;

#[derive(Clone)]
pub struct SqliteTranscriptStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteTranscriptStore {
    pub async fn new(database_path: &str) -> Result<Self, StoreError> {
        let pool_manager = SqlitePoolManager::new(database_path).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StoreError> {
        info!("Creating transcript tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS turns (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                chat_id INTEGER NOT NULL,
                role TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_turns_user_chat ON turns(user_id, chat_id)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TranscriptStore for SqliteTranscriptStore {
    async fn load(&self, user_id: i64, chat_id: i64) -> Result<Transcript, StoreError> {
        let pool = self.pool_manager.pool();

        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT role, content FROM turns WHERE user_id = ? AND chat_id = ? ORDER BY id",
        )
        .bind(user_id)
        .bind(chat_id)
        .fetch_all(pool)
        .await?;

        let mut turns = Vec::with_capacity(rows.len());
        for (role, content) in rows {
            let role = Role::parse(&role)
                .ok_or_else(|| StoreError::Corrupt(format!("unknown role: {}", role)))?;
            turns.push(Turn { role, text: content });
        }

        Ok(Transcript::from_turns(turns))
    }

    async fn append_exchange(
        &self,
        user_id: i64,
        chat_id: i64,
        user_text: &str,
        model_text: &str,
    ) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();
        let now = Utc::now();

        // Both turns land or neither; a half-written exchange would corrupt replay.
        let mut tx = pool.begin().await?;
        for (role, content) in [(Role::User, user_text), (Role::Model, model_text)] {
            sqlx::query(
                "INSERT INTO turns (user_id, chat_id, role, content, created_at) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(user_id)
            .bind(chat_id)
            .bind(role.as_str())
            .bind(content)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        info!(user_id, chat_id, "Saved exchange (two turns)");
        Ok(())
    }

    async fn clear(&self, user_id: i64, chat_id: i64) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM turns WHERE user_id = ? AND chat_id = ?")
            .bind(user_id)
            .bind(chat_id)
            .execute(pool)
            .await?;

        info!(
            user_id,
            chat_id,
            deleted = result.rows_affected(),
            "Cleared transcript"
        );
        Ok(())
    }
}
