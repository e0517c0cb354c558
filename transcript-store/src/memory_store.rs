//! In-memory transcript store: a map guarded by an async RwLock. Used in tests
//! and when running without a database file.

use crate::error::StoreError;
use crate::store::TranscriptStore;
use async_trait::async_trait;
use gembot_core::Transcript;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// HashMap-backed store keyed by (user_id, chat_id). Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryTranscriptStore {
    transcripts: RwLock<HashMap<(i64, i64), Transcript>>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn load(&self, user_id: i64, chat_id: i64) -> Result<Transcript, StoreError> {
        Ok(self
            .transcripts
            .read()
            .await
            .get(&(user_id, chat_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn append_exchange(
        &self,
        user_id: i64,
        chat_id: i64,
        user_text: &str,
        model_text: &str,
    ) -> Result<(), StoreError> {
        let mut map = self.transcripts.write().await;
        map.entry((user_id, chat_id))
            .or_default()
            .push_exchange(user_text, model_text);
        Ok(())
    }

    async fn clear(&self, user_id: i64, chat_id: i64) -> Result<(), StoreError> {
        self.transcripts.write().await.remove(&(user_id, chat_id));
        Ok(())
    }
}
