//! The store trait: ordered load, two-turn append, clear. Keyed by (user, chat).

use crate::error::StoreError;
use async_trait::async_trait;
use gembot_core::Transcript;

/// Per-user transcript persistence. Implementations must preserve append order;
/// there are no other invariants.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Loads the transcript for (user, chat); empty when none exists.
    async fn load(&self, user_id: i64, chat_id: i64) -> Result<Transcript, StoreError>;

    /// Appends one successful exchange: the user turn, then the model turn.
    /// Both turns are written or neither.
    async fn append_exchange(
        &self,
        user_id: i64,
        chat_id: i64,
        user_text: &str,
        model_text: &str,
    ) -> Result<(), StoreError>;

    /// Removes every turn for (user, chat).
    async fn clear(&self, user_id: i64, chat_id: i64) -> Result<(), StoreError>;
}
