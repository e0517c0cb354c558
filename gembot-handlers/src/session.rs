//! Per-conversation menu state: a fixed, shallow tree of five states with
//! explicit allowed transitions. Held in memory only; a restart drops everyone
//! back to Idle.

use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

/// Where one (user, chat) conversation currently sits in the menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// No conversation started (or ended with /cancel).
    #[default]
    Idle,
    /// /start ran; the menu keyboard is showing.
    Menu,
    /// Free chat with the model.
    Chat,
    /// The next uploaded file will be summarized.
    AwaitingDocument,
    /// The next message is treated as search queries.
    AwaitingSearch,
}

impl MenuState {
    /// Whether moving from `self` to `next` is an allowed edge of the menu tree.
    /// /start (→ Menu) and /cancel (→ Idle) are allowed from anywhere.
    pub fn allows(self, next: MenuState) -> bool {
        use MenuState::*;
        matches!(
            (self, next),
            (_, Idle)
                | (_, Menu)
                | (Menu, Chat)
                | (Menu, AwaitingDocument)
                | (Menu, AwaitingSearch)
                | (AwaitingDocument, Chat)
                | (AwaitingSearch, Chat)
                | (Chat, Chat)
        )
    }
}

/// In-memory (user, chat) → [`MenuState`] map.
#[derive(Default)]
pub struct SessionMap {
    states: RwLock<HashMap<(i64, i64), MenuState>>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for the conversation; Idle when never seen.
    pub async fn get(&self, user_id: i64, chat_id: i64) -> MenuState {
        self.states
            .read()
            .await
            .get(&(user_id, chat_id))
            .copied()
            .unwrap_or_default()
    }

    /// Moves the conversation to `next` if the transition is allowed; returns the
    /// state actually in effect afterwards. Disallowed moves are logged and ignored.
    pub async fn transition(&self, user_id: i64, chat_id: i64, next: MenuState) -> MenuState {
        let mut states = self.states.write().await;
        let entry = states.entry((user_id, chat_id)).or_default();
        if entry.allows(next) {
            *entry = next;
        } else {
            warn!(
                user_id,
                chat_id,
                from = ?*entry,
                to = ?next,
                "Ignoring disallowed menu transition"
            );
        }
        *entry
    }
}
