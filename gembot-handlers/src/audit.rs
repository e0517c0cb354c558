//! Audit handler: logs every incoming update in before(); never claims a message.

use async_trait::async_trait;
use gembot_core::{Handler, Message, Result};
use tracing::{info, instrument};

#[derive(Default)]
pub struct AuditHandler;

impl AuditHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for AuditHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            message_type = %message.message_type,
            has_document = message.document.is_some(),
            content_len = message.content.len(),
            "Incoming update"
        );
        Ok(true)
    }
}
