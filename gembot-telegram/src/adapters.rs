//! Adapters from Telegram (teloxide) types to gembot_core types.
//! Depends only on teloxide and gembot_core type definitions.

use gembot_core::{Chat, Document, Message, MessageDirection, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let document = self.get_document();
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.get_content(),
            message_type: if document.is_some() {
                "document".to_string()
            } else {
                "text".to_string()
            },
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
            document,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Message text, or the caption for media messages.
    fn get_content(&self) -> String {
        self.0
            .text()
            .or_else(|| self.0.caption())
            .unwrap_or("")
            .to_string()
    }

    /// Returns the attached document if present.
    fn get_document(&self) -> Option<Document> {
        self.0.document().map(|doc| Document {
            file_id: doc.file.id.0.clone(),
            file_name: doc.file_name.clone(),
            mime_type: doc.mime_type.as_ref().map(|m| m.essence_str().to_string()),
        })
    }
}
