//! Document handler: PDF/TXT uploads are summarized through the
//! transcript-bounded call; any other file type gets the fixed rejection and no
//! remote call is made.

use crate::exchange::run_exchange;
use crate::replies;
use crate::session::{MenuState, SessionMap};
use async_trait::async_trait;
use gembot_core::{Bot, Document, Handler, HandlerResponse, Message, Result};
use gemini_client::ChatModel;
use std::sync::Arc;
use tracing::{error, info, instrument};
use transcript_store::TranscriptStore;

/// Default cap on extracted document text fed into the prompt (characters).
pub const DEFAULT_DOC_CHAR_LIMIT: usize = 20_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Pdf,
    Txt,
}

pub struct DocumentHandler {
    bot: Arc<dyn Bot>,
    model: Arc<dyn ChatModel>,
    store: Arc<dyn TranscriptStore>,
    sessions: Arc<SessionMap>,
    doc_char_limit: usize,
    message_limit: usize,
}

impl DocumentHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        model: Arc<dyn ChatModel>,
        store: Arc<dyn TranscriptStore>,
        sessions: Arc<SessionMap>,
        doc_char_limit: usize,
        message_limit: usize,
    ) -> Self {
        Self {
            bot,
            model,
            store,
            sessions,
            doc_char_limit,
            message_limit,
        }
    }

    /// Classifies by file extension, falling back to the MIME type when the name
    /// carries none. Anything unrecognized is rejected before any download.
    fn classify(document: &Document) -> Option<FileKind> {
        let by_name = document
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match by_name.as_deref() {
            Some("pdf") => return Some(FileKind::Pdf),
            Some("txt") => return Some(FileKind::Txt),
            Some(_) => return None,
            None => {}
        }
        match document.mime_type.as_deref() {
            Some("application/pdf") => Some(FileKind::Pdf),
            Some("text/plain") => Some(FileKind::Txt),
            _ => None,
        }
    }

    async fn extract_text(&self, kind: FileKind, bytes: Vec<u8>) -> Option<String> {
        match kind {
            FileKind::Pdf => {
                // pdf-extract is CPU-bound; keep it off the async workers.
                let parsed = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&bytes)
                })
                .await;
                match parsed {
                    Ok(Ok(text)) => Some(text),
                    Ok(Err(e)) => {
                        error!(error = %e, "PDF text extraction failed");
                        None
                    }
                    Err(e) => {
                        error!(error = %e, "PDF extraction task panicked");
                        None
                    }
                }
            }
            FileKind::Txt => Some(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

#[async_trait]
impl Handler for DocumentHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(document) = &message.document else {
            return Ok(HandlerResponse::Continue);
        };

        // Uploads need a started conversation, same as free text.
        let state = self.sessions.get(message.user.id, message.chat.id).await;
        if state == MenuState::Idle {
            self.bot
                .send_message(&message.chat, replies::START_HINT)
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        let file_name = document.file_name.as_deref().unwrap_or("document");
        info!(
            user_id = message.user.id,
            file_name = %file_name,
            mime_type = ?document.mime_type,
            "Document received"
        );

        let Some(kind) = Self::classify(document) else {
            self.bot
                .send_message(&message.chat, replies::UNSUPPORTED_FILE)
                .await?;
            return Ok(HandlerResponse::Stop);
        };

        let bytes = match self.bot.download_file(&document.file_id).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "File download failed");
                self.bot
                    .send_message(&message.chat, replies::DOWNLOAD_FAILED)
                    .await?;
                return Ok(HandlerResponse::Stop);
            }
        };

        let Some(text) = self.extract_text(kind, bytes).await else {
            self.bot
                .send_message(&message.chat, replies::UNREADABLE_PDF)
                .await?;
            return Ok(HandlerResponse::Stop);
        };

        let text = text.trim();
        if text.is_empty() {
            self.bot
                .send_message(&message.chat, replies::EMPTY_DOCUMENT)
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        let truncated: String = text.chars().take(self.doc_char_limit).collect();
        let prompt = format!(
            "Summarize the following document ({}):\n\n{}",
            file_name, truncated
        );

        let response = run_exchange(
            &self.bot,
            &self.model,
            &self.store,
            self.message_limit,
            message,
            &prompt,
        )
        .await?;

        // After handling the awaited upload the conversation drops back to chat.
        self.sessions
            .transition(message.user.id, message.chat.id, MenuState::Chat)
            .await;
        Ok(response)
    }
}
