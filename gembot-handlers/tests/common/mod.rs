//! Shared mocks for handler tests: in-process Bot, ChatModel, and SearchProvider
//! doubles that record calls instead of hitting Telegram or Gemini.

use async_trait::async_trait;
use chrono::Utc;
use gembot_core::{
    Bot, Chat, Document, GembotError, Message, MessageDirection, Result, User,
};
use gemini_client::{ChatModel, Content, GeminiError, SearchProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Records every outbound text; downloads serve the configured bytes.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<String>>,
    pub menus_sent: AtomicUsize,
    pub menus_removed: AtomicUsize,
    /// None makes download_file fail.
    pub file_bytes: Option<Vec<u8>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(bytes: &[u8]) -> Self {
        Self {
            file_bytes: Some(bytes.to_vec()),
            ..Self::default()
        }
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_menu(&self, _chat: &Chat, text: &str, _labels: &[&[&str]]) -> Result<()> {
        self.menus_sent.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_and_remove_menu(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.menus_removed.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn download_file(&self, _file_id: &str) -> Result<Vec<u8>> {
        self.file_bytes
            .clone()
            .ok_or_else(|| GembotError::Bot("download failed".to_string()))
    }
}

/// What the mock model should do on each generate call.
pub enum ModelScript {
    Reply(String),
    FailApi(String),
}

/// Records (history length, input) per call and follows the script.
pub struct MockModel {
    pub script: ModelScript,
    pub calls: Mutex<Vec<(usize, String)>>,
}

impl MockModel {
    pub fn replying(text: &str) -> Self {
        Self {
            script: ModelScript::Reply(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            script: ModelScript::FailApi(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn recorded_calls(&self) -> Vec<(usize, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn generate(&self, history: &[Content], input: &str) -> std::result::Result<String, GeminiError> {
        self.calls
            .lock()
            .unwrap()
            .push((history.len(), input.to_string()));
        match &self.script {
            ModelScript::Reply(text) => Ok(text.clone()),
            ModelScript::FailApi(message) => Err(GeminiError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

/// Records query lists and returns a fixed blob (or a scripted failure).
pub struct MockSearch {
    pub blob: Option<String>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl MockSearch {
    pub fn returning(blob: &str) -> Self {
        Self {
            blob: Some(blob.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            blob: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn recorded_queries(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, queries: &[String]) -> std::result::Result<String, GeminiError> {
        self.calls.lock().unwrap().push(queries.to_vec());
        match &self.blob {
            Some(blob) => Ok(blob.clone()),
            None => Err(GeminiError::Api {
                status: 503,
                message: "search unavailable".to_string(),
            }),
        }
    }
}

pub const TEST_USER_ID: i64 = 42;
pub const TEST_CHAT_ID: i64 = 42;

pub fn text_message(text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: TEST_USER_ID,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: TEST_CHAT_ID,
            chat_type: "Private".to_string(),
        },
        content: text.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        document: None,
    }
}

pub fn document_message(file_name: &str, mime_type: Option<&str>) -> Message {
    let mut message = text_message("");
    message.message_type = "document".to_string();
    message.document = Some(Document {
        file_id: "file-1".to_string(),
        file_name: Some(file_name.to_string()),
        mime_type: mime_type.map(String::from),
    });
    message
}
