//! User-facing reply texts. All remote failures map to one of these; nothing is
//! retried and the raw error never reaches the chat except where noted.

use gemini_client::GeminiError;

pub(crate) const WELCOME: &str = "Welcome! You are now chatting with Gemini! I can \
remember our conversation. Send me your questions, or pick an option from the menu \
below. To start a new conversation, use /start again. To end our chat, use /cancel.";

pub(crate) const GOODBYE: &str = "Goodbye! To start a new chat, use /start.";

pub(crate) const HELP: &str = "Send me any text and I will answer with Gemini, \
remembering our conversation. Menu buttons: free chat, document summarization \
(PDF or TXT upload), and web search (one query per line). /start resets the \
conversation, /cancel ends it.";

pub(crate) const START_HINT: &str = "Send /start to begin a conversation.";

pub(crate) const UNKNOWN_COMMAND: &str = "Unknown command. Try /help.";

pub(crate) const CHAT_MODE_PROMPT: &str =
    "Chat mode. Send me your questions; I will remember the conversation.";

pub(crate) const DOCUMENT_PROMPT: &str =
    "Send me a PDF or TXT file and I will summarize it.";

pub(crate) const DOCUMENT_HINT: &str =
    "I am waiting for a PDF or TXT file. Upload one, or use /start for the menu.";

pub(crate) const SEARCH_PROMPT: &str =
    "Send me your search queries, one per line.";

pub(crate) const SEARCH_EMPTY: &str =
    "I could not find any queries in that message. Send one query per line.";

pub(crate) const UNSUPPORTED_FILE: &str =
    "Unsupported file type. Please send a PDF or TXT file.";

pub(crate) const DOWNLOAD_FAILED: &str =
    "Sorry, I could not download that file. Please try again.";

pub(crate) const UNREADABLE_PDF: &str =
    "Sorry, I could not extract any text from that PDF.";

pub(crate) const EMPTY_DOCUMENT: &str = "That file appears to contain no text.";

/// Maps a classified Gemini failure to the literal message shown to the user.
pub fn gemini_error_reply(err: &GeminiError) -> String {
    match err {
        GeminiError::ResponseBlocked { .. } => "[Gemini Error] The response was blocked \
            due to safety reasons. Please try rephrasing your prompt."
            .to_string(),
        GeminiError::PromptBlocked { .. } => "[Gemini Error] Your prompt was blocked due \
            to safety reasons. Please try a different prompt."
            .to_string(),
        GeminiError::ModelNotFound { .. } => "[Gemini Error] Model not found. Please \
            check your API access and model name. Try updating the model name or check \
            your Google AI Studio for available models."
            .to_string(),
        GeminiError::Api { message, .. } => {
            format!("[Gemini Error] A client error occurred: {}", message)
        }
        other => format!("[An unexpected error occurred] {}", other),
    }
}
