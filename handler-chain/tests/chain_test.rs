//! Integration tests for HandlerChain: ordering, Stop/Reply short-circuit,
//! before-hook veto, and reverse-order after hooks.

use async_trait::async_trait;
use chrono::Utc;
use gembot_core::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, Result, User,
};
use handler_chain::HandlerChain;
use std::sync::{Arc, Mutex};

fn test_message(text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 42,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 42,
            chat_type: "Private".to_string(),
        },
        content: text.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        document: None,
    }
}

/// Records before/handle/after invocations into a shared log.
struct RecordingHandler {
    name: &'static str,
    response: HandlerResponse,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn before(&self, _message: &Message) -> Result<bool> {
        self.log.lock().unwrap().push(format!("{}:before", self.name));
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        self.log.lock().unwrap().push(format!("{}:handle", self.name));
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        self.log.lock().unwrap().push(format!("{}:after", self.name));
        Ok(())
    }
}

/// Vetoes the chain in before().
struct VetoHandler;

#[async_trait]
impl Handler for VetoHandler {
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(false)
    }
}

/// **Test: Reply from the first handler short-circuits later handle calls,
/// but after hooks still run for every handler, in reverse order.**
#[tokio::test]
async fn reply_short_circuits_and_after_runs_reversed() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler {
            name: "a",
            response: HandlerResponse::Reply("done".to_string()),
            log: log.clone(),
        }))
        .add_handler(Arc::new(RecordingHandler {
            name: "b",
            response: HandlerResponse::Continue,
            log: log.clone(),
        }));

    let response = chain.handle(&test_message("hi")).await.unwrap();
    assert_eq!(response, HandlerResponse::Reply("done".to_string()));

    let entries = log.lock().unwrap().clone();
    assert_eq!(
        entries,
        vec!["a:before", "b:before", "a:handle", "b:after", "a:after"]
    );
}

/// **Test: all handlers returning Continue yields Continue and every handle runs.**
#[tokio::test]
async fn continue_falls_through() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler {
            name: "a",
            response: HandlerResponse::Continue,
            log: log.clone(),
        }))
        .add_handler(Arc::new(RecordingHandler {
            name: "b",
            response: HandlerResponse::Continue,
            log: log.clone(),
        }));

    let response = chain.handle(&test_message("hi")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
    let entries = log.lock().unwrap().clone();
    assert!(entries.contains(&"a:handle".to_string()));
    assert!(entries.contains(&"b:handle".to_string()));
}

/// **Test: a before hook returning false stops the chain before any handle runs.**
#[tokio::test]
async fn before_veto_stops_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(VetoHandler))
        .add_handler(Arc::new(RecordingHandler {
            name: "a",
            response: HandlerResponse::Reply("unreachable".to_string()),
            log: log.clone(),
        }));

    let response = chain.handle(&test_message("hi")).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    let entries = log.lock().unwrap().clone();
    assert!(!entries.iter().any(|e| e.ends_with(":handle")));
}

/// **Test: Stop ends the handle phase without a reply body.**
#[tokio::test]
async fn stop_ends_handle_phase() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler {
            name: "a",
            response: HandlerResponse::Stop,
            log: log.clone(),
        }))
        .add_handler(Arc::new(RecordingHandler {
            name: "b",
            response: HandlerResponse::Reply("unreachable".to_string()),
            log: log.clone(),
        }));

    let response = chain.handle(&test_message("hi")).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    let entries = log.lock().unwrap().clone();
    assert!(!entries.contains(&"b:handle".to_string()));
}
