//! Tests for SqliteTranscriptStore against a temp-file database.

use crate::{SqliteTranscriptStore, TranscriptStore};
use gembot_core::{Role, Turn};

async fn temp_store() -> (tempfile::TempDir, SqliteTranscriptStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("transcripts.db");
    let store = SqliteTranscriptStore::new(path.to_str().expect("utf8 path"))
        .await
        .expect("store init");
    (dir, store)
}

/// **Test: loading an unknown key yields an empty transcript.**
#[tokio::test]
async fn load_missing_is_empty() {
    let (_dir, store) = temp_store().await;
    assert!(store.load(7, 7).await.unwrap().is_empty());
}

/// **Test: appended exchanges replay in insertion order.**
#[tokio::test]
async fn exchanges_replay_in_order() {
    let (_dir, store) = temp_store().await;
    store.append_exchange(1, 10, "q1", "a1").await.unwrap();
    store.append_exchange(1, 10, "q2", "a2").await.unwrap();

    let transcript = store.load(1, 10).await.unwrap();
    assert_eq!(
        transcript.turns(),
        &[
            Turn::user("q1"),
            Turn::model("a1"),
            Turn::user("q2"),
            Turn::model("a2"),
        ]
    );
    assert_eq!(transcript.turns()[0].role, Role::User);
}

/// **Test: clear removes only the addressed (user, chat) rows.**
#[tokio::test]
async fn clear_is_scoped_to_key() {
    let (_dir, store) = temp_store().await;
    store.append_exchange(1, 10, "q", "a").await.unwrap();
    store.append_exchange(2, 20, "x", "y").await.unwrap();

    store.clear(1, 10).await.unwrap();

    assert!(store.load(1, 10).await.unwrap().is_empty());
    assert_eq!(store.load(2, 20).await.unwrap().len(), 2);
}

/// **Test: the store survives reopen — turns persist across instances.**
#[tokio::test]
async fn turns_persist_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("transcripts.db");
    let path_str = path.to_str().expect("utf8 path");

    {
        let store = SqliteTranscriptStore::new(path_str).await.unwrap();
        store.append_exchange(5, 5, "hello", "world").await.unwrap();
    }

    let reopened = SqliteTranscriptStore::new(path_str).await.unwrap();
    let transcript = reopened.load(5, 5).await.unwrap();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.turns()[1], Turn::model("world"));
}
