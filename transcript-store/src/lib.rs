//! Transcript store: persistence for per-user conversation transcripts.
//!
//! ## Modules
//!
//! - [`error`] – store error types
//! - [`store`] – [`TranscriptStore`] trait
//! - [`memory_store`] – in-memory implementation (tests, throwaway runs)
//! - [`sqlite_store`] – SQLite implementation (sqlx)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod memory_store;
mod sqlite_pool;
mod sqlite_store;
mod store;

#[cfg(test)]
mod sqlite_store_test;

pub use error::StoreError;
pub use memory_store::InMemoryTranscriptStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteTranscriptStore;
pub use store::TranscriptStore;
