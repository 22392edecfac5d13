//! Transient client-side records
//! A small key/value store standing in for the browser's local storage

pub mod store;

/// Key of the active interview session record
pub const SESSION_KEY: &str = "interviewSession";

/// Key of the summary written when an interview completes
pub const COMPLETION_KEY: &str = "interviewComplete";

pub use store::{FileStore, MemoryStore, RecordStore};
