//! Candidate session: stored identity, position lookup and bootstrap

pub mod bootstrap;
pub mod positions;
pub mod types;

pub use bootstrap::{bootstrap, Bootstrap};
pub use types::{CompletionSummary, Session};
