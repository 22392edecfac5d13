//! AI interviewer library

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod interview;
pub mod output;
pub mod session;
pub mod storage;

pub use config::Config;
pub use error::{InterviewError, Result};
