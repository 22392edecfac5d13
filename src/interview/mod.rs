//! Interview flow: questions, turn-taking engine and score aggregation

pub mod engine;
pub mod finalize;
pub mod input;
pub mod progress;
pub mod question;
pub mod source;
pub mod transcript;

pub use engine::{EngineState, InterviewEngine, TurnOutcome};
pub use finalize::FinalResult;
pub use input::{AnswerInbox, InputLine, END_COMMAND};
pub use question::{Dimension, Question};
pub use source::QuestionSource;
