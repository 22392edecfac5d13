//! Answers and their evaluations, in the order they happened

use crate::interview::question::Dimension;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerTurn {
    pub question_index: usize,
    pub question_text: String,
    pub answer_text: String,
    pub dimension: Dimension,
    pub timestamp: DateTime<Utc>,
    pub is_follow_up: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub question_index: usize,
    pub dimension: Dimension,
    /// 0..=100
    pub score: u32,
    pub feedback: String,
    pub is_follow_up: bool,
}
