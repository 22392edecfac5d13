//! Request and response bodies exchanged with the interview backend

use crate::interview::question::{Dimension, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body shared by the start and generate-questions endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRequest {
    pub name: String,
    pub email: String,
    pub invitation_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedQuestions {
    #[serde(default)]
    pub has_questions: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub strategy: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestions {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartedInterview {
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRequest {
    pub question_id: u32,
    pub question: String,
    pub answer: String,
    pub dimension: Dimension,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    pub evaluation: AnswerEvaluation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerEvaluation {
    pub score: f64,
    #[serde(default)]
    pub feedback: String,
}

impl AnswerEvaluation {
    /// Score rounded and clamped to 0..=100
    pub fn normalized_score(&self) -> u32 {
        if self.score.is_nan() {
            return 0;
        }
        self.score.round().clamp(0.0, 100.0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizeRequest {
    pub total_score: u32,
    pub dimension_scores: BTreeMap<Dimension, u32>,
}
