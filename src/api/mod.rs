//! Backend REST API consumed by the interview flow

pub mod client;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use types::*;

pub use client::HttpBackend;

/// Every endpoint the interview touches. Calls are awaited one at a time.
#[async_trait]
pub trait InterviewBackend: Send + Sync {
    /// `GET /api/candidates/{id}/questions`
    async fn saved_questions(&self, candidate_id: u64) -> Result<SavedQuestions>;

    /// `POST /api/interview/generate-questions`
    async fn generate_questions(&self, request: &CandidateRequest) -> Result<GeneratedQuestions>;

    /// `POST /api/interview/start`
    async fn start_interview(&self, request: &CandidateRequest) -> Result<StartedInterview>;

    /// `POST /api/interview/{session_id}/answer`
    async fn submit_answer(&self, session_id: &str, answer: &AnswerRequest) -> Result<AnswerEvaluation>;

    /// `POST /api/candidates/{name}/finalize-scores`
    async fn finalize_scores(&self, candidate_name: &str, scores: &FinalizeRequest) -> Result<()>;
}
