//! reqwest-backed implementation of the interview backend

use crate::api::types::*;
use crate::api::InterviewBackend;
use crate::config::ApiConfig;
use crate::error::{InterviewError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            InterviewError::Configuration(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InterviewError::Configuration(format!(
                "API base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Append percent-encoded path segments to the base URL
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| InterviewError::Configuration(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InterviewError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl InterviewBackend for HttpBackend {
    async fn saved_questions(&self, candidate_id: u64) -> Result<SavedQuestions> {
        let id = candidate_id.to_string();
        let url = self.endpoint(&["api", "candidates", &id, "questions"])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn generate_questions(&self, request: &CandidateRequest) -> Result<GeneratedQuestions> {
        let url = self.endpoint(&["api", "interview", "generate-questions"])?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        Self::read_json(response).await
    }

    async fn start_interview(&self, request: &CandidateRequest) -> Result<StartedInterview> {
        let url = self.endpoint(&["api", "interview", "start"])?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        Self::read_json(response).await
    }

    async fn submit_answer(&self, session_id: &str, answer: &AnswerRequest) -> Result<AnswerEvaluation> {
        let url = self.endpoint(&["api", "interview", session_id, "answer"])?;
        debug!("POST {} (question {})", url, answer.question_id);
        let response = self.client.post(url).json(answer).send().await?;
        let body: AnswerResponse = Self::read_json(response).await?;
        Ok(body.evaluation)
    }

    async fn finalize_scores(&self, candidate_name: &str, scores: &FinalizeRequest) -> Result<()> {
        let url = self.endpoint(&["api", "candidates", candidate_name, "finalize-scores"])?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(scores).send().await?;
        let _ack: serde_json::Value = Self::read_json(response).await?;
        Ok(())
    }
}
