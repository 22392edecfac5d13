//! Session and completion records

use crate::interview::question::Dimension;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The candidate's interview session as persisted between commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<u64>,
    pub candidate_name: String,
    pub candidate_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_code: Option<String>,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            candidate_id: None,
            candidate_name: name.into(),
            candidate_email: email.into(),
            candidate_position: None,
            session_id: None,
            invitation_code: None,
        }
    }

    /// A record without a name or email cannot drive an interview
    pub fn is_valid(&self) -> bool {
        !self.candidate_name.trim().is_empty() && !self.candidate_email.trim().is_empty()
    }
}

/// Written when an interview completes, read by the completion view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub candidate_name: String,
    pub candidate_email: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub questions_answered: usize,
    pub total_questions: usize,
    pub total_score: u32,
    #[serde(default)]
    pub dimension_scores: BTreeMap<Dimension, u32>,
}

impl CompletionSummary {
    /// Elapsed time rendered as "M 分 S 秒", or "S 秒" under a minute
    pub fn duration_text(&self) -> String {
        let elapsed = self.end_time.signed_duration_since(self.start_time);
        if elapsed.num_milliseconds() < 0 {
            return "未知".to_string();
        }
        let minutes = elapsed.num_minutes();
        let seconds = elapsed.num_seconds() % 60;
        if minutes > 0 {
            format!("{} 分 {} 秒", minutes, seconds)
        } else {
            format!("{} 秒", seconds)
        }
    }
}
