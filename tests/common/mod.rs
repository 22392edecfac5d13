//! Shared test doubles: a scripted backend and a view that records everything

#![allow(dead_code)]

use ai_interviewer::api::types::*;
use ai_interviewer::api::InterviewBackend;
use ai_interviewer::error::{InterviewError, Result};
use ai_interviewer::interview::progress::Progress;
use ai_interviewer::interview::EngineState;
use ai_interviewer::interview::question::{Dimension, Question};
use ai_interviewer::output::view::{InterviewView, Speaker};
use ai_interviewer::session::{CompletionSummary, Session};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Each endpoint answers from its script; `None` means the request fails
pub struct ScriptedBackend {
    pub saved: Option<SavedQuestions>,
    pub generated: Option<GeneratedQuestions>,
    pub started_session: Option<String>,
    pub finalize_fails: bool,
    /// One entry per submitted answer; `None` fails that submission.
    /// Once exhausted every answer scores 80.
    pub scores: Mutex<VecDeque<Option<f64>>>,
    pub calls: Mutex<Vec<String>>,
    pub answers: Mutex<Vec<(String, AnswerRequest)>>,
    pub finalized: Mutex<Vec<(String, FinalizeRequest)>>,
}

fn offline() -> InterviewError {
    InterviewError::Network("connection refused".to_string())
}

impl ScriptedBackend {
    /// Every endpoint fails
    pub fn offline() -> Self {
        Self {
            saved: None,
            generated: None,
            started_session: None,
            finalize_fails: true,
            scores: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            answers: Mutex::new(Vec::new()),
            finalized: Mutex::new(Vec::new()),
        }
    }

    pub fn generating(questions: Vec<Question>, session_id: &str) -> Self {
        Self {
            generated: Some(GeneratedQuestions {
                questions,
                session_id: Some(session_id.to_string()),
            }),
            finalize_fails: false,
            ..Self::offline()
        }
    }

    pub fn with_saved(mut self, questions: Vec<Question>) -> Self {
        self.saved = Some(SavedQuestions {
            has_questions: !questions.is_empty(),
            questions,
            strategy: Some("深入考察项目经验".to_string()),
        });
        self
    }

    pub fn with_started_session(mut self, session_id: &str) -> Self {
        self.started_session = Some(session_id.to_string());
        self
    }

    pub fn with_scores(self, scores: Vec<Option<f64>>) -> Self {
        *self.scores.lock().unwrap() = scores.into();
        self
    }

    pub fn with_finalize_failing(mut self) -> Self {
        self.finalize_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == name)
    }

    pub fn answers(&self) -> Vec<(String, AnswerRequest)> {
        self.answers.lock().unwrap().clone()
    }

    pub fn finalized(&self) -> Vec<(String, FinalizeRequest)> {
        self.finalized.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl InterviewBackend for ScriptedBackend {
    async fn saved_questions(&self, _candidate_id: u64) -> Result<SavedQuestions> {
        self.record("saved_questions");
        self.saved.clone().ok_or_else(offline)
    }

    async fn generate_questions(&self, _request: &CandidateRequest) -> Result<GeneratedQuestions> {
        self.record("generate_questions");
        self.generated.clone().ok_or_else(offline)
    }

    async fn start_interview(&self, _request: &CandidateRequest) -> Result<StartedInterview> {
        self.record("start_interview");
        self.started_session
            .clone()
            .map(|session_id| StartedInterview { session_id })
            .ok_or_else(offline)
    }

    async fn submit_answer(&self, session_id: &str, answer: &AnswerRequest) -> Result<AnswerEvaluation> {
        self.record("submit_answer");
        self.answers
            .lock()
            .unwrap()
            .push((session_id.to_string(), answer.clone()));

        let next = self.scores.lock().unwrap().pop_front();
        match next {
            Some(Some(score)) => Ok(AnswerEvaluation {
                score,
                feedback: format!("得分 {}", score),
            }),
            Some(None) => Err(offline()),
            None => Ok(AnswerEvaluation {
                score: 80.0,
                feedback: "回答基本符合要求".to_string(),
            }),
        }
    }

    async fn finalize_scores(&self, candidate_name: &str, scores: &FinalizeRequest) -> Result<()> {
        self.record("finalize_scores");
        if self.finalize_fails {
            return Err(offline());
        }
        self.finalized
            .lock()
            .unwrap()
            .push((candidate_name.to_string(), scores.clone()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Candidate(String),
    Message(Speaker, String),
    Progress(Progress),
    Typing(bool),
    Input(bool),
    ConfirmEnd,
    State(EngineState),
    Completed(CompletionSummary),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn interviewer_messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Message(Speaker::Interviewer, text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_interviewer_message(&self) -> Option<&str> {
        self.interviewer_messages().last().copied()
    }

    pub fn progress_updates(&self) -> Vec<Progress> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Progress(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn states(&self) -> Vec<EngineState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::State(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    pub fn completed(&self) -> Option<&CompletionSummary> {
        self.events.iter().find_map(|e| match e {
            ViewEvent::Completed(summary) => Some(summary),
            _ => None,
        })
    }
}

impl InterviewView for RecordingView {
    fn show_candidate(&mut self, session: &Session) {
        self.events.push(ViewEvent::Candidate(session.candidate_name.clone()));
    }

    fn message(&mut self, speaker: Speaker, text: &str) {
        self.events.push(ViewEvent::Message(speaker, text.to_string()));
    }

    fn progress(&mut self, progress: Progress) {
        self.events.push(ViewEvent::Progress(progress));
    }

    fn typing(&mut self, active: bool) {
        self.events.push(ViewEvent::Typing(active));
    }

    fn input_enabled(&mut self, enabled: bool) {
        self.events.push(ViewEvent::Input(enabled));
    }

    fn confirm_end(&mut self) {
        self.events.push(ViewEvent::ConfirmEnd);
    }

    fn state_changed(&mut self, state: EngineState) {
        self.events.push(ViewEvent::State(state));
    }

    fn completed(&mut self, summary: &CompletionSummary) {
        self.events.push(ViewEvent::Completed(summary.clone()));
    }
}

/// Six questions, one per dimension; the odd-numbered ones carry a follow-up
pub fn six_questions() -> Vec<Question> {
    Dimension::ALL
        .iter()
        .enumerate()
        .map(|(i, dimension)| {
            let id = i as u32 + 1;
            let question = Question::new(id, *dimension, format!("第{}个问题：请结合简历谈谈{}", id, dimension.label()));
            if id % 2 == 1 {
                question.with_follow_up(format!("关于第{}个问题，能举个例子吗？", id))
            } else {
                question
            }
        })
        .collect()
}

pub fn tian_zhong() -> Session {
    Session::new("田忠", "tianzhong@example.com")
}
