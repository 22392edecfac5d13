//! Turn-taking state machine for a single interview
//!
//! One question is asked at a time. Each answer is scored by the backend,
//! a low-scoring primary answer earns at most one follow-up, then the
//! engine moves on. Once every question is done the scores are aggregated
//! and reported.

use crate::api::types::AnswerRequest;
use crate::api::InterviewBackend;
use crate::config::InterviewConfig;
use crate::error::{InterviewError, Result};
use crate::interview::finalize::FinalResult;
use crate::interview::input::{AnswerInbox, END_COMMAND};
use crate::interview::progress::Progress;
use crate::interview::question::Question;
use crate::interview::source::{resolve_questions, QuestionSource};
use crate::interview::transcript::{AnswerTurn, Evaluation};
use crate::output::view::{InterviewView, Speaker};
use crate::session::{CompletionSummary, Session};
use crate::storage::{RecordStore, COMPLETION_KEY, SESSION_KEY};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::Instant;

const WELCOME: &str = "您好！欢迎参加AI面试。我将根据您的简历和岗位要求进行提问。请放轻松，如实回答即可。";
const FALLBACK_NOTICE: &str = "暂时无法生成个性化问题，将使用标准面试问题。";
const NEXT_QUESTION: &str = "感谢您的回答。让我们继续下一个问题。";
const FAREWELL: &str = "面试已结束！感谢您的参与。我们会尽快处理您的申请并与您联系。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Asking { index: usize },
    AwaitingAnswer { index: usize, follow_up: bool },
    Scoring { index: usize, follow_up: bool },
    FollowUp { index: usize },
    Finalizing,
    Done,
}

/// What a call into the engine led to
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Input arrived while no answer was expected
    Ignored,
    FollowUpAsked,
    NextQuestion,
    Finished(FinalResult),
}

pub struct InterviewEngine<B, S, V> {
    backend: B,
    store: S,
    view: V,
    settings: InterviewConfig,
    session: Session,
    source: Option<QuestionSource>,
    current_question: usize,
    state: EngineState,
    transcript: Vec<AnswerTurn>,
    evaluations: Vec<Evaluation>,
    started_at: DateTime<Utc>,
    /// When the pending prompt was shown; `None` unless awaiting an answer
    awaiting_since: Option<Instant>,
}

impl<B, S, V> InterviewEngine<B, S, V>
where
    B: InterviewBackend,
    S: RecordStore,
    V: InterviewView,
{
    pub fn new(session: Session, backend: B, store: S, view: V, settings: InterviewConfig) -> Self {
        Self {
            backend,
            store,
            view,
            settings,
            session,
            source: None,
            current_question: 1,
            state: EngineState::Idle,
            transcript: Vec::new(),
            evaluations: Vec::new(),
            started_at: Utc::now(),
            awaiting_since: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn source(&self) -> Option<&QuestionSource> {
        self.source.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        self.source.as_ref().map(|s| s.questions()).unwrap_or(&[])
    }

    pub fn total_questions(&self) -> usize {
        self.questions().len()
    }

    /// 1-based; `total_questions() + 1` once every question is done
    pub fn current_question(&self) -> usize {
        self.current_question
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.current_question, self.total_questions())
    }

    pub fn transcript(&self) -> &[AnswerTurn] {
        &self.transcript
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn awaiting_since(&self) -> Option<Instant> {
        self.awaiting_since
    }

    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self.state, EngineState::AwaitingAnswer { .. })
    }

    /// Greet the candidate, settle on a question source and ask the first question
    pub async fn begin(&mut self) -> Result<TurnOutcome> {
        if self.state != EngineState::Idle {
            return Err(InterviewError::InvalidState(format!(
                "Interview already started (state {:?})",
                self.state
            )));
        }

        self.started_at = Utc::now();
        self.view.show_candidate(&self.session);
        self.view.message(Speaker::Interviewer, WELCOME);

        let resolution = resolve_questions(&self.backend, &self.session).await;
        info!(
            "Interview for {} uses {} questions ({})",
            self.session.candidate_name,
            resolution.source.questions().len(),
            resolution.source.kind()
        );
        if resolution.source.is_fallback() {
            self.view.message(Speaker::Interviewer, FALLBACK_NOTICE);
        }

        if resolution.session_id != self.session.session_id {
            self.session.session_id = resolution.session_id;
            if let Err(e) = self.store.set_json(SESSION_KEY, &self.session) {
                warn!("Could not persist interview session id: {}", e);
            }
        }
        self.source = Some(resolution.source);

        let progress = self.progress();
        self.view.progress(progress);
        pause(self.settings.welcome_delay_ms).await;
        self.ask_current().await
    }

    /// Submit one answer. Blank input, or input while no answer is expected, is ignored.
    pub async fn submit_answer(&mut self, answer: &str) -> Result<TurnOutcome> {
        let answer = answer.trim();
        let (index, follow_up) = match self.state {
            EngineState::AwaitingAnswer { index, follow_up } if !answer.is_empty() => (index, follow_up),
            state => {
                debug!("Ignoring input in state {:?}", state);
                return Ok(TurnOutcome::Ignored);
            }
        };

        let question = self.question_at(index)?.clone();
        let asked = match (&question.follow_up, follow_up) {
            (Some(text), true) => text.clone(),
            _ => question.text.clone(),
        };

        self.view.message(Speaker::Candidate, answer);
        self.transcript.push(AnswerTurn {
            question_index: index,
            question_text: asked.clone(),
            answer_text: answer.to_string(),
            dimension: question.dimension,
            timestamp: Utc::now(),
            is_follow_up: follow_up,
        });

        self.set_state(EngineState::Scoring { index, follow_up });
        self.view.typing(true);
        let evaluation = self.score(index, &question, &asked, answer, follow_up).await;
        self.view.typing(false);

        let needs_follow_up = match (&evaluation, &question.follow_up) {
            (Some(evaluation), Some(_)) => {
                !follow_up && evaluation.score < u32::from(self.settings.follow_up_threshold)
            }
            _ => false,
        };
        if let Some(evaluation) = evaluation {
            self.evaluations.push(evaluation);
        }

        if let (true, Some(text)) = (needs_follow_up, &question.follow_up) {
            self.set_state(EngineState::FollowUp { index });
            self.view.message(Speaker::Interviewer, &format!("追问：{}", text));
            self.set_state(EngineState::AwaitingAnswer { index, follow_up: true });
            return Ok(TurnOutcome::FollowUpAsked);
        }

        self.view.message(Speaker::Interviewer, NEXT_QUESTION);
        self.current_question += 1;
        let progress = self.progress();
        self.view.progress(progress);
        pause(self.settings.advance_delay_ms).await;
        self.ask_current().await
    }

    /// Stop early and finalize with whatever has been collected
    pub async fn end_early(&mut self) -> Result<FinalResult> {
        if !self.is_awaiting_answer() {
            return Err(InterviewError::InvalidState(format!(
                "Cannot end the interview in state {:?}",
                self.state
            )));
        }
        info!("Candidate ended the interview at question {}", self.current_question);
        self.finalize().await
    }

    /// Feed candidate lines into a started interview until it finishes or input closes.
    /// Lines received before the pending prompt was shown are dropped.
    pub async fn run(&mut self, inbox: &mut AnswerInbox) -> Result<Option<FinalResult>> {
        while let Some(asked_at) = self.awaiting_since {
            let line = match inbox.next_since(asked_at).await {
                Some(line) => line,
                None => {
                    info!("Input closed; leaving the interview unfinished");
                    return Ok(None);
                }
            };

            if line.trim() == END_COMMAND {
                self.view.confirm_end();
                let reply = inbox.next_since(Instant::now()).await.unwrap_or_default();
                if matches!(reply.trim().to_lowercase().as_str(), "y" | "yes") {
                    return self.end_early().await.map(Some);
                }
                continue;
            }

            if let TurnOutcome::Finished(result) = self.submit_answer(&line).await? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    fn set_state(&mut self, state: EngineState) {
        self.state = state;
        self.awaiting_since = match state {
            EngineState::AwaitingAnswer { .. } => Some(Instant::now()),
            _ => None,
        };
        self.view.state_changed(state);
    }

    fn question_at(&self, index: usize) -> Result<&Question> {
        index
            .checked_sub(1)
            .and_then(|i| self.questions().get(i))
            .ok_or_else(|| InterviewError::InvalidState(format!("No question number {}", index)))
    }

    async fn ask_current(&mut self) -> Result<TurnOutcome> {
        let index = self.current_question;
        self.set_state(EngineState::Asking { index });

        if index > self.total_questions() {
            let result = self.finalize().await?;
            return Ok(TurnOutcome::Finished(result));
        }

        let question = self.question_at(index)?;
        let prompt = format!("问题 {} 【{}】: {}", index, question.dimension.label(), question.text);
        self.view.message(Speaker::Interviewer, &prompt);
        self.set_state(EngineState::AwaitingAnswer { index, follow_up: false });
        Ok(TurnOutcome::NextQuestion)
    }

    /// `None` when the answer could not be scored; the interview carries on regardless
    async fn score(
        &self,
        index: usize,
        question: &Question,
        asked: &str,
        answer: &str,
        follow_up: bool,
    ) -> Option<Evaluation> {
        let session_id = match &self.session.session_id {
            Some(id) => id,
            None => {
                warn!("No backend session; answer to question {} is not scored", index);
                return None;
            }
        };

        let request = AnswerRequest {
            question_id: question.id,
            question: asked.to_string(),
            answer: answer.to_string(),
            dimension: question.dimension,
        };

        match self.backend.submit_answer(session_id, &request).await {
            Ok(evaluation) => {
                let score = evaluation.normalized_score();
                debug!("Question {} scored {} ({})", index, score, question.dimension);
                Some(Evaluation {
                    question_index: index,
                    dimension: question.dimension,
                    score,
                    feedback: evaluation.feedback,
                    is_follow_up: follow_up,
                })
            }
            Err(e) => {
                warn!("Scoring answer to question {} failed: {}", index, e);
                None
            }
        }
    }

    async fn finalize(&mut self) -> Result<FinalResult> {
        self.set_state(EngineState::Finalizing);
        self.view.input_enabled(false);
        self.view.message(Speaker::Interviewer, FAREWELL);

        let result = FinalResult::compute(&self.evaluations, self.started_at, Utc::now());
        info!(
            "Final score for {}: {} across {} dimensions",
            self.session.candidate_name,
            result.total_score,
            result.dimension_scores.len()
        );

        if let Err(e) = self
            .backend
            .finalize_scores(&self.session.candidate_name, &result.to_request())
            .await
        {
            warn!("Reporting final scores failed: {}", e);
        }

        let summary = CompletionSummary {
            candidate_name: self.session.candidate_name.clone(),
            candidate_email: self.session.candidate_email.clone(),
            session_id: self.session.session_id.clone(),
            start_time: result.started_at,
            end_time: result.finished_at,
            questions_answered: (self.current_question - 1).min(self.total_questions()),
            total_questions: self.total_questions(),
            total_score: result.total_score,
            dimension_scores: result.dimension_scores.clone(),
        };
        self.store.set_json(COMPLETION_KEY, &summary)?;
        self.store.remove(SESSION_KEY)?;

        pause(self.settings.completion_delay_ms).await;
        self.set_state(EngineState::Done);
        self.view.completed(&summary);
        Ok(result)
    }
}

async fn pause(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
