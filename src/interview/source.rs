//! Where the interview's questions come from
//!
//! Saved questions for a known candidate win, then freshly generated ones,
//! then the built-in bank. Backend failures fall through to the next option.

use crate::api::types::CandidateRequest;
use crate::api::InterviewBackend;
use crate::interview::question::{Dimension, Question};
use crate::session::Session;
use log::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionSource {
    /// Previously generated for this candidate and stored by the backend
    Loaded {
        questions: Vec<Question>,
        strategy: Option<String>,
    },
    Generated(Vec<Question>),
    Fallback(Vec<Question>),
}

impl QuestionSource {
    pub fn questions(&self) -> &[Question] {
        match self {
            QuestionSource::Loaded { questions, .. } => questions,
            QuestionSource::Generated(questions) => questions,
            QuestionSource::Fallback(questions) => questions,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            QuestionSource::Loaded { .. } => "loaded",
            QuestionSource::Generated(_) => "generated",
            QuestionSource::Fallback(_) => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, QuestionSource::Fallback(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub source: QuestionSource,
    /// Backend session answers are scored under, when one could be obtained
    pub session_id: Option<String>,
}

pub fn candidate_request(session: &Session) -> CandidateRequest {
    CandidateRequest {
        name: session.candidate_name.clone(),
        email: session.candidate_email.clone(),
        invitation_code: session.invitation_code.clone(),
    }
}

/// Pick the question source for this session. Never fails.
pub async fn resolve_questions<B>(backend: &B, session: &Session) -> Resolution
where
    B: InterviewBackend + ?Sized,
{
    let request = candidate_request(session);

    if let Some(candidate_id) = session.candidate_id {
        match backend.saved_questions(candidate_id).await {
            Ok(saved) if saved.has_questions && !saved.questions.is_empty() => {
                info!(
                    "Using {} saved questions for candidate {}",
                    saved.questions.len(),
                    candidate_id
                );
                let session_id = match &session.session_id {
                    Some(id) => Some(id.clone()),
                    None => match backend.start_interview(&request).await {
                        Ok(started) => Some(started.session_id),
                        Err(e) => {
                            warn!("Could not create an interview session for saved questions: {}", e);
                            None
                        }
                    },
                };
                return Resolution {
                    source: QuestionSource::Loaded {
                        questions: saved.questions,
                        strategy: saved.strategy,
                    },
                    session_id,
                };
            }
            Ok(_) => info!("No saved questions for candidate {}", candidate_id),
            Err(e) => warn!("Fetching saved questions failed: {}", e),
        }
    }

    match backend.generate_questions(&request).await {
        Ok(generated) if !generated.questions.is_empty() => {
            info!("Generated {} questions for {}", generated.questions.len(), request.name);
            return Resolution {
                source: QuestionSource::Generated(generated.questions),
                session_id: generated.session_id.or_else(|| session.session_id.clone()),
            };
        }
        Ok(_) => warn!("Question generation returned no questions"),
        Err(e) => warn!("Question generation failed: {}", e),
    }

    Resolution {
        source: QuestionSource::Fallback(fallback_questions(session.candidate_position.as_deref())),
        session_id: session.session_id.clone(),
    }
}

/// The built-in ten-question bank, covering every dimension
pub fn fallback_questions(position: Option<&str>) -> Vec<Question> {
    let position = position.unwrap_or("该职位");
    vec![
        Question::new(1, Dimension::Knowledge, format!("请介绍一下您在{}相关领域的专业知识背景。", position))
            .with_follow_up("可以具体谈谈您的学习经历和专业认证"),
        Question::new(2, Dimension::Skill, format!("请描述一个您在{}工作中解决的具体技术问题。", position))
            .with_follow_up("当时是如何分析和解决这个问题的？"),
        Question::new(3, Dimension::Ability, "请谈谈您在团队协作中的经验和收获。")
            .with_follow_up("遇到团队冲突时您是如何处理的？"),
        Question::new(4, Dimension::Personality, "您认为自己最大的优势和需要改进的地方是什么？")
            .with_follow_up("能举个具体例子说明吗？"),
        Question::new(5, Dimension::Motivation, format!("是什么促使您选择应聘{}这个职位？", position))
            .with_follow_up("您的职业规划是怎样的？"),
        Question::new(6, Dimension::Value, "您理想的工作环境和企业文化是什么样的？")
            .with_follow_up("您如何看待工作与生活的平衡？"),
        Question::new(7, Dimension::Knowledge, "请谈谈您对行业发展趋势的看法。")
            .with_follow_up("您是如何保持专业知识更新的？"),
        Question::new(8, Dimension::Skill, "请描述一个您最有成就感的项目经历。")
            .with_follow_up("在这个项目中您承担了什么角色？"),
        Question::new(9, Dimension::Ability, "面对压力和挑战时，您通常如何应对？")
            .with_follow_up("能分享一个具体的例子吗？"),
        Question::new(10, Dimension::Motivation, "您希望在我们公司获得什么样的发展机会？")
            .with_follow_up("您认为自己能为公司带来什么价值？"),
    ]
}
