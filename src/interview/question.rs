//! Interview questions and the dimensions they assess

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Evaluation categories every answer is scored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dimension {
    Knowledge,
    Skill,
    Ability,
    Personality,
    Motivation,
    Value,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Knowledge,
        Dimension::Skill,
        Dimension::Ability,
        Dimension::Personality,
        Dimension::Motivation,
        Dimension::Value,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Knowledge => "Knowledge",
            Dimension::Skill => "Skill",
            Dimension::Ability => "Ability",
            Dimension::Personality => "Personality",
            Dimension::Motivation => "Motivation",
            Dimension::Value => "Value",
        }
    }

    /// Label shown to the candidate next to each question
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Knowledge => "专业知识",
            Dimension::Skill => "专业技能",
            Dimension::Ability => "综合素质与能力",
            Dimension::Personality => "个性特质",
            Dimension::Motivation => "求职动机",
            Dimension::Value => "价值观",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s) || d.label() == s)
            .ok_or_else(|| format!("Unknown dimension: {}", s))
    }
}

impl TryFrom<String> for Dimension {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dimension> for String {
    fn from(value: Dimension) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub dimension: Dimension,
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub follow_up: Option<String>,
}

impl Question {
    pub fn new(id: u32, dimension: Dimension, text: impl Into<String>) -> Self {
        Self {
            id,
            dimension,
            text: text.into(),
            follow_up: None,
        }
    }

    pub fn with_follow_up(mut self, follow_up: impl Into<String>) -> Self {
        let follow_up = follow_up.into();
        self.follow_up = (!follow_up.trim().is_empty()).then_some(follow_up);
        self
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
