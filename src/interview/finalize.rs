//! Score aggregation at the end of an interview

use crate::api::types::FinalizeRequest;
use crate::interview::question::Dimension;
use crate::interview::transcript::Evaluation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalResult {
    /// Rounded mean score per dimension that received at least one evaluation
    pub dimension_scores: BTreeMap<Dimension, u32>,
    /// Rounded mean of `dimension_scores`; dimensions weigh equally
    pub total_score: u32,
    pub evaluations: Vec<Evaluation>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl FinalResult {
    pub fn compute(evaluations: &[Evaluation], started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> Self {
        let dimension_scores = dimension_means(evaluations);
        let total_score = mean_rounded(dimension_scores.values().copied());

        Self {
            dimension_scores,
            total_score,
            evaluations: evaluations.to_vec(),
            started_at,
            finished_at,
        }
    }

    pub fn to_request(&self) -> FinalizeRequest {
        FinalizeRequest {
            total_score: self.total_score,
            dimension_scores: self.dimension_scores.clone(),
        }
    }
}

pub fn dimension_means(evaluations: &[Evaluation]) -> BTreeMap<Dimension, u32> {
    let mut grouped: BTreeMap<Dimension, Vec<u32>> = BTreeMap::new();
    for evaluation in evaluations {
        grouped.entry(evaluation.dimension).or_default().push(evaluation.score);
    }

    grouped
        .into_iter()
        .map(|(dimension, scores)| (dimension, mean_rounded(scores.into_iter())))
        .collect()
}

/// 0 for an empty input
fn mean_rounded(values: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v as u64, count + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}
