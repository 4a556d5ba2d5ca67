//! Core types for assessment results.

use serde::{Deserialize, Serialize};

use crate::models::{Criticality, Domain};

/// Score of a single domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScoreResult {
    /// Points earned across answered, applicable questions.
    pub score: u32,
    /// Questions with a recognized answer, N/A included.
    pub answered_count: usize,
    pub total_count: usize,
    /// 0-100.
    pub percentage: u32,
    /// Full-credit points across answered, applicable questions.
    pub max_possible_score: u32,
}

/// A domain merged with its score and its share of the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    #[serde(flatten)]
    pub domain: Domain,
    #[serde(flatten)]
    pub result: DomainScoreResult,
    /// `percentage * weight`.
    pub weighted_contribution: f64,
}

/// Weighted score across all domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScoreResult {
    /// 0-100.
    pub overall: u32,
    pub domains: Vec<DomainScore>,
    pub total_answered: usize,
    pub total_questions: usize,
    pub completion_percentage: u32,
}

/// Remediation urgency derived from an answer's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// An answered but imperfect question surfaced as a top risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Domain name.
    pub domain: String,
    pub domain_id: String,
    pub domain_weight: f64,
    /// Question text.
    pub question: String,
    /// Label of the selected answer.
    pub answer: String,
    pub score: u32,
    pub priority: Priority,
    pub recommendation: String,
    pub risk_impact: String,
    pub question_id: String,
    pub criticality: Criticality,
}

/// A remediation item for the full recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub domain: String,
    pub domain_id: String,
    pub question: String,
    pub recommendation: String,
    pub priority: Priority,
    pub score: u32,
}
