//! Framework document validation
//!
//! Advisory checks run against static framework content. Every violation is
//! collected; nothing here stops scoring from running on a skewed document.

use std::collections::HashSet;

use log::{error, info};

use crate::models::{Criticality, Framework};

/// Allowed deviation from 1.0 for weight sums.
pub const WEIGHT_EPSILON: f64 = 0.001;

/// Issues that can occur in a framework document
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// A domain's question weights do not sum to 1.0
    QuestionWeightSum { domain_id: String, sum: f64 },

    /// A question has no criticality or an unrecognized one
    InvalidCriticality {
        domain_id: String,
        question_id: String,
        value: Option<String>,
    },

    /// A question has no numeric weight
    MissingWeight {
        domain_id: String,
        question_id: String,
    },

    /// A question id appears more than once in a domain
    DuplicateQuestion {
        domain_id: String,
        question_id: String,
    },

    /// Domain weights across the framework do not sum to 1.0
    DomainWeightSum { sum: f64 },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuestionWeightSum { domain_id, sum } => {
                write!(
                    f,
                    "{}: question weights sum to {:.4} (expected 1.0)",
                    domain_id, sum
                )
            }
            Self::InvalidCriticality {
                domain_id,
                question_id,
                value,
            } => {
                write!(
                    f,
                    "{}/{}: invalid or missing criticality '{}'",
                    domain_id,
                    question_id,
                    value.as_deref().unwrap_or("")
                )
            }
            Self::MissingWeight {
                domain_id,
                question_id,
            } => {
                write!(f, "{}/{}: missing numeric questionWeight", domain_id, question_id)
            }
            Self::DuplicateQuestion {
                domain_id,
                question_id,
            } => {
                write!(f, "{}/{}: duplicate question id", domain_id, question_id)
            }
            Self::DomainWeightSum { sum } => {
                write!(f, "domain weights sum to {:.4} (expected 1.0)", sum)
            }
        }
    }
}

/// Result of validating a framework
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate a framework document
pub fn validate_framework(framework: &Framework) -> ValidationResult {
    let mut issues = Vec::new();

    for domain in &framework.domains {
        info!("Checking domain: {} ({})", domain.name, domain.id);
        let before = issues.len();

        // Missing weights count as zero towards the sum
        let sum: f64 = domain
            .questions
            .iter()
            .map(|q| q.question_weight.unwrap_or(0.0))
            .sum();
        if (sum - 1.0).abs() >= WEIGHT_EPSILON {
            issues.push(ValidationIssue::QuestionWeightSum {
                domain_id: domain.id.clone(),
                sum,
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for question in &domain.questions {
            if !seen.insert(question.id.as_str()) {
                issues.push(ValidationIssue::DuplicateQuestion {
                    domain_id: domain.id.clone(),
                    question_id: question.id.clone(),
                });
            }

            let criticality = question.criticality.as_deref().unwrap_or("");
            if criticality.parse::<Criticality>().is_err() {
                issues.push(ValidationIssue::InvalidCriticality {
                    domain_id: domain.id.clone(),
                    question_id: question.id.clone(),
                    value: question.criticality.clone(),
                });
            }

            if question.question_weight.is_none() {
                issues.push(ValidationIssue::MissingWeight {
                    domain_id: domain.id.clone(),
                    question_id: question.id.clone(),
                });
            }
        }

        if issues.len() == before {
            info!("  {} questions OK", domain.questions.len());
        }
        for issue in &issues[before..] {
            error!("  {}", issue);
        }
    }

    let domain_sum: f64 = framework.domains.iter().map(|d| d.weight).sum();
    if !framework.domains.is_empty() && (domain_sum - 1.0).abs() >= WEIGHT_EPSILON {
        let issue = ValidationIssue::DomainWeightSum { sum: domain_sum };
        error!("{}", issue);
        issues.push(issue);
    }

    ValidationResult { issues }
}
