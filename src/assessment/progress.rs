//! Completion tracking.
//!
//! Progress counts every recorded answer for a domain, whether or not it
//! matches an option, so it can differ from the scorer's `answeredCount`.

use serde::{Deserialize, Serialize};

use crate::models::{Domain, Responses};
use crate::utils::percent_of;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainProgress {
    pub domain_id: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProgress {
    pub domains: Vec<DomainProgress>,
    pub total_answered: usize,
    pub total_questions: usize,
    pub overall_percentage: u32,
    pub is_complete: bool,
}

pub fn domain_progress(domains: &[Domain], responses: &Responses) -> Vec<DomainProgress> {
    domains
        .iter()
        .map(|domain| {
            let completed = responses.get(&domain.id).map_or(0, |r| r.len());
            let total = domain.questions.len();
            DomainProgress {
                domain_id: domain.id.clone(),
                completed,
                total,
                percentage: percent_of(completed as f64, total as f64),
                is_complete: completed == total,
            }
        })
        .collect()
}

pub fn audit_progress(domains: &[Domain], responses: &Responses) -> AuditProgress {
    let domains = domain_progress(domains, responses);
    let total_answered = domains.iter().map(|d| d.completed).sum();
    let total_questions = domains.iter().map(|d| d.total).sum();

    AuditProgress {
        total_answered,
        total_questions,
        overall_percentage: percent_of(total_answered as f64, total_questions as f64),
        is_complete: total_answered == total_questions,
        domains,
    }
}
