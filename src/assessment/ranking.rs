//! Risk ranking and recommendation lists.
//!
//! Two orderings live here. [`top_risks`] ranks by criticality, priority,
//! domain weight and score and is what the executive summary shows.
//! [`generate_recommendations`] lists every remediation item ordered by
//! priority alone.

use std::cmp::Ordering;

use log::debug;

use crate::assessment::types::{DomainScore, Priority, Recommendation, Risk};
use crate::models::{Criticality, DomainResponses, Framework, Question, Responses};

/// Recommendation text used when a question has none for the given answer.
pub const NO_RECOMMENDATION: &str = "No specific recommendation available";

/// Default number of entries in the top-risks list.
pub const DEFAULT_TOP_RISKS: usize = 5;

/// Collect imperfect answers as risks and return the `limit` most severe.
///
/// Domains are visited in `domain_scores` order, questions in framework
/// order. Unanswered, N/A and full-score answers are skipped. Entries tied on
/// every sort key keep that discovery order.
pub fn top_risks(
    domain_scores: &[DomainScore],
    responses: &Responses,
    framework: &Framework,
    limit: usize,
) -> Vec<Risk> {
    let empty = DomainResponses::new();
    let mut risks = Vec::new();

    for scored in domain_scores {
        let domain = &scored.domain;
        let Some(definition) = framework.domain(&domain.id) else {
            debug!("Skipping domain {} missing from framework", domain.id);
            continue;
        };
        let domain_responses = responses.get(&domain.id).unwrap_or(&empty);

        for question in &definition.questions {
            let Some(answer) = domain_responses.get(&question.id).filter(|a| !a.is_empty()) else {
                continue;
            };
            let Some(option) = question.option(answer) else {
                continue;
            };
            let Some(score) = option.score else {
                continue;
            };
            if score >= 100 {
                continue;
            }

            let criticality = question.criticality().unwrap_or(Criticality::Medium);

            risks.push(Risk {
                domain: domain.name.clone(),
                domain_id: domain.id.clone(),
                domain_weight: domain.weight,
                question: question.text.clone(),
                answer: option.label.clone(),
                score,
                priority: if score == 0 {
                    Priority::High
                } else {
                    Priority::Medium
                },
                recommendation: question
                    .recommendation(answer)
                    .unwrap_or(NO_RECOMMENDATION)
                    .to_string(),
                risk_impact: risk_impact(question, score),
                question_id: question.id.clone(),
                criticality,
            });
        }
    }

    risks.sort_by(compare_risks);
    risks.truncate(limit);
    risks
}

/// Most severe first: criticality, priority, heavier domain, lower score.
fn compare_risks(a: &Risk, b: &Risk) -> Ordering {
    a.criticality
        .rank()
        .cmp(&b.criticality.rank())
        .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
        .then_with(|| b.domain_weight.total_cmp(&a.domain_weight))
        .then_with(|| a.score.cmp(&b.score))
}

/// Impact statement for an imperfect answer, phrased by question category.
pub fn risk_impact(question: &Question, score: u32) -> String {
    let category = question
        .category
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_else(|| "security".to_string());

    match score {
        0 => format!(
            "Missing {} controls increase vulnerability to common attack vectors and may lead to \
             security breaches or compliance violations.",
            category
        ),
        50 => format!(
            "Partial {} implementation leaves gaps that attackers could exploit. Completion is \
             necessary to achieve adequate protection.",
            category
        ),
        _ => format!("Adequate {} controls are in place.", category),
    }
}

/// Every imperfect answer that has recommendation text, ordered by priority only.
pub fn generate_recommendations(
    domain_scores: &[DomainScore],
    responses: &Responses,
) -> Vec<Recommendation> {
    let empty = DomainResponses::new();
    let mut recommendations = Vec::new();

    for scored in domain_scores {
        let domain = &scored.domain;
        let domain_responses = responses.get(&domain.id).unwrap_or(&empty);

        for question in &domain.questions {
            let Some(answer) = domain_responses.get(&question.id).filter(|a| !a.is_empty()) else {
                continue;
            };
            let Some(text) = question.recommendation(answer) else {
                continue;
            };
            let Some(score) = question.option(answer).and_then(|o| o.score) else {
                continue;
            };
            if score == 100 {
                continue;
            }

            let priority = match score {
                0 => Priority::High,
                50 => Priority::Medium,
                _ => Priority::Low,
            };

            recommendations.push(Recommendation {
                domain: domain.name.clone(),
                domain_id: domain.id.clone(),
                question: question.text.clone(),
                recommendation: text.to_string(),
                priority,
                score,
            });
        }
    }

    recommendations.sort_by_key(|r| r.priority.rank());
    recommendations
}
