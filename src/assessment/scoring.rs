//! Domain and overall scoring.
//!
//! Each answered question contributes its option score to the earned total
//! and its full-credit value (the highest non-N/A option score) to the
//! possible total. Questions answered "not applicable" count as answered but
//! are left out of both totals, so the remaining questions make up the whole
//! percentage. The declared `questionWeight` does not take part in scoring.

use log::trace;

use crate::assessment::types::{DomainScore, DomainScoreResult, OverallScoreResult};
use crate::models::{Domain, DomainResponses, Responses};
use crate::utils::{percent_of, round_half_up};

/// Score one domain against its answers.
pub fn score_domain(domain: &Domain, responses: &DomainResponses) -> DomainScoreResult {
    let mut earned_score: u32 = 0;
    let mut total_possible_score: u32 = 0;
    let mut answered_count = 0;

    for question in &domain.questions {
        let option = responses
            .get(&question.id)
            .filter(|answer| !answer.is_empty())
            .and_then(|answer| question.option(answer));

        let Some(option) = option else {
            continue;
        };
        answered_count += 1;

        if let (Some(score), Some(max_score)) = (option.score, question.max_score()) {
            total_possible_score += max_score;
            earned_score += score;
        }
    }

    let percentage = percent_of(earned_score as f64, total_possible_score as f64);
    trace!(
        "Domain {}: {}/{} points, {}/{} answered",
        domain.id,
        earned_score,
        total_possible_score,
        answered_count,
        domain.questions.len()
    );

    DomainScoreResult {
        score: earned_score,
        answered_count,
        total_count: domain.questions.len(),
        percentage,
        max_possible_score: total_possible_score,
    }
}

/// Score every domain and combine the percentages by domain weight.
pub fn score_overall(domains: &[Domain], responses: &Responses) -> OverallScoreResult {
    let empty = DomainResponses::new();
    let mut weighted_sum = 0.0;
    let mut total_answered = 0;
    let mut total_questions = 0;

    let domain_scores: Vec<DomainScore> = domains
        .iter()
        .map(|domain| {
            let domain_responses = responses.get(&domain.id).unwrap_or(&empty);
            let result = score_domain(domain, domain_responses);

            total_answered += result.answered_count;
            total_questions += result.total_count;

            let weighted_contribution = result.percentage as f64 * domain.weight;
            weighted_sum += weighted_contribution;

            DomainScore {
                domain: domain.clone(),
                result,
                weighted_contribution,
            }
        })
        .collect();

    OverallScoreResult {
        overall: round_half_up(weighted_sum).max(0) as u32,
        domains: domain_scores,
        total_answered,
        total_questions,
        completion_percentage: percent_of(total_answered as f64, total_questions as f64),
    }
}
