//! Shared test utilities for creating framework fixtures.

use std::collections::HashMap;

use crate::models::{AnswerOption, Domain, DomainResponses, Framework, Question, Responses};

/// Standard yes / partial / no / n/a options.
pub fn standard_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("yes", "Implemented", Some(100)),
        AnswerOption::new("partial", "Partially Implemented", Some(50)),
        AnswerOption::new("no", "Not Implemented", Some(0)),
        AnswerOption::new("na", "Not Applicable", None),
    ]
}

/// Create a question with standard options and recommendations for `no` and `partial`.
pub fn make_question(id: &str, criticality: &str, weight: f64) -> Question {
    let mut recommendations = HashMap::new();
    recommendations.insert("no".to_string(), format!("Implement {}", id));
    recommendations.insert("partial".to_string(), format!("Finish {}", id));

    Question {
        id: id.to_string(),
        text: format!("Question {}", id),
        category: None,
        criticality: Some(criticality.to_string()),
        question_weight: Some(weight),
        answer_options: standard_options(),
        recommendations,
    }
}

/// Create a domain from its questions.
pub fn make_domain(id: &str, weight: f64, questions: Vec<Question>) -> Domain {
    Domain {
        id: id.to_string(),
        name: format!("Domain {}", id),
        icon: String::new(),
        description: String::new(),
        weight,
        questions,
    }
}

/// Three-question domain weighted 0.5 / 0.3 / 0.2 with high / medium / low criticality.
pub fn make_three_question_domain(id: &str, weight: f64) -> Domain {
    make_domain(
        id,
        weight,
        vec![
            make_question("q1", "high", 0.5),
            make_question("q2", "medium", 0.3),
            make_question("q3", "low", 0.2),
        ],
    )
}

pub fn make_framework(domains: Vec<Domain>) -> Framework {
    Framework { domains }
}

/// Build a domain's answers from `(question, value)` pairs.
pub fn answers(pairs: &[(&str, &str)]) -> DomainResponses {
    pairs
        .iter()
        .map(|(q, v)| (q.to_string(), v.to_string()))
        .collect()
}

/// Build a full response map from `(domain, answers)` pairs.
pub fn responses(domains: Vec<(&str, DomainResponses)>) -> Responses {
    domains
        .into_iter()
        .map(|(d, a)| (d.to_string(), a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_question() {
        let question = make_question("q1", "high", 0.5);
        assert_eq!(question.answer_options.len(), 4);
        assert_eq!(question.max_score(), Some(100));
    }

    #[test]
    fn test_make_three_question_domain() {
        let domain = make_three_question_domain("d", 1.0);
        let sum: f64 = domain.questions.iter().filter_map(|q| q.question_weight).sum();
        assert!((sum - 1.0).abs() < 0.001);
    }
}
