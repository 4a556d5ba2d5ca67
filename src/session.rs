//! In-progress assessment answers.

use crate::models::Responses;

/// The user's answers, held explicitly and handed to the engine by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSession {
    responses: Responses,
}

impl AuditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_responses(responses: Responses) -> Self {
        Self { responses }
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    /// Record (or replace) one answer.
    pub fn update_response(
        &mut self,
        domain_id: impl Into<String>,
        question_id: impl Into<String>,
        answer: impl Into<String>,
    ) {
        self.responses
            .entry(domain_id.into())
            .or_default()
            .insert(question_id.into(), answer.into());
    }

    pub fn response(&self, domain_id: &str, question_id: &str) -> Option<&str> {
        self.responses
            .get(domain_id)
            .and_then(|d| d.get(question_id))
            .map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }

    /// True once any domain holds at least one answer.
    pub fn has_existing_audit(&self) -> bool {
        self.responses.values().any(|d| !d.is_empty())
    }
}
