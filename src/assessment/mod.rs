//! Scoring and recommendation engine.
//!
//! Every function here is pure: it reads a framework and a response snapshot
//! and returns new values, so the same inputs always give the same output.

pub mod export;
pub mod progress;
pub mod ranking;
pub mod report;
pub mod risk;
pub mod scoring;
pub mod types;

pub use export::{load_export, save_export, ExportError, ExportSnapshot};
pub use progress::{audit_progress, domain_progress, AuditProgress, DomainProgress};
pub use ranking::{generate_recommendations, top_risks, DEFAULT_TOP_RISKS};
pub use risk::{risk_color, RiskLevel};
pub use scoring::{score_domain, score_overall};
pub use types::{DomainScore, DomainScoreResult, OverallScoreResult, Priority, Recommendation, Risk};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Framework, Responses};

/// Everything the presentation layer needs from one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub scores: OverallScoreResult,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
    pub top_risks: Vec<Risk>,
}

impl AuditReport {
    /// Score the snapshot, classify it and rank its risks.
    pub fn build(framework: &Framework, responses: &Responses, top_risk_limit: usize) -> Self {
        let scores = score_overall(&framework.domains, responses);
        let risk_level = RiskLevel::classify(scores.overall as f64);
        let recommendations = generate_recommendations(&scores.domains, responses);
        let top_risks = top_risks(&scores.domains, responses, framework, top_risk_limit);

        debug!(
            "Scored {} domains: overall {} ({}), {} recommendations, {} top risks",
            scores.domains.len(),
            scores.overall,
            risk_level,
            recommendations.len(),
            top_risks.len()
        );

        Self {
            scores,
            risk_level,
            recommendations,
            top_risks,
        }
    }

    /// Snapshot for export, carrying the answers it was built from.
    pub fn to_export(&self, responses: &Responses) -> ExportSnapshot {
        ExportSnapshot::new(
            self.scores.clone(),
            responses.clone(),
            self.recommendations.clone(),
        )
    }
}
