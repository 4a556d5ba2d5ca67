use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

/// Framework document bundled with the crate.
const BUNDLED_FRAMEWORK: &str = include_str!("../assets/framework.json");

/// Answers for a single domain: question id -> selected answer value.
pub type DomainResponses = BTreeMap<String, String>;

/// Sparse answer map: domain id -> question id -> selected answer value.
pub type Responses = BTreeMap<String, DomainResponses>;

#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid framework document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Severity tag on a question, used to rank risks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Critical,
    High,
    Medium,
    Low,
}

impl Criticality {
    /// Sort rank for risk ordering. Only critical, high and medium are
    /// distinguished; everything else shares the medium rank.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium | Self::Low => 2,
        }
    }
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Criticality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown criticality: {}", s)),
        }
    }
}

/// The whole assessment definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    pub domains: Vec<Domain>,
}

impl Framework {
    pub fn from_json(json: &str) -> Result<Self, FrameworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a framework document from disk.
    pub fn load(path: &Path) -> Result<Self, FrameworkError> {
        debug!("Loading framework from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The framework document shipped with the crate.
    pub fn bundled() -> Result<Self, FrameworkError> {
        Self::from_json(BUNDLED_FRAMEWORK)
    }

    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    pub fn total_questions(&self) -> usize {
        self.domains.iter().map(|d| d.questions.len()).sum()
    }
}

/// A thematic group of questions with its share of the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Fraction of the overall score, 0.0 to 1.0.
    pub weight: f64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Domain {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Raw criticality tag as written in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<String>,
    /// `None` when the document has no numeric weight for this question.
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub question_weight: Option<f64>,
    pub answer_options: Vec<AnswerOption>,
    /// Answer value -> remediation text.
    #[serde(default)]
    pub recommendations: HashMap<String, String>,
}

impl Question {
    /// Find the option matching a user answer.
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.answer_options.iter().find(|o| o.value == value)
    }

    /// Full-credit value: the highest non-N/A option score.
    pub fn max_score(&self) -> Option<u32> {
        self.answer_options.iter().filter_map(|o| o.score).max()
    }

    /// Parsed criticality, `None` if missing or unrecognized.
    pub fn criticality(&self) -> Option<Criticality> {
        self.criticality.as_deref().and_then(|c| c.parse().ok())
    }

    /// Remediation text for an answer, `None` when absent or blank.
    pub fn recommendation(&self, value: &str) -> Option<&str> {
        self.recommendations
            .get(value)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
    /// Points for this answer, `None` meaning "not applicable".
    pub score: Option<u32>,
}

impl AnswerOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, score: Option<u32>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            score,
        }
    }
}

fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criticality_parse_is_case_insensitive() {
        assert_eq!("HIGH".parse::<Criticality>().unwrap(), Criticality::High);
        assert_eq!(" critical ".parse::<Criticality>().unwrap(), Criticality::Critical);
        assert!("severe".parse::<Criticality>().is_err());
    }

    #[test]
    fn criticality_rank_groups_low_with_medium() {
        assert_eq!(Criticality::Critical.rank(), 0);
        assert_eq!(Criticality::High.rank(), 1);
        assert_eq!(Criticality::Medium.rank(), 2);
        assert_eq!(Criticality::Low.rank(), 2);
    }

    #[test]
    fn parses_camel_case_document() {
        let json = r#"{
            "domains": [{
                "id": "iam",
                "name": "Identity",
                "weight": 1.0,
                "questions": [{
                    "id": "q1",
                    "text": "MFA enforced?",
                    "criticality": "High",
                    "questionWeight": 1.0,
                    "answerOptions": [
                        {"value": "yes", "label": "Yes", "score": 100},
                        {"value": "na", "label": "N/A", "score": null}
                    ],
                    "recommendations": {"no": "Enable MFA"}
                }]
            }]
        }"#;

        let framework = Framework::from_json(json).unwrap();
        let question = framework.domain("iam").unwrap().question("q1").unwrap();
        assert_eq!(question.question_weight, Some(1.0));
        assert_eq!(question.criticality(), Some(Criticality::High));
        assert_eq!(question.option("na").unwrap().score, None);
        assert_eq!(question.recommendation("no"), Some("Enable MFA"));
        assert_eq!(framework.domains[0].icon, "");
    }

    #[test]
    fn non_numeric_weight_reads_as_missing() {
        let json = r#"{"domains": [{"id": "d", "name": "D", "weight": 1.0, "questions": [
            {"id": "q", "text": "t", "questionWeight": "0.5", "answerOptions": []}
        ]}]}"#;

        let framework = Framework::from_json(json).unwrap();
        assert_eq!(framework.domains[0].questions[0].question_weight, None);
    }

    #[test]
    fn max_score_ignores_not_applicable() {
        let question = Question {
            id: "q".to_string(),
            text: "t".to_string(),
            category: None,
            criticality: None,
            question_weight: Some(1.0),
            answer_options: vec![
                AnswerOption::new("na", "N/A", None),
                AnswerOption::new("partial", "Partial", Some(50)),
                AnswerOption::new("yes", "Yes", Some(100)),
            ],
            recommendations: HashMap::new(),
        };
        assert_eq!(question.max_score(), Some(100));
    }

    #[test]
    fn bundled_framework_parses() {
        let framework = Framework::bundled().unwrap();
        assert_eq!(framework.domains.len(), 6);
        assert!(framework.total_questions() > 0);
    }
}
