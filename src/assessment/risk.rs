//! Risk bands for 0-100 scores.

use serde::{Deserialize, Serialize};

/// Fallback display color for an unrecognized level name.
pub const UNKNOWN_RISK_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Band a score: >=80 Low, >=60 Medium, >=40 High, anything else Critical.
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            Self::Low
        } else if score >= 60.0 {
            Self::Medium
        } else if score >= 40.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#10b981",
            Self::Medium => "#f59e0b",
            Self::High => "#ef4444",
            Self::Critical => "#991b1b",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            Self::Low => "#d1fae5",
            Self::Medium => "#fed7aa",
            Self::High => "#fee2e2",
            Self::Critical => "#fecaca",
        }
    }

    /// Executive-summary reading of the band.
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::Low => {
                "The organization demonstrates a strong security posture with comprehensive controls in place. \
                 Focus should be on maintaining current practices and addressing remaining gaps."
            }
            Self::Medium => {
                "The organization has implemented foundational security controls but exhibits notable gaps \
                 that require attention. Prioritize addressing High priority findings to reduce risk exposure."
            }
            Self::High => {
                "The organization faces significant security risks due to incomplete control implementation. \
                 Immediate action is required to address critical gaps, particularly in high-weight domains."
            }
            Self::Critical => {
                "The organization's security posture presents severe risk exposure. Critical controls are \
                 missing or inadequate. Urgent remediation is required to protect against common attack vectors."
            }
        }
    }

    /// ANSI escape for terminal output.
    pub(crate) fn ansi(&self) -> &'static str {
        match self {
            Self::Low => "\x1b[32m",
            Self::Medium => "\x1b[33m",
            Self::High => "\x1b[31m",
            Self::Critical => "\x1b[1;31m",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

/// Display color for a level name, falling back to grey.
pub fn risk_color(level: &str) -> &'static str {
    level
        .parse::<RiskLevel>()
        .map(|l| l.color())
        .unwrap_or(UNKNOWN_RISK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(RiskLevel::classify(80.0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(79.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(60.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(59.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(40.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(39.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Critical);
    }

    #[test]
    fn classify_out_of_range() {
        assert_eq!(RiskLevel::classify(150.0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(-20.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(79.99), RiskLevel::Medium);
    }

    #[test]
    fn colors_with_fallback() {
        assert_eq!(risk_color("Low"), "#10b981");
        assert_eq!(risk_color("Critical"), "#991b1b");
        assert_eq!(risk_color("Severe"), UNKNOWN_RISK_COLOR);
        assert_eq!(RiskLevel::Medium.background_color(), "#fed7aa");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::Critical] {
            assert_eq!(level.to_string().parse::<RiskLevel>().unwrap(), level);
        }
    }
}
