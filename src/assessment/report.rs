//! Report formatting for assessment output.

use crate::assessment::risk::RiskLevel;
use crate::assessment::types::{DomainScore, Priority, Risk};
use crate::assessment::AuditReport;
use crate::utils::plural;

/// Output format for assessment reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted output.
    Pretty,
    /// JSON output.
    Json,
    /// Markdown executive summary.
    Markdown,
    /// Compact single line per domain.
    Compact,
}

/// Format an audit report for output.
pub fn format_report(report: &AuditReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => format_pretty(report),
        OutputFormat::Json => format_json(report),
        OutputFormat::Markdown => format_markdown(report),
        OutputFormat::Compact => format_compact(report),
    }
}

/// Headline finding for a domain row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainFinding {
    Strength(String),
    Gap(String),
}

impl DomainFinding {
    pub fn text(&self) -> &str {
        match self {
            Self::Strength(text) | Self::Gap(text) => text,
        }
    }
}

pub fn domain_finding(domain: &DomainScore, top_risks: &[Risk]) -> DomainFinding {
    if domain.result.percentage >= 80 {
        return DomainFinding::Strength(format!(
            "Strong controls in place ({}/{} questions completed)",
            domain.result.answered_count, domain.result.total_count
        ));
    }

    let gaps = top_risks
        .iter()
        .filter(|r| r.domain_id == domain.domain.id)
        .count();
    if gaps > 0 {
        DomainFinding::Gap(format!("{} identified", plural(gaps, "critical gap")))
    } else {
        DomainFinding::Gap("Improvement opportunities identified".to_string())
    }
}

/// Short-term (High, up to 3) and medium-term (Medium, up to 2) actions.
pub fn next_steps(top_risks: &[Risk]) -> (Vec<&Risk>, Vec<&Risk>) {
    let short_term = top_risks
        .iter()
        .filter(|r| r.priority == Priority::High)
        .take(3)
        .collect();
    let medium_term = top_risks
        .iter()
        .filter(|r| r.priority == Priority::Medium)
        .take(2)
        .collect();
    (short_term, medium_term)
}

fn format_pretty(report: &AuditReport) -> String {
    let mut output = String::new();
    let scores = &report.scores;

    output.push_str(&format!(
        "Overall Score: {}{}/100 ({} Risk)\x1b[0m\n",
        report.risk_level.ansi(),
        scores.overall,
        report.risk_level
    ));
    output.push_str(&format!(
        "Completion: {}% ({}/{} questions)\n\n",
        scores.completion_percentage, scores.total_answered, scores.total_questions
    ));

    output.push_str("Domains:\n");
    for domain in &scores.domains {
        let level = RiskLevel::classify(domain.result.percentage as f64);
        output.push_str(&format!(
            "  {:<32} {} {}{:>3}%\x1b[0m  weight {:>3}%  {}/{}\n",
            domain.domain.name,
            score_bar(domain.result.percentage, 20),
            level.ansi(),
            domain.result.percentage,
            (domain.domain.weight * 100.0).round(),
            domain.result.answered_count,
            domain.result.total_count
        ));
    }
    output.push('\n');

    if report.top_risks.is_empty() {
        output.push_str("No critical risks identified.\n");
    } else {
        output.push_str("Top Risks:\n");
        for (i, risk) in report.top_risks.iter().enumerate() {
            output.push_str(&format!(
                "  {}. [{} | {}] {}: {}\n",
                i + 1,
                risk.priority,
                risk.criticality,
                risk.domain,
                risk.question
            ));
            output.push_str(&format!("     Answer: {}\n", risk.answer));
            output.push_str(&format!("     Action: {}\n", risk.recommendation));
        }
    }

    if !report.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for rec in &report.recommendations {
            output.push_str(&format!(
                "  - [{}] {}: {}\n",
                rec.priority, rec.domain, rec.recommendation
            ));
        }
    }

    output
}

/// Render a 0-100 value as a fixed-width bar.
fn score_bar(percentage: u32, width: usize) -> String {
    let filled = (percentage.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn format_json(report: &AuditReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("Error: {}", e))
}

fn format_markdown(report: &AuditReport) -> String {
    let mut output = String::new();
    let scores = &report.scores;

    output.push_str(&format!(
        "# Cloud Security Audit\n\n## Executive Summary Report\n\n**Overall Score**: {}/100\n**Risk Level**: {}\n**Completed**: {}%\n\n",
        scores.overall, report.risk_level, scores.completion_percentage
    ));

    // Overview
    output.push_str("## 1. Assessment Overview\n\n### Scope\n\n");
    for domain in &scores.domains {
        output.push_str(&format!(
            "- **{}** ({}% weight)\n",
            domain.domain.name,
            (domain.domain.weight * 100.0).round()
        ));
    }
    output.push_str(
        "\n### Methodology\n\n\
         - **Implemented** (100 points): control is fully implemented and operational\n\
         - **Partially Implemented** (50 points): control exists but has gaps\n\
         - **Not Implemented** (0 points): control is absent or not functional\n\
         - **Not Applicable**: control is not relevant (excluded from scoring)\n\n",
    );

    // Posture
    output.push_str(&format!(
        "## 2. Overall Security Posture\n\n{}\n\n",
        report.risk_level.interpretation()
    ));

    // Domain table
    output.push_str("## 3. Domain-Level Summary\n\n| Domain | Score | Weight | Status | Key Finding |\n|--------|-------|--------|--------|-------------|\n");
    for domain in &scores.domains {
        let level = RiskLevel::classify(domain.result.percentage as f64);
        let finding = domain_finding(domain, &report.top_risks);
        output.push_str(&format!(
            "| {} | {}% | {}% | {} | {} |\n",
            domain.domain.name,
            domain.result.percentage,
            (domain.domain.weight * 100.0).round(),
            level,
            finding.text()
        ));
    }
    output.push('\n');

    // Top risks
    output.push_str("## 4. Top Security Risks\n\n");
    if report.top_risks.is_empty() {
        output.push_str("No critical risks identified. Excellent security posture!\n\n");
    }
    for (i, risk) in report.top_risks.iter().enumerate() {
        output.push_str(&format!(
            "### {}. {} ({} Priority)\n\n**Control**: {}\n\n**Risk Impact**: {}\n\n**Recommended Action**: {}\n\n",
            i + 1,
            risk.domain,
            risk.priority,
            risk.question,
            risk.risk_impact,
            risk.recommendation
        ));
    }

    // Next steps
    output.push_str("## 5. Recommended Next Steps\n\n");
    let (short_term, medium_term) = next_steps(&report.top_risks);
    if !short_term.is_empty() {
        output.push_str("### Short-Term Actions (0-30 days)\n\n");
        for (i, risk) in short_term.iter().enumerate() {
            output.push_str(&format!("{}. **{}**: {}\n", i + 1, risk.domain, risk.recommendation));
        }
        output.push('\n');
    }
    if !medium_term.is_empty() {
        output.push_str("### Medium-Term Actions (30-90 days)\n\n");
        for (i, risk) in medium_term.iter().enumerate() {
            output.push_str(&format!("{}. **{}**: {}\n", i + 1, risk.domain, risk.recommendation));
        }
        output.push('\n');
    }
    if short_term.is_empty() && medium_term.is_empty() {
        output.push_str(
            "Continue monitoring and maintaining current security controls. Regular reassessment recommended.\n\n",
        );
    }

    // Notes
    output.push_str(&format!(
        "## 6. Assessment Notes\n\n\
         - **Self-Reported Data**: based on self-reported responses, not independently validated.\n\
         - **Control Presence vs. Effectiveness**: scores reflect reported presence of controls, not their effectiveness.\n\
         - **Point-in-Time Assessment**: results represent the posture at the time of assessment.\n\
         - **Scope Limitations**: covers {} controls across {} domains.\n",
        scores.total_questions,
        scores.domains.len()
    ));

    output
}

fn format_compact(report: &AuditReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Overall: {}% [{}] {}/{} answered\n",
        report.scores.overall,
        report.risk_level,
        report.scores.total_answered,
        report.scores.total_questions
    ));

    for domain in &report.scores.domains {
        output.push_str(&format!(
            "{} {}% [{}] {}/{}\n",
            domain.domain.id,
            domain.result.percentage,
            RiskLevel::classify(domain.result.percentage as f64),
            domain.result.answered_count,
            domain.result.total_count
        ));
    }

    output
}
