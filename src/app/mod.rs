use log::{info, warn};

use crate::assessment::{
    self, audit_progress, generate_recommendations, save_export, score_overall, top_risks,
    AuditReport, ExportError, RiskLevel,
};
use crate::cli::{AnswerArgs, Command, ExportArgs, OutputFormat, ReportArgs, RisksArgs};
use crate::config::AuditConfig;
use crate::models::{Framework, FrameworkError};
use crate::session::AuditSession;
use crate::store::{load_responses, ResponseStore, StoreError};
use crate::utils::plural;
use crate::validation::validate_framework;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Framework(#[from] FrameworkError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Framework validation failed with {0} issue(s)")]
    Validation(usize),
    #[error("{0}")]
    User(String),
}

pub struct App<S: ResponseStore> {
    framework: Framework,
    config: AuditConfig,
    store: S,
    session: AuditSession,
}

impl<S: ResponseStore> App<S> {
    /// Restore any saved answers from `store`.
    pub fn new(framework: Framework, config: AuditConfig, store: S) -> Result<Self, AppError> {
        let session = AuditSession::from_responses(load_responses(&store)?);
        Ok(Self {
            framework,
            config,
            store,
            session,
        })
    }

    pub fn session(&self) -> &AuditSession {
        &self.session
    }

    pub fn run(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Validate => self.handle_validate(),
            Command::Answer(args) => self.handle_answer(args),
            Command::Clear => self.handle_clear(),
            Command::Status => self.handle_status(),
            Command::Score => self.handle_score(),
            Command::Recommendations => self.handle_recommendations(),
            Command::Risks(args) => self.handle_risks(args),
            Command::Report(args) => self.handle_report(args),
            Command::Export(args) => self.handle_export(args),
        }
    }

    /// Score the current answers with the given top-risk limit (config default when `None`).
    pub fn report(&self, limit: Option<usize>) -> AuditReport {
        AuditReport::build(
            &self.framework,
            self.session.responses(),
            limit.unwrap_or(self.config.top_risks),
        )
    }

    fn handle_validate(&mut self) -> Result<(), AppError> {
        let result = validate_framework(&self.framework);
        if !result.is_valid() {
            return Err(AppError::Validation(result.issues.len()));
        }

        info!(
            "Framework is valid: {}, {}",
            plural(self.framework.domains.len(), "domain"),
            plural(self.framework.total_questions(), "question")
        );
        Ok(())
    }

    fn handle_answer(&mut self, args: AnswerArgs) -> Result<(), AppError> {
        let domain = self.framework.domain(&args.domain).ok_or_else(|| {
            AppError::User(format!("Unknown domain '{}'", args.domain))
        })?;
        let question = domain.question(&args.question).ok_or_else(|| {
            AppError::User(format!(
                "Unknown question '{}' in domain '{}'",
                args.question, args.domain
            ))
        })?;
        let option = question.option(&args.value).ok_or_else(|| {
            let valid: Vec<&str> = question
                .answer_options
                .iter()
                .map(|o| o.value.as_str())
                .collect();
            AppError::User(format!(
                "Invalid answer '{}' for {}; expected one of: {}",
                args.value,
                args.question,
                valid.join(", ")
            ))
        })?;
        let label = option.label.clone();

        self.session.update_response(
            args.domain.as_str(),
            args.question.as_str(),
            args.value.as_str(),
        );
        self.store.save(self.session.responses())?;

        info!("{}/{}: {}", args.domain, args.question, label);
        Ok(())
    }

    fn handle_clear(&mut self) -> Result<(), AppError> {
        if !self.session.has_existing_audit() && !self.store.exists() {
            info!("No saved responses to clear.");
            return Ok(());
        }

        self.session.clear();
        self.store.clear()?;
        info!("Cleared all saved responses.");
        Ok(())
    }

    fn handle_status(&mut self) -> Result<(), AppError> {
        if !self.session.has_existing_audit() {
            info!(
                "No answers recorded yet. Start with: cloud-audit answer <domain> <question> <value>"
            );
        }

        let progress = audit_progress(&self.framework.domains, self.session.responses());
        for (domain, p) in self.framework.domains.iter().zip(&progress.domains) {
            println!(
                "{:<32} {:>3}/{:<3} {:>3}%{}",
                domain.name,
                p.completed,
                p.total,
                p.percentage,
                if p.is_complete { "  done" } else { "" }
            );
        }
        println!(
            "\nAnswered {}/{} ({}%)",
            progress.total_answered, progress.total_questions, progress.overall_percentage
        );
        Ok(())
    }

    fn handle_score(&mut self) -> Result<(), AppError> {
        let scores = score_overall(&self.framework.domains, self.session.responses());
        let level = RiskLevel::classify(scores.overall as f64);

        println!("Overall: {}/100 ({} Risk)", scores.overall, level);
        for domain in &scores.domains {
            println!(
                "  {:<32} {:>3}%  ({} answered of {})",
                domain.domain.name,
                domain.result.percentage,
                domain.result.answered_count,
                domain.result.total_count
            );
        }
        println!(
            "Completion: {}% ({}/{})",
            scores.completion_percentage, scores.total_answered, scores.total_questions
        );
        Ok(())
    }

    fn handle_recommendations(&mut self) -> Result<(), AppError> {
        let scores = score_overall(&self.framework.domains, self.session.responses());
        let recommendations = generate_recommendations(&scores.domains, self.session.responses());

        if recommendations.is_empty() {
            info!("No recommendations.");
            return Ok(());
        }

        for rec in &recommendations {
            println!("[{}] {}: {}", rec.priority, rec.domain, rec.question);
            println!("    {}", rec.recommendation);
        }
        Ok(())
    }

    fn handle_risks(&mut self, args: RisksArgs) -> Result<(), AppError> {
        let responses = self.session.responses();
        let scores = score_overall(&self.framework.domains, responses);
        let limit = args.limit.unwrap_or(self.config.top_risks);
        let risks = top_risks(&scores.domains, responses, &self.framework, limit);

        if risks.is_empty() {
            info!("No critical risks identified.");
            return Ok(());
        }

        for (i, risk) in risks.iter().enumerate() {
            println!(
                "{}. [{} | {}] {}: {}",
                i + 1,
                risk.priority,
                risk.criticality,
                risk.domain,
                risk.question
            );
            println!("   Impact: {}", risk.risk_impact);
            println!("   Action: {}", risk.recommendation);
        }
        Ok(())
    }

    fn handle_report(&mut self, args: ReportArgs) -> Result<(), AppError> {
        if !self.session.has_existing_audit() {
            warn!("No answers recorded; the report will score every domain as 0%");
        }
        let report = self.report(args.limit);
        println!("{}", assessment::report::format_report(&report, convert_format(args.format)));
        Ok(())
    }

    fn handle_export(&mut self, args: ExportArgs) -> Result<(), AppError> {
        let report = self.report(None);
        let snapshot = report.to_export(self.session.responses());
        let path = save_export(&snapshot, args.output.as_deref())?;
        info!("Assessment exported to: {}", path.display());
        Ok(())
    }
}

fn convert_format(format: OutputFormat) -> assessment::report::OutputFormat {
    match format {
        OutputFormat::Pretty => assessment::report::OutputFormat::Pretty,
        OutputFormat::Json => assessment::report::OutputFormat::Json,
        OutputFormat::Markdown => assessment::report::OutputFormat::Markdown,
        OutputFormat::Compact => assessment::report::OutputFormat::Compact,
    }
}
