use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command line interface definition for cloud-audit.
#[derive(Parser, Debug)]
#[command(name = "cloud-audit")]
#[command(about = "Score a cloud security self-assessment and rank its risks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Framework JSON document (default: bundled framework)
    #[arg(long, global = true, value_name = "PATH")]
    pub framework: Option<PathBuf>,

    /// Directory holding saved responses
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbosity")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check the framework document for weight and criticality problems
    Validate,
    /// Record an answer for one question
    Answer(AnswerArgs),
    /// Discard all saved responses
    Clear,
    /// Show per-domain completion
    Status,
    /// Show overall and per-domain scores
    Score,
    /// List every recommendation, highest priority first
    Recommendations,
    /// Show the most pressing risks
    Risks(RisksArgs),
    /// Render the full assessment report
    Report(ReportArgs),
    /// Write scores, responses and recommendations to a JSON file
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnswerArgs {
    /// Domain id (e.g. iam)
    pub domain: String,
    /// Question id (e.g. iam-1)
    pub question: String,
    /// Answer option value (e.g. yes, partial, no, na)
    pub value: String,
}

#[derive(Args, Debug, Clone)]
pub struct RisksArgs {
    /// Maximum number of risks to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Maximum number of top risks in the report
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Destination file (default: cloud-audit-<date>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Pretty,
    /// JSON
    Json,
    /// Markdown executive summary
    Markdown,
    /// One line per domain
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_with_global_flags() {
        let cli = Cli::try_parse_from([
            "cloud-audit",
            "answer",
            "iam",
            "iam-1",
            "yes",
            "--data-dir",
            "/tmp/audit",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/audit")));
        match cli.command {
            Command::Answer(args) => {
                assert_eq!(args.domain, "iam");
                assert_eq!(args.question, "iam-1");
                assert_eq!(args.value, "yes");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn report_format_defaults_to_pretty() {
        let cli = Cli::try_parse_from(["cloud-audit", "report"]).unwrap();
        match cli.command {
            Command::Report(args) => {
                assert_eq!(args.format, OutputFormat::Pretty);
                assert_eq!(args.limit, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn report_format_accepts_markdown() {
        let cli = Cli::try_parse_from(["cloud-audit", "report", "--format", "markdown"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Report(ReportArgs { format: OutputFormat::Markdown, .. })
        ));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["cloud-audit", "status", "-q", "-v"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["cloud-audit"]).is_err());
    }
}
