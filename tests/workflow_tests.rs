//! Command workflow tests with file-backed persistence

use std::fs;
use std::path::Path;

use cloud_audit::app::{App, AppError};
use cloud_audit::assessment::load_export;
use cloud_audit::cli::{AnswerArgs, Command, ExportArgs, OutputFormat, ReportArgs, RisksArgs};
use cloud_audit::config::AuditConfig;
use cloud_audit::models::Framework;
use cloud_audit::store::{FileResponseStore, ResponseStore};

fn open_app(data_dir: &Path) -> App<FileResponseStore> {
    let config = AuditConfig::default().with_overrides(None, Some(data_dir.to_path_buf()), None);
    let framework = config.load_framework().expect("bundled framework");
    let store = FileResponseStore::new(config.data_dir.clone());
    App::new(framework, config, store).expect("app should open")
}

fn answer(domain: &str, question: &str, value: &str) -> Command {
    Command::Answer(AnswerArgs {
        domain: domain.to_string(),
        question: question.to_string(),
        value: value.to_string(),
    })
}

#[test]
fn answers_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut app = open_app(dir.path());
        app.run(answer("iam", "iam-1", "no")).expect("answer");
        app.run(answer("network", "net-2", "partial")).expect("answer");
    }

    let app = open_app(dir.path());
    assert_eq!(app.session().response("iam", "iam-1"), Some("no"));
    assert_eq!(app.session().response("network", "net-2"), Some("partial"));
    assert!(app.session().has_existing_audit());
}

#[test]
fn clear_removes_saved_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(dir.path());
    app.run(answer("iam", "iam-1", "yes")).expect("answer");

    let store = FileResponseStore::new(dir.path());
    assert!(store.exists());

    app.run(Command::Clear).expect("clear");
    assert!(!store.exists());
    assert!(!open_app(dir.path()).session().has_existing_audit());
}

#[test]
fn stale_snapshot_version_starts_fresh() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("responses.json"),
        r#"{"version":"0.1","lastUpdated":"2024-05-01T12:00:00Z",
            "responses":{"iam":{"iam-1":"no"}}}"#,
    )
    .expect("write snapshot");

    let app = open_app(dir.path());
    assert!(!app.session().has_existing_audit());
}

#[test]
fn corrupt_snapshot_can_still_be_cleared() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileResponseStore::new(dir.path());
    fs::write(store.path(), "{truncated").expect("write snapshot");

    let mut app = open_app(dir.path());
    assert!(!app.session().has_existing_audit());

    app.run(Command::Clear).expect("clear");
    assert!(!store.exists());
}

#[test]
fn corrupt_snapshot_is_replaced_by_next_answer() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("responses.json"), "not json").expect("write snapshot");

    let mut app = open_app(dir.path());
    app.run(answer("iam", "iam-2", "partial")).expect("answer");

    let reopened = open_app(dir.path());
    assert_eq!(reopened.session().response("iam", "iam-2"), Some("partial"));
}

#[test]
fn invalid_answer_is_rejected_without_saving() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(dir.path());

    let err = app.run(answer("iam", "iam-1", "sometimes")).unwrap_err();
    assert!(matches!(err, AppError::User(_)));
    assert!(!FileResponseStore::new(dir.path()).exists());
}

#[test]
fn export_writes_loadable_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir.path().join("data"));
    app.run(answer("iam", "iam-1", "no")).expect("answer");
    app.run(answer("iam", "iam-2", "yes")).expect("answer");

    let output = dir.path().join("exports").join("audit.json");
    app.run(Command::Export(ExportArgs {
        output: Some(output.clone()),
    }))
    .expect("export");

    let snapshot = load_export(&output).expect("load export");
    assert_eq!(snapshot.responses, *app.session().responses());
    assert_eq!(snapshot.scores.domains[0].result.percentage, 50);
    assert_eq!(snapshot.recommendations.len(), 1);
}

#[test]
fn read_only_commands_succeed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(dir.path());
    app.run(answer("logging", "log-1", "partial")).expect("answer");

    app.run(Command::Validate).expect("validate");
    app.run(Command::Status).expect("status");
    app.run(Command::Score).expect("score");
    app.run(Command::Recommendations).expect("recommendations");
    app.run(Command::Risks(RisksArgs { limit: Some(1) })).expect("risks");
    for format in [
        OutputFormat::Pretty,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Compact,
    ] {
        app.run(Command::Report(ReportArgs {
            format,
            limit: None,
        }))
        .expect("report");
    }
}

#[test]
fn custom_framework_file_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("framework.json");
    fs::write(
        &path,
        r#"{"domains":[{"id":"only","name":"Only","weight":1.0,"questions":[
            {"id":"o-1","text":"Single control","criticality":"critical","questionWeight":1.0,
             "answerOptions":[{"value":"yes","label":"Implemented","score":100},
                              {"value":"no","label":"Not Implemented","score":0}]}]}]}"#,
    )
    .expect("write framework");

    let config = AuditConfig::default().with_overrides(Some(path), None, None);
    let framework: Framework = config.load_framework().expect("custom framework");
    assert_eq!(framework.domains.len(), 1);
    assert_eq!(framework.domains[0].questions[0].max_score(), Some(100));
}
