use clap::Parser;
use log::LevelFilter;

use cloud_audit::app::App;
use cloud_audit::cli::Cli;
use cloud_audit::config::AuditConfig;
use cloud_audit::store::FileResponseStore;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_target(false)
        .format_timestamp(None)
        .init();

    // Build config from environment, then apply CLI overrides
    let config =
        AuditConfig::from_env().with_overrides(cli.framework.clone(), cli.data_dir.clone(), None);

    let framework = match config.load_framework() {
        Ok(framework) => framework,
        Err(err) => {
            log::error!("Failed to load framework: {}", err);
            std::process::exit(1);
        }
    };
    let store = FileResponseStore::new(config.data_dir.clone());

    let result = App::new(framework, config, store).and_then(|mut app| app.run(cli.command));
    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
