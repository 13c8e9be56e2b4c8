use anyhow::Context;
use clap::Parser;
use subscriber_rules::utils::{logger, validation::Validate};
use subscriber_rules::{
    CliConfig, DemoRunner, InMemorySubscriberDao, OutputFormat, ReportWriter, SeedFile,
    SubscriberError,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting subscriber-rules");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_failure(&e, "Configuration validation failed");
        std::process::exit(1);
    }

    let seed = match &config.seed {
        Some(path) => SeedFile::from_file(path)
            .with_context(|| format!("Failed to load seed file '{}'", path))?,
        None => SeedFile::builtin(),
    };

    // invalid subscriber data ends the run before anything is stored
    if let Err(e) = seed.validate() {
        report_failure(&e, "Invalid subscriber");
        std::process::exit(1);
    }

    let subscribers = match seed.into_subscribers() {
        Ok(subscribers) => subscribers,
        Err(e) => {
            report_failure(&e, "Invalid subscriber");
            std::process::exit(1);
        }
    };

    let mut dao = InMemorySubscriberDao::new();
    dao.save_all(subscribers);
    tracing::info!("Stored {} subscribers", dao.len());

    let runner = DemoRunner::new(config.extend_months);
    let stdout = std::io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), config.format);

    if let Err(e) = runner.run(&dao, &mut writer) {
        report_failure(&e, "Rule application failed");
        std::process::exit(1);
    }

    tracing::info!("Finished");
    Ok(())
}

fn report_failure(e: &SubscriberError, context: &str) {
    tracing::error!("{}: {}", context, e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
