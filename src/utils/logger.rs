use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_DIRECTIVE: &str = "subscriber_rules=debug,info";

fn default_directive(verbose: bool, quiet: &'static str) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        quiet
    }
}

fn env_filter(verbose: bool, quiet: &'static str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)))
}

pub fn init_cli_logger(verbose: bool) {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter(verbose, "subscriber_rules=warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, "subscriber_rules=info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
