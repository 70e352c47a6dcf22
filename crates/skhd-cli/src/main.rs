mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "skhd=info";

fn main() -> ExitCode {
    let args = cli::parse();

    // Reports go to stdout, logs to stderr.
    let log_directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    match commands::run(args.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
