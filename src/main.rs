use bitrise_io_plugin::{commands, config::ProcessConfig, Cli};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Main entry point for the Bitrise IO plugin.
///
/// Parses command-line arguments, establishes the process-wide configuration
/// from the host-provided environment, and delegates to the command
/// dispatcher. Any failure is reported and mapped to exit code 1; the only
/// other exit code is 0.
#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version requests are not failures
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let config = ProcessConfig::from_env();
    init_logging(cli.loglevel.as_deref(), config.ci_mode);

    let cmd = cli.cmd.unwrap_or_else(|| {
        eprintln!("No command provided. Use --help to see available commands.");
        std::process::exit(1);
    });

    if let Err(err) = commands::run(cmd, &config).await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(loglevel: Option<&str>, ci_mode: bool) {
    // fatal and panic come from the host's log-level vocabulary; tracing
    // tops out at error
    let level = match loglevel.unwrap_or("info") {
        "debug" => "debug",
        "warn" => "warn",
        "error" | "fatal" | "panic" => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_ansi(!ci_mode)
        .init();
}
