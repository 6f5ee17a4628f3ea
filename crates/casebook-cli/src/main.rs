//! `casebook` binary: converts a Gherkin feature file into a test-case report.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use casebook_cli::cli::Cli;
use casebook_cli::config::Config;
use casebook_cli::error::CliError;
use casebook_cli::logging::init_logging;
use casebook_cli::run::{Outcome, Request, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&Config::default());
            error!(error = %e, "invalid configuration");
            return report_failure(&e);
        }
    };
    init_logging(&config);

    let request = Request {
        input: cli.input,
        output: cli.output,
        config,
    };
    match run(&request) {
        Ok(Outcome::Empty) => {
            let _ = writeln!(io::stdout(), "No test scenarios found; nothing was written.");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Written { path, test_cases }) => {
            let _ = writeln!(
                io::stdout(),
                "Wrote {test_cases} test cases to {}",
                path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

fn build_config(cli: &Cli) -> Result<Config, CliError> {
    let config = Config::from_env()?;
    Ok(config.apply_overrides(cli.overrides()))
}

fn report_failure(e: &CliError) -> ExitCode {
    let _ = writeln!(io::stderr(), "error: {e:#}");
    ExitCode::from(e.exit_code())
}
