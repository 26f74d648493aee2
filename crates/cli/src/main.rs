// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test suite binary entry point.

use clap::Parser;
use tracing::debug;

use testsuite::cli::Cli;
use testsuite::colors::Palette;
use testsuite::diagnostic::{print_error, print_warning, vacuous_cases};
use testsuite::registry::{builtin, default_executable, load_suite};
use testsuite::{exit_codes, Reporter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(cli.log_level()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let exe = cli.exe.clone().unwrap_or_else(default_executable);
    debug!(exe = %exe.display(), "target executable");

    let cases = match &cli.suite {
        Some(path) => match load_suite(path, &exe) {
            Ok(cases) => cases,
            Err(e) => {
                print_error(format_args!("{}: {}", path.display(), e));
                std::process::exit(exit_codes::ERROR);
            }
        },
        None => builtin(&exe),
    };

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), Palette::for_stdout(cli.color));

    if cli.list {
        reporter.list(&cases)?;
        return Ok(());
    }

    for warning in vacuous_cases(&cases) {
        print_warning(warning);
    }

    let summary = match reporter.run_suite(&cases).await {
        Ok(summary) => summary,
        Err(e) => {
            print_error(format_args!("failed to write report: {}", e));
            std::process::exit(exit_codes::ERROR);
        }
    };

    std::process::exit(summary.exit_code());
}
