// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmt - Conventional Commit Prompt

use clap::Parser;
use cmt::cli::{run, Cli};
use cmt::CmtError;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print an error the way the user should see it.
fn report(err: &CmtError) {
    let line = match err {
        CmtError::NothingToCommit => style(err.to_string()).yellow().bright(),
        CmtError::Input { .. } => style(err.to_string()),
        _ => style(err.to_string()).red(),
    };
    eprintln!("{}", line.for_stderr());
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("cmt=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
