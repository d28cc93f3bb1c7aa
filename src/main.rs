//! mcqx - MCQ extraction CLI
//!
//! Parse and trim multiple-choice questions out of model output.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mcqx::cli::output::{emit_robot, robot_error};
use mcqx::cli::{Cli, commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.robot {
                // Robot mode: JSON error envelope on stdout
                if emit_robot(&robot_error("error", e.to_string())).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,mcqx=info",
        1 => "info,mcqx=debug",
        2 => "debug,mcqx=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Human-readable logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
