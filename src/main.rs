//! ringo - Apple device lookup CLI
//!
//! Identify a device by model number, name, or attributes.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ringo::app::AppContext;
use ringo::cli::output::robot_error;
use ringo::cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config can change the output format, so load it before anything is reported.
    let ctx = AppContext::from_cli(&cli);
    let format = ctx.as_ref().map_or_else(
        |_| cli.output_format().unwrap_or_default(),
        |ctx| ctx.output_format,
    );
    cli.apply_color_mode(format);
    init_tracing(&cli, format);

    let result = ctx.and_then(|ctx| {
        debug!(data_dir = %ctx.data_dir.display(), "resolved catalog directory");
        ringo::cli::commands::run(&ctx, &cli.command)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if format.is_machine_readable() {
                // Machine mode: JSON error envelope on stdout
                println!(
                    "{}",
                    serde_json::to_string(&robot_error(&e)).unwrap_or_default()
                );
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli, format: OutputFormat) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "warn,ringo=info",
        2 => "info,ringo=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if format.is_machine_readable() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
