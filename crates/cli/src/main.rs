//! fastendump - Tightening Trace Preview CLI
//!
//! Decodes the embedded angle/torque capture of one fastening cycle and
//! prints the first ten samples of each channel.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod capture;
mod output;

use anyhow::Result;
use clap::Parser;
use fastening_tightening_trace::{TraceChannel, TraceFormatError, decode_channel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fastendump")]
#[command(about = "Preview the embedded tightening trace capture")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fastendump={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run() {
        Ok(()) => Ok(()),
        Err(e) => {
            output::print_error_human(&e);

            // Decode failures carry their own exit code
            let exit_code = match e.downcast_ref::<TraceFormatError>() {
                Some(_) => 2,
                None => 1,
            };

            std::process::exit(exit_code);
        }
    }
}

fn run() -> Result<()> {
    for (channel, payload) in [
        (TraceChannel::Angle, capture::ANGLE_PAYLOAD),
        (TraceChannel::Torque, capture::TORQUE_PAYLOAD),
    ] {
        let values = decode_channel(payload, channel)?;
        tracing::debug!(channel = channel.label(), samples = values.len(), "channel decoded");
        output::print_preview(channel, &values);
    }
    Ok(())
}
