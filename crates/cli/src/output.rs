//! Output formatting for trace previews and errors.

use anyhow::Error;
use colored::*;
use fastening_tightening_trace::TraceChannel;

/// Leading samples shown per channel.
pub const PREVIEW_LEN: usize = 10;

/// Format one channel preview line: label, unit, first [`PREVIEW_LEN`] values.
///
/// Channels shorter than [`PREVIEW_LEN`] print all of their samples.
pub fn format_preview(channel: TraceChannel, values: &[f64]) -> String {
    let head = values
        .iter()
        .take(PREVIEW_LEN)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} ({}): [{head}]", channel.label(), channel.unit())
}

/// Print a decoded channel preview to stdout.
pub fn print_preview(channel: TraceChannel, values: &[f64]) {
    println!("{}", format_preview(channel, values));
}

/// Print error in human-readable format.
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    // Print error chain if available
    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_to_first_ten() {
        let values: Vec<f64> = (1..=12).map(f64::from).collect();
        let line = format_preview(TraceChannel::Angle, &values);
        assert_eq!(line, "Angle (rad): [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]");
    }

    #[test]
    fn preview_prints_short_channels_whole() {
        let line = format_preview(TraceChannel::Torque, &[-0.26624, 0.1408]);
        assert_eq!(line, "Torque (Nm): [-0.26624, 0.1408]");
    }

    #[test]
    fn preview_of_empty_channel() {
        let line = format_preview(TraceChannel::Angle, &[]);
        assert_eq!(line, "Angle (rad): []");
    }
}
