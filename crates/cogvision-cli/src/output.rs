//! Terminal output formatting.

use std::future::Future;
use std::time::Duration;

use colored::Colorize;
use cogvision_core::render::{render_body, render_document};
use cogvision_core::{ErrorKind, VisionError};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

/// Print a section heading.
pub fn print_heading(text: &str) {
    println!("{}", text.bold());
}

/// Print the step about to run.
pub fn print_step(label: &str, source: &str) {
    println!();
    println!("{} {}: {}", "→".dimmed(), label.cyan(), source);
}

/// Print a response document.
pub fn print_response(document: &Value) {
    println!("\nResponse:\n\n{}\n", render_document(document));
}

/// Print a configuration problem once, ahead of a sample run.
pub fn print_config_error(err: &anyhow::Error) {
    println!("{} {} {}", "✗".red().bold(), "[configuration]".dimmed(), format!("{:#}", err).red());
}

/// Print a one-line diagnostic for a failed call, plus any upstream body.
pub fn print_failure(err: &VisionError) {
    let tag = match err.kind() {
        ErrorKind::Validation => "invalid input",
        ErrorKind::Config => "configuration",
        ErrorKind::Io => "io",
        ErrorKind::Transport => "transport",
        ErrorKind::UpstreamStatus => "upstream status",
        ErrorKind::UpstreamFormat => "upstream format",
    };
    println!("{} {} {}", "✗".red().bold(), format!("[{}]", tag).dimmed(), err.to_string().red());
    print_error_body(err);
}

/// Print the upstream body attached to an error, if any.
pub fn print_error_body(err: &VisionError) {
    if let Some(body) = err.response_body() {
        if !body.trim().is_empty() {
            println!("\nResponse:\n\n{}\n", render_body(body));
        }
    }
}

/// Print the sample run summary.
pub fn print_summary(succeeded: usize, total: usize) {
    let line = format!("{}/{} calls succeeded", succeeded, total);
    if succeeded == total {
        println!("{} {}", "✓".green().bold(), line);
    } else {
        println!("{} {}", "!".yellow().bold(), line.yellow());
    }
}

/// Show a spinner on stderr while `fut` runs.
pub async fn with_spinner<F, T>(message: String, fut: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fut.await;
    spinner.finish_and_clear();
    result
}
