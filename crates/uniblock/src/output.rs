//! Output formatting: a colored sentence or pretty JSON.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;

use uniblock_core::Effect;

use crate::cli::{ColorMode, OutputFormat};

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Render an effect in the chosen format.
pub fn render_effect(effect: &Effect, format: &OutputFormat, color: bool) -> String {
    match format {
        OutputFormat::Text => render_text(effect, color),
        OutputFormat::Json => {
            serde_json::to_string_pretty(effect).unwrap_or_else(|_| effect.to_string())
        }
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn render_text(effect: &Effect, color: bool) -> String {
    let line = effect.to_string();
    if !color {
        return line;
    }
    match effect {
        Effect::Blocked { .. } | Effect::Reblocked { .. } => line.red().bold().to_string(),
        Effect::Unblocked { .. } => line.green().bold().to_string(),
    }
}
