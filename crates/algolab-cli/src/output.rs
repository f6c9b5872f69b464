//! Text formatting for results and listings.

use std::io::{self, Write};
use std::time::Duration;

use algolab_core::Outcome;

/// Sequences longer than this are abbreviated unless verbose.
const MAX_INLINE_ITEMS: usize = 20;

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format an outcome, abbreviating long sequences unless `verbose`.
#[must_use]
pub fn format_outcome(outcome: &Outcome, verbose: bool) -> String {
    let items: Vec<String> = match outcome {
        Outcome::Sequence(values) => values
            .iter()
            .map(|&v| algolab_core::JsNumber(v).to_string())
            .collect(),
        _ => return outcome.to_string(),
    };

    if verbose || items.len() <= MAX_INLINE_ITEMS {
        return format!("[{}]", items.join(", "));
    }
    format!(
        "[{}, ..., {}] ({} items)",
        items[..10].join(", "),
        items[items.len() - 5..].join(", "),
        items.len()
    )
}

/// Lay two blocks of text out in columns separated by a vertical rule.
#[must_use]
pub fn side_by_side(left_title: &str, left: &str, right_title: &str, right: &str) -> String {
    let left_lines: Vec<&str> = std::iter::once(left_title).chain(left.lines()).collect();
    let right_lines: Vec<&str> = std::iter::once(right_title).chain(right.lines()).collect();
    let width = left_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let rows = left_lines.len().max(right_lines.len());
    let mut out = String::new();
    for i in 0..rows {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        let padding = width - l.chars().count();
        let line = format!("{l}{} │ {r}", " ".repeat(padding));
        out.push_str(line.trim_end());
        out.push('\n');
        if i == 0 {
            out.push_str(&format!("{}─┼─{}\n", "─".repeat(width), "─".repeat(width)));
        }
    }
    out
}

/// Write `content` to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, content: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{content}")?;
    Ok(())
}
