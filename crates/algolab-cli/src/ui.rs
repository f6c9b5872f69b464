//! Styling helpers that honor `NO_COLOR`.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// A section heading.
#[must_use]
pub fn heading(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// A field label such as `Result:`.
#[must_use]
pub fn label(text: &str) -> String {
    if is_color_disabled() {
        format!("{text}:")
    } else {
        style(format!("{text}:")).bold().to_string()
    }
}

/// The `[ERROR]` tag printed before error messages.
#[must_use]
pub fn error_tag() -> String {
    if is_color_disabled() {
        "[ERROR]".to_string()
    } else {
        style("[ERROR]").red().bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_contains_text() {
        assert!(heading("QuickSort").contains("QuickSort"));
    }

    #[test]
    fn label_ends_with_colon_text() {
        assert!(label("Result").contains("Result:"));
    }

    #[test]
    fn error_tag_contains_error() {
        assert!(error_tag().contains("[ERROR]"));
    }
}
