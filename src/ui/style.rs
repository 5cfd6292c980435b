use console::style;
use std::fmt::Display;

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, notes, rules
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: minor tensions, warnings
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold: major conflicts
pub fn alert<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Green: chosen ids and values
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Green bold: resolved preset, do-list bullets
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Cyan bold: bullet points
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan: field labels
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}
