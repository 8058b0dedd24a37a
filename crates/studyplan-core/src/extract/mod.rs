//! Heuristic extraction of labeled sections from free text.
//!
//! Every extractor here is a pure function of its inputs and returns the
//! first match only. Patterns are built from escaped literals and run on the
//! `regex` crate's finite-automaton engine, so matching time stays linear in
//! the input length no matter what the text contains.
//!
//! A *label* matches case-insensitively anywhere in the text, but only when
//! it is followed by at least one separator character (`:` or whitespace).
//! The content starts after the whole separator run.

pub mod blocks;

use regex::Regex;

pub use blocks::LabeledBlocks;

/// Build the header pattern for a label: the escaped label followed by a
/// run of separators.
fn header_pattern(label: &str) -> Option<Regex> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    match Regex::new(&format!(r"(?i){}[:\s]+", regex::escape(label))) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(label, error = %e, "could not build header pattern");
            None
        }
    }
}

/// Byte offset where the content after the first `label` header begins.
pub(crate) fn content_start(text: &str, label: &str) -> Option<usize> {
    header_pattern(label)?.find(text).map(|m| m.end())
}

/// Extract the text following `label` up to the next blank line or the end
/// of `text`, trimmed.
///
/// Returns `None` when the label is absent or the captured text is blank.
pub fn extract_section<'t>(text: &'t str, label: &str) -> Option<&'t str> {
    let body = &text[content_start(text, label)?..];
    let end = body.find("\n\n").unwrap_or(body.len());
    let section = body[..end].trim();
    (!section.is_empty()).then_some(section)
}

/// Try each label in order and return the first section found.
pub fn extract_first_section<'t>(text: &'t str, labels: &[&str]) -> Option<&'t str> {
    labels
        .iter()
        .find_map(|label| extract_section(text, label))
}

/// Extract the rest of the line following `label`, trimmed.
///
/// The separator run may cross line breaks, so `"Label:\nvalue"` yields
/// `"value"`.
pub fn extract_line<'t>(text: &'t str, label: &str) -> Option<&'t str> {
    let body = &text[content_start(text, label)?..];
    let end = body.find('\n').unwrap_or(body.len());
    let line = body[..end].trim();
    (!line.is_empty()).then_some(line)
}

/// Split a block into list items on newlines, bullets and hyphens, dropping
/// blank fragments.
pub fn split_fragments(text: &str) -> Vec<String> {
    text.split(['\n', '•', '-'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
