//! Bounded labeled-block extraction.
//!
//! A [`LabeledBlocks`] is built from an ordered set of sibling labels (week
//! days, goal timeframes, subject names). The block for one label runs from
//! its header to the next line that starts with any label of the set, or to
//! the end of the text.

use regex::Regex;

use super::content_start;

/// Extractor for blocks introduced by one of a fixed set of labels.
#[derive(Debug, Clone)]
pub struct LabeledBlocks {
    labels: Vec<String>,
    /// Newline immediately followed by any label, case-insensitive.
    boundary: Option<Regex>,
}

impl LabeledBlocks {
    /// Create an extractor for the given sibling labels. Blank labels are
    /// ignored.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let labels: Vec<String> = labels
            .iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        let boundary = if labels.is_empty() {
            None
        } else {
            let alternation = labels
                .iter()
                .map(|l| regex::escape(l))
                .collect::<Vec<_>>()
                .join("|");
            match Regex::new(&format!(r"(?i)\n(?:{alternation})")) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(error = %e, "could not build block boundary pattern");
                    None
                }
            }
        };

        Self { labels, boundary }
    }

    /// The labels this extractor bounds blocks with, in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Return the raw (untrimmed) block following the first header for
    /// `label`.
    ///
    /// `Some("")` is possible when the header is the last thing in the text;
    /// callers decide whether an empty block counts as present.
    pub fn block<'t>(&self, text: &'t str, label: &str) -> Option<&'t str> {
        let start = content_start(text, label)?;
        let end = self
            .boundary
            .as_ref()
            .and_then(|re| re.find_at(text, start))
            .map_or(text.len(), |m| m.start());
        Some(&text[start..end])
    }

    /// Iterate over every label in order with its block, if any.
    pub fn blocks<'a, 't>(
        &'a self,
        text: &'t str,
    ) -> impl Iterator<Item = (&'a str, Option<&'t str>)> + 'a
    where
        't: 'a,
    {
        self.labels
            .iter()
            .map(move |label| (label.as_str(), self.block(text, label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAYS: [&str; 3] = ["Monday", "Tuesday", "Wednesday"];

    #[test]
    fn block_is_bounded_by_next_label() {
        let blocks = LabeledBlocks::new(&DAYS);
        let text = "Monday: Math: algebra\nPhysics: lab\nTuesday: rest\nWednesday: review";
        assert_eq!(blocks.block(text, "Monday"), Some("Math: algebra\nPhysics: lab"));
        assert_eq!(blocks.block(text, "Tuesday"), Some("rest"));
        assert_eq!(blocks.block(text, "Wednesday"), Some("review"));
    }

    #[test]
    fn boundary_is_case_insensitive() {
        let blocks = LabeledBlocks::new(&DAYS);
        let text = "monday: a\nTUESDAY: b";
        assert_eq!(blocks.block(text, "Monday"), Some("a"));
        assert_eq!(blocks.block(text, "tuesday"), Some("b"));
    }

    #[test]
    fn boundary_needs_label_at_line_start() {
        let blocks = LabeledBlocks::new(&DAYS);
        let text = "Monday: move to Tuesday if needed\n  Tuesday indented stays\nTuesday: b";
        assert_eq!(
            blocks.block(text, "Monday"),
            Some("move to Tuesday if needed\n  Tuesday indented stays")
        );
    }

    #[test]
    fn missing_label_has_no_block() {
        let blocks = LabeledBlocks::new(&DAYS);
        assert_eq!(blocks.block("Monday: a", "Wednesday"), None);
    }

    #[test]
    fn header_at_end_yields_empty_block() {
        let blocks = LabeledBlocks::new(&DAYS);
        assert_eq!(blocks.block("Monday: a\nTuesday:", "Tuesday"), Some(""));
    }

    #[test]
    fn labels_outside_the_set_do_not_bound() {
        let blocks = LabeledBlocks::new(&["short-term", "long-term"]);
        let text = "short-term: a\nmedium-term: b\nlong-term: c";
        assert_eq!(blocks.block(text, "short-term"), Some("a\nmedium-term: b"));
    }

    #[test]
    fn blank_labels_are_dropped() {
        let blocks = LabeledBlocks::new(&["Math", "", "  "]);
        assert_eq!(blocks.labels(), &["Math".to_string()]);
        assert_eq!(blocks.block("Math: a\n\nb", "Math"), Some("a\n\nb"));
    }

    #[test]
    fn labels_with_metacharacters_are_literal() {
        let blocks = LabeledBlocks::new(&["C++", "C#"]);
        let text = "C++: templates\nC#: linq";
        assert_eq!(blocks.block(text, "C++"), Some("templates"));
        assert_eq!(blocks.block(text, "C#"), Some("linq"));
    }

    #[test]
    fn blocks_iterates_in_label_order() {
        let blocks = LabeledBlocks::new(&DAYS);
        let text = "Tuesday: b\nMonday: a";
        let found: Vec<_> = blocks.blocks(text).collect();
        assert_eq!(
            found,
            vec![("Monday", Some("a")), ("Tuesday", Some("b")), ("Wednesday", None)]
        );
    }
}
