//! Render models for calculator results and AI reports

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::psychomatrix::{parse_psychomatrix, split_psychomatrix, PsychomatrixGrid};

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?is)<[a-z].*>").unwrap()
});

static PARAGRAPH_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\n\n+").unwrap()
});

/// Whether the text looks like markup rather than plain prose.
pub fn has_html_tags(text: &str) -> bool {
    HTML_TAG_RE.is_match(text)
}

/// Plain-text paragraphs, each as its lines.
///
/// Paragraphs are separated by one or more blank lines; whitespace-only
/// paragraphs are dropped.
pub fn split_paragraphs(text: &str) -> Vec<Vec<String>> {
    PARAGRAPH_BREAK_RE
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(|paragraph| paragraph.split('\n').map(str::to_string).collect())
        .collect()
}

/// AI report paragraphs: split on every double newline, kept verbatim.
pub fn report_paragraphs(report: &str) -> Vec<&str> {
    report.split("\n\n").collect()
}

/// How a calculator result should be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculatorView {
    /// Text around a parsed square.
    Pythagoras { before: String, grid: PsychomatrixGrid, after: String },
    /// The marker was found but the table could not be parsed; the table
    /// region is shown monospaced.
    RawTable { before: String, table: String, after: String },
    /// Opaque markup shown as-is.
    Html { html: String },
    /// Plain text split into paragraphs of lines.
    Paragraphs { paragraphs: Vec<Vec<String>> },
}

impl CalculatorView {
    /// Choose the layout for `text`.
    ///
    /// `psychomatrix` is set for calculators whose output embeds the square.
    pub fn build(text: &str, psychomatrix: bool) -> Self {
        if psychomatrix {
            return Self::psychomatrix(text);
        }
        if has_html_tags(text) {
            return Self::Html { html: text.to_string() };
        }
        Self::Paragraphs { paragraphs: split_paragraphs(text) }
    }

    fn psychomatrix(text: &str) -> Self {
        let Some(sections) = split_psychomatrix(text) else {
            return Self::Html { html: text.to_string() };
        };

        match parse_psychomatrix(text) {
            Some(grid) => Self::Pythagoras {
                before: sections.before.to_string(),
                grid,
                after: sections.after.to_string(),
            },
            None => Self::RawTable {
                before: sections.before.to_string(),
                table: sections.table.to_string(),
                after: sections.after.to_string(),
            },
        }
    }
}
