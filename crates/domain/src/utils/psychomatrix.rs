//! Psychomatrix table extraction
//!
//! The Pythagoras square calculator returns plain text with a box-drawing
//! table after the `ПСИХОМАТРИЦА:` marker:
//!
//! ```text
//! ПСИХОМАТРИЦА:
//! ┌─────┬────┬───┐
//! │ 111 │ 4  │ — │
//! ├─────┼────┼───┤
//! │ 22  │ 55 │ 8 │
//! ├─────┼────┼───┤
//! │ —   │ —  │ 9 │
//! └─────┴────┴───┘
//! ```
//!
//! Everything about that layout is owned by the backend, so all knowledge of
//! it stays in this module.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{EMPTY_CELL_PLACEHOLDER, PSYCHOMATRIX_MARKER};

const GRID_SIDE: usize = 3;
const COLUMN_SEPARATOR: char = '│';
const BORDER_CHARS: &[char] = &['┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼', '─', '│'];
const EMPTY_MARKERS: [&str; 3] = ["—", "–", "-"];

static TABLE_END_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"└[─┴┘\s│]+").unwrap()
});

/// Nine cells of the square in row-major order. `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychomatrixGrid {
    cells: [Option<String>; 9],
}

impl PsychomatrixGrid {
    pub fn cells(&self) -> &[Option<String>; 9] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.cells.chunks(GRID_SIDE)
    }

    /// Cell text for display, with `–` standing in for empty cells.
    pub fn display_cell(&self, index: usize) -> &str {
        self.cells
            .get(index)
            .and_then(|cell| cell.as_deref())
            .unwrap_or(EMPTY_CELL_PLACEHOLDER)
    }
}

/// The text around the table, split at the marker and the bottom border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsychomatrixSections<'a> {
    /// Everything before the first marker.
    pub before: &'a str,
    /// From just after the marker through the bottom border run.
    pub table: &'a str,
    /// Everything after the bottom border run; empty when there is none.
    pub after: &'a str,
}

/// Split text into the parts before, at and after the table.
///
/// Returns `None` when the marker is absent.
pub fn split_psychomatrix(text: &str) -> Option<PsychomatrixSections<'_>> {
    let marker_at = text.find(PSYCHOMATRIX_MARKER)?;
    let before = &text[..marker_at];
    let rest = &text[marker_at + PSYCHOMATRIX_MARKER.len()..];

    let (table, after) = match TABLE_END_RE.find(rest) {
        Some(end) => rest.split_at(end.end()),
        None => (rest, ""),
    };

    Some(PsychomatrixSections { before, table, after })
}

/// Extract the 3×3 grid from calculator text.
///
/// Only a complete grid is returned: three body rows of exactly three cells.
/// Anything else yields `None` and callers fall back to showing the raw text.
///
/// # Examples
///
/// ```
/// use numerolog_domain::parse_psychomatrix;
///
/// assert!(parse_psychomatrix("no table here").is_none());
/// ```
pub fn parse_psychomatrix(text: &str) -> Option<PsychomatrixGrid> {
    let marker_at = text.find(PSYCHOMATRIX_MARKER)?;
    let mut lines = text[marker_at + PSYCHOMATRIX_MARKER.len()..].lines();

    lines.by_ref().find(|line| line.trim_start().starts_with('┌'))?;

    let mut rows: Vec<Vec<Option<String>>> = Vec::with_capacity(GRID_SIDE);
    for line in lines {
        let trimmed = line.trim_start();
        if trimmed.starts_with('└') {
            break;
        }
        if !is_body_row(trimmed) {
            continue;
        }
        let cells = split_cells(trimmed);
        if cells.len() == GRID_SIDE {
            rows.push(cells);
        }
    }

    if rows.len() != GRID_SIDE {
        return None;
    }

    let flat: Vec<Option<String>> = rows.into_iter().flatten().collect();
    let cells: [Option<String>; 9] = flat.try_into().ok()?;
    Some(PsychomatrixGrid { cells })
}

fn is_body_row(line: &str) -> bool {
    if line.trim().is_empty() || !line.contains(COLUMN_SEPARATOR) {
        return false;
    }
    if line.starts_with(['┌', '├', '└', '┐', '┤', '┘']) {
        return false;
    }
    !line.chars().all(|c| c.is_whitespace() || BORDER_CHARS.contains(&c))
}

fn split_cells(line: &str) -> Vec<Option<String>> {
    let segments: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
    if segments.len() < 2 {
        return Vec::new();
    }
    segments[1..segments.len() - 1].iter().map(|segment| normalize_cell(segment)).collect()
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || EMPTY_MARKERS.contains(&trimmed) {
        return None;
    }
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}
