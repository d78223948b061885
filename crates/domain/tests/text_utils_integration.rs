//! Integration tests for the text utilities
//!
//! Exercises the formatters, the psychomatrix parser and the media URL
//! normaliser through the crate's public re-exports, using payloads shaped
//! like real backend responses.

use numerolog_domain::{
    format_birth_date_input, format_name_input, normalize_media_url, parse_psychomatrix,
    split_psychomatrix, CalculatorId, CalculatorView, MatrixImageResponse,
};

// ============================================================================
// Psychomatrix
// ============================================================================

fn pythagoras_result() -> String {
    [
        "🟩 <b>Квадрат Пифагора (психоматрица)</b>",
        "Дата рождения: <b>02.08.1995</b>\n",
        "ПСИХОМАТРИЦА:",
        "┌─────┬───┬───┐\n│ 11  │ — │ — │\n├─────┼───┼───┤\n│ 2   │ 5 │ 8 │\n├─────┼───┼───┤\n│ —   │ — │ 999 │\n└─────┴───┴───┘",
        "<b>Сводка по цифрам (1–9):</b>\n1: 2\n2: 1",
    ]
    .join("\n\n")
}

/// The calculator joins blocks with blank lines, so a blank line sits between
/// the marker and the top border.
#[test]
fn test_parses_calculator_output_with_blank_lines() {
    let text = pythagoras_result();
    let grid = parse_psychomatrix(&text).expect("grid should parse");

    let cells: Vec<Option<&str>> = grid.cells().iter().map(|c| c.as_deref()).collect();
    assert_eq!(
        cells,
        vec![Some("11"), None, None, Some("2"), Some("5"), Some("8"), None, None, Some("999")]
    );
}

#[test]
fn test_sections_surround_the_table() {
    let text = pythagoras_result();
    let sections = split_psychomatrix(&text).expect("marker present");

    assert!(sections.before.contains("Дата рождения"));
    assert!(sections.table.contains("│ 2   │ 5 │ 8 │"));
    assert!(sections.after.starts_with("<b>Сводка"));
}

#[test]
fn test_only_pythagoras_renders_the_grid() {
    let text = pythagoras_result();

    assert!(CalculatorId::PythagorasSquare.renders_psychomatrix());
    assert!(matches!(
        CalculatorView::build(&text, CalculatorId::PythagorasSquare.renders_psychomatrix()),
        CalculatorView::Pythagoras { .. }
    ));
    assert!(matches!(
        CalculatorView::build(&text, CalculatorId::MoneyCode.renders_psychomatrix()),
        CalculatorView::Html { .. }
    ));
}

// ============================================================================
// Matrix image references
// ============================================================================

#[test]
fn test_matrix_response_resolves_against_base() {
    let response: MatrixImageResponse = serde_json::from_str(
        r#"{"imagePath": "http://localhost:8000/static/matrix/02081995.png",
            "digit_interpretations": {"1": "Лидерство"}}"#,
    )
    .unwrap();

    let url = normalize_media_url(response.raw_image_ref().unwrap_or_default(), "https://api.example/");
    assert_eq!(url, "https://api.example/static/matrix/02081995.png");
    assert_eq!(
        response.digit_interpretations.as_ref().and_then(|d| d.get("1")).map(String::as_str),
        Some("Лидерство")
    );
}

// ============================================================================
// Formatters
// ============================================================================

#[test]
fn test_typing_a_date_keystroke_by_keystroke() {
    let mut field = String::new();
    for key in "02081995".chars() {
        field.push(key);
        field = format_birth_date_input(&field);
    }
    assert_eq!(field, "02.08.1995");

    field.push('7');
    assert_eq!(format_birth_date_input(&field), "02.08.1995");
}

#[test]
fn test_name_formatting_keeps_token_count() {
    let formatted = format_name_input("ivan  petrov");
    assert_eq!(formatted, "Ivan  Petrov");
    assert_eq!(formatted.split(' ').count(), "ivan  petrov".split(' ').count());
}
