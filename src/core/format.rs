// src/core/format.rs
//
// Presentation-only formatting for cells and column headers.

use super::cell::{to_display_text, try_parse_number};

/// Render one cell for display.
///
/// - integer columns: rounded to the nearest whole number
/// - other numeric cells: exactly one decimal digit
/// - empty: empty string; anything else: the literal text
///
/// Halves round up toward +infinity in both cases: `-2.5` -> `-2`,
/// `2.5` -> `3`, `0.25` -> `0.3`, `-0.25` -> `-0.2`.
pub fn format_cell<S: AsRef<str>>(column: &str, value: &str, integer_columns: &[S]) -> String {
    let Some(v) = try_parse_number(value) else {
        return s!(to_display_text(Some(value)));
    };
    if is_integer_column(column, integer_columns) {
        format!("{:.0}", round_half_up(v, 1.0))
    } else {
        format!("{:.1}", round_half_up(v, 10.0))
    }
}

/// Round to the nearest multiple of `1/scale`, halves toward +infinity.
/// Never returns -0.
fn round_half_up(v: f64, scale: f64) -> f64 {
    let r = (v * scale + 0.5).floor() / scale;
    if r == 0.0 { 0.0 } else { r }
}

pub fn is_integer_column<S: AsRef<str>>(column: &str, integer_columns: &[S]) -> bool {
    integer_columns
        .iter()
        .any(|c| c.as_ref().eq_ignore_ascii_case(column))
}

/// `undervalued_score` -> `Undervalued Score`, `ws_per_48` -> `WS Per 48`.
pub fn column_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split(|c: char| c == '_' || c == '-' || c.is_whitespace()) {
        if word.is_empty() { continue; }
        if !out.is_empty() { out.push(' '); }

        if word.len() <= 3 && word.chars().all(|c| c.is_ascii_alphabetic()) && !is_small_word(word) {
            // short stat abbreviations read better upper-cased (ws, bpm, vorp..)
            out.push_str(&word.to_ascii_uppercase());
        } else {
            let mut cs = word.chars();
            if let Some(first) = cs.next() {
                out.extend(first.to_uppercase());
                out.push_str(cs.as_str());
            }
        }
    }
    out
}

fn is_small_word(w: &str) -> bool {
    matches!(w.to_ascii_lowercase().as_str(), "per" | "age" | "min" | "max" | "avg" | "pct" | "to" | "of")
}
