// src/core/cell.rs
//
// Cells are text at rest. These are the only conversions; each one is total
// and reports "absent" instead of failing.

/// Parse a cell as a finite number. Blank, non-numeric, NaN and infinities
/// are all `None`.
pub fn try_parse_number(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() {
        return None;
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Text as it should appear when the cell isn't formatted as a number.
#[inline]
pub fn to_display_text(cell: Option<&str>) -> &str {
    cell.map(str::trim).unwrap_or("")
}

/// Case-folded comparison key.
#[inline]
pub fn fold(cell: &str) -> String {
    cell.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_parse() {
        assert_eq!(try_parse_number("5"), Some(5.0));
        assert_eq!(try_parse_number(" -3.25 "), Some(-3.25));
        assert_eq!(try_parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn non_numbers_are_absent() {
        assert_eq!(try_parse_number(""), None);
        assert_eq!(try_parse_number("   "), None);
        assert_eq!(try_parse_number("n/a"), None);
        assert_eq!(try_parse_number("12abc"), None);
        assert_eq!(try_parse_number("NaN"), None);
        assert_eq!(try_parse_number("inf"), None);
    }

    #[test]
    fn missing_cell_displays_empty() {
        assert_eq!(to_display_text(None), "");
        assert_eq!(to_display_text(Some(" x ")), "x");
    }
}
