// src/query/page.rs
//
// Pagination over the filtered view. Pages are 1-based.

use std::ops::Range;

/// Number of pages; an empty view still has one (empty) page.
pub fn page_count(len: usize, rows_per_page: usize) -> usize {
    let rpp = rows_per_page.max(1);
    len.div_ceil(rpp).max(1)
}

/// Clamp a requested page into `[1, page_count]`.
pub fn clamp_page(page: usize, len: usize, rows_per_page: usize) -> usize {
    page.clamp(1, page_count(len, rows_per_page))
}

/// Row positions `[(page-1)*rpp, min(page*rpp, len))` of the clamped page.
pub fn page_range(page: usize, len: usize, rows_per_page: usize) -> Range<usize> {
    let rpp = rows_per_page.max(1);
    let page = clamp_page(page, len, rpp);
    let start = ((page - 1) * rpp).min(len);
    let end = (page * rpp).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_is_one_page() {
        assert_eq!(page_count(0, 100), 1);
        assert_eq!(clamp_page(5, 0, 100), 1);
        assert_eq!(page_range(1, 0, 100), 0..0);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(page_count(200, 100), 2);
        assert_eq!(page_count(201, 100), 3);
    }

    #[test]
    fn page_zero_clamps_to_first() {
        assert_eq!(page_range(0, 10, 3), 0..3);
    }

    #[test]
    fn zero_rows_per_page_acts_as_one() {
        assert_eq!(page_count(4, 0), 4);
        assert_eq!(page_range(2, 4, 0), 1..2);
    }
}
