// tests/pagination.rs
use stat_viewer::query::{clamp_page, page_count, page_range};

#[test]
fn three_pages_of_a_hundred() {
    assert_eq!(page_count(250, 100), 3);
    assert_eq!(page_range(1, 250, 100), 0..100);
    assert_eq!(page_range(3, 250, 100), 200..250);
}

#[test]
fn out_of_range_pages_clamp() {
    assert_eq!(clamp_page(99, 250, 100), 3);
    assert_eq!(clamp_page(0, 250, 100), 1);
    assert_eq!(page_range(99, 250, 100), 200..250);
}

#[test]
fn empty_view_has_one_empty_page() {
    assert_eq!(page_count(0, 100), 1);
    assert_eq!(clamp_page(5, 0, 100), 1);
    assert!(page_range(1, 0, 100).is_empty());
}

#[test]
fn exact_multiple_has_no_trailing_page() {
    assert_eq!(page_count(200, 100), 2);
    assert_eq!(page_range(2, 200, 100), 100..200);
}

#[test]
fn zero_rows_per_page_acts_as_one() {
    assert_eq!(page_count(3, 0), 3);
    assert_eq!(page_range(2, 3, 0), 1..2);
}
