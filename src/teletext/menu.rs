//! Navigation menu: subpages of the current page and nearby pages.

use crate::constants::display::{NEIGHBORHOOD_RADIUS, NEIGHBORHOOD_SIZE};
use crate::teletext::style::{StyleRole, Styler};
use std::ops::Range;

/// Positions of the pages shown around `index` in a list of `total` pages.
///
/// The window is clamped at both ends of the list and is always
/// `min(NEIGHBORHOOD_SIZE, total)` long.
pub fn neighborhood(index: usize, total: usize) -> Range<usize> {
    if total <= NEIGHBORHOOD_SIZE {
        return 0..total;
    }

    if index <= NEIGHBORHOOD_RADIUS {
        0..NEIGHBORHOOD_SIZE
    } else if index >= total - NEIGHBORHOOD_RADIUS - 1 {
        total - NEIGHBORHOOD_SIZE..total
    } else {
        index - NEIGHBORHOOD_RADIUS..index + NEIGHBORHOOD_RADIUS + 1
    }
}

fn render_row<'a>(
    label: &str,
    items: impl Iterator<Item = &'a str>,
    current: &str,
    styler: &dyn Styler,
) -> String {
    let mut row = format!("{label}: ");
    for item in items {
        if item == current {
            row.push_str(&styler.paint(item, StyleRole::Current));
        } else {
            row.push_str(item);
        }
        row.push(' ');
    }
    row
}

/// `Subpages: A B C ` with the current subpage emphasized.
pub fn render_subpage_row(
    subpages: &[String],
    current_subpage: &str,
    styler: &dyn Styler,
) -> String {
    render_row(
        "Subpages",
        subpages.iter().map(String::as_str),
        current_subpage,
        styler,
    )
}

/// `Pages: 100 101 ... ` for the window around the current page.
///
/// A page missing from the list centers the window on the first page.
pub fn render_page_row(pages: &[String], current_page: &str, styler: &dyn Styler) -> String {
    let index = pages.iter().position(|p| p == current_page).unwrap_or(0);
    let window = neighborhood(index, pages.len());
    render_row(
        "Pages",
        pages[window].iter().map(String::as_str),
        current_page,
        styler,
    )
}

/// Both menu rows, newline separated.
pub fn render_menu(
    pages: &[String],
    current_page: &str,
    subpages: &[String],
    current_subpage: &str,
    styler: &dyn Styler,
) -> String {
    format!(
        "{}\n{}",
        render_subpage_row(subpages, current_subpage, styler),
        render_page_row(pages, current_page, styler)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teletext::style::PlainStyler;

    struct TagStyler;

    impl Styler for TagStyler {
        fn paint(&self, text: &str, _role: StyleRole) -> String {
            format!("[{text}]")
        }
    }

    fn page_ids(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{}", 100 + i)).collect()
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(neighborhood(0, 50), 0..7);
        assert_eq!(neighborhood(3, 50), 0..7);
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(neighborhood(49, 50), 43..50);
        assert_eq!(neighborhood(46, 50), 43..50);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(neighborhood(25, 50), 22..29);
        assert_eq!(neighborhood(4, 50), 1..8);
        assert_eq!(neighborhood(45, 50), 42..49);
    }

    #[test]
    fn test_window_length_is_min_of_seven_and_total() {
        for total in 0..20 {
            for index in 0..total.max(1) {
                assert_eq!(neighborhood(index, total).len(), total.min(7));
            }
        }
    }

    #[test]
    fn test_window_small_lists() {
        assert_eq!(neighborhood(0, 0), 0..0);
        assert_eq!(neighborhood(2, 3), 0..3);
        assert_eq!(neighborhood(6, 7), 0..7);
        assert_eq!(neighborhood(7, 8), 1..8);
    }

    #[test]
    fn test_subpage_row_highlights_current() {
        let subpages = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(
            render_subpage_row(&subpages, "B", &TagStyler),
            "Subpages: A [B] C "
        );
    }

    #[test]
    fn test_subpage_row_empty() {
        assert_eq!(render_subpage_row(&[], "", &TagStyler), "Subpages: ");
    }

    #[test]
    fn test_page_row_highlights_current() {
        let pages = page_ids(50);
        assert_eq!(
            render_page_row(&pages, "125", &TagStyler),
            "Pages: 122 123 124 [125] 126 127 128 "
        );
    }

    #[test]
    fn test_page_row_unknown_page_defaults_to_start() {
        let pages = page_ids(50);
        assert_eq!(
            render_page_row(&pages, "999", &TagStyler),
            "Pages: 100 101 102 103 104 105 106 "
        );
    }

    #[test]
    fn test_menu_plain() {
        let pages = page_ids(3);
        let subpages = vec!["A".to_string()];
        assert_eq!(
            render_menu(&pages, "101", &subpages, "A", &PlainStyler),
            "Subpages: A \nPages: 100 101 102 "
        );
    }
}
