//! Page content colorizing: title block, page references and search matches.

use crate::constants::display::{RULE_CHAR, RULE_WIDTH};
use crate::teletext::style::{StyleRole, Styler};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Maximal runs of digits.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern is valid"));

/// Text ending in a three digit page number and a hyphen, e.g. `"123-"`.
static CONTINUATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}-\z").expect("continuation pattern is valid"));

/// What gets emphasized inside the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis<'a> {
    /// Page number references (normal viewing)
    PageReferences,
    /// Occurrences of a search term. Page references are left alone.
    SearchMatches(&'a str),
}

/// Whitespace-only and non-empty.
fn is_blank(line: &str) -> bool {
    !line.is_empty() && line.chars().all(char::is_whitespace)
}

/// A page opens with a title block when its first three lines are
/// blank, non-blank, blank.
pub fn has_title_block(lines: &[&str]) -> bool {
    match lines {
        [first, title, third, ..] => is_blank(first) && !is_blank(title) && is_blank(third),
        _ => false,
    }
}

fn horizontal_rule() -> String {
    RULE_CHAR.to_string().repeat(RULE_WIDTH)
}

/// Emphasizes page number references in a single line.
///
/// A reference is a run of exactly three digits, or a run of one or two
/// digits directly after `ddd-` (a page range such as `"123-4"`).
/// Longer runs such as `"1000"` are never references.
pub fn highlight_references(line: &str, styler: &dyn Styler) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;

    for run in DIGIT_RUN.find_iter(line) {
        let digits = run.as_str().chars().count();
        let is_reference = digits == 3
            || (digits <= 2 && CONTINUATION_PREFIX.is_match(&line[..run.start()]));
        if is_reference {
            out.push_str(&line[last..run.start()]);
            out.push_str(&styler.paint(run.as_str(), StyleRole::Reference));
            last = run.end();
        }
    }

    out.push_str(&line[last..]);
    out
}

/// Emphasizes every non-overlapping occurrence of `term` in a single line.
pub fn highlight_matches(line: &str, term: &str, styler: &dyn Styler) -> String {
    if term.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for (start, matched) in line.match_indices(term) {
        out.push_str(&line[last..start]);
        out.push_str(&styler.paint(matched, StyleRole::SearchMatch));
        last = start + matched.len();
    }
    out.push_str(&line[last..]);
    out
}

/// Colorizes stripped page content.
///
/// With a plain styler the content is returned unchanged.
pub fn format_page(content: &str, styler: &dyn Styler, emphasis: Emphasis<'_>) -> String {
    if styler.is_plain() {
        return content.to_string();
    }

    debug!("Applying formatting to a page...");
    let lines: Vec<&str> = content.split('\n').collect();
    let title = has_title_block(&lines);

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if title && (i == 0 || i == 2) {
                return styler.paint(&horizontal_rule(), StyleRole::Rule);
            }

            let body = match emphasis {
                Emphasis::PageReferences => highlight_references(line, styler),
                Emphasis::SearchMatches(term) => highlight_matches(line, term, styler),
            };

            if title && i == 1 {
                styler.paint(&body, StyleRole::Title)
            } else {
                body
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teletext::style::PlainStyler;

    /// Wraps roles in readable tags so assertions don't depend on escapes.
    struct TagStyler;

    impl Styler for TagStyler {
        fn paint(&self, text: &str, role: StyleRole) -> String {
            let tag = match role {
                StyleRole::Title => "title",
                StyleRole::Rule => "rule",
                StyleRole::Reference => "ref",
                StyleRole::Current => "cur",
                StyleRole::SearchMatch => "hit",
            };
            format!("<{tag}>{text}</{tag}>")
        }
    }

    fn refs(line: &str) -> String {
        highlight_references(line, &TagStyler)
    }

    #[test]
    fn test_three_digit_reference_is_highlighted() {
        assert_eq!(refs("Zprávy 100"), "Zprávy <ref>100</ref>");
        assert_eq!(refs("100 Zprávy"), "<ref>100</ref> Zprávy");
        assert_eq!(refs("(200)"), "(<ref>200</ref>)");
    }

    #[test]
    fn test_four_digit_run_is_not_a_reference() {
        assert_eq!(refs("rok 1000"), "rok 1000");
        assert_eq!(refs("2024"), "2024");
    }

    #[test]
    fn test_short_runs_are_not_references() {
        assert_eq!(refs("4 body"), "4 body");
        assert_eq!(refs("12:30"), "12:30");
    }

    #[test]
    fn test_continuation_after_page_range() {
        assert_eq!(refs("123-4"), "<ref>123</ref>-<ref>4</ref>");
        assert_eq!(refs("160-61 Sport"), "<ref>160</ref>-<ref>61</ref> Sport");
        assert_eq!(refs("123-4 a 4"), "<ref>123</ref>-<ref>4</ref> a 4");
    }

    #[test]
    fn test_continuation_requires_digit_boundary_after() {
        assert_eq!(refs("123-4567"), "<ref>123</ref>-4567");
    }

    #[test]
    fn test_continuation_after_longer_run() {
        // The three digits before the hyphen need not be a standalone run
        assert_eq!(refs("1234-5"), "1234-<ref>5</ref>");
    }

    #[test]
    fn test_page_range_of_three_digits() {
        assert_eq!(refs("101-199"), "<ref>101</ref>-<ref>199</ref>");
    }

    #[test]
    fn test_highlight_matches_all_occurrences() {
        let out = highlight_matches("Praha a Praha", "Praha", &TagStyler);
        assert_eq!(out, "<hit>Praha</hit> a <hit>Praha</hit>");
    }

    #[test]
    fn test_highlight_matches_is_case_sensitive() {
        assert_eq!(highlight_matches("praha", "Praha", &TagStyler), "praha");
    }

    #[test]
    fn test_highlight_matches_empty_term() {
        assert_eq!(highlight_matches("text", "", &TagStyler), "text");
    }

    #[test]
    fn test_title_block_detected() {
        let content = "   \n  ZPRÁVY  \n   \nobsah 100";
        let formatted = format_page(content, &TagStyler, Emphasis::PageReferences);
        let rule = "─".repeat(40);
        let lines: Vec<&str> = formatted.split('\n').collect();
        assert_eq!(lines[0], format!("<rule>{rule}</rule>"));
        assert_eq!(lines[1], "<title>  ZPRÁVY  </title>");
        assert_eq!(lines[2], format!("<rule>{rule}</rule>"));
        assert_eq!(lines[3], "obsah <ref>100</ref>");
    }

    #[test]
    fn test_all_three_title_lines_change() {
        let content = " \nTitle\n ";
        let formatted = format_page(content, &TagStyler, Emphasis::PageReferences);
        let before: Vec<&str> = content.split('\n').collect();
        let after: Vec<&str> = formatted.split('\n').collect();
        assert_eq!(after.len(), 3);
        for (old, new) in before.iter().zip(after.iter()) {
            assert_ne!(old, new);
        }
    }

    #[test]
    fn test_no_title_when_pattern_breaks() {
        let content = "Header\n\nbody 200";
        let formatted = format_page(content, &TagStyler, Emphasis::PageReferences);
        assert_eq!(formatted, "Header\n\nbody <ref>200</ref>");
    }

    #[test]
    fn test_empty_lines_are_not_blank() {
        assert!(!has_title_block(&["", "Title", ""]));
        assert!(has_title_block(&["\t", "Title", "  "]));
        assert!(!has_title_block(&[" ", "   ", " "]));
    }

    #[test]
    fn test_short_pages_do_not_fail() {
        assert_eq!(format_page("", &TagStyler, Emphasis::PageReferences), "");
        assert_eq!(
            format_page(" \nTitle", &TagStyler, Emphasis::PageReferences),
            " \nTitle"
        );
        assert!(!has_title_block(&[" "]));
    }

    #[test]
    fn test_reference_inside_title_is_highlighted() {
        let formatted = format_page(" \nStr. 100\n ", &TagStyler, Emphasis::PageReferences);
        assert!(formatted.contains("<title>Str. <ref>100</ref></title>"));
    }

    #[test]
    fn test_search_mode_skips_references() {
        let content = " \nSport\n \nHokej 200 Hokej";
        let formatted = format_page(content, &TagStyler, Emphasis::SearchMatches("Hokej"));
        assert!(formatted.contains("<title>Sport</title>"));
        assert!(formatted.ends_with("<hit>Hokej</hit> 200 <hit>Hokej</hit>"));
        assert!(!formatted.contains("<ref>"));
    }

    #[test]
    fn test_plain_styler_returns_content_unchanged() {
        let content = " \nTitle\n \nodkaz 100";
        assert_eq!(
            format_page(content, &PlainStyler, Emphasis::PageReferences),
            content
        );
        assert_eq!(
            format_page(content, &PlainStyler, Emphasis::SearchMatches("odkaz")),
            content
        );
    }
}
