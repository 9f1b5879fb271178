//! Paragraph formation and whitespace normalization
//!
//! Blank-line-delimited blocks become paragraphs. The final whitespace
//! collapse must run last: it erases the blank-line signal the paragraph
//! split depends on.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXTRA_BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[ \t]*\n").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Convert blank-line separators into paragraph tags and normalize spacing
pub fn format_paragraphs(input: &str) -> String {
    let text = EXTRA_BLANK_LINES.replace_all(input, "\n\n");
    let text = PARAGRAPH_BREAK.replace_all(&text, "</p><p class=\"mb-4\">");
    let text = format!("<p class=\"mb-4\">{}</p>", text.trim());
    WHITESPACE_RUN.replace_all(&text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_splits_paragraphs() {
        let out = format_paragraphs("first block\n\nsecond block");
        assert_eq!(
            out,
            "<p class=\"mb-4\">first block</p><p class=\"mb-4\">second block</p>"
        );
    }

    #[test]
    fn consecutive_blank_lines_collapse_to_one_break() {
        let out = format_paragraphs("a\n\n\n\n\nb");
        assert_eq!(out.matches("<p").count(), 2);
    }

    #[test]
    fn no_double_spaces_remain() {
        let out = format_paragraphs("spaced    out\ttext\nacross   lines");
        assert!(!out.contains("  "));
        assert!(out.contains("spaced out text across lines"));
    }

    #[test]
    fn single_block_is_wrapped() {
        assert_eq!(
            format_paragraphs("only one"),
            "<p class=\"mb-4\">only one</p>"
        );
    }
}
