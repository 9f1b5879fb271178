//! Preamble normalization and comment stripping
//!
//! Removes document-level commands that carry no visual payload in the
//! preview: class and package declarations, geometry and spacing setup,
//! page-style and header/footer assignments, and the document delimiters.
//! Matching is non-greedy within a single brace group, so multiple commands
//! on one line are each matched independently. Absent patterns are a no-op,
//! which makes the pass idempotent.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PREAMBLE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\\documentclass(?:\[[^\]]*\])?\{[^}]*\}").unwrap(),
        Regex::new(r"\\usepackage(?:\[[^\]]*\])?\{[^}]*\}").unwrap(),
        Regex::new(r"\\geometry\{[^}]*\}").unwrap(),
        Regex::new(r"\\setstretch\{[^}]*\}").unwrap(),
        Regex::new(r"\\onehalfspacing").unwrap(),
        Regex::new(r"\\singlespacing").unwrap(),
        Regex::new(r"\\pagestyle\{[^}]*\}").unwrap(),
        Regex::new(r"\\thispagestyle\{[^}]*\}").unwrap(),
        Regex::new(r"\\fancyhf\{[^}]*\}").unwrap(),
        Regex::new(r"\\fancyhead(?:\[[^\]]*\])?\{[^}]*\}").unwrap(),
        Regex::new(r"\\fancyfoot(?:\[[^\]]*\])?\{[^}]*\}").unwrap(),
        Regex::new(r"\\renewcommand\{[^}]*\}\{[^}]*\}").unwrap(),
        Regex::new(r"\\titleformat\{[^}]*\}(?:\{[^}]*\})*").unwrap(),
        Regex::new(r"\\setlength\{[^}]*\}\{[^}]*\}").unwrap(),
        Regex::new(r"\\begin\{document\}").unwrap(),
        Regex::new(r"\\end\{document\}").unwrap(),
    ];

    // Everything from a percent sign to end of line. An escaped \% is not
    // distinguished; lines using literal percent signs lose their tail.
    static ref COMMENT: Regex = Regex::new(r"%[^\n]*").unwrap();
}

/// Remove zero-visual-payload preamble commands
pub fn strip_preamble(input: &str) -> String {
    let mut text = input.to_string();
    for pattern in PREAMBLE_PATTERNS.iter() {
        text = pattern.replace_all(&text, "").into_owned();
    }
    text
}

/// Remove LaTeX line comments
pub fn strip_comments(input: &str) -> String {
    COMMENT.replace_all(input, "").into_owned()
}
