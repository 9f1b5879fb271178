//! Sectioning and inline formatting
//!
//! Maps sectioning commands to fixed heading levels and inline bold/italic
//! commands to `<strong>`/`<em>`. Starred and unstarred sectioning commands
//! map identically; the starred distinction carries no visual effect in the
//! preview.
//!
//! A second pass recognizes two size+bold compounds and promotes them to
//! centered headings. It runs after the generic bold mapping, so its
//! patterns match against the already-emitted `<strong>` tags; overlapping
//! spans can end up double-wrapped.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SUBSECTION: Regex = Regex::new(r"\\subsection\*?\{([^}]*)\}").unwrap();
    static ref SECTION: Regex = Regex::new(r"\\section\*?\{([^}]*)\}").unwrap();
    static ref TEXTBF: Regex = Regex::new(r"\\textbf\{([^}]*)\}").unwrap();
    static ref TEXTIT: Regex = Regex::new(r"\\textit\{([^}]*)\}").unwrap();
    static ref LARGE_BOLD_HEADING: Regex =
        Regex::new(r"\\LARGE\s*<strong>(.*?)</strong>").unwrap();
    static ref TITLE_BOLD_HEADING: Regex =
        Regex::new(r"\\Large\s*<strong>(.*?)</strong>").unwrap();
}

/// Convert sectioning and inline formatting commands
pub fn rewrite_markup(input: &str) -> String {
    // Subsections first so the section pattern never sees them.
    let text = SUBSECTION.replace_all(
        input,
        "<h3 class=\"text-lg font-semibold mt-4 mb-2\">$1</h3>",
    );
    let text = SECTION.replace_all(&text, "<h2 class=\"text-xl font-bold mt-6 mb-3\">$1</h2>");

    let text = TEXTBF.replace_all(&text, "<strong>$1</strong>");
    let text = TEXTIT.replace_all(&text, "<em>$1</em>");

    // Second pass: size+bold compounds become centered headings.
    let text = LARGE_BOLD_HEADING.replace_all(
        &text,
        "<h1 class=\"text-2xl font-bold text-center my-4\">$1</h1>",
    );
    TITLE_BOLD_HEADING
        .replace_all(
            &text,
            "<h2 class=\"text-xl font-bold text-center my-3\">$1</h2>",
        )
        .into_owned()
}
