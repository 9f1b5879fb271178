//! Compound command resolution
//!
//! Resolves nested size/case formatting commands into single `<span>`
//! substitutions. This stage must run before the generic command sweeper:
//! a compound like `\Large \MakeUppercase{Total}` would otherwise have its
//! outer command stripped and render as an unstyled fragment.
//!
//! Pattern order matters. Later patterns are subsets of earlier ones, so the
//! size+case form is consumed first, then size-only, then case-only.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SIZE_AND_CASE: Regex =
        Regex::new(r"\\(Huge|huge|LARGE|Large|large)\s*\\MakeUppercase\{([^}]*)\}").unwrap();
    static ref SIZE_ONLY: Regex =
        Regex::new(r"\\(Huge|huge|LARGE|Large|large)\{([^}]*)\}").unwrap();
    static ref MAKE_UPPERCASE: Regex = Regex::new(r"\\MakeUppercase\{([^}]*)\}").unwrap();
    static ref UPPERCASE: Regex = Regex::new(r"\\uppercase\{([^}]*)\}").unwrap();
}

/// CSS utility class for a LaTeX size macro
fn size_class(name: &str) -> &'static str {
    match name {
        "Huge" => "text-4xl",
        "huge" => "text-3xl",
        "LARGE" => "text-2xl",
        "Large" => "text-xl",
        "large" => "text-lg",
        _ => "text-base",
    }
}

/// Resolve compound size/case commands into styled spans
pub fn resolve_compounds(input: &str) -> String {
    let text = SIZE_AND_CASE.replace_all(input, |caps: &Captures| {
        format!(
            "<span class=\"{} uppercase\">{}</span>",
            size_class(&caps[1]),
            &caps[2]
        )
    });
    let text = SIZE_ONLY.replace_all(&text, |caps: &Captures| {
        format!(
            "<span class=\"{}\">{}</span>",
            size_class(&caps[1]),
            &caps[2]
        )
    });
    let text = MAKE_UPPERCASE
        .replace_all(&text, "<span class=\"uppercase font-semibold\">$1</span>");
    UPPERCASE
        .replace_all(&text, "<span class=\"uppercase\">$1</span>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_case_become_one_span() {
        let out = resolve_compounds(r"\Large \MakeUppercase{Total}");
        assert_eq!(out, "<span class=\"text-xl uppercase\">Total</span>");
    }

    #[test]
    fn size_only_keeps_size_class() {
        let out = resolve_compounds(r"\huge{Fee Schedule}");
        assert_eq!(out, "<span class=\"text-3xl\">Fee Schedule</span>");
    }

    #[test]
    fn case_variants_differ() {
        let out = resolve_compounds(r"\MakeUppercase{Notice} and \uppercase{witness}");
        assert!(out.contains("<span class=\"uppercase font-semibold\">Notice</span>"));
        assert!(out.contains("<span class=\"uppercase\">witness</span>"));
    }

    #[test]
    fn unresolved_combinations_fall_through() {
        // A size macro followed by plain text is not a compound; it is left
        // for later stages.
        let out = resolve_compounds(r"\Large heading text");
        assert_eq!(out, r"\Large heading text");
    }
}
