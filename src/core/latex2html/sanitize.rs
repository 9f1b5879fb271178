//! Output sanitization
//!
//! The rendered fragment is injected directly into a host DOM, so it is
//! cleaned against an allow-list of exactly the tags and attributes the
//! pipeline emits. Inline styles are restricted to the dimension properties
//! the layout rewrites produce.

use std::borrow::Cow;
use std::collections::HashSet;

use ammonia::Builder as AmmoniaBuilder;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STYLE_VALUE: Regex =
        Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?(?:pt|px|cm|mm|em|rem|%)|inline-block)$").unwrap();
}

/// Clean an HTML fragment produced by the pipeline
pub fn sanitize_fragment(html: &str) -> String {
    build_sanitizer().clean(html).to_string()
}

fn build_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let tags: HashSet<&'static str> = HashSet::from([
        "br", "div", "em", "h1", "h2", "h3", "hr", "li", "ol", "p", "span", "strong", "table",
        "tbody", "td", "th", "thead", "tr", "ul",
    ]);
    builder.tags(tags);
    builder.add_generic_attributes(&["class", "style"]);

    builder.attribute_filter(|_element, attribute, value| {
        if attribute.eq_ignore_ascii_case("style") {
            sanitize_style_attribute(value).map(Cow::Owned)
        } else {
            Some(Cow::Borrowed(value))
        }
    });

    builder
}

/// Keep only the dimension declarations the layout stage emits
fn sanitize_style_attribute(value: &str) -> Option<String> {
    let mut kept = Vec::new();
    for declaration in value.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some((name, val)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let val = val.trim();
        let allowed = matches!(name.as_str(), "height" | "width" | "display");
        if allowed && STYLE_VALUE.is_match(val) {
            kept.push(format!("{}:{}", name, val));
        }
    }
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(";"))
    }
}
