//! Preview container
//!
//! Wraps the transformed fragment in a fixed-width centered container with
//! a static title block. The title is not taken from the source document.

const DEFAULT_CONTAINER_CLASS: &str = "max-w-4xl mx-auto p-8 bg-white";

/// Wrap an HTML fragment in the titled preview container
pub fn wrap_document(fragment: &str, container_class: Option<&str>) -> String {
    let class = match container_class {
        Some(extra) => format!("{} {}", DEFAULT_CONTAINER_CLASS, extra),
        None => DEFAULT_CONTAINER_CLASS.to_string(),
    };
    format!(
        concat!(
            "<div class=\"{class}\">",
            "<div class=\"text-center mb-8\">",
            "<h1 class=\"text-2xl font-bold tracking-wide\">CONTRACT DOCUMENT</h1>",
            "<p class=\"text-sm text-gray-500\">Generated LaTeX Preview</p>",
            "</div>",
            "<div class=\"contract-body leading-relaxed\">{fragment}</div>",
            "</div>"
        ),
        class = class,
        fragment = fragment
    )
}
