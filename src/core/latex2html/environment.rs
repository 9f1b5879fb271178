//! Environment handling for LaTeX to HTML conversion
//!
//! Converts the supported block environments (center, tabular, itemize,
//! enumerate) into HTML block/table/list structures. Environments without a
//! dedicated rewrite are left as literal text for the residual sweeper,
//! which loses their structure; a warning is recorded for each.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::RenderWarning;

lazy_static! {
    static ref CENTER: Regex = Regex::new(r"(?s)\\begin\{center\}(.*?)\\end\{center\}").unwrap();
    static ref TABULAR: Regex =
        Regex::new(r"(?s)\\begin\{tabular\}\{[^}]*\}(.*?)\\end\{tabular\}").unwrap();
    static ref ENUMERATE: Regex =
        Regex::new(r"(?s)\\begin\{enumerate\}\[label=[^\]]*\](.*?)\\end\{enumerate\}").unwrap();
    static ref ITEMIZE: Regex =
        Regex::new(r"(?s)\\begin\{itemize\}(.*?)\\end\{itemize\}").unwrap();
    static ref LEFTOVER_ENV: Regex = Regex::new(r"\\begin\{([A-Za-z*]+)\}").unwrap();
}

/// Convert supported environments to HTML blocks
pub fn rewrite_environments(input: &str, warnings: &mut Vec<RenderWarning>) -> String {
    // Content of a center block is passed through unchanged so the later
    // stages still apply to it.
    let text = CENTER.replace_all(input, "<div class=\"text-center\">$1</div>");

    let text = TABULAR.replace_all(&text, |caps: &Captures| convert_tabular(&caps[1]));

    let text = ENUMERATE.replace_all(&text, |caps: &Captures| {
        convert_list(&caps[1], "ol", "list-decimal")
    });
    let text = ITEMIZE.replace_all(&text, |caps: &Captures| {
        convert_list(&caps[1], "ul", "list-disc")
    });

    for caps in LEFTOVER_ENV.captures_iter(&text) {
        warnings.push(RenderWarning::unsupported_environment(&caps[1]));
    }

    text.into_owned()
}

/// Convert tabular content to an HTML table
///
/// Rows split on `\\`, cells on `&`, each cell trimmed. The column spec was
/// already consumed by the match; no alignment mapping is attempted.
fn convert_tabular(content: &str) -> String {
    let mut html = String::from("<table class=\"w-full border-collapse my-4\">");
    for row in content.split("\\\\") {
        if row.trim().is_empty() {
            continue;
        }
        html.push_str("<tr>");
        for cell in row.split('&') {
            html.push_str("<td class=\"border border-gray-300 px-3 py-2\">");
            html.push_str(cell.trim());
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// Convert itemize/enumerate content to an HTML list
///
/// The fragment before the first `\item` is discarded.
fn convert_list(content: &str, tag: &str, class: &str) -> String {
    let mut html = format!("<{} class=\"{} ml-6 my-4\">", tag, class);
    for item in content.split("\\item").skip(1) {
        html.push_str("<li class=\"mb-2\">");
        html.push_str(item.trim());
        html.push_str("</li>");
    }
    html.push_str(&format!("</{}>", tag));
    html
}
