//! Integration tests for Texview full document conversion

use texview::{
    latex_to_html, latex_to_html_with_diagnostics, latex_to_html_with_options, L2HOptions,
};

/// Raw pipeline output: no sanitizer reparse, no container, so structural
/// assertions see exactly what the rewrite stages emitted.
fn convert_fragment(input: &str) -> String {
    latex_to_html_with_options(
        input,
        L2HOptions {
            sanitize: false,
            wrap_document: false,
            container_class: None,
        },
    )
}

// ============================================================================
// Preamble and comments
// ============================================================================

mod preamble {
    use super::*;

    #[test]
    fn test_preamble_commands_leave_no_trace() {
        let input = r"\documentclass[12pt]{article}
\usepackage[margin=1in]{geometry}
\usepackage{fancyhdr}
\pagestyle{fancy}
\fancyhf{}
\fancyhead[C]{ACME Corp}
\setlength{\parindent}{0pt}
\begin{document}
The parties agree as follows.
\end{document}";
        let out = convert_fragment(input);
        assert!(out.contains("The parties agree as follows."));
        assert!(!out.contains("documentclass"));
        assert!(!out.contains("usepackage"));
        assert!(!out.contains("fancy"));
        assert!(!out.contains("parindent"));
    }

    #[test]
    fn test_comment_removed() {
        let out = convert_fragment("Hello % this is a comment\nWorld");
        assert!(out.contains("Hello"));
        assert!(out.contains("World"));
        assert!(!out.contains("this is a comment"));
    }
}

// ============================================================================
// Compound commands (ordering dependency)
// ============================================================================

mod compounds {
    use super::*;

    #[test]
    fn test_size_and_case_survive_as_one_span() {
        // If the compound resolver did not run before the sweeper, both
        // commands would be destroyed and the text left unstyled.
        let out = convert_fragment(r"\Large \MakeUppercase{Total}");
        assert!(out.contains("<span class=\"text-xl uppercase\">Total</span>"));
    }

    #[test]
    fn test_size_and_case_survive_sanitizer() {
        let out = latex_to_html(r"\Large \MakeUppercase{Total}");
        assert!(out.contains("text-xl uppercase"));
        assert!(out.contains("Total"));
    }
}

// ============================================================================
// Environments
// ============================================================================

mod environments {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tabular_two_by_two_shape() {
        let out = convert_fragment("\\begin{tabular}{|l|r|}\nA & B \\\\ C & D\n\\end{tabular}");
        assert_eq!(out.matches("<tr>").count(), 2);
        assert_eq!(out.matches("<td").count(), 4);
        let positions: Vec<usize> = [">A<", ">B<", ">C<", ">D<"]
            .iter()
            .map(|cell| out.find(cell).expect("cell missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_itemize_three_items() {
        let out = convert_fragment(
            "\\begin{itemize}\n\\item Delivery\n\\item Payment\n\\item Termination\n\\end{itemize}",
        );
        assert_eq!(out.matches("<li").count(), 3);
        assert!(out.contains(">Delivery</li>"));
        assert!(out.contains(">Payment</li>"));
        assert!(out.contains(">Termination</li>"));
    }

    #[test]
    fn test_enumerate_with_label_is_ordered() {
        let out = convert_fragment(
            "\\begin{enumerate}[label=\\arabic*.]\n\\item First\n\\item Second\n\\end{enumerate}",
        );
        assert!(out.contains("<ol"));
        assert_eq!(out.matches("<li").count(), 2);
    }

    #[test]
    fn test_center_content_still_transformed() {
        let out = convert_fragment("\\begin{center}\\textbf{Agreement}\\end{center}");
        assert!(out.contains("<div class=\"text-center\">"));
        assert!(out.contains("<strong>Agreement</strong>"));
    }

    #[test]
    fn test_unsupported_environment_is_lossy_but_nonfatal() {
        let result = latex_to_html_with_diagnostics("\\begin{quote}Kept prose\\end{quote}");
        assert!(result.output.contains("Kept prose"));
        assert!(result.has_warnings());
        assert!(result.format_warnings().iter().any(|w| w.contains("quote")));
    }
}

// ============================================================================
// Sections, inline formatting, layout
// ============================================================================

mod markup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sections_and_inline() {
        let out =
            convert_fragment(r"\section{Definitions} The \textbf{Client} \textit{may} terminate.");
        assert!(out.contains("<h2"));
        assert!(out.contains(">Definitions</h2>"));
        assert!(out.contains("<strong>Client</strong>"));
        assert!(out.contains("<em>may</em>"));
    }

    #[test]
    fn test_starred_section_identical_to_unstarred() {
        assert_eq!(
            convert_fragment(r"\section*{Scope}"),
            convert_fragment(r"\section{Scope}")
        );
    }

    #[test]
    fn test_title_compound_becomes_centered_heading() {
        let out = convert_fragment(r"\LARGE \textbf{SERVICE AGREEMENT}");
        assert!(out.contains("<h1"));
        assert!(out.contains("text-center"));
        assert!(out.contains("SERVICE AGREEMENT"));
    }

    #[test]
    fn test_signature_rule_and_spacing() {
        let out = convert_fragment("\\vspace{2cm}\\rule{5cm}{0.4pt}\\\\Client Signature");
        assert!(out.contains("height:2cm"));
        assert!(out.contains("<hr"));
        assert!(out.contains("width:5cm"));
        assert!(out.contains("<br />Client Signature"));
    }

    #[test]
    fn test_dimensioned_break_stays_shadowed_end_to_end() {
        let out = convert_fragment("one\\\\[6pt]two");
        assert!(out.contains("<br />"));
        assert!(!out.contains("mb-2"));
        // The bracket payload is swept, not rendered.
        assert!(!out.contains("6pt"));
    }
}

// ============================================================================
// Sweeper and paragraphs
// ============================================================================

mod output_shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_markup_never_fails() {
        let result = latex_to_html_with_diagnostics(
            r"\weirdcommand{x} \another[opt]{y} {group} [loose] } \standalone",
        );
        assert!(!result.output.is_empty());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_no_command_syntax_survives() {
        let out = convert_fragment(r"\unknowncmd{arg} plain \bare {grouped} [opt]");
        assert!(!out.contains('\\'));
        assert!(!out.contains('{'));
        assert!(!out.contains('['));
        assert!(out.contains("plain"));
        assert!(out.contains("grouped"));
    }

    #[test]
    fn test_whitespace_normalized() {
        let out = latex_to_html("first   paragraph\n\n\n\nsecond     paragraph");
        assert!(!out.contains("  "), "double space in: {}", out);
        assert!(out.contains("first paragraph"));
        assert!(out.contains("second paragraph"));
    }

    #[test]
    fn test_paragraph_split_on_blank_line() {
        let out = convert_fragment("first block\n\nsecond block");
        assert_eq!(
            out,
            "<p class=\"mb-4\">first block</p><p class=\"mb-4\">second block</p>"
        );
    }

    #[test]
    fn test_document_wrapper_has_static_title() {
        let out = latex_to_html("body text");
        assert!(out.contains("CONTRACT DOCUMENT"));
        assert!(out.contains("Generated LaTeX Preview"));
        assert!(out.contains("body text"));
    }

    #[test]
    fn test_container_class_hint() {
        let out = latex_to_html_with_options(
            "x",
            L2HOptions {
                container_class: Some("shadow-lg".to_string()),
                ..L2HOptions::default()
            },
        );
        assert!(out.contains("shadow-lg"));
    }
}

// ============================================================================
// Sanitization
// ============================================================================

mod sanitization {
    use super::*;

    #[test]
    fn test_script_injection_is_neutralized() {
        let out = latex_to_html("before <script>alert('xss')</script> after");
        assert!(!out.contains("<script"));
        assert!(!out.contains("alert"));
        assert!(out.contains("before"));
        assert!(out.contains("after"));
    }

    #[test]
    fn test_event_handler_is_dropped() {
        let out = latex_to_html(r#"<img src=x onerror="steal()"> clause text"#);
        assert!(!out.contains("onerror"));
        assert!(out.contains("clause text"));
    }

    #[test]
    fn test_pipeline_styles_survive_sanitizer() {
        let out = latex_to_html(r"\vspace{1cm}body");
        assert!(out.contains("height:1cm"));
    }
}

// ============================================================================
// Full documents
// ============================================================================

mod full_documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_representative_contract_document() {
        let input = r"\documentclass[11pt]{article}
\usepackage[margin=1in]{geometry}
\begin{document}

\begin{center}
\LARGE \textbf{CONSULTING AGREEMENT}
\end{center}

\section{Parties}
This agreement is between \textbf{ACME Corp} and the \textit{Consultant}.

\section{Fees}
\begin{tabular}{|l|r|}
Retainer & 5000 USD \\ Hourly & 250 USD
\end{tabular}

\section{Obligations}
\begin{itemize}
\item Deliver monthly reports
\item Maintain confidentiality
\item Invoice within 30 days
\end{itemize}

\vspace{2cm}
\rule{5cm}{0.4pt}\\
Authorized Signature

\end{document}";
        let out = latex_to_html(input);
        assert!(out.contains("CONTRACT DOCUMENT"));
        assert!(out.contains("CONSULTING AGREEMENT"));
        assert!(out.contains("ACME Corp"));
        assert_eq!(out.matches("<tr>").count(), 2);
        assert_eq!(out.matches("<li").count(), 3);
        assert!(out.contains("<hr"));
        assert!(!out.contains('\\'));
        assert!(!out.contains("  "));
    }

    #[test]
    fn test_empty_document_still_renders_shell() {
        let out = latex_to_html("");
        assert!(out.contains("CONTRACT DOCUMENT"));
    }
}
