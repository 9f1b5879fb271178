//! Residual command sweeper
//!
//! Final safety net after the targeted rewrites: any remaining command with
//! a brace argument is deleted whole, then bare command tokens, then brace
//! groups (delimiters stripped, content kept), then bracket groups (deleted
//! whole; their payloads are option metadata, not prose), then stray
//! delimiter characters. The sweep is unconditional and lossy, and it never
//! fails; everything it removes is reported as a warning.

use lazy_static::lazy_static;
use regex::Regex;

use super::RenderWarning;

lazy_static! {
    static ref CMD_WITH_ARG: Regex = Regex::new(r"\\([a-zA-Z]+)\*?\{[^{}]*\}").unwrap();
    static ref BARE_CMD: Regex = Regex::new(r"\\([a-zA-Z]+)\*?").unwrap();
    static ref BRACE_GROUP: Regex = Regex::new(r"\{([^{}]*)\}").unwrap();
    static ref BRACKET_GROUP: Regex = Regex::new(r"\[([^\[\]]*)\]").unwrap();
    static ref STRAY_DELIMS: Regex = Regex::new(r"[{}\[\]]").unwrap();
}

// Nested arguments expose new matches once the inner ones are gone, so the
// group rules iterate to a fixed point. Input is finite and every pass
// shrinks the text, but cap the iterations anyway.
const MAX_PASSES: usize = 16;

/// Strip all remaining LaTeX command syntax and grouping
pub fn sweep_residuals(input: &str, warnings: &mut Vec<RenderWarning>) -> String {
    let mut text = input.to_string();

    for _ in 0..MAX_PASSES {
        if !CMD_WITH_ARG.is_match(&text) {
            break;
        }
        for caps in CMD_WITH_ARG.captures_iter(&text) {
            warnings.push(RenderWarning::swept_command(&caps[1]));
        }
        text = CMD_WITH_ARG.replace_all(&text, "").into_owned();
    }

    for caps in BARE_CMD.captures_iter(&text) {
        warnings.push(RenderWarning::swept_token(&caps[1]));
    }
    text = BARE_CMD.replace_all(&text, "").into_owned();

    for _ in 0..MAX_PASSES {
        if !BRACE_GROUP.is_match(&text) {
            break;
        }
        text = BRACE_GROUP.replace_all(&text, "$1").into_owned();
    }

    for _ in 0..MAX_PASSES {
        if !BRACKET_GROUP.is_match(&text) {
            break;
        }
        for caps in BRACKET_GROUP.captures_iter(&text) {
            warnings.push(RenderWarning::swept_group(&caps[1]));
        }
        text = BRACKET_GROUP.replace_all(&text, "").into_owned();
    }

    STRAY_DELIMS.replace_all(&text, "").into_owned()
}
