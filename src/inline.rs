use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::InlineConfig;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Apply bold then italic substitutions to a line of text.
///
/// The bold pass runs over the whole line before the italic pass begins.
pub fn format_inline(text: &str, config: &InlineConfig) -> String {
    let bold = wrap_all(&BOLD, text, &config.bold_tag);
    wrap_all(&ITALIC, &bold, &config.italic_tag)
}

fn wrap_all(pattern: &Regex, text: &str, tag: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            format!("<{tag}>{}</{tag}>", &caps[1])
        })
        .into_owned()
}
