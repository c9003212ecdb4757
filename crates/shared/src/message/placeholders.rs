//! Bracketed placeholders left in a rendered message (`[NOM_PJ]`, `[MJ_2]`...).

use regex_lite::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Z][A-Z_0-9]*)\]").expect("valid regex"));

/// Distinct placeholder names still present, in order of first appearance.
pub fn unfilled_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}
