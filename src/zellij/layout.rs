//! Focused-tab extraction from `zellij action dump-layout` output.
//!
//! The dump is KDL, but only one fact is needed from it, so a single regex
//! stands in for a real parser. Swap this module out, not its callers, if the
//! format ever needs full parsing.

use regex::Regex;
use std::sync::LazyLock;

// A tab entry: `tab name="..."`, then `focus=true` somewhere before the
// entry's opening brace. Panes carry their own `focus=true`, hence `tab`.
static FOCUSED_TAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\btab\s+(?:[^{]*?\s)?name="([^"]*)"[^{]*?\bfocus=true\b"#)
        .expect("focused-tab regex is hardcoded and must be valid")
});

/// Name of the focused tab in a layout dump.
///
/// Returns `None` when no tab carries `focus=true`. If several do, the first
/// one in document order wins.
pub fn focused_tab_name(layout: &str) -> Option<String> {
    FOCUSED_TAB_RE
        .captures(layout)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
