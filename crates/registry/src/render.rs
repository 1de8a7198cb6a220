//! Diagnostic listing
//!
//! Produces the bordered block printed by [`Codex::render`]:
//!
//! ```text
//! +---------------------------------------------
//! | Codex:
//! |    [5f0c...] <'app::Lamp' object at [5f0c...]>
//! +---------------------------------------------
//! ```
//!
//! Continuation lines of a multi-line description are indented so they line
//! up under the id column. Write-only; nothing parses this format.
//!
//! [`Codex::render`]: crate::Codex::render

use codex_core::ThingId;

/// Left margin between the border and the opening bracket of an id.
const ENTRY_PREFIX: &str = "|    [";

/// Build the listing from `(id, description)` pairs in iteration order.
pub fn render_listing<I>(name: &str, rule_width: usize, entries: I) -> String
where
    I: IntoIterator<Item = (ThingId, String)>,
{
    let rule = format!("+{}", "-".repeat(rule_width));

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str("| ");
    out.push_str(name);
    out.push_str(":\n");

    for (id, description) in entries {
        let id = id.to_string();
        // "|" + four spaces + "[" + id + "]" + " " puts the text at len(id) + 8
        let indent = format!("\n|{}", " ".repeat(id.len() + 7));

        out.push_str(ENTRY_PREFIX);
        out.push_str(&id);
        out.push_str("] ");
        out.push_str(&description.replace('\n', &indent));
        out.push('\n');
    }

    out.push_str(&rule);
    out
}
