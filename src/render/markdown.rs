//! @acp:module "Markdown Helpers"
//! @acp:summary "Table-cell escaping and whitespace normalization"
//! @acp:domain cli
//! @acp:layer output

use std::sync::LazyLock;

use regex::Regex;

/// Horizontal whitespace directly before a line break
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+(\r?\n)").unwrap());

/// Strip trailing spaces/tabs from every line and end the text with exactly one newline
pub fn normalize_markdown(text: &str) -> String {
    let stripped = TRAILING_WHITESPACE.replace_all(text, "$1");
    let mut out = stripped.trim_end().to_string();
    out.push('\n');
    out
}

/// Defuse HTML comment openers so metadata text can never read as a section marker
pub fn neutralize_comments(text: &str) -> String {
    text.replace("<!--", "&lt;!--")
}

/// Make text safe for a single Markdown table cell
///
/// Pipes are escaped and line breaks are folded into spaces so the row stays intact.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a Markdown table with a header row
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("| {} |", headers.join(" | ")));
    lines.push(format!(
        "| {} |",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
    ));
    for row in rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines
}
