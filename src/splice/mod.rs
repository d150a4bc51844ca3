//! @acp:module "Marker Splicer"
//! @acp:summary "Replaces the generated section of a README between markers"
//! @acp:domain cli
//! @acp:layer service
//!
//! A README is split into a hand-owned prefix, the generated block and a
//! hand-owned suffix. Only the block is ever replaced; when no complete marker
//! pair exists the block is appended beneath the existing content.

use crate::render::normalize_markdown;

/// Start of the generated section
pub const BEGIN_MARKER: &str = "<!-- BEGIN MCIX-ACTION-DOCS -->";

/// End of the generated section
pub const END_MARKER: &str = "<!-- END MCIX-ACTION-DOCS -->";

/// A README split around its generated section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Text before the begin marker (the whole text when no block exists)
    pub prefix: &'a str,
    /// The begin..end span including both markers; empty when absent
    pub block: &'a str,
    /// Text after the end marker
    pub suffix: &'a str,
}

impl Document<'_> {
    pub fn has_block(&self) -> bool {
        !self.block.is_empty()
    }
}

/// Split a README around the first complete marker pair
pub fn split_document(text: &str) -> Document<'_> {
    let whole = Document {
        prefix: text,
        block: "",
        suffix: "",
    };

    let Some(start) = text.find(BEGIN_MARKER) else {
        return whole;
    };
    let body_start = start + BEGIN_MARKER.len();
    let Some(end_offset) = text[body_start..].find(END_MARKER) else {
        return whole;
    };
    let end = body_start + end_offset + END_MARKER.len();

    Document {
        prefix: &text[..start],
        block: &text[start..end],
        suffix: &text[end..],
    }
}

/// Wrap a rendered block with the section markers
pub fn wrap_with_markers(block: &str) -> String {
    normalize_markdown(&format!(
        "{}\n{}\n{}\n",
        BEGIN_MARKER,
        block.trim_end(),
        END_MARKER
    ))
}

/// Merge a freshly wrapped block into existing README text
///
/// If the text already holds a generated section, it is replaced in place.
/// Otherwise the block is appended after the existing content.
pub fn splice_block(existing: &str, wrapped_block: &str) -> String {
    let document = split_document(existing);

    let prefix = document.prefix.trim_end();
    let suffix = document.suffix.trim();
    let block = wrapped_block.trim();

    let mut out = String::with_capacity(prefix.len() + block.len() + suffix.len() + 4);
    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push_str("\n\n");
    }
    out.push_str(block);
    if !suffix.is_empty() {
        out.push_str("\n\n");
        out.push_str(suffix);
    }

    normalize_markdown(&out)
}
