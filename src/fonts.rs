//! Font-name helpers for the editor boundary
//!
//! Components keep the raw extractor-reported font name; consumers that
//! render to a canvas call these helpers to turn it into something usable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Subset-embedded fonts carry a six-uppercase-letter tag: "ABCDEF+Helvetica"
static SUBSET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{6}\+").unwrap());

/// Strip the subset tag from an embedded font name, if present
pub fn strip_subset_prefix(font_name: &str) -> &str {
    match SUBSET_PREFIX.find(font_name) {
        Some(m) => &font_name[m.end()..],
        None => font_name,
    }
}

/// Map a raw PDF font name to a suitable web font stack
pub fn map_font_family(pdf_font_name: &str) -> &'static str {
    let font = strip_subset_prefix(pdf_font_name).to_lowercase();

    // Serifs (usually headers/titles in business documents)
    if font.contains("freight") || font.contains("georgia") || font.contains("serif") {
        return "'Source Serif 4', 'Georgia', serif";
    }

    // Sans-serifs
    if font.contains("inter")
        || font.contains("sans")
        || font.contains("arial")
        || font.contains("helvetica")
    {
        return "'Inter', 'Helvetica Neue', Arial, sans-serif";
    }

    // Monospace (data or code)
    if font.contains("mono") || font.contains("courier") || font.contains("consolas") {
        return "'JetBrains Mono', 'Courier New', monospace";
    }

    // Specific common PDF fonts
    if font.contains("times") {
        return "'Times New Roman', Times, serif";
    }
    if font.contains("verdana") {
        return "Verdana, sans-serif";
    }
    if font.contains("garamond") {
        return "'EB Garamond', Garamond, serif";
    }

    "'Inter', sans-serif"
}
