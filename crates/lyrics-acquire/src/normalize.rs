use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// `[Verse 1]`, `[Chorus: Billie Joe Armstrong]` and similar headers.
static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));
static DOUBLE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2}").expect("valid regex"));

/// Canonical form for scraped lyrics text.
///
/// Composes accents to NFC, turns the page's non-breaking and typographic
/// spaces into plain spaces, drops zero-width characters, and ends every
/// line without trailing whitespace or `\r`.
pub fn normalize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line: String = line
            .nfc()
            .filter(|c| !matches!(c, '\u{200b}' | '\u{200d}' | '\u{feff}'))
            .map(|c| if c != '\t' && c.is_whitespace() { ' ' } else { c })
            .collect();
        out.push_str(line.trim_end());
    }
    out
}

/// Remove bracketed section headers, then halve runs of newlines and trim
/// newlines from both ends.
///
/// `\n\n` pairs are replaced left to right, so three newlines become two.
pub fn remove_section_headers(input: &str) -> String {
    let without_headers = SECTION_HEADER.replace_all(input, "");
    let collapsed = DOUBLE_NEWLINE.replace_all(&without_headers, "\n");
    collapsed.trim_matches('\n').to_string()
}
