use once_cell::sync::Lazy;
use regex::Regex;

/// `[digits]Embed` trailer the lyrics pages append after the last line.
static EMBED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[0-9]*Embed").expect("valid regex"));

const MARKER: &[u8] = b"lyrics";
/// The title marker is only looked for within this many leading characters.
const MARKER_WINDOW: usize = 100;

/// Clean raw scraped lyrics.
///
/// Drops a leading `"<Song Title> Lyrics"` marker and removes every
/// `[digits]Embed` token. Both steps repeat until nothing changes, so the
/// result never starts with a marker, never contains an embed token, and
/// `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let cleaned = EMBED.replace_all(strip_title_marker(&text), "").into_owned();
        if cleaned == text {
            return cleaned;
        }
        text = cleaned;
    }
}

/// Whether `text` still contains a `[digits]Embed` token.
pub fn has_embed_artifact(text: &str) -> bool {
    EMBED.is_match(text)
}

/// Return the text after the title marker, or the whole text if there is none.
///
/// The marker is a case-insensitive "lyrics" lying entirely within the first
/// 100 characters and closing the title. The page runs the first lyric line
/// straight on after it, so any following character counts except a space or
/// tab. "lyrics" used as an ordinary word ("some lyrics text") is kept.
fn strip_title_marker(text: &str) -> &str {
    let window_end = text
        .char_indices()
        .nth(MARKER_WINDOW)
        .map_or(text.len(), |(i, _)| i);
    let window = &text.as_bytes()[..window_end];

    let found = window
        .windows(MARKER.len())
        .enumerate()
        .filter(|(_, w)| w.eq_ignore_ascii_case(MARKER))
        .map(|(i, _)| i + MARKER.len())
        .find(|&end| closes_title(&text[end..]));

    match found {
        Some(end) => &text[end..],
        None => text,
    }
}

fn closes_title(rest: &str) -> bool {
    !matches!(rest.chars().next(), Some(' ' | '\t'))
}
