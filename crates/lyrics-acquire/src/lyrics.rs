use crate::api::LyricsApi;
use crate::error::{AcquireError, Result};
use crate::sanitize::sanitize;

pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Fetch and clean the lyrics of one song.
///
/// `max_retries` is the total number of attempts: the attempt counter
/// starts at 1 and a timeout on attempt `max_retries` is returned as
/// [`AcquireError::TransientFetch`]. Retries are immediate. Any other API
/// error is returned on the spot.
///
/// A song without lyrics, or whose lyrics are empty once cleaned, yields
/// `Ok(None)`.
pub async fn fetch_lyrics(
    api: &dyn LyricsApi,
    song_id: u64,
    max_retries: u32,
) -> Result<Option<String>> {
    let max_attempts = max_retries.max(1);
    let mut attempt = 1;

    let raw = loop {
        match api.song_lyrics(song_id).await {
            Ok(raw) => break raw,
            Err(e) if e.is_timeout() => {
                if attempt >= max_attempts {
                    tracing::error!(song_id, attempt, max_attempts, "Request timed out, giving up");
                    return Err(AcquireError::TransientFetch {
                        song_id,
                        attempts: attempt,
                    });
                }
                tracing::warn!(song_id, attempt, max_attempts, "Request timed out, trying again");
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    };

    Ok(raw.map(|text| sanitize(&text)).filter(|text| !text.trim().is_empty()))
}
