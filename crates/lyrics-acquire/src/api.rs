use async_trait::async_trait;
use lyrics_model::{Album, Track};

use crate::error::ApiError;

/// An artist as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: u64,
    pub name: String,
}

/// One page of an artist's album listing.
#[derive(Debug, Clone, Default)]
pub struct AlbumPage {
    pub albums: Vec<Album>,
    /// Page to request next; `None` on the last page.
    pub next_page: Option<u32>,
}

/// One page of an album's track listing.
#[derive(Debug, Clone, Default)]
pub struct TrackPage {
    pub tracks: Vec<Track>,
    pub next_page: Option<u32>,
}

/// The catalog and lyrics operations the pipeline needs from a lyrics service.
///
/// Every call is a single request; retrying is the caller's business.
#[async_trait]
pub trait LyricsApi: Send + Sync {
    async fn search_artists(&self, query: &str) -> Result<Vec<Artist>, ApiError>;

    /// Albums for `artist_id`, 1-based `page`.
    async fn artist_albums(&self, artist_id: u64, page: u32) -> Result<AlbumPage, ApiError>;

    async fn album_tracks(&self, album_id: u64, page: u32) -> Result<TrackPage, ApiError>;

    /// Raw lyrics text for a song, or `None` when the song has none.
    async fn song_lyrics(&self, song_id: u64) -> Result<Option<String>, ApiError>;
}
