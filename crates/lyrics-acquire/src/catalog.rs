use lyrics_model::Album;

use crate::api::{Artist, LyricsApi};
use crate::error::{AcquireError, Result};

/// Which of an artist's albums to keep.
#[derive(Debug, Clone, Default)]
pub struct AlbumFilter {
    pub min_year: Option<u16>,
    pub max_year: Option<u16>,
    /// Drop albums whose title contains any of these (case-insensitive).
    pub exclude_if_title_contains: Vec<String>,
}

impl AlbumFilter {
    /// Undated albums are compared as year 9999.
    pub fn keeps(&self, album: &Album) -> bool {
        let year = album.release.filter_year();
        let year_ok = self.min_year.map_or(true, |min| year >= min)
            && self.max_year.map_or(true, |max| year <= max);

        year_ok && !album.title_contains_any(&self.exclude_if_title_contains)
    }
}

/// Resolve an artist name to a catalog artist.
///
/// Prefers a case-insensitive exact name match among the search hits and
/// falls back to the first hit.
pub async fn find_artist(api: &dyn LyricsApi, name: &str) -> Result<Artist> {
    let candidates = api.search_artists(name).await?;
    tracing::debug!(query = %name, candidates = candidates.len(), "Artist search");

    let wanted = name.trim().to_lowercase();
    let position = candidates
        .iter()
        .position(|a| a.name.to_lowercase() == wanted)
        .unwrap_or(0);

    candidates
        .into_iter()
        .nth(position)
        .ok_or_else(|| AcquireError::ArtistNotFound(name.to_string()))
}

/// Fetch every album page for an artist, then sort and filter.
///
/// Pages are followed from page 1 until the listing stops returning a next
/// page. The result is ordered by release (year, month), undated last.
pub async fn fetch_albums(
    api: &dyn LyricsApi,
    artist_id: u64,
    filter: &AlbumFilter,
) -> Result<Vec<Album>> {
    let mut albums = Vec::new();
    let mut page = Some(1);

    while let Some(number) = page {
        let result = api.artist_albums(artist_id, number).await?;
        tracing::debug!(page = number, albums = result.albums.len(), "Fetched album page");
        albums.extend(result.albums);
        page = result.next_page;
    }

    tracing::info!(artist_id, total = albums.len(), "Fetched album catalog");
    Ok(select_albums(albums, filter))
}

/// Sort albums by release date and keep those passing `filter`.
pub fn select_albums(mut albums: Vec<Album>, filter: &AlbumFilter) -> Vec<Album> {
    albums.sort_by_key(|a| a.release.sort_key());

    let selected: Vec<Album> = albums.into_iter().filter(|a| filter.keeps(a)).collect();
    for album in &selected {
        tracing::info!(
            year = album.release.filter_year(),
            month = ?album.release.month,
            title = %album.title,
            "Album selected"
        );
    }
    selected
}
