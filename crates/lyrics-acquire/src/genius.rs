use async_trait::async_trait;
use lyrics_model::{Album, ReleaseDate, Track};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::{AlbumPage, Artist, LyricsApi, TrackPage};
use crate::config::GeniusConfig;
use crate::error::ApiError;
use crate::page;

const PER_PAGE: u32 = 50;

/// HTTP client for the Genius catalog and lyrics pages.
///
/// Artist search and song metadata go through the authenticated API;
/// album and track listings come from the public web API, which is the
/// only one exposing them. Lyrics are scraped from the song page.
pub struct GeniusClient {
    http: reqwest::Client,
    config: GeniusConfig,
}

impl GeniusClient {
    pub fn new(config: GeniusConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(url = %url, ?query, "Querying Genius API");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.access_token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status.as_u16(), body));
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.response)
    }

    async fn get_page(&self, url: &str) -> Result<String, ApiError> {
        tracing::debug!(url = %url, "Fetching song page");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), format!("song page {url}")));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl LyricsApi for GeniusClient {
    async fn search_artists(&self, query: &str) -> Result<Vec<Artist>, ApiError> {
        let url = format!("{}/search", self.config.api_base);
        let response: SearchResponse = self.get_json(&url, &[("q", query.to_string())]).await?;
        Ok(response.artists())
    }

    async fn artist_albums(&self, artist_id: u64, page: u32) -> Result<AlbumPage, ApiError> {
        let url = format!("{}/artists/{artist_id}/albums", self.config.public_api_base);
        let response: AlbumsResponse = self
            .get_json(&url, &[("page", page.to_string()), ("per_page", PER_PAGE.to_string())])
            .await?;
        Ok(response.into())
    }

    async fn album_tracks(&self, album_id: u64, page: u32) -> Result<TrackPage, ApiError> {
        let url = format!("{}/albums/{album_id}/tracks", self.config.public_api_base);
        let response: TracksResponse = self
            .get_json(&url, &[("page", page.to_string()), ("per_page", PER_PAGE.to_string())])
            .await?;
        Ok(response.into())
    }

    async fn song_lyrics(&self, song_id: u64) -> Result<Option<String>, ApiError> {
        let url = format!("{}/songs/{song_id}", self.config.api_base);
        let response: SongResponse = self.get_json(&url, &[]).await?;

        if response.song.instrumental {
            tracing::debug!(song_id, "Song is marked instrumental");
            return Ok(None);
        }

        let html = self.get_page(&response.song.url).await?;
        Ok(page::extract_lyrics(&html))
    }
}

// Wire types. Genius wraps every payload as {"meta": {...}, "response": {...}}.

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    result: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    primary_artist: Option<ArtistRef>,
}

#[derive(Debug, Deserialize)]
struct ArtistRef {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AlbumsResponse {
    #[serde(default)]
    albums: Vec<GeniusAlbum>,
    next_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeniusAlbum {
    id: u64,
    name: String,
    artist: Option<ArtistRef>,
    release_date_components: Option<DateComponents>,
}

#[derive(Debug, Deserialize)]
struct DateComponents {
    year: Option<u16>,
    month: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct TracksResponse {
    #[serde(default)]
    tracks: Vec<GeniusTrack>,
    next_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeniusTrack {
    number: Option<u32>,
    song: SongRef,
}

#[derive(Debug, Deserialize)]
struct SongRef {
    id: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct SongResponse {
    song: GeniusSong,
}

#[derive(Debug, Deserialize)]
struct GeniusSong {
    url: String,
    #[serde(default)]
    instrumental: bool,
}

impl SearchResponse {
    /// Primary artists of the hits, first occurrence of each id kept.
    fn artists(self) -> Vec<Artist> {
        let mut artists: Vec<Artist> = Vec::new();
        for artist in self.hits.into_iter().filter_map(|h| h.result.primary_artist) {
            if !artists.iter().any(|a| a.id == artist.id) {
                artists.push(Artist {
                    id: artist.id,
                    name: artist.name,
                });
            }
        }
        artists
    }
}

impl From<AlbumsResponse> for AlbumPage {
    fn from(response: AlbumsResponse) -> Self {
        let albums = response
            .albums
            .into_iter()
            .map(|a| Album {
                id: a.id,
                title: a.name,
                artist: a.artist.map(|r| r.name).unwrap_or_default(),
                release: a
                    .release_date_components
                    .map(|d| ReleaseDate::new(d.year, d.month))
                    .unwrap_or_default(),
            })
            .collect();

        AlbumPage {
            albums,
            next_page: response.next_page,
        }
    }
}

impl From<TracksResponse> for TrackPage {
    fn from(response: TracksResponse) -> Self {
        let tracks = response
            .tracks
            .into_iter()
            .map(|t| Track {
                song_id: t.song.id,
                title: t.song.title,
                number: t.number,
            })
            .collect();

        TrackPage {
            tracks,
            next_page: response.next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_artists() {
        let json = r#"{
            "meta": {"status": 200},
            "response": {"hits": [
                {"type": "song", "result": {"title": "Basket Case", "primary_artist": {"id": 125, "name": "Green Day"}}},
                {"type": "song", "result": {"title": "Holiday", "primary_artist": {"id": 125, "name": "Green Day"}}},
                {"type": "song", "result": {"title": "Green Day", "primary_artist": {"id": 9, "name": "Some Cover Band"}}}
            ]}
        }"#;

        let envelope: Envelope<SearchResponse> = serde_json::from_str(json).unwrap();
        let artists = envelope.response.artists();
        assert_eq!(
            artists,
            vec![
                Artist { id: 125, name: "Green Day".into() },
                Artist { id: 9, name: "Some Cover Band".into() },
            ]
        );
    }

    #[test]
    fn test_parse_album_page() {
        let json = r#"{
            "meta": {"status": 200},
            "response": {
                "albums": [
                    {"id": 1, "name": "Dookie", "artist": {"id": 125, "name": "Green Day"},
                     "release_date_components": {"year": 1994, "month": 2, "day": 1}},
                    {"id": 2, "name": "Demolicious", "artist": {"id": 125, "name": "Green Day"},
                     "release_date_components": {"year": 2014, "month": null, "day": null}},
                    {"id": 3, "name": "Unreleased", "release_date_components": null}
                ],
                "next_page": 2
            }
        }"#;

        let envelope: Envelope<AlbumsResponse> = serde_json::from_str(json).unwrap();
        let page: AlbumPage = envelope.response.into();

        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.albums.len(), 3);
        assert_eq!(page.albums[0].title, "Dookie");
        assert_eq!(page.albums[0].artist, "Green Day");
        assert_eq!(page.albums[0].release, ReleaseDate::new(Some(1994), Some(2)));
        assert_eq!(page.albums[1].release, ReleaseDate::new(Some(2014), None));
        assert_eq!(page.albums[2].release, ReleaseDate::default());
        assert_eq!(page.albums[2].artist, "");
    }

    #[test]
    fn test_parse_last_album_page() {
        let json = r#"{"response": {"albums": [], "next_page": null}}"#;
        let envelope: Envelope<AlbumsResponse> = serde_json::from_str(json).unwrap();
        let page: AlbumPage = envelope.response.into();
        assert!(page.albums.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_parse_track_page() {
        let json = r#"{
            "response": {
                "tracks": [
                    {"number": 1, "song": {"id": 100, "title": "Burnout", "url": "https://genius.com/x"}},
                    {"number": null, "song": {"id": 101, "title": "Having a Blast"}}
                ],
                "next_page": null
            }
        }"#;

        let envelope: Envelope<TracksResponse> = serde_json::from_str(json).unwrap();
        let page: TrackPage = envelope.response.into();
        assert_eq!(page.next_page, None);
        assert_eq!(
            page.tracks,
            vec![
                Track { song_id: 100, title: "Burnout".into(), number: Some(1) },
                Track { song_id: 101, title: "Having a Blast".into(), number: None },
            ]
        );
    }

    #[test]
    fn test_parse_song() {
        let json = r#"{"response": {"song": {"id": 5, "url": "https://genius.com/Green-day-holiday-lyrics", "instrumental": false}}}"#;
        let envelope: Envelope<SongResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.response.song.url, "https://genius.com/Green-day-holiday-lyrics");
        assert!(!envelope.response.song.instrumental);

        let json = r#"{"response": {"song": {"id": 6, "url": "https://genius.com/x"}}}"#;
        let envelope: Envelope<SongResponse> = serde_json::from_str(json).unwrap();
        assert!(!envelope.response.song.instrumental);
    }

    #[test]
    fn test_client_builds() {
        let client = GeniusClient::new(GeniusConfig::new("token"));
        assert!(client.is_ok());
    }
}
