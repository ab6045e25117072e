//! Scripted in-memory `LyricsApi` for pipeline tests.

use async_trait::async_trait;
use lyrics_model::{Album, ReleaseDate, Track};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::{AlbumPage, Artist, LyricsApi, TrackPage};
use crate::error::ApiError;

/// What one `song_lyrics` call returns.
#[derive(Debug, Clone)]
pub enum Reply {
    Lyrics(&'static str),
    NoLyrics,
    Timeout,
    ServerError,
}

#[derive(Default)]
pub struct MockApi {
    pub artists: Vec<Artist>,
    /// Album pages in request order; page N is `album_pages[N - 1]`.
    pub album_pages: Vec<Vec<Album>>,
    /// Track pages per album id.
    pub track_pages: HashMap<u64, Vec<Vec<Track>>>,
    /// Replies per song id, consumed one per call; the last one repeats.
    pub replies: HashMap<u64, Vec<Reply>>,
    pub(crate) lyrics_calls: Mutex<Vec<u64>>,
    pub(crate) album_page_calls: Mutex<Vec<u32>>,
    /// `(album_id, page)` for every `album_tracks` call.
    pub(crate) track_page_calls: Mutex<Vec<(u64, u32)>>,
}

pub fn album(id: u64, title: &str, year: Option<u16>, month: Option<u8>) -> Album {
    Album {
        id,
        title: title.to_string(),
        artist: "Green Day".to_string(),
        release: ReleaseDate::new(year, month),
    }
}

pub fn track(song_id: u64, title: &str) -> Track {
    Track {
        song_id,
        title: title.to_string(),
        number: None,
    }
}

impl MockApi {
    pub fn with_tracks(mut self, album_id: u64, tracks: Vec<Track>) -> Self {
        self.track_pages.insert(album_id, vec![tracks]);
        self
    }

    pub fn with_replies(mut self, song_id: u64, replies: Vec<Reply>) -> Self {
        self.replies.insert(song_id, replies);
        self
    }

    /// Number of `song_lyrics` calls made for `song_id`.
    pub fn lyrics_calls(&self, song_id: u64) -> usize {
        self.lyrics_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|&&id| id == song_id)
            .count()
    }

    pub fn total_lyrics_calls(&self) -> usize {
        self.lyrics_calls.lock().unwrap().len()
    }

    pub fn album_page_calls(&self) -> Vec<u32> {
        self.album_page_calls.lock().unwrap().clone()
    }

    pub fn track_page_calls(&self) -> Vec<(u64, u32)> {
        self.track_page_calls.lock().unwrap().clone()
    }
}

fn next_page(index: usize, total: usize) -> Option<u32> {
    (index + 1 < total).then(|| index as u32 + 2)
}

#[async_trait]
impl LyricsApi for MockApi {
    async fn search_artists(&self, _query: &str) -> Result<Vec<Artist>, ApiError> {
        Ok(self.artists.clone())
    }

    async fn artist_albums(&self, _artist_id: u64, page: u32) -> Result<AlbumPage, ApiError> {
        self.album_page_calls.lock().unwrap().push(page);
        let index = page as usize - 1;
        Ok(AlbumPage {
            albums: self.album_pages.get(index).cloned().unwrap_or_default(),
            next_page: next_page(index, self.album_pages.len()),
        })
    }

    async fn album_tracks(&self, album_id: u64, page: u32) -> Result<TrackPage, ApiError> {
        self.track_page_calls.lock().unwrap().push((album_id, page));
        let pages = self.track_pages.get(&album_id).cloned().unwrap_or_default();
        let index = page as usize - 1;
        Ok(TrackPage {
            tracks: pages.get(index).cloned().unwrap_or_default(),
            next_page: next_page(index, pages.len()),
        })
    }

    async fn song_lyrics(&self, song_id: u64) -> Result<Option<String>, ApiError> {
        let call = {
            let mut calls = self.lyrics_calls.lock().unwrap();
            let call = calls.iter().filter(|&&id| id == song_id).count();
            calls.push(song_id);
            call
        };

        let reply = match self.replies.get(&song_id) {
            Some(script) if !script.is_empty() => script[call.min(script.len() - 1)].clone(),
            _ => Reply::NoLyrics,
        };

        match reply {
            Reply::Lyrics(text) => Ok(Some(text.to_string())),
            Reply::NoLyrics => Ok(None),
            Reply::Timeout => Err(ApiError::Timeout),
            Reply::ServerError => Err(ApiError::Status(500, "boom".to_string())),
        }
    }
}
