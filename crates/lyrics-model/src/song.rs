use serde::{Deserialize, Serialize};

use crate::album::{Album, ReleaseDate};

/// One entry of an album's track listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    /// Song id; the same song keeps its id across every release it appears on.
    pub song_id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
}

/// A song collected into the corpus. Identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Song {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub album_id: u64,
    pub album_title: String,
    #[serde(default)]
    pub release: ReleaseDate,
    /// Cleaned lyrics; empty until fetched.
    #[serde(default)]
    pub lyrics: String,
}

impl Song {
    /// Build a song stub for `track`, inheriting artist and date from the album.
    pub fn stub(album: &Album, track: &Track) -> Self {
        Self {
            id: track.song_id,
            title: track.title.clone(),
            artist: album.artist.clone(),
            album_id: album.id,
            album_title: album.title.clone(),
            release: album.release,
            lyrics: String::new(),
        }
    }

    pub fn with_lyrics(mut self, lyrics: String) -> Self {
        self.lyrics = lyrics;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_inherits_album_fields() {
        let album = Album {
            id: 7,
            title: "Dookie".to_string(),
            artist: "Green Day".to_string(),
            release: ReleaseDate::new(Some(1994), Some(2)),
        };
        let track = Track {
            song_id: 42,
            title: "Basket Case".to_string(),
            number: Some(7),
        };

        let song = Song::stub(&album, &track);
        assert_eq!(song.id, 42);
        assert_eq!(song.title, "Basket Case");
        assert_eq!(song.artist, "Green Day");
        assert_eq!(song.album_id, 7);
        assert_eq!(song.album_title, "Dookie");
        assert_eq!(song.release.year, Some(1994));
        assert!(song.lyrics.is_empty());

        let song = song.with_lyrics("Do you have the time".to_string());
        assert_eq!(song.lyrics, "Do you have the time");
    }
}
