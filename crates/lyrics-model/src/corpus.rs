use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use crate::album::Album;
use crate::song::Song;

/// The assembled corpus: the filtered albums in catalog order and the
/// songs collected from them in processing order.
///
/// Tracks that were skipped are kept for reporting but are never written.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub albums: Vec<Album>,
    pub songs: Vec<Song>,
    pub skipped: Vec<SkippedSong>,
}

/// A track that did not make it into the corpus, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSong {
    pub id: u64,
    pub title: String,
    pub album_title: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Already collected from an earlier album (compilations, reissues).
    Duplicate,
    /// The source has no lyrics for the song (instrumentals, unreleased).
    NoLyrics,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Duplicate => write!(f, "duplicate"),
            SkipReason::NoLyrics => write!(f, "no lyrics"),
        }
    }
}

impl Corpus {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// Ids that occur more than once among the collected songs.
    /// Always empty for a corpus built by the assembler.
    pub fn duplicate_ids(&self) -> Vec<u64> {
        let mut seen = HashSet::new();
        self.songs
            .iter()
            .filter(|s| !seen.insert(s.id))
            .map(|s| s.id)
            .collect()
    }

    /// Newline-delimited training text: every line of every song, in order,
    /// each followed by `\n`. No separators between songs.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for song in &self.songs {
            for line in song.lyrics.split('\n') {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    /// Group songs under their album titles in album order.
    ///
    /// Every album appears, including those with no collected songs.
    /// Albums sharing a title collapse into the group of the first one.
    pub fn document(&self) -> CorpusDocument {
        let mut groups: Vec<AlbumGroup> = Vec::new();
        let mut group_of_album = Vec::with_capacity(self.albums.len());

        for album in &self.albums {
            let index = match groups.iter().position(|g| g.album == album.title) {
                Some(i) => i,
                None => {
                    groups.push(AlbumGroup {
                        album: album.title.clone(),
                        songs: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            group_of_album.push((album.id, index));
        }

        for song in &self.songs {
            let index = match group_of_album.iter().find(|(id, _)| *id == song.album_id) {
                Some((_, i)) => *i,
                None => {
                    groups.push(AlbumGroup {
                        album: song.album_title.clone(),
                        songs: Vec::new(),
                    });
                    let i = groups.len() - 1;
                    group_of_album.push((song.album_id, i));
                    i
                }
            };
            groups[index].songs.push(CorpusEntry {
                id: song.id,
                title: song.title.clone(),
                lyrics: song.lyrics.clone(),
            });
        }

        CorpusDocument { albums: groups }
    }
}

/// Structured corpus file contents: album title → songs, in order.
///
/// Serialized as a JSON object whose keys keep album order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusDocument {
    pub albums: Vec<AlbumGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumGroup {
    pub album: String,
    pub songs: Vec<CorpusEntry>,
}

/// One song as stored in a structured corpus file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusEntry {
    pub id: u64,
    pub title: String,
    pub lyrics: String,
}

impl CorpusDocument {
    pub fn song_count(&self) -> usize {
        self.albums.iter().map(|g| g.songs.len()).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CorpusEntry)> {
        self.albums
            .iter()
            .flat_map(|g| g.songs.iter().map(move |s| (g.album.as_str(), s)))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Serialize for CorpusDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.albums.len()))?;
        for group in &self.albums {
            map.serialize_entry(&group.album, &group.songs)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CorpusDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = CorpusDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of album title to a list of songs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut albums = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((album, songs)) = access.next_entry::<String, Vec<CorpusEntry>>()? {
                    albums.push(AlbumGroup { album, songs });
                }
                Ok(CorpusDocument { albums })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
