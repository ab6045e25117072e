use lyrics_model::{Album, Corpus, SkipReason, SkippedSong, Song, Track};
use std::collections::HashSet;

use crate::api::LyricsApi;
use crate::error::Result;
use crate::lyrics::{fetch_lyrics, DEFAULT_MAX_RETRIES};

#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Attempts per song before a timeout aborts the run.
    pub max_retries: u32,
    /// Stop once this many songs have been collected.
    pub max_songs: Option<usize>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            max_songs: None,
        }
    }
}

/// Walk albums and their tracks in order, collecting each song's lyrics once.
///
/// A song already collected from an earlier album is skipped as a duplicate
/// (compilations repeat tracks); a song without lyrics is skipped as well.
/// Songs keep the order in which they were collected.
pub async fn assemble(
    api: &dyn LyricsApi,
    albums: &[Album],
    options: &AssembleOptions,
) -> Result<Corpus> {
    let mut corpus = Corpus::new(albums.to_vec());
    let mut seen: HashSet<u64> = HashSet::new();

    let limit_reached = |corpus: &Corpus| {
        options.max_songs.is_some_and(|max| corpus.songs.len() >= max)
    };

    'albums: for album in albums {
        if limit_reached(&corpus) {
            tracing::info!(max_songs = corpus.songs.len(), "Song limit reached");
            break;
        }

        let tracks = fetch_tracks(api, album.id).await?;
        tracing::info!(album = %album.title, tracks = tracks.len(), "Processing album");

        for track in &tracks {
            if limit_reached(&corpus) {
                tracing::info!(max_songs = corpus.songs.len(), "Song limit reached");
                break 'albums;
            }

            let stub = Song::stub(album, track);

            if !seen.insert(stub.id) {
                tracing::info!(song = %stub.title, album = %album.title, "Skipping duplicate song");
                corpus.skipped.push(skipped(&stub, SkipReason::Duplicate));
                continue;
            }

            tracing::info!(song = %stub.title, "Getting lyrics");
            match fetch_lyrics(api, stub.id, options.max_retries).await? {
                Some(lyrics) => {
                    tracing::debug!(song = %stub.title, "\n{lyrics}");
                    corpus.songs.push(stub.with_lyrics(lyrics));
                }
                None => {
                    tracing::info!(song = %stub.title, "No lyrics found");
                    corpus.skipped.push(skipped(&stub, SkipReason::NoLyrics));
                }
            }
        }
    }

    tracing::info!(
        songs = corpus.songs.len(),
        duplicates = corpus.skipped_count(SkipReason::Duplicate),
        without_lyrics = corpus.skipped_count(SkipReason::NoLyrics),
        "Assembled corpus"
    );

    Ok(corpus)
}

/// All tracks of an album, across every listing page.
async fn fetch_tracks(api: &dyn LyricsApi, album_id: u64) -> Result<Vec<Track>> {
    let mut tracks = Vec::new();
    let mut page = Some(1);

    while let Some(number) = page {
        let result = api.album_tracks(album_id, number).await?;
        tracks.extend(result.tracks);
        page = result.next_page;
    }

    Ok(tracks)
}

fn skipped(song: &Song, reason: SkipReason) -> SkippedSong {
    SkippedSong {
        id: song.id,
        title: song.title.clone(),
        album_title: song.album_title.clone(),
        reason,
    }
}
