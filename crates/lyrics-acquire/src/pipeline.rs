use lyrics_model::Corpus;
use std::path::PathBuf;

use crate::api::LyricsApi;
use crate::assemble::{assemble, AssembleOptions};
use crate::catalog::{fetch_albums, find_artist, AlbumFilter};
use crate::error::Result;
use crate::output::{write_corpus, CorpusFormat};

/// Everything one corpus build needs besides the API client.
#[derive(Debug, Clone)]
pub struct AcquireRequest {
    pub artist: String,
    pub filter: AlbumFilter,
    pub options: AssembleOptions,
    pub output: PathBuf,
}

/// Build a lyrics corpus for one artist and write it to `request.output`.
///
/// The output format is checked up front so a bad extension fails before
/// any request is made.
pub async fn acquire(api: &dyn LyricsApi, request: &AcquireRequest) -> Result<Corpus> {
    let format = CorpusFormat::from_path(&request.output)?;

    let artist = find_artist(api, &request.artist).await?;
    tracing::info!(artist = %artist.name, id = artist.id, "Found artist");

    let albums = fetch_albums(api, artist.id, &request.filter).await?;
    let corpus = assemble(api, &albums, &request.options).await?;

    write_corpus(&corpus, &request.output)?;
    tracing::info!(path = %request.output.display(), %format, songs = corpus.songs.len(), "Corpus complete");

    Ok(corpus)
}
