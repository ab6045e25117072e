pub mod api;
pub mod assemble;
pub mod catalog;
pub mod config;
pub mod error;
pub mod genius;
pub mod lyrics;
pub mod normalize;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod sanitize;

#[cfg(test)]
mod mock;

pub use api::{Artist, LyricsApi};
pub use assemble::{assemble, AssembleOptions};
pub use catalog::{fetch_albums, find_artist, AlbumFilter};
pub use config::GeniusConfig;
pub use error::{AcquireError, ApiError};
pub use genius::GeniusClient;
pub use lyrics::{fetch_lyrics, DEFAULT_MAX_RETRIES};
pub use output::{write_corpus, CorpusFormat};
pub use pipeline::{acquire, AcquireRequest};
pub use sanitize::{has_embed_artifact, sanitize};
