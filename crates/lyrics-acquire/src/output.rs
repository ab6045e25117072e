use crate::error::{AcquireError, Result};
use lyrics_model::Corpus;
use std::fmt;
use std::fs;
use std::path::Path;

/// On-disk corpus format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// `.txt`: newline-delimited training text.
    Text,
    /// `.json`: album title → `[{id, title, lyrics}]`.
    Json,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().map(|e| e.to_string_lossy()) {
            Some(ext) if ext == "txt" => Ok(CorpusFormat::Text),
            Some(ext) if ext == "json" => Ok(CorpusFormat::Json),
            Some(ext) => Err(AcquireError::UnsupportedFormat(format!(".{ext}"))),
            None => Err(AcquireError::UnsupportedFormat(String::new())),
        }
    }
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusFormat::Text => write!(f, "txt"),
            CorpusFormat::Json => write!(f, "json"),
        }
    }
}

/// Write the corpus to `path`, in the format its extension names.
///
/// The extension is checked before anything touches the filesystem. The
/// parent directory is created if missing. For `.txt` an existing file is
/// removed first and every line of every song is written in order; `.json`
/// is pretty-printed with albums in corpus order.
pub fn write_corpus(corpus: &Corpus, path: &Path) -> Result<CorpusFormat> {
    let format = CorpusFormat::from_path(path)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    match format {
        CorpusFormat::Text => {
            if path.exists() {
                fs::remove_file(path)?;
                tracing::debug!(path = %path.display(), "Removed existing corpus");
            }
            let text = corpus.plain_text();
            fs::write(path, &text)?;
            tracing::info!(
                path = %path.display(),
                songs = corpus.songs.len(),
                lines = text.lines().count(),
                "Wrote text corpus"
            );
        }
        CorpusFormat::Json => {
            let document = corpus.document();
            let json = document.to_json_pretty()?;
            fs::write(path, &json)?;
            tracing::info!(
                path = %path.display(),
                albums = document.albums.len(),
                songs = document.song_count(),
                "Wrote JSON corpus"
            );
        }
    }

    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyrics_model::{Album, CorpusDocument, ReleaseDate, Song};

    fn sample_corpus() -> Corpus {
        let dookie = Album {
            id: 1,
            title: "Dookie".to_string(),
            artist: "Green Day".to_string(),
            release: ReleaseDate::new(Some(1994), Some(2)),
        };
        let warning = Album {
            id: 2,
            title: "Warning".to_string(),
            artist: "Green Day".to_string(),
            release: ReleaseDate::new(Some(2000), Some(10)),
        };
        let song = |id: u64, title: &str, lyrics: &str| Song {
            id,
            title: title.to_string(),
            artist: "Green Day".to_string(),
            album_id: 1,
            album_title: "Dookie".to_string(),
            release: dookie.release,
            lyrics: lyrics.to_string(),
        };

        let mut corpus = Corpus::new(vec![dookie.clone(), warning]);
        corpus.songs.push(song(10, "Basket Case", "Do you have the time\nTo listen to me whine"));
        corpus.songs.push(song(11, "Longview", "Sit around and watch the tube"));
        corpus
    }

    #[test]
    fn test_unsupported_extension_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("corpus.xyz");

        let err = write_corpus(&sample_corpus(), &path).unwrap_err();
        assert!(matches!(&err, AcquireError::UnsupportedFormat(ext) if ext == ".xyz"));
        assert!(err.to_string().contains(".xyz"));
        assert!(!path.exists());
        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn test_missing_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus");
        assert!(matches!(
            write_corpus(&sample_corpus(), &path),
            Err(AcquireError::UnsupportedFormat(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_text_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("lyrics").join("Green Day.txt");

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale contents that should disappear\n".repeat(10)).unwrap();

        let format = write_corpus(&sample_corpus(), &path).unwrap();
        assert_eq!(format, CorpusFormat::Text);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Do you have the time\nTo listen to me whine\nSit around and watch the tube\n"
        );
    }

    #[test]
    fn test_write_json_groups_by_album() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("corpus.json");

        let format = write_corpus(&sample_corpus(), &path).unwrap();
        assert_eq!(format, CorpusFormat::Json);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"Dookie\": ["));
        let doc = CorpusDocument::from_json(&written).unwrap();
        assert_eq!(doc.albums.len(), 2);
        assert_eq!(doc.albums[0].album, "Dookie");
        assert_eq!(doc.albums[0].songs[1].title, "Longview");
        assert!(doc.albums[1].songs.is_empty());
    }

    #[test]
    fn test_format_from_path_is_exact() {
        assert_eq!(CorpusFormat::from_path(Path::new("a.txt")).unwrap(), CorpusFormat::Text);
        assert_eq!(CorpusFormat::from_path(Path::new("a/b.json")).unwrap(), CorpusFormat::Json);
        assert!(CorpusFormat::from_path(Path::new("a.TXT")).is_err());
    }
}
