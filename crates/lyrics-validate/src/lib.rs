use anyhow::{Context, Result};
use lyrics_acquire::{has_embed_artifact, sanitize};
use lyrics_model::CorpusDocument;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("corpus contains no lyrics")]
    EmptyCorpus,

    #[error("duplicate song ID: {0}")]
    DuplicateSongId(u64),

    #[error("song '{0}' has empty lyrics")]
    EmptyLyrics(String),

    #[error("song '{0}' still starts with a title marker")]
    TitleMarker(String),

    #[error("{0} contains an Embed artifact")]
    EmbedArtifact(String),

    #[error("unsupported corpus format '{0}' (expected .txt or .json)")]
    UnsupportedFormat(String),
}

/// Validate a written corpus file, choosing the checks by extension.
///
/// Returns every problem found; an empty list means the corpus is clean.
pub fn validate(file_path: &str) -> Result<Vec<ValidationError>> {
    let path = Path::new(file_path);
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    let errors = match extension.as_str() {
        "json" => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {file_path}"))?;
            let document = CorpusDocument::from_json(&contents)
                .with_context(|| format!("Failed to parse {file_path} as a JSON corpus"))?;
            tracing::info!(
                albums = document.albums.len(),
                songs = document.song_count(),
                "Loaded JSON corpus"
            );
            validate_document(&document)
        }
        "txt" => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {file_path}"))?;
            tracing::info!(lines = contents.lines().count(), "Loaded text corpus");
            validate_text(&contents)
        }
        "" => vec![ValidationError::UnsupportedFormat(String::new())],
        other => vec![ValidationError::UnsupportedFormat(format!(".{other}"))],
    };

    for e in &errors {
        tracing::warn!("{e}");
    }

    Ok(errors)
}

/// Check a structured corpus: unique song ids, non-empty and fully
/// sanitized lyrics.
pub fn validate_document(document: &CorpusDocument) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if document.song_count() == 0 {
        errors.push(ValidationError::EmptyCorpus);
    }

    let mut seen_ids = HashSet::new();
    for (album, entry) in document.entries() {
        if !seen_ids.insert(entry.id) {
            errors.push(ValidationError::DuplicateSongId(entry.id));
        }

        let label = format!("{album} / {}", entry.title);
        if entry.lyrics.trim().is_empty() {
            errors.push(ValidationError::EmptyLyrics(label));
        } else if has_embed_artifact(&entry.lyrics) {
            errors.push(ValidationError::EmbedArtifact(format!("song '{label}'")));
        } else if sanitize(&entry.lyrics) != entry.lyrics {
            errors.push(ValidationError::TitleMarker(label));
        }
    }

    errors
}

/// Check a plain-text corpus. Song boundaries are not recorded in the text,
/// so only per-line artifacts can be detected.
pub fn validate_text(text: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if text.trim().is_empty() {
        errors.push(ValidationError::EmptyCorpus);
    }

    for (index, line) in text.lines().enumerate() {
        if has_embed_artifact(line) {
            errors.push(ValidationError::EmbedArtifact(format!("line {}", index + 1)));
        }
    }

    errors
}
