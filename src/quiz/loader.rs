//! Corpus loading utilities
//!
//! `CorpusLoader` loads raw corpus text from a file or a string and runs the
//! generation pipeline on it. File contents are decoded lossily: malformed
//! UTF-8 bytes are substituted rather than aborting the run. The file handle
//! is released as soon as the read completes, before any parsing happens.

use crate::quiz::emitting::EmitOptions;
use crate::quiz::pipeline::{Generated, Generator, ParseOutcome};
use crate::quiz::segmenting::SegmentError;
use std::fs;
use std::path::Path;

/// Error that can occur when loading and processing a corpus
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the input file (including a missing file)
    IoError(String),
    /// Segmentation error in the loaded corpus
    SegmentError(SegmentError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::SegmentError(err) => write!(f, "Segmentation error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<SegmentError> for LoaderError {
    fn from(err: SegmentError) -> Self {
        LoaderError::SegmentError(err)
    }
}

/// Corpus loader with pipeline shortcuts
pub struct CorpusLoader {
    source: String,
}

impl CorpusLoader {
    /// Load from a file path.
    ///
    /// A missing file is fatal and reported as [`LoaderError::IoError`];
    /// malformed encoding is not, the offending bytes are substituted.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|err| LoaderError::IoError(format!("{}: {}", path.display(), err)))?;
        Ok(CorpusLoader {
            source: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Load from an in-memory string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        CorpusLoader {
            source: source.into(),
        }
    }

    /// The raw source text
    pub fn source_ref(&self) -> &str {
        &self.source
    }

    /// Segment and extract the loaded corpus
    pub fn parse(&self) -> Result<ParseOutcome, LoaderError> {
        Ok(Generator::parse(&self.source)?)
    }

    /// Run the full pipeline with the given emit options
    pub fn generate(&self, opts: EmitOptions) -> Result<Generated, LoaderError> {
        Ok(Generator::new(opts).generate(&self.source)?)
    }
}
