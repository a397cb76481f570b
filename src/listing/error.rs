//! Errors raised while listing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the lister.
///
/// `DirectoryAccess` is fatal for the top-level directory only; nested
/// directories and `MetadataAccess` failures are reported and skipped.
#[derive(Debug, Error)]
pub enum ListingError {
    /// A directory could not be opened or read.
    #[error("cannot open directory '{}': {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata for a single entry could not be read.
    #[error("cannot access '{}': {source}", path.display())]
    MetadataAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the listing failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ListingError {
    /// The reader of the listing went away, e.g. `lsx | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ListingError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
