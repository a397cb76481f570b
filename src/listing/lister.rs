//! Lister - reads, filters, sorts and renders directory entries

use std::io;
use std::path::Path;

use super::config::ListingConfig;
use super::entry::Entry;
use super::error::ListingError;
use super::sort::sort_entries;
use super::source::{DirectoryReader, FileSystem, MetadataProvider};

/// Callback for listing output - receives entries in display order.
pub trait ListingOutput {
    /// Render one entry line.
    fn output_entry(&mut self, entry: &Entry, config: &ListingConfig) -> io::Result<()>;

    /// Emitted before the contents of a subdirectory in a recursive listing.
    fn output_header(&mut self, path: &Path) -> io::Result<()>;

    /// A recoverable problem: the traversal skipped something and continues.
    fn report_error(&mut self, error: &ListingError) -> io::Result<()>;
}

/// Counters collected over one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStats {
    /// Directories whose contents were listed, including the root
    pub directories: usize,
    /// Entries rendered
    pub entries: usize,
    /// Entries dropped because their metadata could not be read
    pub skipped: usize,
    /// Subdirectories that could not be opened during recursion
    pub unreadable_dirs: usize,
}

/// Lists a directory according to a [`ListingConfig`].
pub struct Lister<S = FileSystem> {
    config: ListingConfig,
    source: S,
}

impl Lister<FileSystem> {
    pub fn new(config: ListingConfig) -> Self {
        Self::with_source(config, FileSystem)
    }
}

impl<S: DirectoryReader + MetadataProvider> Lister<S> {
    /// Use a custom directory/metadata source.
    pub fn with_source(config: ListingConfig, source: S) -> Self {
        Self { config, source }
    }

    /// List the configured path.
    pub fn list<O: ListingOutput>(&self, output: &mut O) -> Result<ListingStats, ListingError> {
        self.list_path(&self.config.path, output)
    }

    /// List `path` with this lister's configuration.
    ///
    /// Fails if `path` itself cannot be opened. Problems below it are
    /// reported through `output` and counted in the returned stats.
    pub fn list_path<O: ListingOutput>(
        &self,
        path: &Path,
        output: &mut O,
    ) -> Result<ListingStats, ListingError> {
        let mut stats = ListingStats::default();
        self.list_dir(path, output, &mut stats)?;
        Ok(stats)
    }

    fn list_dir<O: ListingOutput>(
        &self,
        path: &Path,
        output: &mut O,
        stats: &mut ListingStats,
    ) -> Result<(), ListingError> {
        let entries = self.collect_entries(path, output, stats)?;
        stats.directories += 1;

        for entry in entries {
            output.output_entry(&entry, &self.config)?;
            stats.entries += 1;

            if !self.config.recursive || !entry.is_dir() || entry.is_self_or_parent() {
                continue;
            }

            output.output_header(&entry.path)?;
            match self.list_dir(&entry.path, output, stats) {
                Ok(()) => {}
                Err(e @ ListingError::DirectoryAccess { .. }) => {
                    stats.unreadable_dirs += 1;
                    output.report_error(&e)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Read, filter, stat and sort the entries of one directory.
    fn collect_entries<O: ListingOutput>(
        &self,
        path: &Path,
        output: &mut O,
        stats: &mut ListingStats,
    ) -> Result<Vec<Entry>, ListingError> {
        let raw = self
            .source
            .read_entries(path)
            .map_err(|source| ListingError::DirectoryAccess {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(dir = %path.display(), count = raw.len(), "read directory");

        let mut entries = Vec::with_capacity(raw.len());
        for raw in raw {
            if raw.is_hidden() && !self.config.show_hidden {
                continue;
            }

            match self.source.metadata(&raw.path) {
                Ok(metadata) => entries.push(Entry::new(raw, metadata)),
                Err(source) => {
                    tracing::trace!(path = %raw.path.display(), "skipping entry without metadata");
                    stats.skipped += 1;
                    output.report_error(&ListingError::MetadataAccess {
                        path: raw.path,
                        source,
                    })?;
                }
            }
        }

        sort_entries(&mut entries, self.config.sort_key());
        Ok(entries)
    }
}
