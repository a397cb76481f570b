//! lsx - list directory contents with colors, sorting and recursion

pub mod listing;
pub mod output;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Name used as the prefix of diagnostics and in `--version` output.
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

pub use listing::{
    DirectoryReader, Entry, EntryKind, FileSystem, Lister, ListingConfig, ListingError,
    ListingOutput, ListingStats, Metadata, MetadataProvider, SortKey,
};
pub use output::{ConsoleRenderer, OutputConfig, format_size};
