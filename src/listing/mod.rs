//! Directory listing engine
//!
//! Reads a directory, drops hidden entries, fetches metadata once per entry,
//! sorts, and hands each entry to a [`ListingOutput`]. Subdirectories are
//! listed depth-first when recursion is enabled.

mod config;
mod entry;
mod error;
mod lister;
mod sort;
mod source;

pub use config::{ListingConfig, SortKey};
pub use entry::{Entry, EntryKind, Metadata, RawEntry};
pub use error::ListingError;
pub use lister::{Lister, ListingOutput, ListingStats};
pub use sort::sort_entries;
pub use source::{DirectoryReader, FileSystem, MetadataProvider};
