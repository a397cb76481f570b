//! Configuration types for the lister

use std::path::PathBuf;

/// Configuration for one listing invocation.
///
/// Immutable for the duration of a traversal; every recursive frame sees the
/// same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub long_listing: bool,
    pub recursive: bool,
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    pub human_readable: bool,
    pub sort_by_time: bool,
    pub sort_by_size: bool,
    /// Directory to list
    pub path: PathBuf,
}

impl ListingConfig {
    /// The field entries are ordered by. Time takes precedence over size.
    pub fn sort_key(&self) -> SortKey {
        if self.sort_by_time {
            SortKey::Time
        } else if self.sort_by_size {
            SortKey::Size
        } else {
            SortKey::Name
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            long_listing: false,
            recursive: false,
            show_hidden: false,
            human_readable: false,
            sort_by_time: false,
            sort_by_size: false,
            path: PathBuf::from("."),
        }
    }
}

/// Ordering applied to the entries of each directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Name ascending, byte-wise
    Name,
    /// Size descending
    Size,
    /// Modification time descending
    Time,
}
