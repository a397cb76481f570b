//! Directory and metadata sources
//!
//! The lister reads through these traits so that traversal can be exercised
//! against the real filesystem or an in-memory fake.

use std::fs;
use std::io;
use std::path::Path;

use super::entry::{Metadata, RawEntry};

/// Produces the entries of a directory.
pub trait DirectoryReader {
    /// Read every entry of `dir`, in no particular order.
    ///
    /// The directory handle must not outlive this call.
    fn read_entries(&self, dir: &Path) -> io::Result<Vec<RawEntry>>;
}

/// Produces metadata for a path.
pub trait MetadataProvider {
    fn metadata(&self, path: &Path) -> io::Result<Metadata>;
}

/// The real filesystem, backed by `std::fs`.
///
/// Metadata follows symbolic links (stat semantics), so a dangling link
/// fails with `NotFound`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl DirectoryReader for FileSystem {
    fn read_entries(&self, dir: &Path) -> io::Result<Vec<RawEntry>> {
        let read_dir = fs::read_dir(dir)?;

        // readdir yields `.` and `..`; std filters them out, so put them back
        let mut entries = vec![RawEntry::new(dir, "."), RawEntry::new(dir, "..")];
        for entry in read_dir {
            match entry {
                Ok(e) => entries.push(RawEntry::new(dir, e.file_name())),
                Err(e) => tracing::trace!(dir = %dir.display(), error = %e, "unreadable dirent"),
            }
        }
        Ok(entries)
    }
}

impl MetadataProvider for FileSystem {
    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        Metadata::from_fs(&fs::metadata(path)?)
    }
}
