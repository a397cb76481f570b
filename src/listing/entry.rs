//! Entry and metadata types produced during traversal

use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Owner-execute permission bit.
const S_IXUSR: u32 = 0o100;

/// Kind of filesystem object an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    RegularFile,
    Other,
}

/// Metadata for a single entry, fetched once per traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub kind: EntryKind,
    /// Size in bytes
    pub size: u64,
    pub modified: SystemTime,
    /// Raw `st_mode` bits
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub nlink: u64,
}

impl Metadata {
    /// Convert from `std::fs::Metadata`.
    ///
    /// Fails only if the platform cannot report a modification time.
    pub fn from_fs(meta: &fs::Metadata) -> std::io::Result<Self> {
        let file_type = meta.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::RegularFile
        } else {
            EntryKind::Other
        };

        Ok(Self {
            kind,
            size: meta.len(),
            modified: meta.modified()?,
            mode: meta.mode(),
            uid: meta.uid(),
            gid: meta.gid(),
            nlink: meta.nlink(),
        })
    }
}

/// A raw directory entry as yielded by a [`DirectoryReader`](super::DirectoryReader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub path: PathBuf,
}

impl RawEntry {
    /// Build an entry for `name` inside `dir`.
    pub fn new(dir: &Path, name: impl Into<OsString>) -> Self {
        let name = name.into();
        let path = dir.join(&name);
        Self { name, path }
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

/// A directory entry paired with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
    pub metadata: Metadata,
}

impl Entry {
    pub fn new(raw: RawEntry, metadata: Metadata) -> Self {
        Self {
            name: raw.name,
            path: raw.path,
            metadata,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.metadata.kind
    }

    pub fn is_dir(&self) -> bool {
        self.metadata.kind == EntryKind::Directory
    }

    /// Regular file with the owner-execute bit set.
    pub fn is_executable(&self) -> bool {
        self.metadata.kind == EntryKind::RegularFile && self.metadata.mode & S_IXUSR != 0
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }

    /// The literal `.` or `..` entry of a directory.
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    /// The name exactly as stored on disk, which need not be UTF-8.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_encoded_bytes()
    }
}

fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}
