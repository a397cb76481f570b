//! Console renderer
//!
//! Writes one line per entry to a color-capable stream and sends recoverable
//! errors to a separate error stream.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{
    PROGRAM_NAME,
    listing::{Entry, ListingConfig, ListingError, ListingOutput},
};

use super::config::OutputConfig;
use super::format::{format_mtime, format_size_field, permission_string};
use super::owners::OwnerNames;

/// Renders listing output line by line.
pub struct ConsoleRenderer<W, E> {
    out: W,
    err: E,
    owners: OwnerNames,
}

impl ConsoleRenderer<StandardStream, io::Stderr> {
    /// Render to stdout, reporting errors on stderr.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), io::stderr())
    }
}

impl<W: WriteColor, E: Write> ConsoleRenderer<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            owners: OwnerNames::new(),
        }
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// `<perms> <nlink> <owner> <group> <size> <mtime> ` prefix.
    fn write_long_prefix(&mut self, entry: &Entry, human_readable: bool) -> io::Result<()> {
        let meta = &entry.metadata;
        write!(
            self.out,
            "{} {} {} {} {} {} ",
            permission_string(meta.mode, entry.is_dir()),
            meta.nlink,
            self.owners.user(meta.uid),
            self.owners.group(meta.gid),
            format_size_field(meta.size, human_readable),
            format_mtime(meta.modified),
        )
    }

    fn write_name(&mut self, entry: &Entry) -> io::Result<()> {
        let color = if entry.is_dir() {
            Some(Color::Blue)
        } else if entry.is_executable() {
            Some(Color::Green)
        } else {
            None
        };

        match color {
            Some(c) => {
                self.out.set_color(ColorSpec::new().set_fg(Some(c)))?;
                self.out.write_all(entry.name_bytes())?;
                self.out.reset()?;
            }
            None => self.out.write_all(entry.name_bytes())?,
        }
        writeln!(self.out)
    }
}

impl<W: WriteColor, E: Write> ListingOutput for ConsoleRenderer<W, E> {
    fn output_entry(&mut self, entry: &Entry, config: &ListingConfig) -> io::Result<()> {
        if config.long_listing {
            self.write_long_prefix(entry, config.human_readable)?;
        }
        self.write_name(entry)
    }

    fn output_header(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.write_all(path.as_os_str().as_encoded_bytes())?;
        writeln!(self.out, ":")
    }

    fn report_error(&mut self, error: &ListingError) -> io::Result<()> {
        // Keep stdout ahead of the error so interleaving matches traversal order
        self.out.flush()?;
        writeln!(self.err, "{}: {}", PROGRAM_NAME, error)
    }
}
