//! Listing output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `format` - Long listing field formatting (sizes, permissions, times)
//! - `owners` - uid/gid to name lookup
//! - `console` - Colorized line renderer

mod config;
mod console;
mod format;
mod owners;

pub use config::OutputConfig;
pub use console::ConsoleRenderer;
pub use format::{format_mtime, format_size, format_size_field, permission_string};
pub use owners::OwnerNames;
