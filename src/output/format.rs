//! Field formatting for long listings

use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Width of the right-justified size column.
pub const SIZE_FIELD_WIDTH: usize = 7;

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// The size column: human-readable or raw bytes, right-justified.
pub fn format_size_field(bytes: u64, human_readable: bool) -> String {
    let size = if human_readable {
        format_size(bytes)
    } else {
        bytes.to_string()
    };
    format!("{:>width$}", size, width = SIZE_FIELD_WIDTH)
}

/// Render `mode` as `drwxr-xr-x` style permissions.
pub fn permission_string(mode: u32, is_dir: bool) -> String {
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    let mut perms = String::with_capacity(10);
    perms.push(if is_dir { 'd' } else { '-' });
    for (bit, c) in BITS {
        perms.push(if mode & bit != 0 { c } else { '-' });
    }
    perms
}

/// Modification time in local time, `YYYY-MM-DD HH:MM`.
pub fn format_mtime(time: SystemTime) -> String {
    let dt: DateTime<Local> = time.into();
    dt.format("%Y-%m-%d %H:%M").to_string()
}
