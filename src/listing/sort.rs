//! Entry ordering

use std::cmp::Ordering;

use super::config::SortKey;
use super::entry::Entry;

/// Sort entries in place by `key`.
///
/// Size and time order descending; ties fall back to name ascending so the
/// result does not depend on directory read order.
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    entries.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    let primary = match key {
        SortKey::Name => Ordering::Equal,
        SortKey::Size => b.metadata.size.cmp(&a.metadata.size),
        SortKey::Time => b.metadata.modified.cmp(&a.metadata.modified),
    };
    primary.then_with(|| a.name.cmp(&b.name))
}
