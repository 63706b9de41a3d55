use super::{AssetEntry, FileInfo};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Collect metadata for every key that starts with `query`.
///
/// This is a plain string prefix test: `/a` also matches `/ab`. Matches at
/// every depth are included and the key equal to `query` is skipped. Keys
/// sharing a prefix sit next to each other in the ordered index, so the scan
/// starts right after `query` and stops at the first non-match.
pub(crate) fn synthesize(index: &BTreeMap<String, AssetEntry>, query: &str) -> Option<Vec<FileInfo>> {
    let files: Vec<FileInfo> = index
        .range::<str, _>((Bound::Excluded(query), Bound::Unbounded))
        .take_while(|(path, _)| path.starts_with(query))
        .map(|(_, entry)| entry.info.clone())
        .collect();

    log::trace!("synthesized {} with {} entries", query, files.len());

    if files.is_empty() {
        None
    } else {
        Some(files)
    }
}

/// Last segment of a query path, used as the synthesized directory name
pub(crate) fn base_name(query: &str) -> &str {
    query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
