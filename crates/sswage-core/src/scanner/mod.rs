/// Scanner module: finds matching files and reads their modification times.
///
/// The walk is serial and synchronous: a report processes one subdirectory
/// at a time, so there is no background thread or progress channel. Files
/// whose metadata cannot be read are logged with their path and skipped;
/// they never abort the scan.
mod walk;

use std::path::Path;
use std::time::SystemTime;

use walk::walk_modification_times;

/// Modification times gathered from one directory tree.
///
/// Paths are not retained: each matched file contributes one timestamp.
/// The order of `modified` follows directory enumeration and must not be
/// relied on.
#[derive(Debug, Default, Clone)]
pub struct Collection {
    pub modified: Vec<SystemTime>,
    /// Candidates that matched the extension but whose metadata or
    /// modification time could not be read.
    pub skipped: u64,
    /// Directories the walk could not enter.
    pub unreadable_dirs: u64,
}

impl Collection {
    /// Number of files whose timestamp was read.
    pub fn len(&self) -> usize {
        self.modified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modified.is_empty()
    }
}

/// Collect the modification times of every regular file under `root`
/// whose name ends with `extension` (case-sensitive).
///
/// A missing root yields an empty collection rather than an error.
pub fn collect_modification_times(root: &Path, extension: &str) -> Collection {
    walk_modification_times(root, extension)
}

/// True when the final path component ends with `extension`, compared byte
/// for byte.
pub fn matches_extension(file_name: &std::ffi::OsStr, extension: &str) -> bool {
    file_name.as_encoded_bytes().ends_with(extension.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(matches_extension(OsStr::new("widget.pro"), ".pro"));
        assert!(!matches_extension(OsStr::new("WIDGET.PRO"), ".pro"));
        assert!(!matches_extension(OsStr::new("widget.Pro"), ".pro"));
    }

    #[test]
    fn suffix_match_requires_the_dot() {
        assert!(!matches_extension(OsStr::new("macro"), ".pro"));
        assert!(matches_extension(OsStr::new(".pro"), ".pro"));
        assert!(!matches_extension(OsStr::new("a.prox"), ".pro"));
    }

    #[test]
    fn empty_collection_reports_empty() {
        let c = Collection::default();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
    }
}
