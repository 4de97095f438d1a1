/// Serial directory walker using `jwalk`.
///
/// `jwalk` runs in `Parallelism::Serial` mode so the walk happens on the
/// calling thread. Directory symlinks are not followed. A file entry is
/// stat'ed through `fs::metadata`, which does follow links, so a symlink to
/// a regular file counts and a dangling one is skipped with a warning.
use super::{matches_extension, Collection};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Walk `root` and collect the modification time of every matching file.
pub(crate) fn walk_modification_times(root: &Path, extension: &str) -> Collection {
    let mut collection = Collection::default();

    // os.walk-style semantics: a root that is missing (or not a directory)
    // simply has nothing in it.
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            debug!(root = %root.display(), "Scan root is not a directory, nothing to collect");
            return collection;
        }
        Err(err) => {
            debug!(root = %root.display(), "Scan root unavailable ({err}), nothing to collect");
            return collection;
        }
    }

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Entries that could not be produced at all (the directory
                // vanished mid-walk, or its own metadata failed).
                collection.unreadable_dirs += 1;
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!(path = %path, "Skipping unreadable directory: {err}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            // A directory whose listing failed still arrives as an entry;
            // the error rides along on it and its children are missing.
            if let Some(err) = &entry.read_children_error {
                collection.unreadable_dirs += 1;
                warn!(path = %entry.path().display(), "Skipping unreadable directory: {err}");
            }
            continue;
        }
        if entry.depth() == 0 {
            continue;
        }
        if !matches_extension(entry.file_name(), extension) {
            continue;
        }

        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                collection.skipped += 1;
                warn!(path = %path.display(), "Skipping file, metadata unreadable: {err}");
                continue;
            }
        };
        if !meta.is_file() {
            // Symlink to a directory or some other special file.
            continue;
        }

        match meta.modified() {
            Ok(modified) => collection.modified.push(modified),
            Err(err) => {
                collection.skipped += 1;
                warn!(path = %path.display(), "Skipping file, modification time unreadable: {err}");
            }
        }
    }

    debug!(
        root = %root.display(),
        files = collection.len(),
        skipped = collection.skipped,
        unreadable_dirs = collection.unreadable_dirs,
        "Walk complete"
    );
    collection
}
