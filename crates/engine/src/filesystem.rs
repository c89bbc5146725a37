use crate::config::WalkOptions;
use crate::entry::FileEntry;
use crate::error::{EngineError, Result};
use ignore::{DirEntry, Walk, WalkBuilder};
use std::path::PathBuf;

/// Lazy recursive walk over every non-directory entry beneath a root.
///
/// Produced by [`walk`]. Single pass: once exhausted it keeps returning `None`.
pub struct FileWalk {
    inner: Walk,
    root: PathBuf,
    yielded: usize,
    finished: bool,
}

impl std::fmt::Debug for FileWalk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWalk")
            .field("root", &self.root)
            .field("yielded", &self.yielded)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// Open a walk rooted at `options.root`.
///
/// The root is checked before anything is yielded, so a missing or
/// non-directory root fails here rather than on first use.
///
/// # Errors
/// Returns [`EngineError::RootUnavailable`] if the root cannot be stat'ed and
/// [`EngineError::NotADirectory`] if it is not a directory.
pub fn walk(options: &WalkOptions) -> Result<FileWalk> {
    let root = options.root.clone();
    let meta = std::fs::metadata(&root).map_err(|source| EngineError::RootUnavailable {
        path: root.clone(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(EngineError::NotADirectory(root));
    }

    let mut builder = WalkBuilder::new(&root);
    // Every entry counts: no hidden-file skipping, no .gitignore/.ignore rules.
    builder.standard_filters(false).follow_links(false);
    if options.sort_by_name {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    log::debug!("walking {} (sorted: {})", root.display(), options.sort_by_name);
    Ok(FileWalk {
        inner: builder.build(),
        root,
        yielded: 0,
        finished: false,
    })
}

impl FileWalk {
    /// Number of entries yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }
}

impl Iterator for FileWalk {
    type Item = Result<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let Some(next) = self.inner.next() else {
                self.finished = true;
                log::debug!("walk of {} finished: {} files", self.root.display(), self.yielded);
                return None;
            };
            let dent = match next {
                Ok(dent) => dent,
                Err(err) => return Some(Err(EngineError::Walk(err))),
            };
            if !is_listed(&dent) {
                continue;
            }
            match FileEntry::from_path(dent.path()) {
                Ok(Some(entry)) => {
                    log::trace!("found {}", dent.path().display());
                    self.yielded += 1;
                    return Some(Ok(entry));
                }
                Ok(None) => {}
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

// Directories are descended into, never listed. A symlink pointing at a
// directory is treated as a directory that is not descended into; every other
// entry (files, dangling links, sockets, fifos, devices) is listed.
fn is_listed(dent: &DirEntry) -> bool {
    let Some(file_type) = dent.file_type() else {
        return false;
    };
    if file_type.is_dir() {
        return false;
    }
    if dent.path_is_symlink() {
        return !std::fs::metadata(dent.path()).is_ok_and(|m| m.is_dir());
    }
    true
}
