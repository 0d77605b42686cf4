use crate::loader::{archive_extensions, extension_of};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Comic archives sharing a directory with the one currently open, used to
/// step to the next or previous comic.
#[derive(Debug, Default)]
pub struct PathFileFilter {
    siblings: Vec<PathBuf>,
    current: Option<usize>,
}

impl PathFileFilter {
    pub fn parse(path: &Path) -> io::Result<Self> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut siblings = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_archive = extension_of(entry.path())
                .map(|ext| archive_extensions().any(|a| a == ext))
                .unwrap_or(false);
            if is_archive {
                siblings.push(entry.into_path());
            }
        }

        let current = path
            .file_name()
            .and_then(|name| siblings.iter().position(|s| s.file_name() == Some(name)));
        debug!("{} comics in {}, current {:?}", siblings.len(), dir.display(), current);

        Ok(PathFileFilter { siblings, current })
    }

    pub fn next_path(&self) -> Option<&Path> {
        let idx = self.current?;
        self.siblings.get(idx + 1).map(PathBuf::as_path)
    }

    pub fn previous_path(&self) -> Option<&Path> {
        let idx = self.current?;
        idx.checked_sub(1)
            .and_then(|i| self.siblings.get(i))
            .map(PathBuf::as_path)
    }

    pub fn is_first_file(&self) -> bool {
        self.previous_path().is_none()
    }

    pub fn is_last_file(&self) -> bool {
        self.next_path().is_none()
    }
}
