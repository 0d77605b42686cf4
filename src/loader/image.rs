use super::{is_image_name, read_pages, ComicLoader, LoadError};
use crate::models::Page;
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loads every image sitting next to the given file, or inside the given
/// directory. Subdirectories are not descended into.
#[derive(Debug, Default)]
pub struct ImageLoader;

impl ImageLoader {
    fn source_dir(path: &Path) -> PathBuf {
        if path.is_dir() {
            return path.to_path_buf();
        }
        match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Image file names directly inside `dir`, sorted.
    fn list_images(dir: &Path) -> Result<Vec<OsString>, LoadError> {
        let mut names = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| LoadError::Io {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() && is_image_name(entry.file_name()) {
                names.push(entry.file_name().to_os_string());
            }
        }
        Ok(names)
    }
}

impl ComicLoader for ImageLoader {
    fn load(&self, path: &Path, progress: &mut dyn FnMut(f32)) -> Result<Vec<Page>, LoadError> {
        let dir = Self::source_dir(path);
        let names = Self::list_images(&dir)?;
        debug!("Found {} images in {}", names.len(), dir.display());

        let pages = read_pages(&names, progress, |name| {
            let file = dir.join(name);
            fs::read(&file).map_err(LoadError::io(file))
        })?;

        if pages.is_empty() {
            return Err(LoadError::NoDataFound { path: dir });
        }
        Ok(pages)
    }
}
