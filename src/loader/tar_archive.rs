use super::{is_image_name, read_entry, read_pages, ComicLoader, LoadError};
use crate::models::Page;
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tar::Archive;

/// Loads the images stored in an uncompressed TAR (`.cbt`) archive.
///
/// TAR has no central directory, so the archive is streamed once and the
/// matching entries are buffered before being paginated in name order.
#[derive(Debug, Default)]
pub struct TarLoader;

impl TarLoader {
    fn read_images(path: &Path) -> Result<HashMap<String, Vec<u8>>, LoadError> {
        let file = File::open(path).map_err(LoadError::io(path))?;
        let mut archive = Archive::new(BufReader::new(file));
        let mut images = HashMap::new();

        for entry in archive.entries().map_err(LoadError::io(path))? {
            let mut entry = entry.map_err(LoadError::io(path))?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            let name = entry
                .path()
                .map_err(LoadError::io(path))?
                .to_string_lossy()
                .into_owned();
            if !is_image_name(&name) {
                continue;
            }
            let size = entry.size();
            let data = read_entry(&mut entry, size, path, &name)?;
            images.insert(name, data);
        }
        Ok(images)
    }
}

impl ComicLoader for TarLoader {
    fn load(&self, path: &Path, progress: &mut dyn FnMut(f32)) -> Result<Vec<Page>, LoadError> {
        let mut images = Self::read_images(path)?;
        let mut names: Vec<String> = images.keys().cloned().collect();
        names.sort();
        debug!("Found {} images in {}", names.len(), path.display());

        let pages = read_pages(&names, progress, |name| {
            Ok(images.remove(name).unwrap_or_default())
        })?;

        if pages.is_empty() {
            return Err(LoadError::NoDataFound {
                path: path.to_path_buf(),
            });
        }
        Ok(pages)
    }
}
