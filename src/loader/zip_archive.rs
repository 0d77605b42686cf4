use super::{is_image_name, read_entry, read_pages, ComicLoader, LoadError};
use crate::models::Page;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// Loads the images stored in a ZIP (`.cbz`) archive.
#[derive(Debug, Default)]
pub struct ZipLoader;

impl ComicLoader for ZipLoader {
    fn load(&self, path: &Path, progress: &mut dyn FnMut(f32)) -> Result<Vec<Page>, LoadError> {
        let zip_err = |source| LoadError::Zip {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(LoadError::io(path))?;
        let mut archive = ZipArchive::new(BufReader::new(file)).map_err(zip_err)?;

        let mut names: Vec<String> = archive
            .file_names()
            .filter(|name| !name.ends_with('/') && is_image_name(name))
            .map(str::to_owned)
            .collect();
        names.sort();
        debug!("Found {} images in {}", names.len(), path.display());

        let pages = read_pages(&names, progress, |name| {
            let mut entry = archive.by_name(name).map_err(zip_err)?;
            let size = entry.size();
            read_entry(&mut entry, size, path, name)
        })?;

        if pages.is_empty() {
            return Err(LoadError::NoDataFound {
                path: path.to_path_buf(),
            });
        }
        Ok(pages)
    }
}
