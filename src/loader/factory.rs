use super::{
    extension_of, image::ImageLoader, sniff::SniffingLoader, tar_archive::TarLoader,
    zip_archive::ZipLoader, ComicLoader, LoadError, IMAGE_EXTENSIONS, RAR_EXTENSIONS,
    TAR_EXTENSIONS, ZIP_EXTENSIONS,
};
use std::path::Path;

pub struct LoaderFactory;

impl LoaderFactory {
    /// Pick the loader for `path` from its extension. Directories are read
    /// as folders of images.
    pub fn create_loader(path: &Path) -> Result<Box<dyn ComicLoader>, LoadError> {
        if path.is_dir() {
            return Ok(Box::new(ImageLoader));
        }
        let extension = extension_of(path).unwrap_or_default();
        Self::for_extension(&extension)
    }

    pub fn for_extension(extension: &str) -> Result<Box<dyn ComicLoader>, LoadError> {
        let ext = extension.trim_start_matches('.').to_lowercase();
        let ext = ext.as_str();
        if IMAGE_EXTENSIONS.contains(&ext) {
            Ok(Box::new(ImageLoader))
        } else if ZIP_EXTENSIONS.contains(&ext) {
            Ok(Box::new(ZipLoader))
        } else if TAR_EXTENSIONS.contains(&ext) {
            Ok(Box::new(TarLoader))
        } else if RAR_EXTENSIONS.contains(&ext) {
            Ok(Box::new(SniffingLoader))
        } else {
            Err(LoadError::InvalidFileType {
                extension: extension.to_owned(),
            })
        }
    }
}
