use super::{tar_archive::TarLoader, zip_archive::ZipLoader, ComicLoader, LoadError};
use crate::models::Page;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const TAR_MAGIC: &[u8] = b"ustar";
const TAR_MAGIC_OFFSET: usize = 257;

/// Container actually found inside a file, regardless of its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    Tar,
    Unknown,
}

impl ArchiveKind {
    pub fn detect(header: &[u8]) -> Self {
        if header.starts_with(ZIP_MAGIC) {
            return ArchiveKind::Zip;
        }
        let tar_end = TAR_MAGIC_OFFSET + TAR_MAGIC.len();
        if header.len() >= tar_end && &header[TAR_MAGIC_OFFSET..tar_end] == TAR_MAGIC {
            return ArchiveKind::Tar;
        }
        ArchiveKind::Unknown
    }
}

/// Loader for `.cbr`/`.rar` files. Plenty of these are ZIP or TAR archives
/// under the wrong name, so the container is picked from the file header.
#[derive(Debug, Default)]
pub struct SniffingLoader;

impl SniffingLoader {
    fn read_header(path: &Path) -> Result<Vec<u8>, LoadError> {
        let file = File::open(path).map_err(LoadError::io(path))?;
        let mut header = Vec::with_capacity(512);
        file.take(512)
            .read_to_end(&mut header)
            .map_err(LoadError::io(path))?;
        Ok(header)
    }
}

impl ComicLoader for SniffingLoader {
    fn load(&self, path: &Path, progress: &mut dyn FnMut(f32)) -> Result<Vec<Page>, LoadError> {
        let kind = ArchiveKind::detect(&Self::read_header(path)?);
        debug!("{} looks like {:?}", path.display(), kind);
        match kind {
            ArchiveKind::Zip => ZipLoader.load(path, progress),
            ArchiveKind::Tar => TarLoader.load(path, progress),
            ArchiveKind::Unknown => Err(LoadError::UnsupportedArchive {
                path: path.to_path_buf(),
            }),
        }
    }
}
