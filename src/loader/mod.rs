//! Loaders turning a comic source (a directory of images or an archive)
//! into an ordered list of pages.
//!
//! Every loader follows the same pipeline: enumerate entries, keep the ones
//! whose extension is in [`IMAGE_EXTENSIONS`], sort them by name, then read
//! each one, numbering pages from 1 and reporting progress in `0..=100`
//! after every entry. An empty result is a [`LoadError::NoDataFound`].

pub mod error;
pub mod factory;
pub mod image;
pub mod sniff;
pub mod tar_archive;
pub mod zip_archive;

#[cfg(test)]
pub(crate) mod testing;

use crate::models::Page;
use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;

pub use error::LoadError;
pub use factory::LoaderFactory;

/// Extensions recognised as single page images.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "bmp", "jpg", "jpeg", "gif", "png", "pbm", "pgm", "ppm", "tiff", "xbm", "xpm", "webp",
];

pub const ZIP_EXTENSIONS: &[&str] = &["cbz", "zip"];
pub const TAR_EXTENSIONS: &[&str] = &["cbt", "tar"];
pub const RAR_EXTENSIONS: &[&str] = &["cbr", "rar"];

/// Every archive extension the factory knows about.
pub fn archive_extensions() -> impl Iterator<Item = &'static str> {
    ZIP_EXTENSIONS
        .iter()
        .chain(TAR_EXTENSIONS)
        .chain(RAR_EXTENSIONS)
        .copied()
}

pub trait ComicLoader {
    /// Load every page reachable from `path`, calling `progress` with a
    /// percentage after each page is read.
    fn load(&self, path: &Path, progress: &mut dyn FnMut(f32)) -> Result<Vec<Page>, LoadError>;
}

/// Lowercased extension of `path`, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

pub fn is_image_name(name: impl AsRef<Path>) -> bool {
    extension_of(name.as_ref())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Display name of an entry: its last component, split on either `/` or
/// `\` since archives built on Windows use the latter.
fn page_title(name: &OsStr) -> String {
    let name = name.to_string_lossy();
    name.rsplit(|c: char| c == '/' || c == '\\')
        .find(|part| !part.is_empty())
        .unwrap_or(name.as_ref())
        .to_owned()
}

/// Read a whole archive entry, refusing one whose length differs from the
/// size in its header.
fn read_entry<R: Read>(
    mut reader: R,
    expected: u64,
    path: &Path,
    name: &str,
) -> Result<Vec<u8>, LoadError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(LoadError::io(path))?;
    if data.len() as u64 != expected {
        return Err(LoadError::Truncated {
            path: path.to_path_buf(),
            entry: name.to_owned(),
            expected,
            actual: data.len() as u64,
        });
    }
    Ok(data)
}

struct Progress<'a> {
    total: usize,
    callback: &'a mut dyn FnMut(f32),
}

impl<'a> Progress<'a> {
    fn new(total: usize, callback: &'a mut dyn FnMut(f32)) -> Self {
        Progress { total, callback }
    }

    fn step(&mut self, index: usize) {
        let percent = (index + 1) as f32 * 100.0 / self.total as f32;
        (self.callback)(percent);
    }
}

/// Read `names` in order with `read`, numbering pages from 1.
fn read_pages<N, F>(
    names: &[N],
    progress: &mut dyn FnMut(f32),
    mut read: F,
) -> Result<Vec<Page>, LoadError>
where
    N: AsRef<OsStr>,
    F: FnMut(&N) -> Result<Vec<u8>, LoadError>,
{
    let mut progress = Progress::new(names.len(), progress);
    let mut pages = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let data = read(name)?;
        pages.push(Page::new(data, page_title(name.as_ref()), idx + 1));
        progress.step(idx);
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_names_match_case_insensitively() {
        assert!(is_image_name("page 001.PNG"));
        assert!(is_image_name("dir/cover.jpeg"));
        assert!(!is_image_name("notes.txt"));
        assert!(!is_image_name("README"));
    }

    #[test]
    fn progress_ends_at_100() {
        let names: Vec<String> = vec!["a.png".into(), "b/c.png".into(), "d.png".into()];
        let mut seen = Vec::new();
        let pages = read_pages(&names, &mut |p| seen.push(p), |n| Ok(n.as_bytes().to_vec())).unwrap();

        assert_eq!(3, pages.len());
        assert_eq!("c.png", pages[1].title());
        assert_eq!(b"b/c.png", pages[1].data());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(Some(&100.0), seen.last());
    }

    #[test]
    fn titles_split_on_both_separators() {
        assert_eq!("page 001.png", page_title(OsStr::new("chapter\\page 001.png")));
        assert_eq!("page 002.png", page_title(OsStr::new("vol/chapter/page 002.png")));
        assert_eq!("cover.jpg", page_title(OsStr::new("cover.jpg")));
    }

    #[test]
    fn short_entry_is_truncated() {
        let path = Path::new("broken.cbt");
        let err = read_entry(&b"abc"[..], 1 << 42, path, "01.png").unwrap_err();
        assert!(matches!(err, LoadError::Truncated { actual: 3, .. }));
        assert_eq!(b"abc".to_vec(), read_entry(&b"abc"[..], 3, path, "01.png").unwrap());
    }
}
