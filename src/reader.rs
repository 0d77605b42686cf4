//! The reader view model: the open comic plus everything the viewer needs
//! to display it (rotation, fit mode, neighbouring comics, settings).

use crate::configuration::{Settings, ViewAdjust};
use crate::loader::{LoadError, LoaderFactory};
use crate::models::{Comic, Page};
use crate::path_filter::PathFileFilter;
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "Comic Reader";

/// Shown in place of a comic that contains no images. A 1x1 transparent PNG.
pub const PLACEHOLDER_PAGE: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];
pub const PLACEHOLDER_TITLE: &str = "no-cover.png";

/// Share of the viewport width used by [`ViewAdjust::Best`].
const BEST_FIT_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }
}

#[derive(Debug, Default)]
pub struct Reader {
    comic: Option<Comic>,
    settings: Settings,
    rotate_angle: u32,
    path_filter: PathFileFilter,
    current_directory: Option<PathBuf>,
}

impl Reader {
    pub fn new(settings: Settings) -> Self {
        let current_directory = settings.current_directory.clone();
        Reader {
            settings,
            current_directory,
            ..Default::default()
        }
    }

    /// Open the comic at `path` positioned on `initial_page` (0-based).
    ///
    /// A source without any image is opened with a single placeholder page;
    /// every other loading failure is returned.
    pub fn load(
        &mut self,
        path: &Path,
        initial_page: usize,
        progress: &mut dyn FnMut(f32),
    ) -> Result<(), LoadError> {
        let loader = LoaderFactory::create_loader(path)?;
        let pages = match loader.load(path, progress) {
            Ok(pages) => pages,
            Err(LoadError::NoDataFound { path: empty }) => {
                warn!("No images found in {}", empty.display());
                vec![Page::new(PLACEHOLDER_PAGE.to_vec(), PLACEHOLDER_TITLE, 1)]
            }
            Err(e) => return Err(e),
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!("Opened {} with {} pages", name, pages.len());

        self.comic = Some(Comic::new(name, directory.clone(), pages, initial_page)?);
        self.current_directory = Some(directory);
        self.path_filter = PathFileFilter::parse(path).unwrap_or_else(|e| {
            warn!("Unable to list comics next to {}: {}", path.display(), e);
            PathFileFilter::default()
        });
        self.settings.push_recent_file(path);
        Ok(())
    }

    pub fn comic(&self) -> Option<&Comic> {
        self.comic.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_directory(&self) -> Option<&Path> {
        self.current_directory.as_deref()
    }

    pub fn comic_name(&self) -> &str {
        self.comic.as_ref().map(Comic::name).unwrap_or_default()
    }

    pub fn comic_title(&self) -> String {
        format!("{} - {}", self.comic_name(), APP_NAME)
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.comic.as_ref().map(Comic::current_page)
    }

    pub fn current_page_title(&self) -> &str {
        self.comic
            .as_ref()
            .map(Comic::current_page_title)
            .unwrap_or_default()
    }

    pub fn current_page_index(&self) -> Option<usize> {
        self.comic.as_ref().map(Comic::current_page_index)
    }

    pub fn set_current_page_index(&mut self, idx: usize) {
        if let Some(comic) = self.comic.as_mut() {
            comic.set_current_page_index(idx);
        }
    }

    pub fn next_page(&mut self) {
        if let Some(comic) = self.comic.as_mut() {
            comic.go_next_page();
        }
    }

    pub fn previous_page(&mut self) {
        if let Some(comic) = self.comic.as_mut() {
            comic.go_previous_page();
        }
    }

    pub fn first_page(&mut self) {
        if let Some(comic) = self.comic.as_mut() {
            comic.go_first_page();
        }
    }

    pub fn last_page(&mut self) {
        if let Some(comic) = self.comic.as_mut() {
            comic.go_last_page();
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.comic.as_ref().map_or(false, Comic::is_first_page)
    }

    pub fn is_last_page(&self) -> bool {
        self.comic.as_ref().map_or(false, Comic::is_last_page)
    }

    pub fn next_comic(&self) -> Option<&Path> {
        self.path_filter.next_path()
    }

    pub fn previous_comic(&self) -> Option<&Path> {
        self.path_filter.previous_path()
    }

    pub fn is_first_comic(&self) -> bool {
        self.path_filter.is_first_file()
    }

    pub fn is_last_comic(&self) -> bool {
        self.path_filter.is_last_file()
    }

    pub fn rotation(&self) -> u32 {
        self.rotate_angle
    }

    pub fn rotate_left(&mut self) {
        self.rotate_angle = (self.rotate_angle + 270) % 360;
    }

    pub fn rotate_right(&mut self) {
        self.rotate_angle = (self.rotate_angle + 90) % 360;
    }

    pub fn view_adjust(&self) -> ViewAdjust {
        self.settings.view_adjust
    }

    pub fn set_view_adjust(&mut self, fit: ViewAdjust) {
        self.settings.view_adjust = fit;
    }

    /// Size a page of `page` dimensions is drawn at inside `viewport`,
    /// after rotation and the current fit mode are applied.
    pub fn target_size(&self, page: Size, viewport: Size) -> Size {
        let page = if self.rotate_angle % 180 == 90 {
            Size::new(page.height, page.width)
        } else {
            page
        };
        if page.width == 0 || page.height == 0 {
            return page;
        }

        let scale_to_width = |width: f64| {
            let height = f64::from(page.height) * width / f64::from(page.width);
            Size::new(width.round() as u32, height.round() as u32)
        };
        match self.settings.view_adjust {
            ViewAdjust::Original => page,
            ViewAdjust::Vertical => {
                let height = f64::from(viewport.height);
                let width = f64::from(page.width) * height / f64::from(page.height);
                Size::new(width.round() as u32, viewport.height)
            }
            ViewAdjust::Horizontal => scale_to_width(f64::from(viewport.width)),
            ViewAdjust::Best => scale_to_width(f64::from(viewport.width) * BEST_FIT_RATIO),
        }
    }

    /// Write the session's fit mode, current directory and recent files to
    /// `config_file`.
    pub fn save_settings(&mut self, config_file: &Path) -> anyhow::Result<()> {
        self.settings.current_directory = self.current_directory.clone();
        self.settings.save(config_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::testing::{write_files, write_zip, Recorder};

    #[test]
    fn navigation_without_comic_is_a_no_op() {
        let mut r = Reader::default();
        r.next_page();
        r.last_page();
        assert!(r.current_page().is_none());
        assert_eq!(None, r.current_page_index());
        assert!(!r.is_first_page());
        assert_eq!("", r.comic_name());
    }

    #[test]
    fn loads_and_navigates_a_comic() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("vol 1.cbz");
        write_zip(&first, &[("01.png", b"1"), ("02.png", b"2"), ("03.png", b"3")]);
        write_zip(&dir.path().join("vol 2.cbz"), &[("01.png", b"1")]);

        let mut r = Reader::new(Settings::default());
        let mut rec = Recorder::default();
        r.load(&first, 1, &mut rec.callback()).unwrap();
        rec.assert_monotonic_to_100();

        assert_eq!("vol 1.cbz - Comic Reader", r.comic_title());
        assert_eq!("02.png", r.current_page_title());
        r.next_page();
        assert!(r.is_last_page());
        r.first_page();
        assert_eq!(Some(b"1".as_slice()), r.current_page().map(Page::data));

        assert_eq!(Some(dir.path().join("vol 2.cbz").as_path()), r.next_comic());
        assert!(r.is_first_comic());
        assert_eq!(Some(dir.path()), r.current_directory());
        assert_eq!(Some(first.as_path()), r.settings().last_file());
    }

    #[test]
    fn empty_source_gets_placeholder_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.cbz");
        write_zip(&path, &[("ComicInfo.xml", b"<ComicInfo/>")]);

        let mut r = Reader::default();
        r.load(&path, 0, &mut |_| {}).unwrap();

        let comic = r.comic().unwrap();
        assert_eq!(1, comic.number_of_pages());
        assert_eq!(PLACEHOLDER_TITLE, comic.current_page_title());
        assert_eq!(PLACEHOLDER_PAGE, comic.current_page().data());
    }

    #[test]
    fn invalid_file_type_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        write_files(dir.path(), &[("notes.txt", b"text")]);

        let mut r = Reader::default();
        let err = r.load(&dir.path().join("notes.txt"), 0, &mut |_| {}).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFileType { .. }));
        assert!(r.comic().is_none());
    }

    #[test]
    fn rotation_wraps() {
        let mut r = Reader::default();
        r.rotate_left();
        assert_eq!(270, r.rotation());
        r.rotate_right();
        r.rotate_right();
        assert_eq!(90, r.rotation());
        for _ in 0..4 {
            r.rotate_right();
        }
        assert_eq!(90, r.rotation());
    }

    #[test]
    fn target_size_follows_fit_mode() {
        let page = Size::new(1000, 2000);
        let viewport = Size::new(500, 800);
        let mut r = Reader::default();

        assert_eq!(page, r.target_size(page, viewport));
        r.set_view_adjust(ViewAdjust::Vertical);
        assert_eq!(Size::new(400, 800), r.target_size(page, viewport));
        r.set_view_adjust(ViewAdjust::Horizontal);
        assert_eq!(Size::new(500, 1000), r.target_size(page, viewport));
        r.set_view_adjust(ViewAdjust::Best);
        assert_eq!(Size::new(400, 800), r.target_size(page, viewport));

        r.rotate_right();
        r.set_view_adjust(ViewAdjust::Original);
        assert_eq!(Size::new(2000, 1000), r.target_size(page, viewport));
    }

    #[test]
    fn save_settings_records_session() {
        let dir = tempfile::tempdir().unwrap();
        write_files(dir.path(), &[("a.png", b"a")]);

        let mut r = Reader::default();
        r.set_view_adjust(ViewAdjust::Best);
        r.load(&dir.path().join("a.png"), 0, &mut |_| {}).unwrap();

        let config_file = dir.path().join("settings.json");
        r.save_settings(&config_file).unwrap();

        let s = Settings::new(&config_file).unwrap();
        assert_eq!(&s, r.settings());
        assert_eq!(ViewAdjust::Best, s.view_adjust);
        assert_eq!(Some(dir.path().to_path_buf()), s.current_directory);
        assert_eq!(1, s.recent_files.len());
    }
}
