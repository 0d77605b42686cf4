use crate::loader::LoadError;
use std::path::{Path, PathBuf};

/// One image of a comic: its raw bytes, its display name and its 1-based
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    data: Vec<u8>,
    title: String,
    number: usize,
}

impl Page {
    pub fn new(data: Vec<u8>, title: impl Into<String>, number: usize) -> Self {
        Page {
            data,
            title: title.into(),
            number,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn number(&self) -> usize {
        self.number
    }
}

#[derive(Debug)]
pub struct Comic {
    name: String,
    directory: PathBuf,
    pages: Vec<Page>,
    current_page_index: usize,
}

impl Comic {
    /// Build a comic positioned at `initial_page` (clamped to the last page).
    /// Fails when `pages` is empty.
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        pages: Vec<Page>,
        initial_page: usize,
    ) -> Result<Self, LoadError> {
        let directory = directory.into();
        if pages.is_empty() {
            return Err(LoadError::NoDataFound { path: directory });
        }
        let mut comic = Comic {
            name: name.into(),
            directory,
            pages,
            current_page_index: 0,
        };
        comic.set_current_page_index(initial_page);
        Ok(comic)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.name)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn number_of_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    pub fn set_current_page_index(&mut self, idx: usize) {
        self.current_page_index = idx.min(self.pages.len() - 1);
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_page_index]
    }

    pub fn current_page_title(&self) -> &str {
        self.current_page().title()
    }

    pub fn current_page_number(&self) -> usize {
        self.current_page().number()
    }

    pub fn go_next_page(&mut self) {
        if !self.is_last_page() {
            self.current_page_index += 1;
        }
    }

    pub fn go_previous_page(&mut self) {
        self.current_page_index = self.current_page_index.saturating_sub(1);
    }

    pub fn go_first_page(&mut self) {
        self.current_page_index = 0;
    }

    pub fn go_last_page(&mut self) {
        self.current_page_index = self.pages.len() - 1;
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page_index == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page_index + 1 == self.pages.len()
    }
}
