use config::{Config, ConfigError, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_RECENT_FILES: usize = 5;

/// How a page is scaled into the viewport.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewAdjust {
    #[default]
    Original,
    Vertical,
    Horizontal,
    Best,
}

#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub current_directory: Option<PathBuf>,
    pub view_adjust: ViewAdjust,
    pub recent_files: Vec<PathBuf>,
}

impl Settings {
    /// Read settings from `config_file`, always as JSON whatever its
    /// extension. A missing file yields the defaults.
    pub fn new(config_file: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(
                config::File::from(config_file)
                    .format(FileFormat::Json)
                    .required(false),
            )
            .build()?;
        builder.try_deserialize()
    }

    pub fn save(&self, config_file: &Path) -> anyhow::Result<()> {
        if let Some(dir) = config_file.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(config_file, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Move `path` to the front of the recent files, dropping the oldest
    /// entries past [`MAX_RECENT_FILES`].
    pub fn push_recent_file(&mut self, path: &Path) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    pub fn last_file(&self) -> Option<&Path> {
        self.recent_files.first().map(PathBuf::as_path)
    }
}
