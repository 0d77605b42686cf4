use clap::Parser;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Open comic archives and image folders")]
pub struct Cli {
    /// Comic to open: an archive, an image or a folder of images.
    /// Defaults to the most recently opened comic.
    pub path: Option<String>,

    #[arg(short, long, default_value = "comic-reader.json")]
    pub config_file: String,

    /// Page to open, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Log every page of the comic
    #[arg(short, long)]
    pub list: bool,

    /// Write the current page to this file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Open the comic after PATH in its directory
    #[arg(long, conflicts_with = "previous")]
    pub next: bool,

    /// Open the comic before PATH in its directory
    #[arg(long)]
    pub previous: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
