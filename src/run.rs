use crate::configuration::Settings;
use crate::models::Cli;
use crate::path_filter::PathFileFilter;
use crate::reader::Reader;
use anyhow::{bail, Context};
use log::{debug, info};
use resolve_path::PathResolveExt;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(cli: Cli, settings: Settings, config_file: &Path) -> anyhow::Result<()> {
    let requested = match &cli.path {
        Some(p) => p.resolve().into_owned(),
        None => match settings.last_file() {
            Some(p) => p.to_path_buf(),
            None => bail!("No comic given and no recent file to reopen"),
        },
    };
    let path = pick_sibling(&requested, cli.next, cli.previous)?;
    info!("Opening {}", path.display());

    let mut reader = Reader::new(settings);
    let initial_page = cli.page.saturating_sub(1);
    reader
        .load(&path, initial_page, &mut |percent: f32| {
            debug!("Loading {}: {:.0}%", path.display(), percent)
        })
        .with_context(|| format!("Unable to open {}", path.display()))?;

    let comic = reader.comic().context("No comic loaded")?;
    info!("Loaded \"{}\": {} pages", comic.name(), comic.number_of_pages());

    if cli.list {
        for page in comic.pages() {
            info!("{:>4} {}", page.number(), page.title());
        }
    }

    info!(
        "Page {}/{}: {}",
        comic.current_page_number(),
        comic.number_of_pages(),
        comic.current_page_title()
    );

    if let Some(export) = &cli.export {
        let export = export.resolve();
        fs::write(&export, comic.current_page().data())
            .with_context(|| format!("Unable to write {}", export.display()))?;
        info!("Wrote page to {}", export.display());
    }

    if let Some(next) = reader.next_comic() {
        debug!("Next comic: {}", next.display());
    }

    reader.save_settings(config_file)?;
    debug!("Saved settings to {}", config_file.display());

    info!("Finished!");
    Ok(())
}

fn pick_sibling(path: &Path, next: bool, previous: bool) -> anyhow::Result<PathBuf> {
    if !next && !previous {
        return Ok(path.to_path_buf());
    }
    let filter = PathFileFilter::parse(path)
        .with_context(|| format!("Unable to list comics next to {}", path.display()))?;
    let sibling = if next {
        filter.next_path()
    } else {
        filter.previous_path()
    };
    match sibling {
        Some(p) => Ok(p.to_path_buf()),
        None => bail!("No comic {} {}", if next { "after" } else { "before" }, path.display()),
    }
}
