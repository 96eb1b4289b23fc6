//! nucamp - campsite info screen in the terminal
//!
//! Binary-facing glue: loads the campsite data and settings, resolves the
//! campsite to show, and hands off to the TUI.

use std::io::Write;
use std::path::{Path, PathBuf};

use nucamp_app::config;
use nucamp_app::fixture;
use nucamp_app::{CampsiteStore, InMemoryStore};
use nucamp_core::prelude::*;
use nucamp_core::CampsiteId;

/// What to show and where to read it from
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// JSON dataset; the bundled sample when `None`
    pub data: Option<PathBuf>,
    /// Campsite to open; the first one when `None`
    pub campsite: Option<CampsiteId>,
    /// Overrides the platform config directory
    pub config_dir: Option<PathBuf>,
}

/// Load the dataset file, or the bundled sample campsites
pub fn load_store(data: Option<&Path>) -> Result<InMemoryStore> {
    match data {
        Some(path) => fixture::load_store(path),
        None => {
            debug!("No data file given, using bundled sample");
            fixture::sample_store()
        }
    }
}

/// Print one line per campsite: id, favorite marker, name, comment count
pub fn list_campsites(store: &InMemoryStore, out: &mut impl Write) -> Result<()> {
    for campsite in store.campsites() {
        let marker = if store.favorites().contains(campsite.id) {
            '*'
        } else {
            ' '
        };
        let count = store.comments(campsite.id).len();
        writeln!(
            out,
            "{:>4} {} {} ({} comment{})",
            campsite.id.0,
            marker,
            campsite.name,
            count,
            if count == 1 { "" } else { "s" }
        )?;
    }
    Ok(())
}

/// Start the campsite screen
pub async fn run(options: RunOptions) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file, the TUI owns stdout
    nucamp_core::logging::init()?;

    info!("nucamp starting");

    let store = load_store(options.data.as_deref())?;

    let config_dir = options
        .config_dir
        .unwrap_or_else(config::default_config_dir);
    if let Err(e) = config::init_config_dir(&config_dir) {
        warn!("Could not write default config: {}", e);
    }
    let settings = config::load_settings(&config_dir);

    let campsite = store.resolve_campsite(options.campsite)?;
    info!("Opening campsite {} ({})", campsite.id, campsite.name);

    let result = nucamp_tui::run(campsite, settings, store).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("nucamp exiting");
    result
}
