//! Campsite data loading
//!
//! Reads a JSON document shaped like
//! `{ "campsites": [...], "comments": [...], "favorites": [...] }`
//! and turns it into an [`InMemoryStore`].

use std::path::Path;

use nucamp_core::prelude::*;
use nucamp_core::{Campsite, CampsiteId, Comment};
use serde::Deserialize;

use crate::store::InMemoryStore;

const SAMPLE_DATA: &str = include_str!("../data/sample.json");

/// Raw dataset as it appears on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub campsites: Vec<Campsite>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub favorites: Vec<CampsiteId>,
}

impl Dataset {
    pub fn into_store(self) -> InMemoryStore {
        InMemoryStore::new(
            self.campsites,
            self.comments,
            self.favorites.into_iter().collect(),
        )
    }
}

/// Parse a dataset from JSON text
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(json)?)
}

/// Load a dataset file into a store
pub fn load_store(path: &Path) -> Result<InMemoryStore> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::data_load(path, e.to_string()))?;
    let dataset = parse_dataset(&content).map_err(|e| Error::data_load(path, e.to_string()))?;

    info!(
        "Loaded {} campsites, {} comments from {}",
        dataset.campsites.len(),
        dataset.comments.len(),
        path.display()
    );

    Ok(dataset.into_store())
}

/// Store pre-filled with the bundled sample campsites
pub fn sample_store() -> Result<InMemoryStore> {
    parse_dataset(SAMPLE_DATA)
        .map(Dataset::into_store)
        .context("parsing bundled sample data")
}
