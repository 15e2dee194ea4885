use crate::api::models::{Playlist, Track};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const BUNDLED_CATALOG: &str = include_str!("../../assets/playlists.json");

/// Reasons the playlist catalog can be rejected at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse the playlist catalog, {0}")]
    Parse(#[from] serde_json::Error),
    #[error("the playlist catalog contains no playlists")]
    Empty,
    #[error("playlist \"{name}\" contains no tracks")]
    EmptyPlaylist { name: String },
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    playlists: Vec<Playlist>,
}

/// The immutable set of playlists for a session.
///
/// A catalog always holds at least one playlist and every playlist holds at
/// least one track, so index arithmetic over it never divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    playlists: Vec<Playlist>,
}

impl Catalog {
    pub fn new(playlists: Vec<Playlist>) -> Result<Self, CatalogError> {
        if playlists.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(empty) = playlists.iter().find(|p| p.tracks.is_empty()) {
            return Err(CatalogError::EmptyPlaylist {
                name: empty.name.clone(),
            });
        }
        Ok(Self { playlists })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        debug!("Parsed {} playlists from catalog", document.playlists.len());
        Self::new(document.playlists)
    }

    /// Load the catalog shipped with the app.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_CATALOG)?;
        info!(
            "Loaded catalog with {} playlists and {} tracks",
            catalog.playlist_count(),
            catalog
                .playlists
                .iter()
                .map(Playlist::track_count)
                .sum::<usize>()
        );
        Ok(catalog)
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    pub fn track(&self, playlist: usize, track: usize) -> Option<&Track> {
        self.playlist(playlist).and_then(|p| p.tracks.get(track))
    }
}
