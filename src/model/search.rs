//! Search box state and the sample-data filter behind it

use serde::Serialize;

use super::catalog::Track;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Track>,
    pub is_searching: bool,
}

impl SearchState {
    /// Whether the screen shows the trending list instead of results
    pub fn shows_trending(&self) -> bool {
        self.query.is_empty() && !self.is_searching
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive substring match against title or artist. A blank query
/// matches nothing.
pub fn filter_tracks(tracks: &[Track], query: &str) -> Vec<Track> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    tracks
        .iter()
        .filter(|track| {
            track.title.to_lowercase().contains(&needle) || track.artist.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}
