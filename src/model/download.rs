//! Simulated download progress

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::TrackId;
use super::playback::PROGRESS_MAX;

/// Percent complete per track. Entries only ever grow.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DownloadProgressMap {
    entries: BTreeMap<TrackId, f64>,
}

/// What the download button of a track should show
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DownloadStatus {
    NotStarted,
    InProgress(f64),
    Complete,
}

impl DownloadProgressMap {
    /// Register a download. A track that already has an entry keeps its
    /// progress. Returns whether a timer is needed to finish it.
    pub fn start(&mut self, track: TrackId) -> bool {
        let progress = self.entries.entry(track).or_insert(0.0);
        *progress < PROGRESS_MAX
    }

    /// Add one increment, clamping at the end. Returns whether the download
    /// is still running afterwards.
    pub fn advance(&mut self, track: TrackId, increment: f64) -> bool {
        let Some(progress) = self.entries.get_mut(&track) else {
            return false;
        };

        let next = *progress + increment.max(0.0);
        if next >= PROGRESS_MAX {
            *progress = PROGRESS_MAX;
            false
        } else {
            *progress = next;
            true
        }
    }

    pub fn get(&self, track: TrackId) -> Option<f64> {
        self.entries.get(&track).copied()
    }

    pub fn status(&self, track: TrackId) -> DownloadStatus {
        match self.get(track) {
            None => DownloadStatus::NotStarted,
            Some(progress) if progress >= PROGRESS_MAX => DownloadStatus::Complete,
            Some(progress) => DownloadStatus::InProgress(progress),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrackId, f64)> + '_ {
        self.entries.iter().map(|(id, progress)| (*id, *progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_clamps_to_exactly_max() {
        let mut downloads = DownloadProgressMap::default();
        assert!(downloads.start(TrackId(4)));
        assert_eq!(downloads.get(TrackId(4)), Some(0.0));

        let mut last = 0.0;
        let mut running = true;
        while running {
            running = downloads.advance(TrackId(4), 15.0);
            let now = downloads.get(TrackId(4)).unwrap();
            assert!(now >= last);
            assert!(now <= PROGRESS_MAX);
            last = now;
        }
        assert_eq!(downloads.status(TrackId(4)), DownloadStatus::Complete);
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_restart_resumes_instead_of_resetting() {
        let mut downloads = DownloadProgressMap::default();
        downloads.start(TrackId(5));
        downloads.advance(TrackId(5), 42.0);

        assert!(downloads.start(TrackId(5)));
        assert_eq!(downloads.status(TrackId(5)), DownloadStatus::InProgress(42.0));

        downloads.advance(TrackId(5), 100.0);
        assert!(!downloads.start(TrackId(5)));
        assert_eq!(downloads.get(TrackId(5)), Some(100.0));
    }

    #[test]
    fn test_advance_unknown_track_is_noop() {
        let mut downloads = DownloadProgressMap::default();
        assert!(!downloads.advance(TrackId(9), 10.0));
        assert!(downloads.is_empty());
    }
}
