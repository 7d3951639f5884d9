//! Simulated playback state

use serde::Serialize;

use super::catalog::TrackId;

pub const PROGRESS_MAX: f64 = 100.0;

/// The track shown in the mini player and how far it has "played"
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlaybackState {
    pub active_track: Option<TrackId>,
    pub is_playing: bool,
    pub progress: f64,
}

impl PlaybackState {
    /// Start `track` from the beginning.
    pub fn start(&mut self, track: TrackId) {
        self.active_track = Some(track);
        self.is_playing = true;
        self.progress = 0.0;
    }

    /// Tap on a track's play button: the active track toggles, any other
    /// track restarts playback from zero. Returns whether it is now playing.
    pub fn play_pause(&mut self, track: TrackId) -> bool {
        if self.active_track == Some(track) {
            self.is_playing = !self.is_playing;
        } else {
            self.start(track);
        }
        self.is_playing
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// One timer step. A step that would overshoot the end rewinds to zero
    /// and stops playback. Returns whether playback continues.
    pub fn advance(&mut self, step: f64) -> bool {
        if !self.is_playing || self.active_track.is_none() {
            return false;
        }

        let next = self.progress + step;
        if next > PROGRESS_MAX {
            self.progress = 0.0;
            self.is_playing = false;
        } else {
            self.progress = next;
        }
        self.is_playing
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn ratio(&self) -> f64 {
        (self.progress / PROGRESS_MAX).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_resets_exactly_past_the_end() {
        let mut playback = PlaybackState::default();
        playback.start(TrackId(1));

        for _ in 0..200 {
            assert!(playback.advance(0.5));
        }
        assert_eq!(playback.progress, 100.0);
        assert!(playback.is_playing);

        assert!(!playback.advance(0.5));
        assert_eq!(playback.progress, 0.0);
        assert!(!playback.is_playing);
    }

    #[test]
    fn test_progress_never_exceeds_max_with_uneven_step() {
        let mut playback = PlaybackState::default();
        playback.start(TrackId(1));
        let mut steps = 0;
        while playback.advance(0.7) {
            assert!(playback.progress <= PROGRESS_MAX);
            steps += 1;
        }
        assert_eq!(steps, 142);
        assert_eq!(playback.progress, 0.0);
    }

    #[test]
    fn test_play_pause_toggles_same_track_and_restarts_other() {
        let mut playback = PlaybackState::default();
        assert!(playback.play_pause(TrackId(1)));
        playback.advance(10.0);
        assert!(!playback.play_pause(TrackId(1)));
        assert_eq!(playback.progress, 10.0);

        assert!(playback.play_pause(TrackId(2)));
        assert_eq!(playback.active_track, Some(TrackId(2)));
        assert_eq!(playback.progress, 0.0);
    }

    #[test]
    fn test_paused_playback_does_not_advance() {
        let mut playback = PlaybackState::default();
        playback.start(TrackId(3));
        playback.pause();
        assert!(!playback.advance(1.0));
        assert_eq!(playback.progress, 0.0);
    }
}
