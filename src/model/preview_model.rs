//! Preview state and the transition functions that mutate it

use serde::Serialize;

use super::catalog::{Catalog, Track, TrackId};
use super::download::DownloadProgressMap;
use super::playback::PlaybackState;
use super::search::{SearchState, filter_tracks};
use super::types::{Origin, RotationMode, Screen, ThemeMode, TransitionStyle};

/// Everything the render target needs, published after every change
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreviewSnapshot {
    pub screen: Screen,
    pub mode: RotationMode,
    pub transition: Option<TransitionStyle>,
    pub rotations: u64,
    pub playback: PlaybackState,
    pub downloads: DownloadProgressMap,
    pub search: SearchState,
    pub highlighted_playlist: Option<usize>,
    pub selected: usize,
    pub show_player: bool,
    pub editing_search: bool,
    pub theme: ThemeMode,
    pub mounted: bool,
    #[serde(skip)]
    pub should_quit: bool,
}

impl PreviewSnapshot {
    fn new(theme: ThemeMode) -> Self {
        Self {
            screen: Screen::Home,
            mode: RotationMode::Auto,
            transition: None,
            rotations: 0,
            playback: PlaybackState::default(),
            downloads: DownloadProgressMap::default(),
            search: SearchState::default(),
            highlighted_playlist: None,
            selected: 0,
            show_player: false,
            editing_search: false,
            theme,
            mounted: true,
            should_quit: false,
        }
    }

    /// Tracks listed on the current screen, in display order
    pub fn visible_tracks<'a>(&'a self, catalog: &'a Catalog) -> &'a [Track] {
        match self.screen {
            Screen::Home | Screen::Library => catalog.recent,
            Screen::Search if self.search.shows_trending() => catalog.trending,
            Screen::Search => self.search.results.as_slice(),
            Screen::Playlists => &[],
        }
    }

    /// Number of selectable rows on the current screen
    pub fn row_count(&self, catalog: &Catalog) -> usize {
        match self.screen {
            Screen::Playlists => catalog.playlists.len(),
            _ => self.visible_tracks(catalog).len(),
        }
    }

    /// The track a play or download action on the selected row refers to
    pub fn selected_track(&self, catalog: &Catalog) -> Option<Track> {
        match self.screen {
            Screen::Playlists => catalog
                .playlists
                .get(self.selected)
                .and_then(|playlist| playlist.tracks.first())
                .and_then(|id| catalog.track(*id)),
            _ => self.visible_tracks(catalog).get(self.selected).copied(),
        }
    }

    pub fn active_track(&self, catalog: &Catalog) -> Option<Track> {
        self.playback.active_track.and_then(|id| catalog.track(id))
    }
}

/// The preview's single source of truth. Only the controller holds it.
pub struct PreviewModel {
    catalog: &'static Catalog,
    state: PreviewSnapshot,
}

impl PreviewModel {
    pub fn new(catalog: &'static Catalog, theme: ThemeMode) -> Self {
        Self {
            catalog,
            state: PreviewSnapshot::new(theme),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        self.state.clone()
    }

    pub fn state(&self) -> &PreviewSnapshot {
        &self.state
    }

    /// Whether a change from `origin` may still be applied
    pub fn accepts(&self, origin: Origin) -> bool {
        self.state.mounted && (origin == Origin::User || self.state.mode == RotationMode::Auto)
    }

    pub fn is_mounted(&self) -> bool {
        self.state.mounted
    }

    pub fn unmount(&mut self) {
        self.state.mounted = false;
    }

    pub fn request_quit(&mut self) {
        self.state.should_quit = true;
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    pub fn begin_transition(&mut self, style: TransitionStyle) {
        self.state.transition = Some(style);
    }

    pub fn end_transition(&mut self) {
        self.state.transition = None;
    }

    /// Move one screen forward. Arriving at Home wipes the transient state
    /// left behind by the previous cycle.
    pub fn advance_screen(&mut self) -> Screen {
        let next = self.state.screen.next();
        self.state.screen = next;
        self.state.rotations += 1;
        self.state.selected = 0;
        if next == Screen::Home {
            self.reset_transient();
        }
        next
    }

    pub fn reset_transient(&mut self) {
        self.state.search.clear();
        self.state.playback.clear();
        self.state.highlighted_playlist = None;
        self.state.show_player = false;
        self.state.editing_search = false;
    }

    /// One-way switch to manual mode. Automatic work in flight is settled:
    /// a pending search resolves now and an auto-started track pauses.
    /// Returns whether the mode actually changed.
    pub fn enter_manual_mode(&mut self) -> bool {
        if self.state.mode == RotationMode::Manual {
            return false;
        }

        self.state.mode = RotationMode::Manual;
        self.state.transition = None;
        self.state.highlighted_playlist = None;
        if self.state.search.is_searching {
            self.run_search();
        }
        self.state.playback.pause();
        true
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn select_screen(&mut self, screen: Screen) {
        if self.state.screen != screen {
            self.state.screen = screen;
            self.state.selected = 0;
            self.state.editing_search = false;
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let rows = self.state.row_count(self.catalog);
        if rows == 0 {
            self.state.selected = 0;
            return;
        }
        let current = self.state.selected.min(rows - 1) as isize;
        self.state.selected = (current + delta).clamp(0, rows as isize - 1) as usize;
    }

    pub fn highlight_playlist(&mut self, index: Option<usize>) {
        self.state.highlighted_playlist = index;
    }

    pub fn toggle_player(&mut self) -> bool {
        self.state.show_player = !self.state.show_player && self.state.playback.active_track.is_some();
        self.state.show_player
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.state.theme = self.state.theme.toggled();
        self.state.theme
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.search.query = query.into();
    }

    pub fn set_searching(&mut self, searching: bool) {
        self.state.search.is_searching = searching;
    }

    /// Filter the trending list with the current query
    pub fn run_search(&mut self) -> usize {
        let results = filter_tracks(self.catalog.trending, &self.state.search.query);
        self.state.search.results = results;
        self.state.search.is_searching = false;
        self.state.selected = 0;
        self.state.search.results.len()
    }

    /// Live search as the user types
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.state.search.query);
        self.run_search();
    }

    pub fn set_editing_search(&mut self, editing: bool) {
        self.state.editing_search = editing;
    }

    pub fn first_result_or_trending(&self) -> Option<Track> {
        self.state
            .search
            .results
            .first()
            .or_else(|| self.catalog.trending.first())
            .copied()
    }

    // ========================================================================
    // Playback
    // ========================================================================

    pub fn start_playback(&mut self, track: TrackId) {
        self.state.playback.start(track);
    }

    pub fn play_pause(&mut self, track: TrackId) -> bool {
        self.state.playback.play_pause(track)
    }

    pub fn pause_playback(&mut self) {
        self.state.playback.pause();
    }

    pub fn advance_playback(&mut self, step: f64) -> bool {
        self.state.playback.advance(step)
    }

    // ========================================================================
    // Downloads
    // ========================================================================

    pub fn start_download(&mut self, track: TrackId) -> bool {
        self.state.downloads.start(track)
    }

    pub fn advance_download(&mut self, track: TrackId, increment: f64) -> bool {
        self.state.downloads.advance(track, increment)
    }
}
