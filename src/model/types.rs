//! Core type definitions for the preview

use serde::{Deserialize, Serialize};

/// One of the four simulated app screens, in tab-bar order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Search,
    Library,
    Playlists,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Search, Screen::Library, Screen::Playlists];

    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Search,
            Screen::Search => Screen::Library,
            Screen::Library => Screen::Playlists,
            Screen::Playlists => Screen::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Home => Screen::Playlists,
            Screen::Search => Screen::Home,
            Screen::Library => Screen::Search,
            Screen::Playlists => Screen::Library,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Search => 1,
            Screen::Library => 2,
            Screen::Playlists => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Search => "Search",
            Screen::Library => "Library",
            Screen::Playlists => "Playlists",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the scheduler is still driving the preview
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationMode {
    #[default]
    Auto,
    Manual,
}

/// Cosmetic effect shown while the screen changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionStyle {
    SlideLeft,
    FadeZoom,
    FlipHorizontal,
    CubeRotate,
}

impl TransitionStyle {
    pub const ALL: [TransitionStyle; 4] = [
        TransitionStyle::SlideLeft,
        TransitionStyle::FadeZoom,
        TransitionStyle::FlipHorizontal,
        TransitionStyle::CubeRotate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransitionStyle::SlideLeft => "slide left",
            TransitionStyle::FadeZoom => "fade zoom",
            TransitionStyle::FlipHorizontal => "flip",
            TransitionStyle::CubeRotate => "cube rotate",
        }
    }
}

/// Color scheme of the mockup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Who asked for a state change. Automatic changes are dropped once the
/// preview is in manual mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Auto,
    User,
}
