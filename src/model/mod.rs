//! Model module - Preview state and sample data
//!
//! This module contains all the data structures behind the phone preview.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (screens, modes, transitions, theme)
//! - `catalog`: Static sample tracks, trending videos and playlists
//! - `playback`: Simulated playback progress
//! - `download`: Simulated download progress per track
//! - `search`: Search box state and the sample-data filter
//! - `preview_model`: The state struct and its transition functions

mod types;
mod catalog;
mod playback;
mod download;
mod search;
mod preview_model;

pub use types::{Origin, RotationMode, Screen, ThemeMode, TransitionStyle};

pub use catalog::{Catalog, Playlist, Track, TrackId};

pub use playback::{PlaybackState, PROGRESS_MAX};

pub use download::{DownloadProgressMap, DownloadStatus};

pub use search::{SearchState, filter_tracks};

pub use preview_model::{PreviewModel, PreviewSnapshot};
