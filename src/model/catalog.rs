//! Static sample data shown inside the phone mockup

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackId(pub u32);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sample song or video with display metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: TrackId,
    pub title: &'static str,
    pub artist: &'static str,
    pub thumbnail: &'static str,
    pub duration: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub id: u32,
    pub name: &'static str,
    pub song_count: u32,
    pub tracks: &'static [TrackId],
}

/// The fixed fixtures the preview reads from
#[derive(Debug)]
pub struct Catalog {
    pub recent: &'static [Track],
    pub trending: &'static [Track],
    pub playlists: &'static [Playlist],
}

const fn local(id: u32, title: &'static str, artist: &'static str, thumbnail: &'static str, duration: &'static str) -> Track {
    Track { id: TrackId(id), title, artist, thumbnail, duration, views: None }
}

const fn video(
    id: u32,
    title: &'static str,
    artist: &'static str,
    thumbnail: &'static str,
    duration: &'static str,
    views: &'static str,
) -> Track {
    Track { id: TrackId(id), title, artist, thumbnail, duration, views: Some(views) }
}

static RECENT: [Track; 3] = [
    local(1, "Blinding Lights", "The Weeknd", "BL", "3:20"),
    local(2, "Watermelon Sugar", "Harry Styles", "WS", "2:54"),
    local(3, "Levitating", "Dua Lipa", "LE", "3:23"),
];

static TRENDING: [Track; 3] = [
    video(4, "As It Was", "Harry Styles", "AW", "2:47", "1.2B"),
    video(5, "Heat Waves", "Glass Animals", "HW", "3:58", "950.0M"),
    video(6, "Stay", "The Kid LAROI", "ST", "2:21", "800.0M"),
];

static FAVORITES: [TrackId; 3] = [TrackId(1), TrackId(2), TrackId(3)];

static PLAYLISTS: [Playlist; 3] = [
    Playlist { id: 1, name: "My Favorites", song_count: 25, tracks: &FAVORITES },
    Playlist { id: 2, name: "Workout Mix", song_count: 18, tracks: &[] },
    Playlist { id: 3, name: "Chill Vibes", song_count: 32, tracks: &[] },
];

pub static SAMPLE: Catalog = Catalog {
    recent: &RECENT,
    trending: &TRENDING,
    playlists: &PLAYLISTS,
};

impl Catalog {
    pub fn sample() -> &'static Catalog {
        &SAMPLE
    }

    pub fn track(&self, id: TrackId) -> Option<Track> {
        self.recent
            .iter()
            .chain(self.trending.iter())
            .find(|track| track.id == id)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_ids_are_unique() {
        let catalog = Catalog::sample();
        let mut ids: Vec<TrackId> = catalog.recent.iter().chain(catalog.trending).map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.recent.len() + catalog.trending.len());
    }

    #[test]
    fn test_playlist_tracks_resolve() {
        let catalog = Catalog::sample();
        for playlist in catalog.playlists {
            for id in playlist.tracks {
                assert!(catalog.track(*id).is_some(), "dangling track {id} in {}", playlist.name);
            }
        }
    }
}
