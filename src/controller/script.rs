//! Interaction scripts played when the scheduler lands on a screen
//!
//! Each screen's choreography is a flat list of steps built up front. One
//! task walks the list, so cancelling a half-played script is one abort.

use std::time::Duration;

use crate::config::{PreviewConfig, ms};
use crate::model::{Catalog, Screen, TrackId};

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Wait(Duration),
    SetQuery(String),
    BeginSearch,
    RunSearch,
    /// Download the first search result, or the first trending track
    DownloadTopResult,
    StartPlayback(TrackId),
    Highlight(Option<usize>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn for_screen(screen: Screen, config: &PreviewConfig, catalog: &Catalog) -> Self {
        let mut script = Script::default();
        match screen {
            Screen::Home => return script,
            Screen::Search => script.typing(config),
            Screen::Library => script.library(config, catalog),
            Screen::Playlists => script.playlists(config, catalog),
        }
        script
    }

    fn wait(&mut self, millis: u64) {
        self.steps.push(Step::Wait(ms(millis)));
    }

    fn typing(&mut self, config: &PreviewConfig) {
        let typing = &config.typing;
        self.wait(config.rotation.interaction_delay_ms);

        let target = typing.target.as_str();
        let mut ends = target.char_indices().map(|(i, _)| i).skip(1).chain([target.len()]).peekable();
        while let Some(end) = ends.next() {
            self.steps.push(Step::SetQuery(target[..end].to_string()));
            if ends.peek().is_some() {
                self.wait(typing.char_interval_ms);
            }
        }

        self.steps.push(Step::BeginSearch);
        self.wait(typing.search_delay_ms);
        self.steps.push(Step::RunSearch);
        self.wait(typing.download_delay_ms);
        self.steps.push(Step::DownloadTopResult);
    }

    fn library(&mut self, config: &PreviewConfig, catalog: &Catalog) {
        let Some(track) = catalog.recent.first() else {
            return;
        };
        self.wait(config.rotation.interaction_delay_ms + config.playback.library_delay_ms);
        self.steps.push(Step::StartPlayback(track.id));
    }

    fn playlists(&mut self, config: &PreviewConfig, catalog: &Catalog) {
        if catalog.playlists.is_empty() {
            return;
        }
        self.wait(config.rotation.interaction_delay_ms + config.playlists.highlight_delay_ms);
        for index in 0..catalog.playlists.len() {
            self.steps.push(Step::Highlight(Some(index)));
            self.wait(config.playlists.highlight_interval_ms);
        }
        self.steps.push(Step::Highlight(None));
    }

    /// Sum of all waits
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Wait(delay) => *delay,
                _ => Duration::ZERO,
            })
            .sum()
    }

    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::SetQuery(query) => Some(query.as_str()),
            _ => None,
        })
    }
}
