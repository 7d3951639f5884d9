//! Simulated interactions: the script runner and the progress timers

use tokio::time::{MissedTickBehavior, interval, sleep};

use crate::config::ms;
use crate::model::{Origin, TrackId};

use super::script::{Script, Step};
use super::tasks;
use super::PreviewController;

impl PreviewController {
    /// Walk a script step by step. Stops early when a change is refused.
    pub(crate) async fn run_script(&self, origin: Origin, script: Script) {
        for step in script.steps {
            let applied = match step {
                Step::Wait(delay) => {
                    sleep(delay).await;
                    Some(())
                }
                Step::SetQuery(query) => self.update(origin, |m| m.set_query(query)).await,
                Step::BeginSearch => self.update(origin, |m| m.set_searching(true)).await,
                Step::RunSearch => {
                    let found = self.update(origin, |m| m.run_search()).await;
                    if let Some(found) = found {
                        tracing::debug!(results = found, "Simulated search finished");
                    }
                    found.map(|_| ())
                }
                Step::DownloadTopResult => {
                    let track = self.update(origin, |m| m.first_result_or_trending()).await;
                    match track {
                        Some(Some(track)) => self.start_download(origin, track.id).await,
                        Some(None) => Some(()),
                        None => None,
                    }
                }
                Step::StartPlayback(track) => self.start_playback(origin, track).await,
                Step::Highlight(index) => self.update(origin, |m| m.highlight_playlist(index)).await,
            };

            if applied.is_none() {
                tracing::trace!("Script interrupted");
                return;
            }
        }
    }

    /// Play `track` from zero and keep the progress timer running
    pub(crate) async fn start_playback(&self, origin: Origin, track: TrackId) -> Option<()> {
        self.update(origin, |m| m.start_playback(track)).await?;
        tracing::info!(%track, ?origin, "Simulated playback started");
        self.spawn_playback_timer(origin).await;
        Some(())
    }

    pub(crate) async fn spawn_playback_timer(&self, origin: Origin) {
        let controller = self.clone();
        self.spawn_task(origin, tasks::PLAYBACK, async move {
            controller.run_playback_timer(origin).await;
        })
        .await;
    }

    async fn run_playback_timer(&self, origin: Origin) {
        let playback = &self.config.playback;
        let mut ticker = interval(ms(playback.step_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match self.update(origin, |m| m.advance_playback(playback.step_percent)).await {
                Some(true) => continue,
                Some(false) => {
                    tracing::debug!("Simulated playback reached the end");
                    break;
                }
                None => break,
            }
        }
    }

    /// Start (or resume) a simulated download and its progress timer
    pub(crate) async fn start_download(&self, origin: Origin, track: TrackId) -> Option<()> {
        let needs_timer = self.update(origin, |m| m.start_download(track)).await?;
        if !needs_timer {
            return Some(());
        }

        tracing::info!(%track, ?origin, "Simulated download started");
        let controller = self.clone();
        self.spawn_task(origin, &tasks::download_key(track), async move {
            controller.run_download_timer(origin, track).await;
        })
        .await;
        Some(())
    }

    async fn run_download_timer(&self, origin: Origin, track: TrackId) {
        let download = &self.config.download;
        let mut ticker = interval(ms(download.step_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let increment = self
                .random_step(download.min_step_percent, download.max_step_percent)
                .await;
            match self.update(origin, |m| m.advance_download(track, increment)).await {
                Some(true) => continue,
                Some(false) => {
                    tracing::info!(%track, "Simulated download complete");
                    break;
                }
                None => break,
            }
        }
    }
}
