//! Automatic screen rotation

use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};

use crate::config::ms;
use crate::model::{Origin, Screen, TransitionStyle};

use super::script::Script;
use super::tasks;
use super::PreviewController;

impl PreviewController {
    /// Rotate forever until unmounted or overridden. Runs as the `rotation`
    /// task of the automatic group.
    pub(crate) async fn run_rotation(self) {
        let rotation = &self.config.rotation;
        let start = Instant::now() + ms(rotation.initial_delay_ms);
        let mut ticker = interval_at(start, ms(rotation.period_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if !self.rotate_once().await {
                tracing::debug!("Rotation stopped");
                break;
            }
        }
    }

    /// One scheduler tick: transition, advance, spawn the screen's script,
    /// settle. Returns false once automatic changes are no longer accepted.
    async fn rotate_once(&self) -> bool {
        let rotation = &self.config.rotation;
        let style = TransitionStyle::ALL[self.random_pick(TransitionStyle::ALL.len()).await];
        if self.update(Origin::Auto, |m| m.begin_transition(style)).await.is_none() {
            return false;
        }

        sleep(ms(rotation.transition_lead_ms)).await;

        let Some(screen) = self.update(Origin::Auto, |m| m.advance_screen()).await else {
            return false;
        };
        tracing::debug!(%screen, transition = style.label(), "Screen advanced");

        if screen == Screen::Home {
            self.abort_task(Origin::Auto, tasks::PLAYBACK).await;
        }

        let script = Script::for_screen(screen, &self.config, self.catalog());
        if script.steps.is_empty() {
            self.abort_task(Origin::Auto, tasks::SCRIPT).await;
        } else {
            let controller = self.clone();
            self.spawn_task(Origin::Auto, tasks::SCRIPT, async move {
                controller.run_script(Origin::Auto, script).await;
            })
            .await;
        }

        sleep(ms(rotation.transition_settle_ms)).await;
        self.update(Origin::Auto, |m| m.end_transition()).await.is_some()
    }
}
