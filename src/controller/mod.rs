//! Controller module - Preview logic and event handling
//!
//! This module contains the preview controller that owns the model, runs the
//! timer choreography and turns user input into state changes.
//! It is organized into submodules by responsibility:
//!
//! - `tasks`: Keyed, cancellable timer tasks
//! - `script`: Per-screen interaction scripts
//! - `scheduler`: Automatic screen rotation
//! - `interactions`: Script runner plus playback and download timers
//! - `input`: Key event handling and the manual override

mod tasks;
mod script;
mod scheduler;
mod interactions;
mod input;

use std::sync::Arc;
use tokio::sync::{Mutex, watch};

use crate::config::PreviewConfig;
use crate::model::{Catalog, Origin, PreviewModel, PreviewSnapshot};
use crate::random::RandomSource;

pub use script::{Script, Step};
pub use tasks::TaskGroup;

#[derive(Clone)]
pub struct PreviewController {
    pub(crate) model: Arc<Mutex<PreviewModel>>,
    pub(crate) config: Arc<PreviewConfig>,
    rng: Arc<Mutex<Box<dyn RandomSource>>>,
    auto_tasks: Arc<Mutex<TaskGroup>>,
    user_tasks: Arc<Mutex<TaskGroup>>,
    state_tx: Arc<watch::Sender<PreviewSnapshot>>,
}

impl PreviewController {
    pub fn new(config: PreviewConfig, rng: Box<dyn RandomSource>) -> Self {
        let model = PreviewModel::new(Catalog::sample(), config.theme);
        let (state_tx, _) = watch::channel(model.snapshot());

        Self {
            model: Arc::new(Mutex::new(model)),
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(rng)),
            auto_tasks: Arc::new(Mutex::new(TaskGroup::new())),
            user_tasks: Arc::new(Mutex::new(TaskGroup::new())),
            state_tx: Arc::new(state_tx),
        }
    }

    /// Start the automatic rotation, unless the config asks for a manual start
    pub async fn mount(&self) {
        if !self.config.rotation.auto_start {
            let switched = self.update(Origin::User, |m| m.enter_manual_mode()).await;
            tracing::info!(?switched, "Preview mounted in manual mode");
            return;
        }

        tracing::info!(
            initial_delay_ms = self.config.rotation.initial_delay_ms,
            period_ms = self.config.rotation.period_ms,
            "Preview mounted, starting rotation"
        );
        let controller = self.clone();
        self.auto_tasks
            .lock()
            .await
            .spawn(tasks::ROTATION, async move { controller.run_rotation().await });
    }

    /// Tear the preview down. Nothing mutates the state after this returns.
    pub async fn unmount(&self) {
        {
            let mut model = self.model.lock().await;
            if !model.is_mounted() {
                return;
            }
            model.unmount();
            self.state_tx.send_replace(model.snapshot());
        }
        self.auto_tasks.lock().await.close();
        self.user_tasks.lock().await.close();
        tracing::info!("Preview unmounted, all timers cancelled");
    }

    pub fn subscribe(&self) -> watch::Receiver<PreviewSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn catalog(&self) -> &'static Catalog {
        Catalog::sample()
    }

    /// The one gate every mutation passes through. Returns `None` when the
    /// change was refused: the preview is unmounted, or an automatic change
    /// arrived after the user took over.
    pub(crate) async fn update<R>(
        &self,
        origin: Origin,
        change: impl FnOnce(&mut PreviewModel) -> R,
    ) -> Option<R> {
        let mut model = self.model.lock().await;
        if !model.accepts(origin) {
            tracing::trace!(?origin, "State change refused");
            return None;
        }
        let result = change(&mut model);
        self.state_tx.send_replace(model.snapshot());
        Some(result)
    }

    pub(crate) async fn spawn_task<F>(&self, origin: Origin, key: &str, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let group = match origin {
            Origin::Auto => &self.auto_tasks,
            Origin::User => &self.user_tasks,
        };
        group.lock().await.spawn(key, task);
    }

    pub(crate) async fn abort_task(&self, origin: Origin, key: &str) {
        let group = match origin {
            Origin::Auto => &self.auto_tasks,
            Origin::User => &self.user_tasks,
        };
        group.lock().await.abort(key);
    }

    /// Number of timers still alive across both groups
    pub async fn running_tasks(&self) -> usize {
        self.auto_tasks.lock().await.running() + self.user_tasks.lock().await.running()
    }

    pub(crate) async fn random_pick(&self, len: usize) -> usize {
        self.rng.lock().await.pick(len)
    }

    pub(crate) async fn random_step(&self, min: f64, max: f64) -> f64 {
        self.rng.lock().await.step(min, max)
    }
}
