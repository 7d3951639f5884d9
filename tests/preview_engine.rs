//! Timer choreography of the preview, driven on tokio's paused clock

use std::time::Duration;

use tokio::time::{Instant, sleep, sleep_until};

use soundwave_preview::config::PreviewConfig;
use soundwave_preview::controller::PreviewController;
use soundwave_preview::model::{RotationMode, Screen, TrackId, TransitionStyle};
use soundwave_preview::random::RandomSource;

/// Always the first transition, always the same download step
struct FixedRandom {
    step: f64,
}

impl RandomSource for FixedRandom {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }

    fn step(&mut self, min: f64, max: f64) -> f64 {
        self.step.clamp(min, max)
    }
}

fn controller_with_step(step: f64) -> PreviewController {
    PreviewController::new(PreviewConfig::default(), Box::new(FixedRandom { step }))
}

async fn mounted() -> (PreviewController, Instant) {
    let controller = controller_with_step(10.0);
    let start = Instant::now();
    controller.mount().await;
    (controller, start)
}

/// Sleep until `millis` after `start`. Probe times are kept off the 100 ms
/// grid the timers run on.
async fn at(start: Instant, millis: u64) {
    sleep_until(start + Duration::from_millis(millis)).await;
}

#[tokio::test(start_paused = true)]
async fn test_starts_on_home_until_first_tick() {
    let (controller, start) = mounted().await;

    at(start, 1950).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Home);
    assert_eq!(state.rotations, 0);
    assert_eq!(state.transition, None);
}

#[tokio::test(start_paused = true)]
async fn test_screen_follows_tick_count() {
    let (controller, start) = mounted().await;

    for n in 1..=9u64 {
        at(start, 2000 + (n - 1) * 5000 + 1050).await;
        let state = controller.snapshot();
        assert_eq!(state.rotations, n);
        assert_eq!(state.screen.index(), (n % 4) as usize, "after {n} ticks");
    }
}

#[tokio::test(start_paused = true)]
async fn test_transition_runs_around_each_advance() {
    let (controller, start) = mounted().await;

    at(start, 2050).await;
    let state = controller.snapshot();
    assert_eq!(state.transition, Some(TransitionStyle::SlideLeft));
    assert_eq!(state.screen, Screen::Home);

    at(start, 2450).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Search);
    assert_eq!(state.transition, Some(TransitionStyle::SlideLeft));

    at(start, 3250).await;
    assert_eq!(controller.snapshot().transition, None);
}

#[tokio::test(start_paused = true)]
async fn test_search_script_types_searches_and_downloads() {
    let (controller, start) = mounted().await;

    at(start, 2950).await;
    assert_eq!(controller.snapshot().search.query, "");

    at(start, 3250).await;
    assert_eq!(controller.snapshot().search.query, "Har");

    at(start, 4150).await;
    let state = controller.snapshot();
    assert_eq!(state.search.query, "Harry Styles");
    assert!(state.search.is_searching);
    assert!(state.search.results.is_empty());

    at(start, 4650).await;
    let state = controller.snapshot();
    assert!(!state.search.is_searching);
    let titles: Vec<&str> = state.search.results.iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["As It Was"]);
    assert!(state.downloads.is_empty());

    at(start, 6150).await;
    assert_eq!(controller.snapshot().downloads.get(TrackId(4)), Some(0.0));

    // Ten steps of 10%, still running after the screen moved on
    at(start, 8150).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Library);
    assert_eq!(state.downloads.get(TrackId(4)), Some(100.0));
}

#[tokio::test(start_paused = true)]
async fn test_download_progress_never_decreases() {
    let controller = controller_with_step(7.0);
    let start = Instant::now();
    controller.mount().await;

    let mut last = 0.0;
    for probe in 0..80u64 {
        at(start, 6025 + probe * 50).await;
        let progress = controller.snapshot().downloads.get(TrackId(4)).unwrap_or(0.0);
        assert!(progress >= last, "{progress} after {last}");
        assert!(progress <= 100.0);
        last = progress;
    }
    assert_eq!(last, 100.0);
}

#[tokio::test(start_paused = true)]
async fn test_library_plays_then_home_resets() {
    let (controller, start) = mounted().await;

    at(start, 8750).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Library);
    assert_eq!(state.playback.active_track, None);

    at(start, 9050).await;
    let state = controller.snapshot();
    assert_eq!(state.playback.active_track, Some(TrackId(1)));
    assert!(state.playback.is_playing);
    assert!((state.playback.progress - 1.0).abs() < 1e-9);

    at(start, 12450).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Playlists);
    assert!(state.playback.is_playing);

    at(start, 17450).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Home);
    assert_eq!(state.playback.active_track, None);
    assert!(state.search.query.is_empty());
    assert_eq!(state.highlighted_playlist, None);

    // Nothing replays the old track once Home is reached
    at(start, 18050).await;
    assert_eq!(controller.snapshot().playback.progress, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_playlists_highlight_in_order() {
    let (controller, start) = mounted().await;

    at(start, 14050).await;
    assert_eq!(controller.snapshot().highlighted_playlist, Some(0));
    at(start, 14250).await;
    assert_eq!(controller.snapshot().highlighted_playlist, Some(1));
    at(start, 14450).await;
    assert_eq!(controller.snapshot().highlighted_playlist, Some(2));
    at(start, 14650).await;
    assert_eq!(controller.snapshot().highlighted_playlist, None);
}

#[tokio::test(start_paused = true)]
async fn test_manual_override_stops_rotation_for_good() {
    let (controller, start) = mounted().await;

    at(start, 3250).await;
    controller.select_screen(Screen::Search).await;

    let state = controller.snapshot();
    assert_eq!(state.mode, RotationMode::Manual);
    assert_eq!(state.search.query, "Har");
    assert_eq!(controller.running_tasks().await, 0);

    sleep(Duration::from_secs(60)).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Search);
    assert_eq!(state.rotations, 1);
    assert_eq!(state.search.query, "Har");
    assert_eq!(state.transition, None);

    // Manual navigation still works, in any direction
    controller.select_screen(Screen::Playlists).await;
    controller.select_screen(Screen::Home).await;
    sleep(Duration::from_secs(30)).await;
    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Home);
    assert_eq!(state.rotations, 1);
}

#[tokio::test(start_paused = true)]
async fn test_override_resolves_pending_search() {
    let (controller, start) = mounted().await;

    at(start, 4250).await;
    assert!(controller.snapshot().search.is_searching);
    controller.select_screen(Screen::Search).await;

    let state = controller.snapshot();
    assert!(!state.search.is_searching);
    assert_eq!(state.search.results.len(), 1);

    sleep(Duration::from_secs(10)).await;
    assert!(controller.snapshot().downloads.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_override_pauses_auto_playback() {
    let (controller, start) = mounted().await;

    at(start, 9050).await;
    controller.select_screen(Screen::Library).await;
    let state = controller.snapshot();
    assert_eq!(state.mode, RotationMode::Manual);
    assert_eq!(state.playback.active_track, Some(TrackId(1)));
    assert!(!state.playback.is_playing);
    let frozen = state.playback.progress;

    sleep(Duration::from_secs(10)).await;
    assert_eq!(controller.snapshot().playback.progress, frozen);

    // The user resumes it from where it stopped
    controller.play_pause(TrackId(1)).await;
    sleep(Duration::from_millis(1050)).await;
    let state = controller.snapshot();
    assert!(state.playback.is_playing);
    assert!((state.playback.progress - (frozen + 5.0)).abs() < 1e-9);

    controller.play_pause(TrackId(1)).await;
    let paused = controller.snapshot().playback.progress;
    sleep(Duration::from_secs(5)).await;
    assert_eq!(controller.snapshot().playback.progress, paused);
}

#[tokio::test(start_paused = true)]
async fn test_first_tap_on_auto_playing_track_pauses_it() {
    let (controller, start) = mounted().await;

    at(start, 9050).await;
    assert!(controller.snapshot().playback.is_playing);

    controller.play_pause(TrackId(1)).await;
    let state = controller.snapshot();
    assert_eq!(state.mode, RotationMode::Manual);
    assert_eq!(state.playback.active_track, Some(TrackId(1)));
    assert!(!state.playback.is_playing);
    let frozen = state.playback.progress;

    sleep(Duration::from_secs(5)).await;
    let state = controller.snapshot();
    assert!(!state.playback.is_playing);
    assert_eq!(state.playback.progress, frozen);
    assert_eq!(controller.running_tasks().await, 0);

    // A second tap resumes
    controller.play_pause(TrackId(1)).await;
    assert!(controller.snapshot().playback.is_playing);
}

#[tokio::test(start_paused = true)]
async fn test_first_tap_on_other_track_starts_it() {
    let (controller, start) = mounted().await;

    at(start, 9050).await;
    controller.play_pause(TrackId(2)).await;
    let state = controller.snapshot();
    assert_eq!(state.playback.active_track, Some(TrackId(2)));
    assert!(state.playback.is_playing);
    assert_eq!(state.playback.progress, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_user_download_resumes_frozen_download() {
    let (controller, start) = mounted().await;

    at(start, 6550).await;
    controller.select_screen(Screen::Search).await;
    let frozen = controller.snapshot().downloads.get(TrackId(4)).unwrap();
    assert!(frozen > 0.0 && frozen < 100.0);

    sleep(Duration::from_secs(5)).await;
    assert_eq!(controller.snapshot().downloads.get(TrackId(4)), Some(frozen));

    controller.download(TrackId(4)).await;
    sleep(Duration::from_secs(5)).await;
    assert_eq!(controller.snapshot().downloads.get(TrackId(4)), Some(100.0));
}

#[tokio::test(start_paused = true)]
async fn test_theme_toggle_does_not_take_over() {
    let (controller, start) = mounted().await;

    at(start, 1050).await;
    controller.toggle_theme().await;
    assert_eq!(controller.snapshot().mode, RotationMode::Auto);

    at(start, 7450).await;
    assert_eq!(controller.snapshot().screen, Screen::Library);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_mid_typing_freezes_state() {
    let (controller, start) = mounted().await;
    let mut state_rx = controller.subscribe();

    at(start, 3250).await;
    controller.unmount().await;
    let frozen = state_rx.borrow_and_update().clone();
    assert!(!frozen.mounted);
    assert_eq!(frozen.search.query, "Har");

    sleep(Duration::from_secs(60)).await;
    assert!(!state_rx.has_changed().unwrap());
    assert_eq!(controller.snapshot(), frozen);
    assert_eq!(controller.running_tasks().await, 0);

    // User input is ignored too
    controller.select_screen(Screen::Playlists).await;
    controller.play_pause(TrackId(2)).await;
    assert!(!state_rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_unmount_before_first_tick() {
    let (controller, start) = mounted().await;

    at(start, 500).await;
    controller.unmount().await;
    sleep(Duration::from_secs(30)).await;

    let state = controller.snapshot();
    assert_eq!(state.screen, Screen::Home);
    assert_eq!(state.rotations, 0);
}

#[tokio::test(start_paused = true)]
async fn test_manual_start_never_rotates() {
    let mut config = PreviewConfig::default();
    config.rotation.auto_start = false;
    let controller = PreviewController::new(config, Box::new(FixedRandom { step: 10.0 }));
    controller.mount().await;

    assert_eq!(controller.snapshot().mode, RotationMode::Manual);
    sleep(Duration::from_secs(30)).await;
    assert_eq!(controller.snapshot().screen, Screen::Home);
    assert_eq!(controller.running_tasks().await, 0);
}
