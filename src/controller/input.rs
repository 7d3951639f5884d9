//! Key event handling and the user actions behind it

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Origin, PreviewModel, Screen, TrackId};

use super::tasks;
use super::PreviewController;

impl PreviewController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.request_quit().await;
            return Ok(());
        }

        let state = self.snapshot();

        // Search input captures everything while editing
        if state.editing_search {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.user_action(|m| m.set_editing_search(false)).await;
                }
                KeyCode::Backspace => {
                    self.set_search_query_with(|query| {
                        query.pop();
                    })
                    .await;
                }
                KeyCode::Char(c) => {
                    self.set_search_query_with(|query| query.push(c)).await;
                }
                _ => {}
            }
            return Ok(());
        }

        // Full player overlay
        if state.show_player {
            match key.code {
                KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => {
                    self.toggle_player().await;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Some(track) = state.playback.active_track {
                        self.play_pause(track).await;
                    }
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.request_quit().await;
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.request_quit().await;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.select_screen(Screen::from_index(index)).await;
            }
            KeyCode::Tab | KeyCode::Right => {
                self.select_screen(state.screen.next()).await;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.select_screen(state.screen.prev()).await;
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
                self.user_action(|m| m.move_selection(-1)).await;
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                self.user_action(|m| m.move_selection(1)).await;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(track) = state.selected_track(self.catalog()) {
                    self.play_pause(track.id).await;
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                if let Some(track) = state.selected_track(self.catalog()) {
                    self.download(track.id).await;
                }
            }
            KeyCode::Char('/') => {
                self.user_action(|m| {
                    m.select_screen(Screen::Search);
                    m.set_editing_search(true);
                })
                .await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.toggle_player().await;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.toggle_theme().await;
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply a user change, switching to manual mode first. The first user
    /// action of a session cancels all automatic work.
    async fn user_action<R>(&self, change: impl FnOnce(&mut PreviewModel) -> R) -> Option<R> {
        let (switched, result) = self
            .update(Origin::User, |m| {
                let switched = m.enter_manual_mode();
                (switched, change(m))
            })
            .await?;

        self.settle_takeover(switched).await;
        Some(result)
    }

    async fn settle_takeover(&self, switched: bool) {
        if switched {
            self.auto_tasks.lock().await.abort_all();
            tracing::info!("User took over, automatic rotation stopped for this session");
        }
    }

    pub async fn select_screen(&self, screen: Screen) {
        if self.user_action(|m| m.select_screen(screen)).await.is_some() {
            tracing::debug!(%screen, "Screen selected");
        }
    }

    /// Play button on a track row
    pub async fn play_pause(&self, track: TrackId) {
        // The takeover pauses playback, so the tap acts on what was audible before it
        let outcome = self
            .update(Origin::User, |m| {
                let playback = &m.state().playback;
                let was_playing = playback.is_playing && playback.active_track == Some(track);
                let switched = m.enter_manual_mode();
                let playing = if was_playing {
                    m.pause_playback();
                    false
                } else {
                    m.play_pause(track)
                };
                (switched, playing)
            })
            .await;
        let Some((switched, playing)) = outcome else {
            return;
        };
        self.settle_takeover(switched).await;

        if playing {
            self.spawn_playback_timer(Origin::User).await;
        } else {
            self.abort_task(Origin::User, tasks::PLAYBACK).await;
        }
        tracing::info!(%track, playing, "Play/pause");
    }

    pub async fn download(&self, track: TrackId) {
        if self.user_action(|_| ()).await.is_some() {
            self.start_download(Origin::User, track).await;
        }
    }

    /// Replace the search text; results follow the text live
    pub async fn set_search_query(&self, query: &str) {
        let query = query.to_string();
        self.set_search_query_with(move |current| *current = query).await;
    }

    async fn set_search_query_with(&self, edit: impl FnOnce(&mut String)) {
        self.user_action(|m| {
            m.select_screen(Screen::Search);
            m.edit_query(edit);
        })
        .await;
    }

    pub async fn toggle_player(&self) {
        self.user_action(|m| m.toggle_player()).await;
    }

    /// Cosmetic, so it does not count as taking over
    pub async fn toggle_theme(&self) {
        if let Some(theme) = self.update(Origin::User, |m| m.toggle_theme()).await {
            tracing::debug!(?theme, "Theme toggled");
        }
    }

    pub async fn request_quit(&self) {
        self.update(Origin::User, |m| m.request_quit()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewConfig;
    use crate::model::{RotationMode, ThemeMode};
    use crate::random::SeededRandom;

    fn controller() -> PreviewController {
        PreviewController::new(PreviewConfig::default(), Box::new(SeededRandom::new(Some(1))))
    }

    async fn press(controller: &PreviewController, code: KeyCode) {
        controller
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_number_and_tab_keys_select_screens() {
        let controller = controller();

        press(&controller, KeyCode::Char('3')).await;
        assert_eq!(controller.snapshot().screen, Screen::Library);
        assert_eq!(controller.snapshot().mode, RotationMode::Manual);

        press(&controller, KeyCode::Tab).await;
        assert_eq!(controller.snapshot().screen, Screen::Playlists);
        press(&controller, KeyCode::Tab).await;
        assert_eq!(controller.snapshot().screen, Screen::Home);
        press(&controller, KeyCode::BackTab).await;
        assert_eq!(controller.snapshot().screen, Screen::Playlists);

        press(&controller, KeyCode::Char('2')).await;
        assert_eq!(controller.snapshot().screen, Screen::Search);
        press(&controller, KeyCode::Char('1')).await;
        assert_eq!(controller.snapshot().screen, Screen::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_editing_captures_keys() {
        let controller = controller();

        press(&controller, KeyCode::Char('/')).await;
        let state = controller.snapshot();
        assert_eq!(state.screen, Screen::Search);
        assert!(state.editing_search);

        for c in "quit".chars() {
            press(&controller, KeyCode::Char(c)).await;
        }
        press(&controller, KeyCode::Char('t')).await;
        let state = controller.snapshot();
        assert_eq!(state.search.query, "quitt");
        assert!(!state.should_quit);
        assert_eq!(state.theme, ThemeMode::Dark);

        press(&controller, KeyCode::Backspace).await;
        press(&controller, KeyCode::Esc).await;
        let state = controller.snapshot();
        assert_eq!(state.search.query, "quit");
        assert!(!state.editing_search);

        press(&controller, KeyCode::Char('/')).await;
        assert!(controller.snapshot().editing_search);
        press(&controller, KeyCode::Enter).await;
        assert!(!controller.snapshot().editing_search);
    }

    #[tokio::test(start_paused = true)]
    async fn test_space_in_full_player_toggles_active_track() {
        let controller = controller();

        press(&controller, KeyCode::Char('3')).await;
        press(&controller, KeyCode::Char(' ')).await;
        let state = controller.snapshot();
        assert_eq!(state.playback.active_track, Some(TrackId(1)));
        assert!(state.playback.is_playing);

        press(&controller, KeyCode::Char('p')).await;
        assert!(controller.snapshot().show_player);

        // The overlay acts on the active track
        press(&controller, KeyCode::Char(' ')).await;
        let state = controller.snapshot();
        assert!(state.show_player);
        assert_eq!(state.playback.active_track, Some(TrackId(1)));
        assert!(!state.playback.is_playing);

        press(&controller, KeyCode::Esc).await;
        assert!(!controller.snapshot().show_player);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_keys_and_download() {
        let controller = controller();

        press(&controller, KeyCode::Char('2')).await;
        press(&controller, KeyCode::Char('j')).await;
        press(&controller, KeyCode::Down).await;
        press(&controller, KeyCode::Down).await;
        assert_eq!(controller.snapshot().selected, 2);
        press(&controller, KeyCode::Char('k')).await;
        assert_eq!(controller.snapshot().selected, 1);

        press(&controller, KeyCode::Char('d')).await;
        assert_eq!(controller.snapshot().downloads.get(TrackId(5)), Some(0.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_theme_key_does_not_take_over() {
        let controller = controller();

        press(&controller, KeyCode::Char('t')).await;
        let state = controller.snapshot();
        assert_eq!(state.theme, ThemeMode::Light);
        assert_eq!(state.mode, RotationMode::Auto);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_keys() {
        let ctrl_c = controller();
        ctrl_c
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        let state = ctrl_c.snapshot();
        assert!(state.should_quit);
        assert_eq!(state.mode, RotationMode::Auto);

        let other = controller();
        press(&other, KeyCode::Char('q')).await;
        assert!(other.snapshot().should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_key_release_is_ignored() {
        let controller = controller();
        let before = controller.snapshot();
        controller
            .handle_key_event(KeyEvent::new_with_kind(
                KeyCode::Char('3'),
                KeyModifiers::NONE,
                KeyEventKind::Release,
            ))
            .await
            .unwrap();
        assert_eq!(controller.snapshot(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_search_query_filters_live() {
        let controller = controller();

        controller.set_search_query("styles").await;
        let state = controller.snapshot();
        assert_eq!(state.screen, Screen::Search);
        assert_eq!(state.mode, RotationMode::Manual);
        let titles: Vec<&str> = state.search.results.iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["As It Was"]);

        controller.set_search_query("").await;
        let state = controller.snapshot();
        assert!(state.search.results.is_empty());
        assert!(state.search.shows_trending());
    }
}
