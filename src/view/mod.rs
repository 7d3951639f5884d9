//! View module - UI rendering
//!
//! This module renders the phone mockup using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (palette, formatting, scrollable lists)
//! - `layout`: Phone frame, status bar, header, tab bar and info panel
//! - `content`: The four screens
//! - `progress`: Mini player
//! - `overlays`: Full player and screen transition

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Catalog, PreviewSnapshot};

pub use utils::Palette;

const PHONE_WIDTH: u16 = 46;
const PHONE_HEIGHT: u16 = 36;
const INFO_WIDTH: u16 = 38;

pub struct PreviewView;

impl PreviewView {
    pub fn render(frame: &mut Frame, state: &PreviewSnapshot, catalog: &Catalog) {
        let palette = Palette::for_theme(state.theme);
        let area = frame.area();

        // Phone on the left, info panel on the right when there is room
        let stage = utils::centered_rect(area, PHONE_WIDTH + INFO_WIDTH + 2, PHONE_HEIGHT);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PHONE_WIDTH),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(stage);

        let screen = layout::render_phone_frame(frame, columns[0], &palette);
        if columns[2].width >= 20 {
            layout::render_info_panel(frame, columns[2], state, &palette);
        }

        let has_player = state.playback.active_track.is_some();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                              // Status bar
                Constraint::Length(2),                              // App header
                Constraint::Min(0),                                 // Screen content
                Constraint::Length(if has_player { 3 } else { 0 }), // Mini player
                Constraint::Length(2),                              // Tab bar
            ])
            .split(screen);

        layout::render_status_bar(frame, chunks[0], &palette);
        layout::render_header(frame, chunks[1], state, &palette);
        content::render_screen(frame, chunks[2], state, catalog, &palette);
        if has_player {
            progress::render_mini_player(frame, chunks[3], state, catalog, &palette);
        }
        layout::render_tab_bar(frame, chunks[4], state, &palette);

        if state.show_player {
            overlays::render_full_player(frame, screen, state, catalog, &palette);
        }

        if let Some(style) = state.transition {
            overlays::render_transition(frame, chunks[2], style, &palette);
        }
    }
}
