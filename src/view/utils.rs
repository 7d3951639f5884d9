//! Shared helpers for rendering the mockup

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::model::{DownloadStatus, ThemeMode};

/// Colors of the mockup for one theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::DarkGray,
                accent: Color::Green,
                selection: Color::Rgb(40, 40, 40),
                border: Color::Gray,
            },
            ThemeMode::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::Gray,
                accent: Color::Rgb(0, 140, 60),
                selection: Color::Rgb(225, 225, 225),
                border: Color::DarkGray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: Option<usize>,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(selected_index);

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Text of a track's download button
pub fn download_label(status: DownloadStatus) -> String {
    match status {
        DownloadStatus::NotStarted => "⇩".to_string(),
        DownloadStatus::InProgress(progress) => format!("{:.0}%", progress.floor()),
        DownloadStatus::Complete => "✓".to_string(),
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// A rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
