//! Mini player rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::{Catalog, PreviewSnapshot};
use super::utils::Palette;

pub fn render_mini_player(
    frame: &mut Frame,
    area: Rect,
    state: &PreviewSnapshot,
    catalog: &Catalog,
    palette: &Palette,
) {
    let Some(track) = state.active_track(catalog) else {
        return;
    };

    let status_text = if state.playback.is_playing {
        format!(" ▶ {} | {} ", track.title, track.artist)
    } else {
        format!(" ⏸ {} | {} ", track.title, track.artist)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(status_text)
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .title_bottom(Line::from(" p: full player ").right_aligned())
                .style(palette.base()),
        )
        .gauge_style(Style::default().fg(palette.accent).bg(palette.selection))
        .ratio(state.playback.ratio())
        .label(format!("{:.1}%", state.playback.progress));

    frame.render_widget(gauge, area);
}
