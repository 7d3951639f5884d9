//! Overlay rendering (full player, screen transition)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::model::{Catalog, PreviewSnapshot, TransitionStyle};
use super::utils::Palette;

pub fn render_full_player(
    frame: &mut Frame,
    area: Rect,
    state: &PreviewSnapshot,
    catalog: &Catalog,
    palette: &Palette,
) {
    let Some(track) = state.active_track(catalog) else {
        return;
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .title(" Now Playing (Esc to close) ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Artwork
            Constraint::Length(3), // Title and artist
            Constraint::Length(1), // Progress
            Constraint::Length(2), // Controls
        ])
        .split(inner);

    let artwork = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            format!("[ {} ]", track.thumbnail),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    frame.render_widget(artwork, chunks[0]);

    let details = Paragraph::new(vec![
        Line::styled(track.title, Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(track.artist, Style::default().fg(palette.muted)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(details, chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.selection))
        .ratio(state.playback.ratio())
        .label(format!("{:.1}% / {}", state.playback.progress, track.duration));
    frame.render_widget(gauge, chunks[2]);

    let play = if state.playback.is_playing { "⏸" } else { "▶" };
    let controls = Paragraph::new(Line::from(format!("⏮    {}    ⏭", play)))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(controls, chunks[3]);
}

/// Dim the outgoing screen and name the animation in flight
pub fn render_transition(frame: &mut Frame, area: Rect, style: TransitionStyle, palette: &Palette) {
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let label = format!(" {} {} ", transition_glyph(style), style.label());
    let width = (label.chars().count() as u16 + 2).min(area.width);
    let badge_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height / 2,
        width,
        height: 1.min(area.height),
    };

    frame.render_widget(Clear, badge_area);
    let badge = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.background).bg(palette.accent).add_modifier(Modifier::BOLD));
    frame.render_widget(badge, badge_area);
}

fn transition_glyph(style: TransitionStyle) -> &'static str {
    match style {
        TransitionStyle::SlideLeft => "←",
        TransitionStyle::FadeZoom => "◎",
        TransitionStyle::FlipHorizontal => "⇋",
        TransitionStyle::CubeRotate => "⟳",
    }
}
