//! Layout rendering (phone frame, status bar, header, tab bar, info panel)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{PreviewSnapshot, RotationMode, Screen};
use super::utils::Palette;

/// Outline of the device. Returns the drawable area inside it.
pub fn render_phone_frame(frame: &mut Frame, area: Rect, palette: &Palette) -> Rect {
    let phone = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());
    let inner = phone.inner(area);
    frame.render_widget(phone, area);
    inner
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, palette: &Palette) {
    let width = area.width as usize;
    let left = " 9:41";
    let right = "▂▄▆ ▮▮▮ ";
    let gap = width.saturating_sub(left.chars().count() + right.chars().count());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::raw(right),
    ]))
    .style(palette.base());
    frame.render_widget(bar, area);
}

pub fn render_header(frame: &mut Frame, area: Rect, state: &PreviewSnapshot, palette: &Palette) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("♪ ", Style::default().fg(palette.accent)),
        Span::styled("SoundWave", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", state.screen.label()), Style::default().fg(palette.muted)),
    ]))
    .style(palette.base())
    .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(header, area);
}

pub fn render_tab_bar(frame: &mut Frame, area: Rect, state: &PreviewSnapshot, palette: &Palette) {
    let titles: Vec<Line> = Screen::ALL.iter().map(|screen| Line::from(screen.label())).collect();

    let tabs = Tabs::new(titles)
        .select(state.screen.index())
        .style(palette.base().fg(palette.muted))
        .highlight_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(tabs, area);
}

/// Panel beside the phone describing what the preview is doing
pub fn render_info_panel(frame: &mut Frame, area: Rect, state: &PreviewSnapshot, palette: &Palette) {
    let mode = match state.mode {
        RotationMode::Auto => Span::styled("auto", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        RotationMode::Manual => Span::styled("manual", Style::default().add_modifier(Modifier::BOLD)),
    };

    let transition = state
        .transition
        .map(|style| style.label().to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        Line::from(vec![Span::raw("Mode:        "), mode]),
        Line::from(format!("Screen:      {}", state.screen.label())),
        Line::from(format!("Rotations:   {}", state.rotations)),
        Line::from(format!("Transition:  {}", transition)),
        Line::from(format!("Downloads:   {}", state.downloads.len())),
        Line::from(""),
    ];

    if state.mode == RotationMode::Auto {
        lines.push(Line::styled(
            "Using a control takes over",
            Style::default().fg(palette.muted),
        ));
        lines.push(Line::from(""));
    }

    let keys = [
        ("1-4", "Jump to screen"),
        ("Tab", "Next / previous screen"),
        ("↑↓ jk", "Move selection"),
        ("Space", "Play / pause"),
        ("d", "Download"),
        ("/", "Edit search"),
        ("p", "Full player"),
        ("t", "Toggle theme"),
        ("q", "Quit"),
    ];
    lines.extend(keys.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("{:<7}", key), Style::default().fg(palette.accent)),
            Span::raw(*action),
        ])
    }));

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SoundWave Preview ")
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(panel, area);
}
