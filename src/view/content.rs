//! Screen content rendering (home, search, library, playlists)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{Catalog, PreviewSnapshot, Screen, Track};
use super::utils::{download_label, render_scrollable_list, truncate_string, Palette};

pub fn render_screen(
    frame: &mut Frame,
    area: Rect,
    state: &PreviewSnapshot,
    catalog: &Catalog,
    palette: &Palette,
) {
    match state.screen {
        Screen::Home => render_home(frame, area, state, catalog, palette),
        Screen::Search => render_search(frame, area, state, catalog, palette),
        Screen::Library => render_library(frame, area, state, catalog, palette),
        Screen::Playlists => render_playlists(frame, area, state, catalog, palette),
    }
}

fn section_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::TOP)
        .title(title)
        .title_style(Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(palette.muted))
        .style(palette.base())
}

/// One row: thumbnail, title and artist, a trailing label
fn track_item<'a>(
    track: &Track,
    trailing: String,
    width: u16,
    is_selected: bool,
    is_active: bool,
    palette: &Palette,
) -> ListItem<'a> {
    let trailing_width = trailing.chars().count() + 1;
    let text_width = (width as usize).saturating_sub(trailing_width + 6);

    let title_style = if is_active {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" [{}] ", track.thumbnail), Style::default().fg(palette.accent)),
            Span::styled(truncate_string(track.title, text_width), title_style),
            Span::styled(format!(" {}", trailing), Style::default().fg(palette.muted)),
        ]),
        Line::from(vec![
            Span::raw("      "),
            Span::styled(
                truncate_string(track.artist, text_width),
                Style::default().fg(palette.muted),
            ),
        ]),
    ];

    let style = if is_selected {
        Style::default().bg(palette.selection)
    } else {
        Style::default()
    };
    ListItem::new(lines).style(style)
}

fn playing_marker(state: &PreviewSnapshot, track: &Track) -> String {
    match state.playback.active_track {
        Some(id) if id == track.id && state.playback.is_playing => "▶".to_string(),
        Some(id) if id == track.id => "⏸".to_string(),
        _ => track.duration.to_string(),
    }
}

fn render_home(frame: &mut Frame, area: Rect, state: &PreviewSnapshot, catalog: &Catalog, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Min(0),    // Recently played
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::styled("Good evening", Style::default().add_modifier(Modifier::BOLD)),
        Line::styled("Pick up where you left off", Style::default().fg(palette.muted)),
    ])
    .style(palette.base())
    .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(greeting, chunks[0]);

    let items: Vec<ListItem> = catalog
        .recent
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_active = state.playback.active_track == Some(track.id);
            track_item(track, playing_marker(state, track), area.width, i == state.selected, is_active, palette)
        })
        .collect();

    render_scrollable_list(
        frame,
        chunks[1],
        items,
        Some(state.selected),
        section_block(" Recently Played ", palette),
    );
}

fn render_search(frame: &mut Frame, area: Rect, state: &PreviewSnapshot, catalog: &Catalog, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Results
        ])
        .split(area);

    let search = &state.search;
    let (search_text, search_style) = if search.query.is_empty() {
        ("Songs, artists, videos".to_string(), Style::default().fg(palette.muted))
    } else if state.editing_search {
        (format!("{}▏", search.query), Style::default().fg(palette.foreground))
    } else {
        (search.query.clone(), Style::default().fg(palette.foreground))
    };

    let border_color = if state.editing_search { palette.accent } else { palette.border };
    let input = Paragraph::new(format!("🔍 {}", search_text))
        .style(search_style.bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(input, chunks[0]);

    if search.is_searching {
        let searching = Paragraph::new("Searching...")
            .style(palette.base().fg(palette.accent))
            .block(section_block(" Results ", palette));
        frame.render_widget(searching, chunks[1]);
        return;
    }

    let (title, tracks) = if search.shows_trending() {
        (" Trending Now ", catalog.trending)
    } else {
        (" Results ", search.results.as_slice())
    };

    if tracks.is_empty() {
        let empty = Paragraph::new(format!("No results for \"{}\"", search.query))
            .style(palette.base().fg(palette.muted))
            .block(section_block(title, palette));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let views = track.views.map(|v| format!("{} views ", v)).unwrap_or_default();
            let trailing = format!("{}{}", views, download_label(state.downloads.status(track.id)));
            let is_active = state.playback.active_track == Some(track.id);
            track_item(track, trailing, area.width, i == state.selected, is_active, palette)
        })
        .collect();

    render_scrollable_list(frame, chunks[1], items, Some(state.selected), section_block(title, palette));
}

fn render_library(frame: &mut Frame, area: Rect, state: &PreviewSnapshot, catalog: &Catalog, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Summary
            Constraint::Min(0),    // Songs
        ])
        .split(area);

    let downloaded = state
        .downloads
        .iter()
        .filter(|(_, progress)| *progress >= crate::model::PROGRESS_MAX)
        .count();
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} songs", catalog.recent.len()), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  ·  {} downloaded", downloaded), Style::default().fg(palette.muted)),
    ]))
    .style(palette.base());
    frame.render_widget(summary, chunks[0]);

    let items: Vec<ListItem> = catalog
        .recent
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_active = state.playback.active_track == Some(track.id);
            track_item(track, playing_marker(state, track), area.width, i == state.selected, is_active, palette)
        })
        .collect();

    render_scrollable_list(frame, chunks[1], items, Some(state.selected), section_block(" Your Library ", palette));
}

fn render_playlists(frame: &mut Frame, area: Rect, state: &PreviewSnapshot, catalog: &Catalog, palette: &Palette) {
    let items: Vec<ListItem> = catalog
        .playlists
        .iter()
        .enumerate()
        .map(|(i, playlist)| {
            let is_highlighted = state.highlighted_playlist == Some(i);
            let name_style = if is_highlighted {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.foreground)
            };
            let row_style = if is_highlighted || i == state.selected {
                Style::default().bg(palette.selection)
            } else {
                Style::default()
            };

            ListItem::new(vec![
                Line::from(vec![Span::raw(" ♫ "), Span::styled(playlist.name, name_style)]),
                Line::styled(
                    format!("   {} songs", playlist.song_count),
                    Style::default().fg(palette.muted),
                ),
            ])
            .style(row_style)
        })
        .collect();

    render_scrollable_list(frame, area, items, Some(state.selected), section_block(" Playlists ", palette));
}
