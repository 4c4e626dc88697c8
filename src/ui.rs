//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the player screen using `ratatui`.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::AudioBackend;
use crate::config::UiSettings;
use crate::player::PlayerState;

const CONTROLS: &[(&str, &str)] = &[
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("j/k", "up/down"),
    ("enter", "play selected"),
    ("t", "sleep timer"),
    ("s", "stop"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
pub(crate) fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub(crate) fn sleep_text(minutes: u32) -> String {
    if minutes == 0 {
        "Sleep: off".to_string()
    } else {
        format!("Sleep: {} min", minutes)
    }
}

/// `elapsed / total`, or just the elapsed time while the length is unknown.
pub(crate) fn progress_label(state: &PlayerState) -> String {
    if state.duration_millis <= 1 {
        format_mmss(state.position())
    } else {
        format!(
            "{} / {}",
            format_mmss(state.position()),
            format_mmss(state.duration())
        )
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

fn draw_splash(frame: &mut Frame, ui: &UiSettings) {
    let area = centered_rect_sized(40, 7, frame.area());
    frame.render_widget(Clear, area);
    let text = format!("lull\n\n{}", ui.header_text.trim());
    let splash = Paragraph::new(text)
        .alignment(Alignment::Center)
        .bold()
        .block(Block::bordered())
        .wrap(Wrap { trim: true });
    frame.render_widget(splash, area);
}

/// Render the entire screen into `frame`.
pub fn draw<B: AudioBackend>(frame: &mut Frame, app: &App<B>, ui: &UiSettings) {
    if app.showing_splash() {
        draw_splash(frame, ui);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" lull ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let state = app.state();

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();
        match app.now_playing() {
            Some(track) => {
                let label = if state.is_playing { "Playing" } else { "Paused" };
                parts.push(format!("{}: {}", label, track.name));
            }
            None => parts.push("Stopped".to_string()),
        }
        parts.push(sleep_text(state.sleep_timer_minutes_remaining));
        if let Some(notice) = &state.notice {
            parts.push(format!("! {}", notice));
        }
        parts.join(" • ")
    };
    let status_par = Paragraph::new(status)
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::bordered().title(" progress "))
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio(state.progress())
        .label(progress_label(state));
    frame.render_widget(gauge, chunks[2]);

    // Track list
    {
        let playing = app.now_playing().map(|_| state.current_track_index);
        let items: Vec<ListItem> = app
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if Some(i) == playing {
                    ListItem::new(format!("♪ {}", t.name)).bold()
                } else {
                    ListItem::new(format!("  {}", t.name))
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" sounds "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ratatui::widgets::ListState::default();
        if app.has_tracks() {
            list_state.select(Some(app.cursor));
        }
        frame.render_stateful_widget(list, chunks[3], &mut list_state);
    }

    let footer = Paragraph::new(controls_text())
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
