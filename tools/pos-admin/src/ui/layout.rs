//! Main layout orchestration.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  POS-ADMIN  admin (admin)  Last refresh: 10:42:07  [R] [Q] [?]   │
//! ├────────────────────────┬─────────────────────────────────────────┤
//! │  SECCIONES             │  SECTION TABLE                          │
//! │  [1] Artículos         │  ...                                    │
//! │  ...                   │                                         │
//! ├────────────────────────┤                                         │
//! │  SESIÓN                │                                         │
//! └────────────────────────┴─────────────────────────────────────────┘
//! │  [1-8] Section  [↑↓] Navigate  [W] Window  [R] Refresh           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

use super::{left_panel, right_panel, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main vertical layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_body(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2]);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(
            " POS-ADMIN ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ({}) ", app.session.user.username, app.session.role()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let status = if let Some(err) = &app.error_message {
        Span::styled(format!(" ⚠ {} ", err), Style::default().fg(Color::Red))
    } else if let Some(time) = app.last_refresh {
        Span::styled(
            format!(" Last refresh: {} ", time.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(" Loading... ", Style::default().fg(Color::DarkGray))
    };

    let hints = vec![
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw("efresh "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
    ];

    let title_len: usize = title.iter().map(|s| s.content.chars().count()).sum();
    let status_len = status.content.chars().count();
    let hints_len: usize = hints.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(title_len + status_len + hints_len + 2);

    let mut spans = title;
    spans.push(status);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(area);

    left_panel::render(frame, body_chunks[0], app);
    right_panel::render(frame, body_chunks[1], app);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[1-8]", Style::default().fg(Color::Yellow)),
        Span::raw(" Section  "),
        Span::styled("[↑↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("[W]", Style::default().fg(Color::Yellow)),
        Span::raw(" Window  "),
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw(" Refresh  "),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
