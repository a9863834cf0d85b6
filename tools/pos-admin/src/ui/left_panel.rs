//! Left panel: section menu + session box.

use pos_types::money::format_currency;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::{hotkey, App};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(area);

    render_menu(frame, chunks[0], app);
    render_session(frame, chunks[1], app);
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .views()
        .iter()
        .map(|&view| {
            let line_style = if view == app.selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let spans = vec![
                Span::styled(format!("[{}] ", hotkey(view)), Style::default().fg(Color::Yellow)),
                Span::raw(view.title()),
            ];
            ListItem::new(Line::from(spans)).style(line_style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" SECCIONES ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

fn render_session(frame: &mut Frame, area: Rect, app: &App) {
    let user = &app.session.user;
    let role_color = if user.role.is_admin() {
        Color::Magenta
    } else {
        Color::Green
    };

    let mut text = vec![
        Line::from(vec![Span::raw("Usuario: "), Span::raw(user.username.clone())]),
        Line::from(vec![
            Span::raw("Rol: "),
            Span::styled(user.role.code(), Style::default().fg(role_color)),
        ]),
    ];
    if user.role.is_admin() {
        let balance = app
            .data
            .balance
            .map(format_currency)
            .unwrap_or_else(|| "-".to_string());
        text.push(Line::from(vec![
            Span::raw("Caja: "),
            Span::styled(balance, Style::default().fg(Color::Cyan)),
        ]));
        text.push(Line::from(vec![
            Span::raw("Periodo: "),
            Span::styled(app.window.to_string(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" SESIÓN ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
