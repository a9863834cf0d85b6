//! Cash drawer: extractions and statistics.
//!
//! Both read the movements of the selected window; `W` cycles it.

use pos_types::money::format_currency;
use pos_types::time::datetime_label;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row},
    Frame,
};

use crate::domain::App;

use super::data_table;

pub fn render_extractions(frame: &mut Frame, area: Rect, app: &App) {
    let extractions = app.extractions();
    let total: i64 = extractions.iter().map(|m| m.amount.saturating_abs()).sum();

    let rows: Vec<Row> = extractions
        .iter()
        .map(|movement| {
            Row::new(vec![
                datetime_label(&movement.date),
                movement.description.clone(),
                format_currency(movement.amount.saturating_abs()),
            ])
            .style(Style::default().fg(Color::Red))
        })
        .collect();

    let table = data_table(
        format!(
            " Extracciones {} ({}, {}) ",
            app.window.label(),
            extractions.len(),
            format_currency(total)
        ),
        ["Fecha", "Detalle", "Monto"],
        rows,
        [
            Constraint::Length(17),
            Constraint::Min(24),
            Constraint::Length(11),
        ],
    );
    frame.render_widget(table, area);
}

pub fn render_statistics(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(area);

    render_overview(frame, chunks[0], app);
    render_by_type(frame, chunks[1], app);
}

fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary();
    let net = summary.net();
    let net_color = if net < 0 { Color::Red } else { Color::Green };
    let balance = app
        .data
        .balance
        .map(format_currency)
        .unwrap_or_else(|| "-".to_string());

    let text = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("  Ingresos     "),
            Span::styled(
                format!("{:<14}", format_currency(summary.income)),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  Egresos      "),
            Span::styled(
                format_currency(summary.expenses),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Neto         "),
            Span::styled(
                format!("{:<14}", format_currency(net)),
                Style::default().fg(net_color),
            ),
            Span::raw("  Movimientos  "),
            Span::raw(summary.movement_count.to_string()),
        ]),
        Line::from(vec![
            Span::raw("  Caja actual  "),
            Span::styled(balance, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(format!(" Estadísticas {} ", app.window.label()))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

fn render_by_type(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary();
    let rows: Vec<Row> = summary
        .by_type
        .iter()
        .map(|(kind, amount)| {
            let color = if *amount < 0 { Color::Red } else { Color::Green };
            Row::new(vec![kind.label().to_string(), format_currency(*amount)])
                .style(Style::default().fg(color))
        })
        .collect();

    let table = data_table(
        " Por tipo ".to_string(),
        ["Tipo", "Neto"],
        rows,
        [Constraint::Min(16), Constraint::Length(14)],
    );
    frame.render_widget(table, area);
}
