//! Section renderers, one per dashboard view.

mod articles;
mod catalog;
mod cash;
mod history;
mod users;

use pos_client::View;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use crate::domain::App;

/// Render the selected section into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.selected {
        View::Articles => articles::render(frame, area, app),
        View::Categories => catalog::render_categories(frame, area, app),
        View::Providers => catalog::render_providers(frame, area, app),
        View::Sales => history::render_sales(frame, area, app),
        View::Purchases => history::render_purchases(frame, area, app),
        View::Extractions => cash::render_extractions(frame, area, app),
        View::Statistics => cash::render_statistics(frame, area, app),
        View::Users => users::render(frame, area, app),
    }
}

/// Bordered table with a bold header, or a single grey row when empty.
fn data_table<'a, const N: usize>(
    title: String,
    header: [&'a str; N],
    rows: Vec<Row<'a>>,
    widths: [Constraint; N],
) -> Table<'a> {
    let header = Row::new(header.to_vec())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = if rows.is_empty() {
        vec![Row::new(vec!["(Sin datos)"]).style(Style::default().fg(Color::DarkGray))]
    } else {
        rows
    };

    Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
}
