//! Inventory table.

use pos_types::money::format_currency;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::Row,
    Frame,
};

use crate::domain::App;

use super::data_table;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .data
        .articles
        .iter()
        .map(|article| {
            let category = article
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string());
            let style = if article.in_stock() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                article.id.to_string(),
                article.title.clone(),
                category,
                article.stock.to_string(),
                format_currency(article.unit_price),
                format!("{}%", article.profit_margin),
                format_currency(article.final_price),
            ])
            .style(style)
        })
        .collect();

    let out_of_stock = app.data.articles.iter().filter(|a| !a.in_stock()).count();
    let title = format!(
        " Inventario ({}, {} sin stock) ",
        app.data.articles.len(),
        out_of_stock
    );

    let table = data_table(
        title,
        ["ID", "Título", "Categoría", "Stock", "Costo", "Margen", "Precio"],
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(18),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(10),
        ],
    );
    frame.render_widget(table, area);
}
