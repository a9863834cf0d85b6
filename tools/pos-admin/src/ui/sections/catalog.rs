//! Categories and providers.

use pos_types::time::date_label;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::Row,
    Frame,
};

use crate::domain::App;

use super::data_table;

pub fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .data
        .categories
        .iter()
        .map(|category| {
            let articles = app
                .data
                .articles
                .iter()
                .filter(|a| a.category_id == category.id)
                .count();
            Row::new(vec![
                category.id.to_string(),
                category.name.clone(),
                articles.to_string(),
            ])
        })
        .collect();

    let table = data_table(
        format!(" Categorías ({}) ", app.data.categories.len()),
        ["ID", "Nombre", "Artículos"],
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(10),
        ],
    );
    frame.render_widget(table, area);
}

pub fn render_providers(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .data
        .providers
        .iter()
        .map(|provider| {
            Row::new(vec![
                provider.id.to_string(),
                provider.name.clone(),
                provider.contact_info.clone().unwrap_or_default(),
                date_label(&provider.created_at),
            ])
        })
        .collect();

    let table = data_table(
        format!(" Proveedores ({}) ", app.data.providers.len()),
        ["ID", "Nombre", "Contacto", "Alta"],
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(18),
            Constraint::Min(18),
            Constraint::Length(11),
        ],
    );
    frame.render_widget(table, area);
}
