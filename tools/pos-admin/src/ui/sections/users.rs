//! Seller accounts.

use pos_types::time::date_label;
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
        .sellers
        .iter()
        .map(|user| {
            let (status, color) = if user.active {
                ("Activo", Color::Green)
            } else {
                ("Bloqueado", Color::Red)
            };
            Row::new(vec![
                user.id.to_string(),
                user.username.clone(),
                user.email.clone(),
                date_label(&user.created_at),
                status.to_string(),
            ])
            .style(Style::default().fg(color))
        })
        .collect();

    let table = data_table(
        format!(" Vendedores ({}) ", app.data.sellers.len()),
        ["ID", "Usuario", "Email", "Alta", "Estado"],
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(11),
            Constraint::Length(10),
        ],
    );
    frame.render_widget(table, area);
}
