//! Sale and purchase history.

use pos_types::money::format_currency;
use pos_types::time::datetime_label;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::Row,
    Frame,
};

use crate::domain::App;

use super::data_table;

pub fn render_sales(frame: &mut Frame, area: Rect, app: &App) {
    let sales = app.visible_sales();
    let total: i64 = sales.iter().map(|s| s.total).sum();

    let rows: Vec<Row> = sales
        .iter()
        .map(|sale| {
            Row::new(vec![
                sale.id.to_string(),
                datetime_label(&sale.date),
                sale.client_name.clone().unwrap_or_else(|| "-".to_string()),
                sale.seller_name.clone(),
                sale.payment_method.label().to_string(),
                format_currency(sale.total),
            ])
        })
        .collect();

    let table = data_table(
        format!(" Historial ({}, {}) ", sales.len(), format_currency(total)),
        ["ID", "Fecha", "Cliente", "Vendedor", "Pago", "Total"],
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(17),
            Constraint::Min(14),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(11),
        ],
    );
    frame.render_widget(table, area);
}

pub fn render_purchases(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .data
        .purchases
        .iter()
        .map(|purchase| {
            let units: u32 = purchase.details.iter().map(|d| d.units).sum();
            Row::new(vec![
                purchase.id.to_string(),
                datetime_label(&purchase.date),
                purchase.provider_name.clone(),
                units.to_string(),
                format_currency(purchase.total),
            ])
        })
        .collect();

    let table = data_table(
        format!(" Compras ({}) ", app.data.purchases.len()),
        ["ID", "Fecha", "Proveedor", "Unidades", "Total"],
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(17),
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Length(11),
        ],
    );
    frame.render_widget(table, area);
}
