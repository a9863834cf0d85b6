//! Sale ticket.
//!
//! The receipt handed to the customer is an 80 mm wide PDF
//! (`Ticket_<unix millis>.pdf`). The same fields render as fixed-width text
//! for the terminal preview:
//!
//! ```text
//!       Santeria - Oro Verde
//! Fecha: 05/03/2024 07:04
//! Cliente: Consumidor Final
//! Pago: EFECTIVO
//! --------------------------------
//! Prod              Cant      Subt
//! Vela roja            2    $1.000
//! --------------------------------
//!                    TOTAL: $1.000
//!
//!  ¡Gracias por su colaboración!
//! ```

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};
use pos_types::money::format_currency;
use pos_types::time::display_datetime;
use pos_types::{Amount, PaymentMethod, SaleData, SaleItem};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name printed for sales without a client.
pub const FINAL_CONSUMER: &str = "Consumidor Final";

const UNITS_COL: usize = 5;
const SUBTOTAL_COL: usize = 10;

const PAGE_WIDTH_MM: f32 = 80.0;
const MIN_PAGE_HEIGHT_MM: f32 = 150.0;
const MARGIN_MM: f32 = 5.0;
const ROW_MM: f32 = 4.0;
const PDF_PRODUCT_CHARS: usize = 26;
const PT_TO_MM: f32 = 0.3528;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Cannot render ticket PDF: {0}")]
    Pdf(String),
}

/// Shop-specific ticket settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    pub shop_name: String,
    pub footer: String,
    /// Characters per line.
    pub width: usize,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            shop_name: "Santeria - Oro Verde".to_string(),
            footer: "¡Gracias por su colaboración!".to_string(),
            width: 32,
        }
    }
}

/// Printable receipt of a registered sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Wall clock of the till, with its UTC offset.
    pub issued_at: DateTime<FixedOffset>,
    pub client_name: String,
    pub payment_method: PaymentMethod,
    pub items: Vec<SaleItem>,
    pub total: Amount,
}

impl Ticket {
    pub fn for_sale(sale: &SaleData, issued_at: DateTime<FixedOffset>) -> Self {
        Self {
            issued_at,
            client_name: sale
                .client_name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| FINAL_CONSUMER.to_string()),
            payment_method: sale.payment_method,
            items: sale.items.clone(),
            total: sale.total(),
        }
    }

    /// `Ticket_<unix millis>.pdf`.
    pub fn file_name(&self) -> String {
        format!("Ticket_{}.pdf", self.issued_at.timestamp_millis())
    }

    pub fn render(&self, config: &TicketConfig) -> String {
        let width = config.width.max(UNITS_COL + SUBTOTAL_COL + 8);
        let product_col = width - UNITS_COL - SUBTOTAL_COL;
        let (units_col, subtotal_col) = (UNITS_COL, SUBTOTAL_COL);
        let rule = "-".repeat(width);
        let mut out = String::new();

        let _ = writeln!(out, "{}", center(&config.shop_name, width));
        let _ = writeln!(out, "Fecha: {}", display_datetime(&self.issued_at.naive_local()));
        let _ = writeln!(out, "Cliente: {}", self.client_name);
        let _ = writeln!(out, "Pago: {}", self.payment_method);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "{}{:>units_col$}{:>subtotal_col$}",
            pad_right("Prod", product_col),
            "Cant",
            "Subt"
        );
        for item in &self.items {
            let subtotal = item.subtotal().unwrap_or(Amount::MAX);
            let _ = writeln!(
                out,
                "{}{:>units_col$}{:>subtotal_col$}",
                pad_right(&truncate(&item.title, product_col - 1), product_col),
                item.units,
                format_currency(subtotal)
            );
        }
        let _ = writeln!(out, "{rule}");
        let total = format!("TOTAL: {}", format_currency(self.total));
        let _ = writeln!(out, "{total:>width$}");
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", center(&config.footer, width));
        out
    }

    /// Single-page PDF, 80 mm wide. The page grows past 150 mm when the
    /// item list needs it.
    pub fn render_pdf(&self, config: &TicketConfig) -> Result<Vec<u8>, TicketError> {
        let table_top = 32.0;
        let table_end = table_top + ROW_MM * (self.items.len() as f32 + 1.0);
        let height = (table_end + 30.0).max(MIN_PAGE_HEIGHT_MM);

        let (doc, page, layer) =
            PdfDocument::new("Ticket", Mm(PAGE_WIDTH_MM), Mm(height), "ticket");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| TicketError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| TicketError::Pdf(e.to_string()))?;
        let page = Page {
            layer: doc.get_page(page).get_layer(layer),
            height,
        };

        let center_x = PAGE_WIDTH_MM / 2.0;
        let right_x = PAGE_WIDTH_MM - MARGIN_MM;
        let units_x = 52.0;

        page.centered(&config.shop_name, 12.0, center_x, 10.0, &bold);
        let date = format!("Fecha: {}", display_datetime(&self.issued_at.naive_local()));
        page.text(&date, 8.0, MARGIN_MM, 18.0, &regular);
        page.text(&format!("Cliente: {}", self.client_name), 8.0, MARGIN_MM, 22.0, &regular);
        page.text(&format!("Pago: {}", self.payment_method), 8.0, MARGIN_MM, 26.0, &regular);

        page.text("Prod", 8.0, MARGIN_MM, table_top, &bold);
        page.right("Cant", 8.0, units_x, table_top, &bold);
        page.right("Subt", 8.0, right_x, table_top, &bold);
        for (row, item) in self.items.iter().enumerate() {
            let y = table_top + ROW_MM * (row as f32 + 1.0);
            let subtotal = item.subtotal().unwrap_or(Amount::MAX);
            page.text(&truncate(&item.title, PDF_PRODUCT_CHARS), 8.0, MARGIN_MM, y, &regular);
            page.right(&item.units.to_string(), 8.0, units_x, y, &regular);
            page.right(&format_currency(subtotal), 8.0, right_x, y, &regular);
        }

        let total = format!("TOTAL: {}", format_currency(self.total));
        page.right(&total, 10.0, right_x, table_end + 6.0, &bold);
        page.centered(&config.footer, 8.0, center_x, table_end + 16.0, &regular);

        doc.save_to_bytes()
            .map_err(|e| TicketError::Pdf(e.to_string()))
    }
}

/// Text placement in millimetres from the top-left corner; PDF space grows
/// up from the bottom edge.
struct Page {
    layer: PdfLayerReference,
    height: f32,
}

impl Page {
    fn text(&self, text: &str, size: f32, x: f32, top: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.height - top), font);
    }

    fn right(&self, text: &str, size: f32, x: f32, top: f32, font: &IndirectFontRef) {
        self.text(text, size, x - text_width(text, size), top, font);
    }

    fn centered(&self, text: &str, size: f32, x: f32, top: f32, font: &IndirectFontRef) {
        self.text(text, size, x - text_width(text, size) / 2.0, top, font);
    }
}

/// Builtin fonts carry no metrics here; half an em per glyph is close
/// enough for Helvetica digits and lowercase.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    format!("{}{text}", " ".repeat(left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// 05/03/2024 07:04:59 at the till, three hours behind UTC.
    fn issued() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 7, 4, 59)
            .unwrap()
    }

    fn sale(client: Option<&str>) -> SaleData {
        SaleData {
            client_name: client.map(str::to_string),
            payment_method: PaymentMethod::Cash,
            items: vec![
                SaleItem {
                    article_id: 1,
                    title: "Vela roja".into(),
                    units: 2,
                    unit_price: 500,
                },
                SaleItem {
                    article_id: 2,
                    title: "Imagen de San Cayetano grande".into(),
                    units: 1,
                    unit_price: 12_000,
                },
            ],
        }
    }

    #[test]
    fn test_ticket_defaults_to_final_consumer() {
        let ticket = Ticket::for_sale(&sale(None), issued());
        assert_eq!(ticket.client_name, FINAL_CONSUMER);
        assert_eq!(ticket.total, 13_000);
    }

    #[test]
    fn test_render_layout() {
        let ticket = Ticket::for_sale(&sale(Some("Rosa")), issued());
        let text = ticket.render(&TicketConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "Santeria - Oro Verde");
        assert_eq!(lines[1], "Fecha: 05/03/2024 07:04");
        assert_eq!(lines[2], "Cliente: Rosa");
        assert_eq!(lines[3], "Pago: EFECTIVO");
        assert_eq!(lines[5], "Prod              Cant      Subt");
        assert_eq!(lines[6], "Vela roja            2    $1.000");
        assert!(lines[7].starts_with("Imagen de San C"));
        assert!(lines[7].ends_with("$12.000"));
        assert_eq!(lines[9], "                  TOTAL: $13.000");
        assert_eq!(lines.last().map(|l| l.trim()), Some("¡Gracias por su colaboración!"));
        assert!(lines.iter().all(|l| l.chars().count() <= 32));
    }

    #[test]
    fn test_file_name_uses_unix_millis_of_local_time() {
        let ticket = Ticket::for_sale(&sale(None), issued());
        // 07:04:59 at UTC-3 is 10:04:59Z.
        assert_eq!(ticket.file_name(), "Ticket_1709633099000.pdf");

        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 10, 4, 59).unwrap();
        let east = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let same = Ticket::for_sale(&sale(None), instant.with_timezone(&east));
        assert_eq!(same.file_name(), ticket.file_name());
    }

    #[test]
    fn test_render_pdf() {
        let ticket = Ticket::for_sale(&sale(Some("Rosa")), issued());
        let pdf = ticket.render_pdf(&TicketConfig::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(pdf.len() > 500);
    }

    #[test]
    fn test_render_pdf_with_long_item_list() {
        let mut data = sale(None);
        data.items = (0..60)
            .map(|id| SaleItem {
                article_id: id,
                title: format!("Articulo {id}"),
                units: 1,
                unit_price: 100,
            })
            .collect();
        let ticket = Ticket::for_sale(&data, issued());
        let pdf = ticket.render_pdf(&TicketConfig::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
