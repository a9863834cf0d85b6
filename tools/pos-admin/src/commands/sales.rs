use std::path::Path;

use anyhow::{bail, Context as _};
use chrono::Local;
use pos_cart::SaleCart;
use pos_client::View;
use pos_reports::ticket::FINAL_CONSUMER;
use pos_reports::{search_sales, Ticket};
use pos_types::money::format_currency;
use pos_types::time::datetime_label;
use pos_types::{Article, SaleData, SaleResponse};

use super::{print_message, Context, Table};
use crate::cli::{SaleCommand, SaleLine};

pub async fn run(ctx: &Context, command: SaleCommand) -> anyhow::Result<()> {
    let session = ctx.api.require_view(View::Sales)?;

    match command {
        SaleCommand::List { search } => {
            let sales = ctx.api.sales().list().await?;
            let found = search_sales(&sales, &session.user, search.as_deref().unwrap_or(""));
            let mut table = Table::new(&["ID", "Fecha", "Cliente", "Vendedor", "Pago", "Total"]);
            for sale in found {
                table.push(sale_row(sale));
            }
            table.print();
        }
        SaleCommand::Show { id } => {
            let sale = ctx.api.sales().get(id).await?;
            if !session.is_admin() && sale.user_id != session.user.id {
                bail!("sale {id} belongs to another seller");
            }
            print_sale(&sale);
        }
        SaleCommand::New {
            items,
            client,
            payment,
            clamp,
            ticket_dir,
        } => {
            let articles = ctx.api.articles().list().await?;
            let cart = build_cart(&articles, &items, clamp)?;
            let sale = cart.checkout(&client, payment)?;

            print_summary(&sale);
            if !ctx.confirm(&format!("Register sale for {}?", format_currency(sale.total())))? {
                println!("Cancelled");
                return Ok(());
            }

            let response = ctx.api.sales().create(&sale).await?;
            print_message(&response.message, "Sale registered");

            let ticket = Ticket::for_sale(&sale, Local::now().fixed_offset());
            println!();
            print!("{}", ticket.render(&ctx.config.ticket));
            if let Some(dir) = ticket_dir {
                let pdf = ticket.render_pdf(&ctx.config.ticket)?;
                let path = save_ticket(&dir, &ticket, &pdf)?;
                println!("Ticket saved to {}", path.display());
            }
        }
    }
    Ok(())
}

/// Fill a cart from `--item` flags. With `clamp`, lines are cut down to the
/// stock left instead of failing.
fn build_cart(articles: &[Article], items: &[SaleLine], clamp: bool) -> anyhow::Result<SaleCart> {
    let mut cart = SaleCart::new();
    for item in items {
        let article = articles
            .iter()
            .find(|a| a.id == item.article_id)
            .with_context(|| format!("article {} not found", item.article_id))?;
        if clamp {
            let taken = cart.add_clamped(article, item.units)?;
            if taken < item.units {
                println!(
                    "Only {taken} of {} units of '{}' added, stock is {}",
                    item.units, article.title, article.stock
                );
            }
        } else {
            cart.add(article, item.units)
                .with_context(|| format!("adding '{}'", article.title))?;
        }
    }
    Ok(cart)
}

fn print_summary(sale: &SaleData) {
    let mut table = Table::new(&["Artículo", "Cant", "Precio", "Subtotal"]);
    for item in &sale.items {
        table.push(vec![
            item.title.clone(),
            item.units.to_string(),
            format_currency(item.unit_price),
            item.subtotal().map(format_currency).unwrap_or_default(),
        ]);
    }
    table.print();
    println!(
        "Cliente: {}",
        sale.client_name.as_deref().unwrap_or(FINAL_CONSUMER)
    );
    println!("Pago: {}", sale.payment_method.label());
    println!("Total: {}", format_currency(sale.total()));
}

fn sale_row(sale: &SaleResponse) -> Vec<String> {
    vec![
        sale.id.to_string(),
        datetime_label(&sale.date),
        sale.client_name
            .clone()
            .unwrap_or_else(|| FINAL_CONSUMER.to_string()),
        sale.seller_name.clone(),
        sale.payment_method.label().to_string(),
        format_currency(sale.total),
    ]
}

fn print_sale(sale: &SaleResponse) {
    println!("Venta #{}  {}", sale.id, datetime_label(&sale.date));
    println!(
        "Cliente: {}",
        sale.client_name.as_deref().unwrap_or(FINAL_CONSUMER)
    );
    println!("Vendedor: {}", sale.seller_name);
    println!("Pago: {}", sale.payment_method.label());
    let mut table = Table::new(&["Artículo", "Cant", "Precio", "Subtotal"]);
    for detail in &sale.details {
        table.push(vec![
            detail.article_title.clone(),
            detail.units.to_string(),
            format_currency(detail.unit_price),
            format_currency(detail.subtotal),
        ]);
    }
    table.print();
    println!("Total: {}", format_currency(sale.total));
}

fn save_ticket(dir: &Path, ticket: &Ticket, pdf: &[u8]) -> anyhow::Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating ticket directory {}", dir.display()))?;
    let path = dir.join(ticket.file_name());
    std::fs::write(&path, pdf).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
