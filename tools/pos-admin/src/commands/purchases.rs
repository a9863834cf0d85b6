use anyhow::Context as _;
use pos_cart::PurchaseCart;
use pos_reports::search_purchases;
use pos_types::money::format_currency;
use pos_types::time::date_label;
use pos_types::{Article, PurchaseData};

use super::{print_message, Context, Table};
use crate::cli::{PurchaseCommand, PurchaseLine};

pub async fn run(ctx: &Context, command: PurchaseCommand) -> anyhow::Result<()> {
    ctx.api.require_admin("purchases")?;

    match command {
        PurchaseCommand::List { search } => {
            let purchases = ctx.api.purchases().list().await?;
            let mut table = Table::new(&["ID", "Fecha", "Proveedor", "Total"]);
            for purchase in search_purchases(&purchases, search.as_deref().unwrap_or("")) {
                table.push(vec![
                    purchase.id.to_string(),
                    date_label(&purchase.date),
                    purchase.provider_name.clone(),
                    format_currency(purchase.total),
                ]);
            }
            table.print();
        }
        PurchaseCommand::New {
            provider,
            items,
            payment,
            date,
        } => {
            let articles = ctx.api.articles().list().await?;
            let cart = build_cart(&articles, &items)?;
            let purchase = cart.checkout(provider, payment, date)?;

            print_summary(&purchase, cart.total());
            if !ctx.confirm(&format!(
                "Register purchase for {}?",
                format_currency(cart.total())
            ))? {
                println!("Cancelled");
                return Ok(());
            }
            let response = ctx.api.purchases().create(&purchase).await?;
            print_message(&response.message, "Purchase registered");
        }
    }
    Ok(())
}

fn build_cart(articles: &[Article], items: &[PurchaseLine]) -> anyhow::Result<PurchaseCart> {
    let mut cart = PurchaseCart::new();
    for item in items {
        let article = articles
            .iter()
            .find(|a| a.id == item.article_id)
            .with_context(|| format!("article {} not found", item.article_id))?;
        cart.add(article, item.units, item.cost)?;
    }
    Ok(cart)
}

fn print_summary(purchase: &PurchaseData, total: i64) {
    let mut table = Table::new(&["Artículo", "Cant", "Costo", "Margen", "Precio venta", "Subtotal"]);
    for item in &purchase.items {
        table.push(vec![
            item.title.clone(),
            item.units.to_string(),
            format_currency(item.unit_price),
            format!("{}%", item.profit_margin),
            format_currency(item.final_price),
            item.subtotal().map(format_currency).unwrap_or_default(),
        ]);
    }
    table.print();
    if let Some(method) = purchase.payment_method {
        println!("Pago: {}", method.label());
    }
    println!("Total: {}", format_currency(total));
}
