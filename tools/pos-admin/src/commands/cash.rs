use chrono::Local;
use pos_reports::{extractions, CashSummary, Window};
use pos_types::money::format_currency;
use pos_types::time::datetime_label;
use pos_types::{CashMovement, ExtractionDraft};

use super::{print_message, Context, Table};
use crate::cli::CashCommand;

pub async fn run(ctx: &Context, command: CashCommand) -> anyhow::Result<()> {
    ctx.api.require_admin("cash")?;
    let cash = ctx.api.cash();

    match command {
        CashCommand::Balance => {
            let balance = cash.balance().await?;
            println!("Saldo en caja: {}", format_currency(balance));
        }
        CashCommand::Movements {
            window,
            extractions: only_extractions,
        } => {
            let today = Local::now().date_naive();
            let movements = cash.movements(window.from_date(today)).await?;
            let shown: Vec<&CashMovement> = if only_extractions {
                extractions(&movements)
            } else {
                movements.iter().collect()
            };
            let mut table = Table::new(&["Fecha", "Tipo", "Monto", "Descripción"]);
            for movement in shown {
                table.push(vec![
                    datetime_label(&movement.date),
                    movement.kind.label().to_string(),
                    format_currency(movement.amount),
                    movement.description.clone(),
                ]);
            }
            table.print();
        }
        CashCommand::Extract {
            amount,
            person,
            reason,
            payment,
        } => {
            let draft = ExtractionDraft {
                amount,
                reason,
                person,
                payment_method: payment,
            };
            let data = draft.validate()?;
            if !ctx.confirm(&format!(
                "Extract {} for {}?",
                format_currency(data.amount),
                data.person
            ))? {
                println!("Cancelled");
                return Ok(());
            }
            let response = cash.extract(&draft).await?;
            print_message(&response.message, "Extraction registered");
        }
    }
    Ok(())
}

pub async fn stats(ctx: &Context, window: Window) -> anyhow::Result<()> {
    ctx.api.require_admin("statistics")?;
    let cash = ctx.api.cash();
    let today = Local::now().date_naive();

    let (movements, balance) =
        tokio::try_join!(cash.movements(window.from_date(today)), cash.balance())?;
    print!("{}", render_stats(window, &CashSummary::from_movements(&movements), balance));
    Ok(())
}

fn render_stats(window: Window, summary: &CashSummary, balance: i64) -> String {
    let mut out = format!("Estadísticas {}\n", window.label());
    out.push_str(&format!("  Ingresos:    {}\n", format_currency(summary.income)));
    out.push_str(&format!("  Egresos:     {}\n", format_currency(summary.expenses)));
    out.push_str(&format!("  Neto:        {}\n", format_currency(summary.net())));
    out.push_str(&format!("  Movimientos: {}\n", summary.movement_count));
    for (kind, amount) in &summary.by_type {
        out.push_str(&format!("    {:<14} {}\n", kind.label(), format_currency(*amount)));
    }
    out.push_str(&format!("Saldo actual en caja: {}\n", format_currency(balance)));
    out
}
