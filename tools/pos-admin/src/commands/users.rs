use pos_client::View;
use pos_types::time::date_label;
use pos_types::SellerDraft;

use super::{print_message, Context, Table};
use crate::cli::UserCommand;

pub async fn run(ctx: &Context, command: UserCommand) -> anyhow::Result<()> {
    ctx.api.require_view(View::Users)?;
    let users = ctx.api.users();

    match command {
        UserCommand::List => {
            let mut table = Table::new(&["ID", "Usuario", "Email", "Estado", "Alta"]);
            for seller in users.list_sellers().await? {
                table.push(vec![
                    seller.id.to_string(),
                    seller.username,
                    seller.email,
                    if seller.active { "Activo" } else { "Bloqueado" }.to_string(),
                    date_label(&seller.created_at),
                ]);
            }
            table.print();
        }
        UserCommand::Register {
            username,
            email,
            password,
        } => {
            let draft = SellerDraft {
                username,
                email,
                password: password.unwrap_or_default(),
            };
            let generated = draft.password.is_empty();
            let response = users.register_seller(&draft).await?;
            print_message(&response.message, "Seller registered");
            if generated {
                println!("The backend assigned its default password; ask the seller to change it");
            }
        }
        UserCommand::ToggleBlock { id } => {
            if !ctx.confirm(&format!("Block or unblock seller {id}?"))? {
                println!("Cancelled");
                return Ok(());
            }
            let response = users.toggle_block(id).await?;
            print_message(&response.message, "Seller status changed");
        }
        UserCommand::ResetPassword { id } => {
            if !ctx.confirm(&format!("Reset the password of seller {id}?"))? {
                println!("Cancelled");
                return Ok(());
            }
            let response = users.reset_password(id).await?;
            print_message(&response.message, "Password reset");
        }
    }
    Ok(())
}
