//! One-shot commands.
//!
//! Each handler checks the guard for its section, talks to the backend and
//! prints the outcome. Money-moving and destructive actions ask first unless
//! `--yes` was given.

mod auth;
mod cash;
mod catalog;
mod output;
mod prompt;
mod purchases;
mod sales;
mod users;

use anyhow::bail;
use pos_client::ApiClient;

use crate::cli::Command;
use crate::config::AdminConfig;

pub use output::Table;
pub use prompt::{confirm, read_secret};

/// What every command needs.
pub struct Context {
    pub api: ApiClient,
    pub config: AdminConfig,
    pub assume_yes: bool,
}

impl Context {
    pub fn confirm(&self, question: &str) -> anyhow::Result<bool> {
        confirm(question, self.assume_yes)
    }
}

/// Run a non-interactive command.
pub async fn run(ctx: &Context, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => auth::login(ctx, &username, password).await,
        Command::Logout => auth::logout(ctx),
        Command::Whoami => auth::whoami(ctx),
        Command::ChangePassword { old, new, confirm } => {
            auth::change_password(ctx, old, new, confirm).await
        }
        Command::Articles { command } => catalog::articles(ctx, command).await,
        Command::Categories { command } => catalog::categories(ctx, command).await,
        Command::Providers { command } => catalog::providers(ctx, command).await,
        Command::Sales { command } => sales::run(ctx, command).await,
        Command::Purchases { command } => purchases::run(ctx, command).await,
        Command::Cash { command } => cash::run(ctx, command).await,
        Command::Stats { window } => cash::stats(ctx, window).await,
        Command::Users { command } => users::run(ctx, command).await,
        Command::Dashboard => bail!("the dashboard needs an interactive terminal"),
    }
}

/// Print `message`, or `fallback` when the backend sent none.
fn print_message(message: &str, fallback: &str) {
    if message.trim().is_empty() {
        println!("{fallback}");
    } else {
        println!("{message}");
    }
}
