//! Command line definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pos_reports::Window;
use pos_types::{Amount, ArticleId, PaymentMethod};

/// Santería POS admin panel
#[derive(Parser, Debug)]
#[command(name = "pos-admin")]
#[command(about = "Point of sale and inventory administration for the shop backend")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides the config file and SANTERIA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true, env = "POS_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where the login session is stored
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long, global = true, default_value_t = false)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        username: String,
        /// Read from stdin when omitted
        #[arg(short, long, env = "SANTERIA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user and the sections they may open
    Whoami,
    /// Change the own password (logs out on success)
    ChangePassword {
        #[arg(long)]
        old: Option<String>,
        #[arg(long)]
        new: Option<String>,
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Inventory articles
    Articles {
        #[command(subcommand)]
        command: ArticleCommand,
    },
    /// Article categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    /// Suppliers
    Providers {
        #[command(subcommand)]
        command: ProviderCommand,
    },
    /// Sales and sale history
    Sales {
        #[command(subcommand)]
        command: SaleCommand,
    },
    /// Purchases from providers
    Purchases {
        #[command(subcommand)]
        command: PurchaseCommand,
    },
    /// Cash drawer
    Cash {
        #[command(subcommand)]
        command: CashCommand,
    },
    /// Income and expense statistics
    Stats {
        /// total, year, month, week or today
        #[arg(short, long, default_value_t = Window::Total)]
        window: Window,
    },
    /// Seller accounts
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Interactive terminal dashboard
    Dashboard,
}

/// Fields shared by article create and update.
#[derive(Args, Debug, Default)]
pub struct ArticleFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    /// Unit cost paid to the provider
    #[arg(long)]
    pub cost: Option<Amount>,
    /// Profit margin in percent
    #[arg(long)]
    pub margin: Option<i64>,
    /// Selling price; derived from cost and margin when omitted
    #[arg(long)]
    pub price: Option<Amount>,
    #[arg(long)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub category: Option<i64>,
    #[arg(long)]
    pub provider: Option<i64>,
}

#[derive(Subcommand, Debug)]
pub enum ArticleCommand {
    List {
        /// Filter by title
        #[arg(short, long)]
        search: Option<String>,
    },
    Create(ArticleFields),
    Update {
        id: ArticleId,
        #[command(flatten)]
        fields: ArticleFields,
    },
    Delete {
        id: ArticleId,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProviderCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        contact: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum SaleCommand {
    List {
        /// Filter by client name or dd/mm/yyyy date
        #[arg(short, long)]
        search: Option<String>,
    },
    Show {
        id: i64,
    },
    /// Register a sale and print its ticket
    New {
        /// Article and units as ID:UNITS, repeatable
        #[arg(long = "item", required = true, value_parser = parse_sale_item)]
        items: Vec<SaleLine>,
        #[arg(long, default_value = "")]
        client: String,
        /// efectivo or transferencia
        #[arg(long)]
        payment: Option<PaymentMethod>,
        /// Take what stock allows instead of refusing the sale
        #[arg(long, default_value_t = false)]
        clamp: bool,
        /// Also write the ticket PDF to this directory
        #[arg(long)]
        ticket_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PurchaseCommand {
    List {
        /// Filter by provider name or dd/mm/yyyy date
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Register a purchase; stock and costs are updated by the backend
    New {
        #[arg(long)]
        provider: Option<i64>,
        /// Article, units and optional unit cost as ID:UNITS[@COST], repeatable
        #[arg(long = "item", required = true, value_parser = parse_purchase_item)]
        items: Vec<PurchaseLine>,
        #[arg(long)]
        payment: Option<PaymentMethod>,
        /// Invoice date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CashCommand {
    Balance,
    Movements {
        #[arg(short, long, default_value_t = Window::Total)]
        window: Window,
        /// Only extractions
        #[arg(long, default_value_t = false)]
        extractions: bool,
    },
    /// Take money out of the drawer
    Extract {
        #[arg(long)]
        amount: Amount,
        #[arg(long)]
        person: String,
        #[arg(long, default_value = "")]
        reason: String,
        #[arg(long)]
        payment: Option<PaymentMethod>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    List,
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// The backend assigns a default password when omitted
        #[arg(long)]
        password: Option<String>,
    },
    ToggleBlock {
        id: i64,
    },
    ResetPassword {
        id: i64,
    },
}

/// `--item ID:UNITS` of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleLine {
    pub article_id: ArticleId,
    pub units: u32,
}

/// `--item ID:UNITS[@COST]` of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseLine {
    pub article_id: ArticleId,
    pub units: u32,
    pub cost: Option<Amount>,
}

pub fn parse_sale_item(raw: &str) -> Result<SaleLine, String> {
    let (id, units) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected ID:UNITS, got '{raw}'"))?;
    Ok(SaleLine {
        article_id: parse_number(id, "article id")?,
        units: parse_number(units, "units")?,
    })
}

pub fn parse_purchase_item(raw: &str) -> Result<PurchaseLine, String> {
    let (line, cost) = match raw.split_once('@') {
        Some((line, cost)) => (line, Some(parse_number(cost, "cost")?)),
        None => (raw, None),
    };
    let (id, units) = line
        .split_once(':')
        .ok_or_else(|| format!("expected ID:UNITS[@COST], got '{raw}'"))?;
    Ok(PurchaseLine {
        article_id: parse_number(id, "article id")?,
        units: parse_number(units, "units")?,
        cost,
    })
}

fn parse_number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid {what}: '{}'", raw.trim()))
}
