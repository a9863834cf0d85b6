//! POS-Admin: Santería point of sale admin panel

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context as _};
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{Mutex, Notify};
use tracing::{debug, info};

use pos_admin::cli::{Cli, Command};
use pos_admin::commands::{self, Context};
use pos_admin::config::{AdminConfig, Overrides};
use pos_admin::domain::{refresh, App};
use pos_admin::ui;
use pos_client::guard::authorize_route;
use pos_client::{Access, ApiClient, FileSessionStore, Route, SessionStore};
use pos_telemetry::{init_tracing, TelemetryConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dashboard = matches!(cli.command, Command::Dashboard);

    let mut telemetry = TelemetryConfig::for_tool("pos-admin");
    // Log lines would tear the alternate screen
    if dashboard && telemetry.log_file.is_none() {
        telemetry.console_output = false;
    }
    init_tracing(&telemetry)?;

    let overrides = Overrides {
        api_url: cli.api_url.clone(),
        session_file: cli.session_file.clone(),
    };
    let config = AdminConfig::resolve(cli.config.as_deref(), &overrides)?;

    let store: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::new(config.client.session_file.clone()));
    let api = ApiClient::new(&config.client, store).context("building HTTP client")?;
    debug!(base_url = api.base_url(), "backend configured");

    if dashboard {
        return run_dashboard(api, config.refresh).await;
    }

    let ctx = Context {
        api,
        config,
        assume_yes: cli.yes,
    };
    commands::run(&ctx, cli.command).await
}

async fn run_dashboard(api: ApiClient, every: Duration) -> anyhow::Result<()> {
    let stored = api.session();
    let session = match (authorize_route(stored.as_ref(), Route::Dashboard), stored) {
        (Access::Granted, Some(session)) => session,
        (Access::RedirectHome, _) => bail!("this account may not open the dashboard"),
        _ => bail!("not logged in, run `pos-admin login` first"),
    };
    info!(user = %session.user.username, role = %session.role(), "dashboard started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(session)));
    let wake = Arc::new(Notify::new());

    // Spawn background refresh task
    let refresh_task = tokio::spawn(refresh_loop(api, app.clone(), wake.clone(), every));

    // Main loop
    let result = run_app(&mut terminal, app.clone(), &wake).await;
    refresh_task.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(message) = app.lock().await.exit_message.take() {
        eprintln!("{message}");
    }
    result.context("dashboard terminal error")
}

/// Fetch on every tick or when woken. The lock is only held to read the
/// role and window and to apply the result.
async fn refresh_loop(api: ApiClient, app: Arc<Mutex<App>>, wake: Arc<Notify>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = wake.notified() => {}
        }

        let (role, window) = {
            let app = app.lock().await;
            (app.session.role(), app.window)
        };
        let update = refresh(&api, role, window, Local::now().date_naive()).await;
        if !update.errors.is_empty() {
            debug!(errors = ?update.errors, "partial refresh");
        }
        app.lock().await.apply_refresh(update, Local::now());
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    wake: &Notify,
) -> io::Result<()> {
    loop {
        // Draw UI
        {
            let app_guard = app.lock().await;
            terminal.draw(|frame| {
                ui::render(frame, &app_guard);
            })?;
        }

        // Handle input with timeout so refreshes get drawn
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let mut app_guard = app.lock().await;
                    match key.code {
                        KeyCode::Char(c) => app_guard.handle_key(c),
                        KeyCode::Up => app_guard.select_prev(),
                        KeyCode::Down => app_guard.select_next(),
                        KeyCode::Esc => app_guard.handle_key('q'),
                        _ => {}
                    }
                    if app_guard.take_refresh_request() {
                        wake.notify_one();
                    }
                }
            }
        }

        // Check if we should quit
        if app.lock().await.should_quit() {
            return Ok(());
        }
    }
}
