//! Application state management.

use chrono::{DateTime, Local};
use pos_client::guard::{resolve_view, visible_views};
use pos_client::{Session, View};
use pos_reports::{extractions, visible_sales, CashSummary, Window};
use pos_types::{
    Amount, Article, CashMovement, Category, Provider, PurchaseResponse, SaleResponse, User,
};

use super::section::view_for_hotkey;
use super::source::Refresh;

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main dashboard view.
    #[default]
    Dashboard,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Everything fetched from the backend.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub providers: Vec<Provider>,
    pub sales: Vec<SaleResponse>,
    pub purchases: Vec<PurchaseResponse>,
    pub movements: Vec<CashMovement>,
    pub balance: Option<Amount>,
    pub sellers: Vec<User>,
}

/// Main application model.
pub struct App {
    pub state: AppState,
    /// Logged-in user.
    pub session: Session,
    /// Sections the role may open, in menu order.
    views: Vec<View>,
    pub selected: View,
    /// Period of the statistics and extraction sections.
    pub window: Window,
    pub data: DashboardData,
    pub last_refresh: Option<DateTime<Local>>,
    pub error_message: Option<String>,
    /// Printed after the terminal is restored.
    pub exit_message: Option<String>,
    refresh_requested: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let views = visible_views(session.role());
        let selected = views.first().copied().unwrap_or(View::Articles);
        Self {
            state: AppState::Dashboard,
            session,
            views,
            selected,
            window: Window::default(),
            data: DashboardData::default(),
            last_refresh: None,
            error_message: None,
            exit_message: None,
            refresh_requested: false,
        }
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: char) {
        match self.state {
            AppState::Dashboard => self.handle_dashboard_key(key),
            // Any key closes help
            AppState::Help => self.state = AppState::Dashboard,
            AppState::Quit => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: char) {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            'r' | 'R' => self.refresh_requested = true,
            'w' | 'W' => {
                self.window = self.window.next();
                self.refresh_requested = true;
            }
            c => {
                if let Some(view) = view_for_hotkey(c) {
                    self.open(view);
                }
            }
        }
    }

    /// Switch to `view` if the role allows it.
    pub fn open(&mut self, view: View) {
        match resolve_view(self.session.role(), view) {
            Some(view) => {
                self.selected = view;
                self.error_message = None;
            }
            None => {
                self.error_message = Some(format!("{} requires an administrator", view.title()));
            }
        }
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        if self.views.is_empty() {
            return;
        }
        let idx = self.selected_index();
        let prev = if idx == 0 { self.views.len() - 1 } else { idx - 1 };
        self.selected = self.views[prev];
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.views.is_empty() {
            return;
        }
        let next = (self.selected_index() + 1) % self.views.len();
        self.selected = self.views[next];
    }

    fn selected_index(&self) -> usize {
        self.views
            .iter()
            .position(|&view| view == self.selected)
            .unwrap_or(0)
    }

    /// Whether a refresh was asked for since the last call.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    /// Merge a refresh. Failed parts keep their previous data.
    pub fn apply_refresh(&mut self, refresh: Refresh, at: DateTime<Local>) {
        let data = &mut self.data;
        if let Some(articles) = refresh.articles {
            data.articles = articles;
        }
        if let Some(categories) = refresh.categories {
            data.categories = categories;
        }
        if let Some(providers) = refresh.providers {
            data.providers = providers;
        }
        if let Some(sales) = refresh.sales {
            data.sales = sales;
        }
        if let Some(purchases) = refresh.purchases {
            data.purchases = purchases;
        }
        if let Some(movements) = refresh.movements {
            data.movements = movements;
        }
        if refresh.balance.is_some() {
            data.balance = refresh.balance;
        }
        if let Some(sellers) = refresh.sellers {
            data.sellers = sellers;
        }

        self.last_refresh = Some(at);
        self.error_message = (!refresh.errors.is_empty()).then(|| refresh.errors.join("; "));

        if refresh.session_expired {
            self.exit_message = Some("Session expired, log in again".to_string());
            self.state = AppState::Quit;
        }
    }

    /// Sales the logged-in user may see.
    pub fn visible_sales(&self) -> Vec<&SaleResponse> {
        visible_sales(&self.data.sales, &self.session.user)
    }

    pub fn summary(&self) -> CashSummary {
        CashSummary::from_movements(&self.data.movements)
    }

    pub fn extractions(&self) -> Vec<&CashMovement> {
        extractions(&self.data.movements)
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}
