//! Role guards.
//!
//! Decide whether the current session may enter a route or open a dashboard
//! section. The backend enforces the same rules; these checks keep the
//! front end from offering what would be refused anyway.

use std::fmt;

use pos_types::Role;
use thiserror::Error;

use crate::session::Session;

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Seller];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Permission denied: {0} requires an administrator")]
    Forbidden(String),
}

/// Top-level routes of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    /// Roles allowed in. `None` means public.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Login => None,
            Route::Dashboard => Some(ALL_ROLES),
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// No session: go to the login screen.
    RedirectToLogin,
    /// Logged in with the wrong role: go back home.
    RedirectHome,
}

/// Check a session against a list of allowed roles.
pub fn authorize(session: Option<&Session>, allowed: Option<&[Role]>) -> Access {
    let Some(allowed) = allowed else {
        return Access::Granted;
    };
    match session {
        None => Access::RedirectToLogin,
        Some(session) if allowed.contains(&session.role()) => Access::Granted,
        Some(_) => Access::RedirectHome,
    }
}

pub fn authorize_route(session: Option<&Session>, route: Route) -> Access {
    authorize(session, route.allowed_roles())
}

/// Sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Articles,
    Categories,
    Providers,
    Sales,
    Purchases,
    Extractions,
    Statistics,
    Users,
}

impl View {
    /// Menu order.
    pub const ALL: [View; 8] = [
        View::Articles,
        View::Categories,
        View::Providers,
        View::Sales,
        View::Purchases,
        View::Extractions,
        View::Statistics,
        View::Users,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Articles => "Artículos",
            View::Categories => "Categorías",
            View::Providers => "Proveedores",
            View::Sales => "Ventas",
            View::Purchases => "Compras",
            View::Extractions => "Extracciones",
            View::Statistics => "Estadísticas",
            View::Users => "Vendedores",
        }
    }

    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            View::Articles | View::Sales => ALL_ROLES,
            _ => ADMIN_ONLY,
        }
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Sections shown in the menu for `role`, in menu order.
pub fn visible_views(role: Role) -> Vec<View> {
    View::ALL
        .into_iter()
        .filter(|view| view.is_visible_to(role))
        .collect()
}

/// The section to open, or `None` (back to the menu) when `role` may not
/// open `requested`.
pub fn resolve_view(role: Role, requested: View) -> Option<View> {
    requested.is_visible_to(role).then_some(requested)
}

/// The session, provided it belongs to an administrator.
pub fn require_admin<'a>(session: Option<&'a Session>, action: &str) -> Result<&'a Session, AccessError> {
    match session {
        None => Err(AccessError::NotAuthenticated),
        Some(session) if session.is_admin() => Ok(session),
        Some(_) => Err(AccessError::Forbidden(action.to_string())),
    }
}

/// The session, provided its role may open `view`.
pub fn require_view(session: Option<&Session>, view: View) -> Result<&Session, AccessError> {
    match session {
        None => Err(AccessError::NotAuthenticated),
        Some(session) if view.is_visible_to(session.role()) => Ok(session),
        Some(_) => Err(AccessError::Forbidden(view.title().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pos_types::User;

    fn session(role: Role) -> Session {
        Session {
            token: "t".into(),
            user: User {
                id: 7,
                username: "u".into(),
                email: String::new(),
                role,
                created_at: String::new(),
                active: true,
            },
        }
    }

    #[test]
    fn test_authorize_outcomes() {
        let seller = session(Role::Seller);
        assert_eq!(authorize(None, Some(ADMIN_ONLY)), Access::RedirectToLogin);
        assert_eq!(authorize(Some(&seller), Some(ADMIN_ONLY)), Access::RedirectHome);
        assert_eq!(authorize(Some(&seller), Some(ALL_ROLES)), Access::Granted);
        assert_eq!(authorize(None, None), Access::Granted);
    }

    #[test]
    fn test_routes() {
        assert_eq!(authorize_route(None, Route::Login), Access::Granted);
        assert_eq!(authorize_route(None, Route::Dashboard), Access::RedirectToLogin);
        assert_eq!(
            authorize_route(Some(&session(Role::Seller)), Route::Dashboard),
            Access::Granted
        );
    }

    #[test]
    fn test_seller_sees_articles_and_sales_only() {
        assert_eq!(visible_views(Role::Seller), vec![View::Articles, View::Sales]);
        assert_eq!(visible_views(Role::Admin), View::ALL.to_vec());
    }

    #[test]
    fn test_resolve_restricted_view_falls_back_to_menu() {
        assert_eq!(resolve_view(Role::Seller, View::Statistics), None);
        assert_eq!(resolve_view(Role::Seller, View::Sales), Some(View::Sales));
        assert_eq!(resolve_view(Role::Admin, View::Users), Some(View::Users));
    }

    #[test]
    fn test_require_admin() {
        let admin = session(Role::Admin);
        let seller = session(Role::Seller);
        assert!(require_admin(Some(&admin), "delete article").is_ok());
        assert_eq!(
            require_admin(Some(&seller), "delete article"),
            Err(AccessError::Forbidden("delete article".into()))
        );
        assert_eq!(require_admin(None, "x"), Err(AccessError::NotAuthenticated));
    }

    #[test]
    fn test_require_view() {
        let seller = session(Role::Seller);
        assert!(require_view(Some(&seller), View::Articles).is_ok());
        assert!(matches!(
            require_view(Some(&seller), View::Extractions),
            Err(AccessError::Forbidden(_))
        ));
    }
}
