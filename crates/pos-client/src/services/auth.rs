use pos_telemetry::log_event;
use pos_types::{AuthResponse, Credentials, MessageResponse, PasswordChange};

use crate::{ApiClient, ApiError, Session};

/// Login, logout and password changes.
pub struct AuthService<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Log in and persist the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let credentials = Credentials {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.api.post("/auth/login", &credentials).await?;
        let session = Session::from(response);
        self.api.session_store().save(&session)?;
        log_event!(
            info,
            "auth",
            "Logged in",
            user = %session.user.username,
            role = %session.role()
        );
        Ok(session)
    }

    /// Forget the stored session.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.api.session_store().clear()?;
        log_event!(info, "auth", "Logged out");
        Ok(())
    }

    /// Change the own password. On success the session is dropped and the
    /// user must log in again with the new password.
    pub async fn change_password(&self, form: &PasswordChange) -> Result<MessageResponse, ApiError> {
        let data = form.validate()?;
        if self.api.session().is_none() {
            return Err(crate::guard::AccessError::NotAuthenticated.into());
        }
        let response: MessageResponse = self.api.put("/auth/change-password", &data).await?;
        log_event!(info, "auth", "Password changed");
        self.logout()?;
        Ok(response)
    }
}
