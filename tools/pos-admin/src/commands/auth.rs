use anyhow::Context as _;
use pos_client::guard::visible_views;
use pos_types::PasswordChange;

use super::{print_message, read_secret, Context};

pub async fn login(ctx: &Context, username: &str, password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_secret("Password: ")?,
    };
    let session = ctx
        .api
        .auth()
        .login(username, &password)
        .await
        .context("login failed")?;
    println!(
        "Logged in as {} ({})",
        session.user.username,
        session.role()
    );
    Ok(())
}

pub fn logout(ctx: &Context) -> anyhow::Result<()> {
    ctx.api.auth().logout()?;
    println!("Session closed");
    Ok(())
}

pub fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let Some(session) = ctx.api.session() else {
        println!("Not logged in");
        return Ok(());
    };
    let user = &session.user;
    println!("{} <{}>", user.username, user.email);
    println!("Role: {}", user.role);
    let sections: Vec<&str> = visible_views(user.role)
        .iter()
        .map(|view| view.title())
        .collect();
    println!("Sections: {}", sections.join(", "));
    println!("Backend: {}", ctx.api.base_url());
    Ok(())
}

pub async fn change_password(
    ctx: &Context,
    old: Option<String>,
    new: Option<String>,
    confirm: Option<String>,
) -> anyhow::Result<()> {
    let form = PasswordChange {
        old_password: secret_or_prompt(old, "Current password: ")?,
        new_password: secret_or_prompt(new, "New password: ")?,
        confirm_password: secret_or_prompt(confirm, "Repeat new password: ")?,
    };
    let response = ctx.api.auth().change_password(&form).await?;
    print_message(&response.message, "Password changed");
    println!("Log in again with the new password");
    Ok(())
}

fn secret_or_prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => read_secret(label),
    }
}
