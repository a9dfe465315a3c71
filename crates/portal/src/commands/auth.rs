//! Auth commands - session lifecycle.

use client::auth::RegisterRequest;
use client::Portal;
use common::{AppError, AppResult};

use crate::cli::args::AuthAction;

/// Execute an auth subcommand
pub async fn execute(action: AuthAction, portal: &Portal) -> AppResult<()> {
    match action {
        AuthAction::Login {
            national_id,
            password,
        } => login(portal, &national_id, &password).await,
        AuthAction::Register {
            national_id,
            email,
            first_name,
            last_name,
            phone,
            password,
        } => {
            register(
                portal,
                RegisterRequest {
                    national_id,
                    email,
                    first_name,
                    last_name,
                    phone,
                    password,
                },
            )
            .await
        }
        AuthAction::Logout => logout(portal),
        AuthAction::Me => me(portal).await,
        AuthAction::Refresh => refresh(portal).await,
    }
}

async fn login(portal: &Portal, national_id: &str, password: &str) -> AppResult<()> {
    // A 401 here means the credentials were wrong, not that a session is
    // missing.
    let tokens = portal
        .auth
        .login(national_id, password)
        .await
        .map_err(|e| match e {
            AppError::Unauthorized => AppError::InvalidCredentials,
            e => e,
        })?;
    portal.session.establish(tokens)?;

    let profile = portal.auth.me().await?;
    tracing::info!("Logged in as {}", profile.national_id);
    println!("Welcome, {}", profile.full_name());
    if profile.is_admin {
        println!("This account has administrator privileges.");
    }
    Ok(())
}

async fn register(portal: &Portal, payload: RegisterRequest) -> AppResult<()> {
    let tokens = portal.auth.register(&payload).await?;
    portal.session.establish(tokens)?;

    let profile = portal.auth.me().await?;
    println!("Account created. Welcome, {}", profile.full_name());
    Ok(())
}

fn logout(portal: &Portal) -> AppResult<()> {
    portal.session.clear()?;
    println!("Logged out.");
    Ok(())
}

async fn me(portal: &Portal) -> AppResult<()> {
    let profile = portal.auth.me().await?;
    println!("{} ({})", profile.full_name(), profile.national_id);
    if let Some(email) = &profile.email {
        println!("Email: {}", email);
    }
    if let Some(phone) = &profile.phone {
        println!("Phone: {}", phone);
    }
    println!("Role: {}", profile.role());
    Ok(())
}

async fn refresh(portal: &Portal) -> AppResult<()> {
    let refresh_token = portal
        .session
        .refresh_token()
        .ok_or(AppError::Unauthorized)?;
    let tokens = portal.auth.refresh(&refresh_token).await?;
    portal.session.establish(tokens)?;
    println!("Session refreshed.");
    Ok(())
}
