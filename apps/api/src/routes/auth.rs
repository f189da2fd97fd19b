use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{User, UserPatch};
use crate::routes::guards::CurrentUser;
use crate::session::auth::{
    complete_sign_in, login_user, registered_user, AuthOutcome, LoginForm, PasswordChangeForm,
    ProfileForm, RegisterForm,
};
use crate::session::store::{SessionSnapshot, Theme};
use crate::state::AppState;

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<AuthOutcome>, AppError> {
    form.validate()?;
    let outcome = complete_sign_in(state.config.auth_delay, login_user(&form), &state.session).await?;
    info!("Signed in {}", form.email.trim());
    Ok(Json(outcome))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<AuthOutcome>), AppError> {
    form.validate()?;
    let outcome =
        complete_sign_in(state.config.auth_delay, registered_user(&form), &state.session).await?;
    info!("Registered {}", form.email.trim());
    Ok((StatusCode::CREATED, Json(outcome)))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub session: SessionSnapshot,
    pub redirect: &'static str,
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
) -> Result<Json<LogoutResponse>, AppError> {
    let mut session = state.session.write().await;
    session.logout()?;
    Ok(Json(LogoutResponse {
        session: session.snapshot(),
        redirect: crate::routes::guards::LOGIN_PAGE,
    }))
}

/// GET /api/v1/auth/session
pub async fn handle_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.read().await.snapshot())
}

/// PATCH /api/v1/auth/user
pub async fn handle_update_profile(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(form): Json<ProfileForm>,
) -> Result<Json<User>, AppError> {
    form.validate()?;
    pause(state.config.auth_delay).await;

    let mut session = state.session.write().await;
    let patch = UserPatch {
        name: Some(form.name.trim().to_string()),
        email: Some(form.email.trim().to_string()),
        avatar: None,
    };
    let user = session
        .update_user(patch)?
        .cloned()
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(user))
}

/// POST /api/v1/settings/password
///
/// Validated only; there is no credential store behind it.
pub async fn handle_change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(form): Json<PasswordChangeForm>,
) -> Result<StatusCode, AppError> {
    form.validate()?;
    pause(state.config.auth_delay).await;
    info!("Password change accepted for {}", user.email);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ThemeRequest {
    /// Omitted means toggle.
    pub theme: Option<Theme>,
}

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// PUT /api/v1/settings/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(req): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let mut session = state.session.write().await;
    let theme = match req.theme {
        Some(theme) => session.set_theme(theme)?,
        None => session.toggle_theme()?,
    };
    Ok(Json(ThemeResponse { theme }))
}
