//! Access extractors. Page guards redirect; API guards answer 401/403.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub const LOGIN_PAGE: &str = "/login";
pub const DASHBOARD_PAGE: &str = "/dashboard";

async fn signed_in_user(state: &AppState) -> Option<User> {
    state.session.read().await.user().cloned()
}

/// Signed-in user on a page route; anonymous visitors go to the login page.
pub struct Member(pub User);

#[async_trait]
impl FromRequestParts<AppState> for Member {
    type Rejection = Redirect;

    async fn from_request_parts(_: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        signed_in_user(state)
            .await
            .map(Member)
            .ok_or_else(|| Redirect::to(LOGIN_PAGE))
    }
}

/// Admin on a page route. Everyone else lands on the dashboard, which in turn sends
/// anonymous visitors to the login page.
pub struct AdminMember(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminMember {
    type Rejection = Redirect;

    async fn from_request_parts(_: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match signed_in_user(state).await {
            Some(user) if user.is_admin() => Ok(AdminMember(user)),
            _ => Err(Redirect::to(DASHBOARD_PAGE)),
        }
    }
}

/// Signed-in user on an API route.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(_: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        signed_in_user(state)
            .await
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}

pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(_: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match signed_in_user(state).await {
            Some(user) if user.is_admin() => Ok(AdminUser(user)),
            Some(_) => Err(AppError::Forbidden),
            None => Err(AppError::Unauthorized),
        }
    }
}
