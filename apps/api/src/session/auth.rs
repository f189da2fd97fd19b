//! Simulated sign-in flows. Any well-formed submission succeeds after the configured
//! pause and yields the mock identity below.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::user::{Tier, User};
use crate::session::store::{SessionSnapshot, SessionStore};
use crate::session::storage::StorageError;
use crate::validation::{
    check_confirmation, check_email, check_name, check_new_password, FieldErrors,
};

pub const MOCK_TOKEN: &str = "mock-jwt-token";
pub const MOCK_USER_ID: u64 = 1;
pub const LOGIN_NAME: &str = "John Doe";
pub const POST_AUTH_REDIRECT: &str = "/dashboard";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, "name", &self.name);
        check_email(&mut errors, "email", &self.email);
        check_new_password(&mut errors, "password", &self.password);
        check_confirmation(
            &mut errors,
            "confirmPassword",
            &self.password,
            &self.confirm_password,
        );
        if !self.terms {
            errors.add("terms", "You must agree to the terms");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        check_email(&mut errors, "email", &self.email);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.current_password.is_empty() {
            errors.add("currentPassword", "Current password is required");
        }
        if self.new_password.is_empty() {
            errors.add("newPassword", "New password is required");
        } else if self.new_password.chars().count() < crate::validation::MIN_PASSWORD_CHARS {
            errors.add("newPassword", "Must be at least 6 characters");
        }
        if self.confirm_password.is_empty() {
            errors.add("confirmPassword", "Please confirm password");
        } else if self.confirm_password != self.new_password {
            errors.add("confirmPassword", "Passwords do not match");
        }
        errors.into_result()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    pub session: SessionSnapshot,
    pub token: String,
    pub redirect: &'static str,
}

/// Identity returned by a login. The name is fixed; the email echoes the form.
pub fn login_user(form: &LoginForm) -> User {
    User {
        id: MOCK_USER_ID,
        name: LOGIN_NAME.to_string(),
        email: form.email.trim().to_string(),
        tier: Tier::Premium,
        avatar: None,
    }
}

pub fn registered_user(form: &RegisterForm) -> User {
    User {
        id: MOCK_USER_ID,
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        tier: Tier::Free,
        avatar: None,
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Waits out the simulated round trip, then stores the identity. The caller holds the
/// store lock only for the final write.
pub async fn complete_sign_in(
    delay: Duration,
    user: User,
    store: &tokio::sync::RwLock<SessionStore>,
) -> Result<AuthOutcome, StorageError> {
    pause(delay).await;
    let mut store = store.write().await;
    store.set_auth(user, MOCK_TOKEN.to_string())?;
    Ok(AuthOutcome {
        session: store.snapshot(),
        token: MOCK_TOKEN.to_string(),
        redirect: POST_AUTH_REDIRECT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStorage;
    use crate::session::store::SessionPhase;
    use tokio::sync::RwLock;

    #[tokio::test(start_paused = true)]
    async fn test_demo_login_redirects_to_dashboard() {
        let store = RwLock::new(SessionStore::load(Box::new(MemoryStorage::new())));
        let form = LoginForm {
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
        };
        form.validate().unwrap();

        let started = tokio::time::Instant::now();
        let outcome = complete_sign_in(Duration::from_secs(1), login_user(&form), &store)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
        assert_eq!(outcome.redirect, "/dashboard");
        assert_eq!(outcome.token, "mock-jwt-token");
        assert_eq!(outcome.session.phase, SessionPhase::Authenticated);

        let user = outcome.session.user.unwrap();
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "demo@example.com");
        assert_eq!(user.tier, Tier::Premium);
    }

    #[test]
    fn test_login_requires_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_register_validation() {
        let form = RegisterForm {
            name: "A".to_string(),
            email: "a@b.co".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
            terms: false,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.get("terms"), Some("You must agree to the terms"));
    }

    #[test]
    fn test_registered_user_is_free_tier() {
        let form = RegisterForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        let user = registered_user(&form);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.tier, Tier::Free);
    }

    #[test]
    fn test_password_change_rules() {
        let form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        assert_eq!(
            form.validate().unwrap_err().get("newPassword"),
            Some("Must be at least 6 characters")
        );

        let form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "longer1".to_string(),
            confirm_password: "longer2".to_string(),
        };
        assert_eq!(
            form.validate().unwrap_err().get("confirmPassword"),
            Some("Passwords do not match")
        );
    }
}
