use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::user::{User, UserPatch};
use crate::session::storage::{DeviceStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const AUTH_STORAGE_KEY: &str = "auth-storage";
pub const THEME_STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeState {
    theme: Theme,
}

/// Envelope used for every persisted blob: `{"state": ..., "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
struct Persisted<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub theme: Theme,
}

/// Process-wide identity and theme state, written through to device storage on every
/// mutation.
pub struct SessionStore {
    storage: Box<dyn DeviceStorage>,
    auth: AuthState,
    theme: Theme,
}

impl SessionStore {
    /// Builds the store and restores whatever the previous run persisted.
    pub fn load(storage: Box<dyn DeviceStorage>) -> Self {
        let mut store = SessionStore {
            storage,
            auth: AuthState::default(),
            theme: Theme::default(),
        };
        store.check_auth();
        if let Some(saved) = store.read_json::<Persisted<ThemeState>>(THEME_STORAGE_KEY) {
            store.theme = saved.state.theme;
        }
        info!(
            "Session restored: {:?}, theme {:?}",
            store.phase(),
            store.theme
        );
        store
    }

    /// Restores authentication from the persisted blob, falling back to the separate
    /// `token` and `user` keys. Both keys must be present for the fallback to apply.
    pub fn check_auth(&mut self) {
        if let Some(saved) = self.read_json::<Persisted<AuthState>>(AUTH_STORAGE_KEY) {
            let state = saved.state;
            if state.is_authenticated && state.user.is_some() && state.token.is_some() {
                self.auth = state;
                return;
            }
        }

        let token = self.storage.get_item(TOKEN_KEY);
        let user = self.read_json::<User>(USER_KEY);
        if let (Some(token), Some(user)) = (token, user) {
            self.auth = AuthState {
                user: Some(user),
                token: Some(token),
                is_authenticated: true,
            };
        }
    }

    pub fn set_auth(&mut self, user: User, token: String) -> Result<(), StorageError> {
        debug!("Authenticated {} ({:?})", user.email, user.tier);
        self.commit_auth(AuthState {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
        })
    }

    pub fn logout(&mut self) -> Result<(), StorageError> {
        debug!("Logged out");
        self.commit_auth(AuthState::default())
    }

    /// Merges `patch` into the current user. `Ok(None)` when nobody is signed in.
    pub fn update_user(&mut self, patch: UserPatch) -> Result<Option<&User>, StorageError> {
        let Some(mut user) = self.auth.user.clone() else {
            return Ok(None);
        };
        user.apply(patch);
        self.commit_auth(AuthState {
            user: Some(user),
            ..self.auth.clone()
        })?;
        Ok(self.auth.user.as_ref())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme, StorageError> {
        let blob = serde_json::to_string(&Persisted {
            state: ThemeState { theme },
            version: 0,
        })?;
        self.storage.set_item(THEME_STORAGE_KEY, blob)?;
        self.theme = theme;
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        self.set_theme(self.theme.toggled())
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.user.as_ref()
    }

    #[cfg(test)]
    pub fn token(&self) -> Option<&str> {
        self.auth.token.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn phase(&self) -> SessionPhase {
        if self.auth.is_authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            user: self.auth.user.clone(),
            is_authenticated: self.auth.is_authenticated,
            theme: self.theme,
        }
    }

    /// Writes `next` to storage and only then makes it the live state.
    fn commit_auth(&mut self, next: AuthState) -> Result<(), StorageError> {
        match (&next.token, &next.user) {
            (Some(token), Some(user)) => {
                self.storage.set_item(TOKEN_KEY, token.clone())?;
                self.storage
                    .set_item(USER_KEY, serde_json::to_string(user)?)?;
            }
            _ => {
                self.storage.remove_item(TOKEN_KEY)?;
                self.storage.remove_item(USER_KEY)?;
            }
        }
        let blob = serde_json::to_string(&Persisted {
            state: &next,
            version: 0,
        })?;
        self.storage.set_item(AUTH_STORAGE_KEY, blob)?;
        self.auth = next;
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.storage.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring unreadable '{key}' entry: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Tier;
    use crate::session::storage::{FileStorage, MemoryStorage};

    fn jane() -> User {
        User {
            id: 1,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            tier: Tier::Free,
            avatar: None,
        }
    }

    /// Readable, but every write fails.
    struct FullDisk {
        items: MemoryStorage,
    }

    impl DeviceStorage for FullDisk {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.get_item(key)
        }

        fn set_item(&mut self, _key: &str, _value: String) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk full").into())
        }

        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn test_failed_writes_leave_session_unchanged() {
        let mut store = SessionStore::load(Box::new(FullDisk {
            items: MemoryStorage::new(),
        }));
        assert!(store.set_auth(jane(), "mock-jwt-token".to_string()).is_err());
        assert_eq!(store.phase(), SessionPhase::Anonymous);
        assert!(store.user().is_none());
        assert!(store.set_theme(Theme::Dark).is_err());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_failed_logout_keeps_user_signed_in() {
        let mut items = MemoryStorage::new();
        let blob = serde_json::to_string(&Persisted {
            state: AuthState {
                user: Some(jane()),
                token: Some("mock-jwt-token".to_string()),
                is_authenticated: true,
            },
            version: 0,
        })
        .unwrap();
        items.set_item(AUTH_STORAGE_KEY, blob).unwrap();
        let mut store = SessionStore::load(Box::new(FullDisk { items }));
        assert_eq!(store.phase(), SessionPhase::Authenticated);

        assert!(store.logout().is_err());
        assert_eq!(store.phase(), SessionPhase::Authenticated);
        assert!(store
            .update_user(UserPatch {
                name: Some("Janet".to_string()),
                ..UserPatch::default()
            })
            .is_err());
        assert_eq!(store.user().map(|u| u.name.as_str()), Some("Jane"));
    }

    #[test]
    fn test_fresh_store_is_anonymous_light() {
        let store = SessionStore::load(Box::new(MemoryStorage::new()));
        assert_eq!(store.phase(), SessionPhase::Anonymous);
        assert_eq!(store.theme(), Theme::Light);
        assert!(store.user().is_none());
    }

    #[test]
    fn test_login_survives_restart_and_logout_clears_keys() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = SessionStore::load(Box::new(FileStorage::open(dir.path()).unwrap()));
            store.set_auth(jane(), "mock-jwt-token".to_string()).unwrap();
            store.toggle_theme().unwrap();
        }

        let mut store = SessionStore::load(Box::new(FileStorage::open(dir.path()).unwrap()));
        assert_eq!(store.phase(), SessionPhase::Authenticated);
        assert_eq!(store.user(), Some(&jane()));
        assert_eq!(store.token(), Some("mock-jwt-token"));
        assert_eq!(store.theme(), Theme::Dark);

        store.logout().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY), None);
        assert_eq!(storage.get_item(USER_KEY), None);
        let blob: serde_json::Value =
            serde_json::from_str(&storage.get_item(AUTH_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(
            blob,
            serde_json::json!({
                "state": {"user": null, "token": null, "isAuthenticated": false},
                "version": 0
            })
        );

        let store = SessionStore::load(Box::new(storage));
        assert_eq!(store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_restores_from_separate_keys_when_blob_missing() {
        let mut storage = MemoryStorage::new();
        storage.set_item(TOKEN_KEY, "t".to_string()).unwrap();
        storage
            .set_item(USER_KEY, serde_json::to_string(&jane()).unwrap())
            .unwrap();
        let store = SessionStore::load(Box::new(storage));
        assert_eq!(store.phase(), SessionPhase::Authenticated);
    }

    #[test]
    fn test_token_without_user_stays_anonymous() {
        let mut storage = MemoryStorage::new();
        storage.set_item(TOKEN_KEY, "t".to_string()).unwrap();
        let store = SessionStore::load(Box::new(storage));
        assert_eq!(store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_corrupt_blob_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set_item(AUTH_STORAGE_KEY, "{oops".to_string()).unwrap();
        storage.set_item(THEME_STORAGE_KEY, "[]".to_string()).unwrap();
        let store = SessionStore::load(Box::new(storage));
        assert_eq!(store.phase(), SessionPhase::Anonymous);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_update_user_merges() {
        let mut store = SessionStore::load(Box::new(MemoryStorage::new()));
        assert!(store.update_user(UserPatch::default()).unwrap().is_none());

        store.set_auth(jane(), "t".to_string()).unwrap();
        let updated = store
            .update_user(UserPatch {
                name: Some("Jane Q".to_string()),
                ..Default::default()
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Jane Q");
        assert_eq!(updated.email, "jane@example.com");
    }

    #[test]
    fn test_theme_blob_format() {
        let mut store = SessionStore::load(Box::new(MemoryStorage::new()));
        store.set_theme(Theme::Dark).unwrap();
        let raw = store.storage.get_item(THEME_STORAGE_KEY).unwrap();
        assert_eq!(raw, r#"{"state":{"theme":"dark"},"version":0}"#);
    }
}
