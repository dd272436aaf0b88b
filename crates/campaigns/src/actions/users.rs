//! User service: sign-in, registration, and profile updates
//!
//! Sign-in is a lookup by email against the account directory. Passwords
//! are accepted but not checked.

use chrono::Utc;
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use super::pending::{LoadingGuard, logged, simulate_latency};
use crate::config::HarborConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{User, UserId, UserPatch, UserType};
use crate::storage::{SessionStore, UserStore};

/// Service tracking the signed-in account
pub struct UserService {
    users: Arc<dyn UserStore>,
    session: Arc<dyn SessionStore>,
    current: RwLock<Option<User>>,
    loading: AtomicBool,
    latency: Duration,
}

impl UserService {
    /// Create a new user service; call [`restore`](Self::restore) to pick
    /// up a saved session
    pub fn new(
        users: Arc<dyn UserStore>,
        session: Arc<dyn SessionStore>,
        settings: &HarborConfig,
    ) -> Self {
        Self::with_latency(users, session, settings.latency())
    }

    pub fn with_latency(
        users: Arc<dyn UserStore>,
        session: Arc<dyn SessionStore>,
        latency: Duration,
    ) -> Self {
        Self {
            users,
            session,
            current: RwLock::new(None),
            loading: AtomicBool::new(false),
            latency,
        }
    }

    /// True while a simulated operation is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The signed-in account, if any
    pub fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_current(&self, user: Option<User>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = user;
    }

    /// Restore the saved session
    ///
    /// An unreadable session is logged and treated as signed out.
    pub fn restore(&self) -> Option<User> {
        match self.session.load() {
            Ok(user) => {
                if let Some(user) = &user {
                    info!("Restored session for {}", user.id.as_str());
                }
                self.set_current(user.clone());
                user
            }
            Err(e) => {
                warn!("Error checking saved session: {:#}", e);
                self.set_current(None);
                None
            }
        }
    }

    /// Sign in by email; returns false when no account matches
    pub async fn login(&self, email: &str, _password: &str) -> ServiceResult<bool> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let Some(user) = logged("signing in", self.users.find_user_by_email(email))? else {
            info!("Sign-in failed: no account for {}", email);
            return Ok(false);
        };

        self.persist(&user)?;
        info!("Signed in as {}", user.id.as_str());
        self.set_current(Some(user));
        Ok(true)
    }

    /// Register a new account and sign in as it
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        user_type: UserType,
    ) -> ServiceResult<User> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let now = Utc::now();
        let id = UserId::new(format!("user-{}", now.timestamp_millis()));
        let user = User::registered(id, name, email, user_type, now);

        logged("registering", self.users.upsert_user(user.clone()))?;
        self.persist(&user)?;
        info!("Registered {} as {}", email, user.id.as_str());
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    /// Sign out and forget the saved session
    pub fn logout(&self) -> ServiceResult<()> {
        self.set_current(None);
        self.session.clear().map_err(|e| {
            warn!("Error clearing session: {:#}", e);
            ServiceError::session(e)
        })
    }

    /// Merge `patch` into the signed-in profile; returns false when
    /// nobody is signed in
    pub async fn update_profile(&self, patch: UserPatch) -> ServiceResult<bool> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let Some(mut user) = self.current_user() else {
            return Ok(false);
        };
        user.apply_patch(patch);

        logged("updating profile", self.users.upsert_user(user.clone()))?;
        self.persist(&user)?;
        info!("Updated profile for {}", user.id.as_str());
        self.set_current(Some(user));
        Ok(true)
    }

    fn persist(&self, user: &User) -> ServiceResult<()> {
        self.session.save(user).map_err(|e| {
            warn!("Error saving session: {:#}", e);
            ServiceError::session(e)
        })
    }
}
