//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one `RwSignal<Session>` and provides it as context; the header,
//! the notice tray and the auth pages read and mutate it from there. The token
//! is persisted through a [`TokenStore`] so a reload restores the session.
//!
//! DESIGN
//! ======
//! The token lives inside the `LoggedIn` variant, so "token present" and
//! "logged in" cannot disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::util::storage;

/// `localStorage` key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Persistence backend for the access token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by browser `localStorage`. Inert during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        storage::load_string(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        storage::save_string(ACCESS_TOKEN_KEY, token);
    }

    fn clear(&self) {
        storage::remove(ACCESS_TOKEN_KEY);
    }
}

/// In-memory token store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Whether the user answered the logout prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutDecision {
    Confirmed,
    Dismissed,
}

/// Client-side record of whether the user is authenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { token: String },
}

impl Session {
    /// Rebuild the session from whatever token the store holds.
    pub fn restore(store: &impl TokenStore) -> Self {
        match store.load() {
            Some(token) => Self::LoggedIn { token },
            None => Self::LoggedOut,
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { token } => Some(token),
            Self::LoggedOut => None,
        }
    }

    /// Persist `token` and enter `LoggedIn`.
    pub fn log_in(&mut self, token: String, store: &impl TokenStore) {
        store.save(&token);
        *self = Self::LoggedIn { token };
        log::info!("session: logged in");
    }

    /// Leave `LoggedIn` if, and only if, the user confirmed.
    ///
    /// Returns `true` when the session changed.
    pub fn log_out(&mut self, decision: LogoutDecision, store: &impl TokenStore) -> bool {
        if decision == LogoutDecision::Dismissed || !self.is_logged_in() {
            return false;
        }
        store.clear();
        *self = Self::LoggedOut;
        log::info!("session: logged out");
        true
    }
}
