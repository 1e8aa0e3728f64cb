//! Transient notifications ("toasts") shown in the notice tray.
//!
//! DESIGN
//! ======
//! Every user-visible outcome of a form submit, and the logout confirmation,
//! goes through one queue. Notices are plain data; the tray component renders
//! them and hands button presses to [`NoticeAction::resolve`].

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::state::session::{LogoutDecision, Session, TokenStore};

/// Default lifetime of a notice without an action, in milliseconds.
pub const DEFAULT_AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    #[default]
    Default,
    Success,
    Destructive,
}

/// Action button attached to a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeAction {
    /// "Yes" on the logout prompt; performs the logout.
    ConfirmLogout,
}

impl NoticeAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ConfirmLogout => "Yes",
        }
    }

    /// Settle the prompt: `accepted` is the action button, otherwise the close
    /// button. Returns `true` when the session changed.
    pub fn resolve(self, accepted: bool, session: &mut Session, store: &impl TokenStore) -> bool {
        match self {
            Self::ConfirmLogout => {
                let decision = if accepted { LogoutDecision::Confirmed } else { LogoutDecision::Dismissed };
                session.log_out(decision, store)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub variant: NoticeVariant,
    pub title: String,
    pub description: String,
    pub action: Option<NoticeAction>,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    fn new(variant: NoticeVariant, title: &str, description: &str) -> Self {
        Self {
            id: 0,
            variant,
            title: title.to_owned(),
            description: description.to_owned(),
            action: None,
            auto_dismiss_ms: Some(DEFAULT_AUTO_DISMISS_MS),
        }
    }

    #[must_use]
    pub fn success(title: &str, description: &str) -> Self {
        Self::new(NoticeVariant::Success, title, description)
    }

    #[must_use]
    pub fn destructive(title: &str, description: &str) -> Self {
        Self::new(NoticeVariant::Destructive, title, description)
    }

    /// The prompt raised by the header's Logout button. Stays until answered.
    #[must_use]
    pub fn confirm_logout() -> Self {
        Self {
            action: Some(NoticeAction::ConfirmLogout),
            auto_dismiss_ms: None,
            ..Self::new(NoticeVariant::Default, "Confirm Logout", "Are you sure you want to log out?")
        }
    }
}

/// Ordered queue of visible notices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    /// Append `notice`, assigning it a fresh id. Returns that id.
    pub fn push(&mut self, mut notice: Notice) -> u64 {
        self.next_id += 1;
        notice.id = self.next_id;
        self.notices.push(notice);
        self.next_id
    }

    /// Remove the notice with `id`, returning it if it was still visible.
    pub fn dismiss(&mut self, id: u64) -> Option<Notice> {
        let pos = self.notices.iter().position(|n| n.id == id)?;
        Some(self.notices.remove(pos))
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}
