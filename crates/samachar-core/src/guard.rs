// Rust guideline compliant 2026-10-14

//! Role-based access guard for views.

use crate::models::{Role, Session, Viewer};
use tracing::debug;

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The viewer may see the view.
    Allow,
    /// The viewer must be sent away.
    Deny,
}

/// Checks whether `viewer` holds at least `required`.
#[must_use]
pub fn check_access(viewer: &Viewer, required: Role) -> Access {
    if viewer.role >= required {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// Navigation effect issued on denial.
pub trait Navigator {
    /// Navigates back to the previous route.
    fn back(&mut self);
}

/// Guard state for one view mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Session not resolved yet; nothing is rendered.
    Pending,
    /// The view is shown.
    Allowed,
    /// The viewer was sent back.
    Denied,
}

/// Gates one view mount by role.
///
/// The first evaluation against a ready session decides; later
/// evaluations return the same state and never navigate again.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    required: Role,
    state: GuardState,
    navigated: bool,
}

impl RoleGuard {
    /// Creates a pending guard for a view requiring `required`.
    #[must_use]
    pub fn new(required: Role) -> Self {
        Self {
            required,
            state: GuardState::Pending,
            navigated: false,
        }
    }

    /// Evaluates the guard against the current session snapshot.
    ///
    /// # Arguments
    ///
    /// * `session` - Session provider snapshot
    /// * `navigator` - Receives at most one `back()` for this mount
    ///
    /// # Returns
    ///
    /// The guard state after evaluation.
    pub fn evaluate<N>(&mut self, session: &Session, navigator: &mut N) -> GuardState
    where
        N: Navigator + ?Sized,
    {
        if self.state != GuardState::Pending {
            return self.state;
        }

        let Some(viewer) = session.viewer() else {
            return GuardState::Pending;
        };

        self.state = match check_access(&viewer, self.required) {
            Access::Allow => GuardState::Allowed,
            Access::Deny => GuardState::Denied,
        };
        debug!(role = %viewer.role, required = %self.required, state = ?self.state, "guard resolved");

        if self.state == GuardState::Denied && !self.navigated {
            self.navigated = true;
            navigator.back();
        }
        self.state
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Role this guard requires.
    #[must_use]
    pub fn required(&self) -> Role {
        self.required
    }

    /// Whether the guarded view may render.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == GuardState::Allowed
    }
}
