// Rust guideline compliant 2026-10-14

//! Command implementations for the Samachar CLI.

pub mod categories;
pub mod epaper;
pub mod feed;
pub mod moderate;
pub mod reporter;
pub mod stats;

use anyhow::{bail, Result};
use samachar_core::{GuardState, Navigator, Role, RoleGuard, Session, Viewer};

/// Navigator that records the guard sending the viewer away.
#[derive(Debug, Default)]
pub struct DenialNotice {
    /// Set once the guard navigated back.
    pub denied: bool,
}

impl Navigator for DenialNotice {
    fn back(&mut self) {
        self.denied = true;
    }
}

/// Runs the dashboard role guard for a one-shot command.
///
/// # Errors
///
/// Returns an error if `role` does not satisfy `required`.
pub fn authorize(role: Role, required: Role) -> Result<Viewer> {
    let viewer = Viewer::new(role);
    let mut guard = RoleGuard::new(required);
    let mut notice = DenialNotice::default();
    match guard.evaluate(&Session::resolved(viewer), &mut notice) {
        GuardState::Allowed => Ok(viewer),
        GuardState::Denied | GuardState::Pending => {
            bail!("Access denied: {required} role required, viewer is {role}")
        }
    }
}
