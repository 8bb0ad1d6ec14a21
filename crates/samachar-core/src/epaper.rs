// Rust guideline compliant 2026-10-14

//! Daily e-paper editions.
//!
//! One PDF edition is published per date. Readers look an edition up by
//! date; admins list every edition and toggle or delete them through the
//! same acknowledged-transition path as posts and reporters. Uploading new
//! editions is a server concern and not modelled here.
//!
//! Edition transitions (admin only):
//!
//! - Inactive → Active (activate)
//! - Active → Inactive (deactivate)
//! - Any → removed (delete)

use crate::models::Identified;
use crate::moderation::{Invalidation, Moderated};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One dated e-paper edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EPaper {
    /// Unique identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Publication date.
    pub date: NaiveDate,
    /// Location of the edition PDF.
    #[serde(default)]
    pub pdf_url: String,
    /// Location of the cover thumbnail, if one was generated.
    #[serde(default)]
    pub thumbnail_url: String,
    /// Whether readers can see the edition.
    #[serde(default)]
    pub is_active: bool,
}

impl EPaper {
    /// PDF location with `http://` upgraded to `https://`.
    #[must_use]
    pub fn secure_pdf_url(&self) -> String {
        match self.pdf_url.get(..7) {
            Some(scheme) if scheme.eq_ignore_ascii_case("http://") => {
                format!("https://{}", &self.pdf_url[7..])
            }
            _ => self.pdf_url.clone(),
        }
    }
}

impl Identified for EPaper {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Admin action on an edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EPaperAction {
    /// Publish the edition to readers.
    Activate,
    /// Hide the edition from readers.
    Deactivate,
    /// Delete the edition.
    Delete,
}

impl EPaperAction {
    /// Returns the action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for EPaperAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Moderated for EPaper {
    type Action = EPaperAction;

    fn check(&self, action: &EPaperAction) -> Result<()> {
        let allowed = match action {
            EPaperAction::Delete => true,
            EPaperAction::Activate => !self.is_active,
            EPaperAction::Deactivate => self.is_active,
        };
        if allowed {
            Ok(())
        } else {
            Err(Error::InvalidTransition(format!(
                "Cannot {} an {} e-paper",
                action,
                if self.is_active { "active" } else { "inactive" }
            )))
        }
    }

    fn invalidation(&self, action: &EPaperAction) -> Invalidation {
        let plan = Invalidation::for_item(&self.id).filter("date", &self.date.to_string());
        match action {
            EPaperAction::Activate | EPaperAction::Deactivate => {
                plan.filter("active", "true").filter("active", "false")
            }
            EPaperAction::Delete => plan,
        }
    }
}

/// By-date lookup endpoint of the remote API.
pub trait EPaperSource {
    /// Fetches the edition published for `date`.
    ///
    /// # Returns
    ///
    /// `None` if the server answered and holds no edition for that date.
    ///
    /// # Errors
    ///
    /// Returns `Transport` for network failures and non-success responses.
    fn by_date(&mut self, date: NaiveDate) -> Result<Option<EPaper>>;
}

/// Looks up the edition readers can open for `date`.
///
/// # Errors
///
/// Returns `NotFound` if the server has no edition for `date` or the
/// edition is inactive. Errors from `source` are returned unchanged, so a
/// failed request is never reported as a missing edition.
pub fn active_edition<S>(source: &mut S, date: NaiveDate) -> Result<EPaper>
where
    S: EPaperSource + ?Sized,
{
    match source.by_date(date)? {
        Some(edition) if edition.is_active => Ok(edition),
        Some(edition) => {
            debug!(id = %edition.id, %date, "e-paper edition is inactive");
            Err(Error::NotFound(format!("no active e-paper for {date}")))
        }
        None => Err(Error::NotFound(format!("no active e-paper for {date}"))),
    }
}
