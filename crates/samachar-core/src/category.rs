// Rust guideline compliant 2026-10-14

//! News categories shown as feed tabs.

use crate::models::Filters;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A feed category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Front page, all categories.
    #[default]
    Home,
    /// Mumbai city news.
    Mumbai,
    /// State news.
    Maharashtra,
    /// Politics.
    Politics,
    /// Technology.
    Tech,
    /// Sports.
    Games,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 6] = [
        Category::Home,
        Category::Mumbai,
        Category::Maharashtra,
        Category::Politics,
        Category::Tech,
        Category::Games,
    ];

    /// Returns the URL/filter key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Mumbai => "mumbai",
            Self::Maharashtra => "maharashtra",
            Self::Politics => "politics",
            Self::Tech => "tech",
            Self::Games => "games",
        }
    }

    /// Returns the Hindi tab label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "होम",
            Self::Mumbai => "मुंबई",
            Self::Maharashtra => "महाराष्ट्र",
            Self::Politics => "राजनीति",
            Self::Tech => "तकनीक",
            Self::Games => "खेल",
        }
    }

    /// Returns the filter set for this category's feed.
    #[must_use]
    pub fn filters(&self) -> Filters {
        Filters::new().with("category", self.key())
    }

    /// Whether a post filed under `category` belongs in this feed.
    ///
    /// The home feed accepts every category.
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        *self == Category::Home || category.eq_ignore_ascii_case(self.key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidQuery(format!("unknown category: {s}")))
    }
}
