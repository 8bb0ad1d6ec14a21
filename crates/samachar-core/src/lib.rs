// Rust guideline compliant 2026-10-14

//! Samachar Core Library
//!
//! This crate provides the list-synchronization and moderation core of the
//! Samachar news front-end:
//! - Data models (ListQuery, ListPage, ContentItem, Reporter, Viewer)
//! - Query cache (keyed pages, in-flight dedup, explicit invalidation)
//! - Incremental loader (infinite-scroll paging state machine)
//! - Visibility trigger (scroll sentinel)
//! - Moderation state machine (acknowledged transitions only)
//! - Role guard
//! - E-paper editions (by-date lookup, admin toggles)
//! - Error types and result handling

pub mod cache;
pub mod category;
pub mod config;
pub mod epaper;
pub mod error;
pub mod guard;
pub mod loader;
pub mod models;
pub mod moderation;
pub mod trigger;
pub mod view;

pub use cache::{QueryCache, SharedCache};
pub use category::Category;
pub use config::{Config, OutputFormat};
pub use epaper::{active_edition, EPaper, EPaperAction, EPaperSource};
pub use error::{Error, ErrorCode, Result};
pub use guard::{check_access, Access, GuardState, Navigator, RoleGuard};
pub use loader::{Completion, IncrementalLoader, LoaderState, PageRequest, Ticket};
pub use models::{
    ContentItem, Filters, Identified, ListPage, ListQuery, ModerationStatus, QueryKey, Reporter,
    ReporterStatus, Role, Session, Viewer,
};
pub use moderation::{
    Acknowledgement, Invalidation, ModerationApi, ModerationStats, Moderated, Moderator,
    PostAction, PostPatch, ReporterAction,
};
pub use trigger::VisibilityTrigger;
pub use view::{ListSource, ListView, SyncOutcome};
