// Rust guideline compliant 2026-10-14

//! Output formatting module for the Samachar CLI.
//!
//! This module renders feeds, reporter lists, e-paper editions, moderation
//! stats and errors in the three output formats (JSON, table, plain text).

use samachar_core::{Category, ContentItem, EPaper, ModerationStats, OutputFormat, Reporter};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting Samachar data in different output
/// formats.
pub trait OutputFormatter {
    /// Formats an accumulated feed.
    ///
    /// # Arguments
    /// * `posts` - Posts in feed order
    /// * `has_more` - Whether the feed can load further pages
    fn format_posts(&self, posts: &[ContentItem], has_more: bool) -> String;

    /// Formats a single post, typically after a moderation action.
    fn format_post(&self, post: &ContentItem) -> String;

    /// Formats a list of reporter accounts.
    fn format_reporters(&self, reporters: &[Reporter]) -> String;

    /// Formats a single reporter account.
    fn format_reporter(&self, reporter: &Reporter) -> String;

    /// Formats the admin list of e-paper editions.
    fn format_epapers(&self, editions: &[EPaper]) -> String;

    /// Formats a single edition, as opened by a reader.
    fn format_epaper(&self, edition: &EPaper) -> String;

    /// Formats moderation counters.
    fn format_stats(&self, stats: &ModerationStats) -> String;

    /// Formats the category navigation list.
    fn format_categories(&self, categories: &[Category]) -> String;

    /// Formats a confirmation that an item was removed.
    fn format_removed(&self, kind: &str, id: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Stable error code for an error chain, for machine-readable output.
#[must_use]
pub fn error_code(error: &anyhow::Error) -> String {
    error
        .downcast_ref::<samachar_core::Error>()
        .and_then(|e| serde_json::to_value(e.code()).ok())
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "internal_error".to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// JSON output formatter.
///
/// Formats data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_posts(&self, posts: &[ContentItem], has_more: bool) -> String {
        Self::render(&json!({
            "posts": posts,
            "total": posts.len(),
            "hasMore": has_more,
        }))
    }

    fn format_post(&self, post: &ContentItem) -> String {
        Self::render(&json!({ "post": post }))
    }

    fn format_reporters(&self, reporters: &[Reporter]) -> String {
        Self::render(&json!({
            "reporters": reporters,
            "total": reporters.len(),
        }))
    }

    fn format_reporter(&self, reporter: &Reporter) -> String {
        Self::render(&json!({ "reporter": reporter }))
    }

    fn format_epapers(&self, editions: &[EPaper]) -> String {
        Self::render(&json!({
            "epapers": editions,
            "total": editions.len(),
        }))
    }

    fn format_epaper(&self, edition: &EPaper) -> String {
        let mut value = json!(edition);
        value["pdfUrl"] = json!(edition.secure_pdf_url());
        Self::render(&json!({ "epaper": value }))
    }

    fn format_stats(&self, stats: &ModerationStats) -> String {
        Self::render(&json!({ "stats": stats }))
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        let entries: Vec<serde_json::Value> = categories
            .iter()
            .map(|c| json!({ "key": c.key(), "label": c.label() }))
            .collect();
        Self::render(&json!({ "categories": entries }))
    }

    fn format_removed(&self, kind: &str, id: &str) -> String {
        Self::render(&json!({ "removed": { "kind": kind, "id": id } }))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        json!({
            "error": {
                "code": error_code(error),
                "message": error.to_string(),
            }
        })
        .to_string()
    }
}

/// Table output formatter.
///
/// Formats data as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_posts(&self, posts: &[ContentItem], has_more: bool) -> String {
        if posts.is_empty() {
            return "No posts found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Verified", "Category", "Title", "Created"]);
        for post in posts {
            builder.push_record(vec![
                post.id.clone(),
                post.status.to_string(),
                yes_no(post.is_verified).to_string(),
                post.category.clone(),
                post.title.clone(),
                post.created_at.format("%Y-%m-%d %H:%M").to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        let mut output = table.to_string();
        if has_more {
            output.push_str("\nMore posts available.");
        }
        output
    }

    fn format_post(&self, post: &ContentItem) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID:        {}\n", post.id));
        output.push_str(&format!("Title:     {}\n", post.title));
        output.push_str(&format!("Category:  {}\n", post.category));
        output.push_str(&format!("Status:    {}\n", post.status));
        output.push_str(&format!("Verified:  {}\n", yes_no(post.is_verified)));
        output.push_str(&format!("Created:   {}\n", post.created_at));
        output
    }

    fn format_reporters(&self, reporters: &[Reporter]) -> String {
        if reporters.is_empty() {
            return "No reporters found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Status", "Verified", "Articles", "Email"]);
        for reporter in reporters {
            builder.push_record(vec![
                reporter.id.clone(),
                reporter.name.clone(),
                reporter.status.to_string(),
                yes_no(reporter.is_verified).to_string(),
                reporter.articles.to_string(),
                reporter.email.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_reporter(&self, reporter: &Reporter) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID:        {}\n", reporter.id));
        output.push_str(&format!("Name:      {}\n", reporter.name));
        output.push_str(&format!("Status:    {}\n", reporter.status));
        output.push_str(&format!("Verified:  {}\n", yes_no(reporter.is_verified)));
        output.push_str(&format!("Articles:  {}\n", reporter.articles));
        output
    }

    fn format_epapers(&self, editions: &[EPaper]) -> String {
        if editions.is_empty() {
            return "No e-papers found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Date", "Active", "PDF"]);
        for edition in editions {
            builder.push_record(vec![
                edition.id.clone(),
                edition.date.to_string(),
                yes_no(edition.is_active).to_string(),
                edition.pdf_url.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_epaper(&self, edition: &EPaper) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID:        {}\n", edition.id));
        output.push_str(&format!("Date:      {}\n", edition.date));
        output.push_str(&format!("Active:    {}\n", yes_no(edition.is_active)));
        output.push_str(&format!("PDF:       {}\n", edition.secure_pdf_url()));
        if !edition.thumbnail_url.is_empty() {
            output.push_str(&format!("Thumbnail: {}\n", edition.thumbnail_url));
        }
        output
    }

    fn format_stats(&self, stats: &ModerationStats) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Pending", "Approved", "Rejected", "Verified", "Total"]);
        builder.push_record(vec![
            stats.pending.to_string(),
            stats.approved.to_string(),
            stats.rejected.to_string(),
            stats.verified.to_string(),
            stats.total.to_string(),
        ]);

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Key", "Label"]);
        for category in categories {
            builder.push_record(vec![category.key(), category.label()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_removed(&self, kind: &str, id: &str) -> String {
        format!("Deleted {kind} {id}")
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {error}")
    }
}

/// Plain text output formatter.
///
/// Formats data as simple whitespace-separated lines for scripting.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_posts(&self, posts: &[ContentItem], _has_more: bool) -> String {
        let mut output = String::new();
        for post in posts {
            output.push_str(&format!(
                "{} {} {} {}\n",
                post.id, post.status, post.category, post.title
            ));
        }
        output
    }

    fn format_post(&self, post: &ContentItem) -> String {
        format!("{} {} {}\n", post.id, post.status, post.title)
    }

    fn format_reporters(&self, reporters: &[Reporter]) -> String {
        let mut output = String::new();
        for reporter in reporters {
            output.push_str(&format!(
                "{} {} {} {}\n",
                reporter.id,
                reporter.status,
                yes_no(reporter.is_verified),
                reporter.name
            ));
        }
        output
    }

    fn format_reporter(&self, reporter: &Reporter) -> String {
        format!("{} {} {}\n", reporter.id, reporter.status, reporter.name)
    }

    fn format_epapers(&self, editions: &[EPaper]) -> String {
        let mut output = String::new();
        for edition in editions {
            output.push_str(&format!(
                "{} {} {} {}\n",
                edition.id,
                edition.date,
                if edition.is_active { "active" } else { "inactive" },
                edition.pdf_url
            ));
        }
        output
    }

    fn format_epaper(&self, edition: &EPaper) -> String {
        format!("{} {} {}\n", edition.id, edition.date, edition.secure_pdf_url())
    }

    fn format_stats(&self, stats: &ModerationStats) -> String {
        format!(
            "pending {}\napproved {}\nrejected {}\nverified {}\ntotal {}\n",
            stats.pending, stats.approved, stats.rejected, stats.verified, stats.total
        )
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        let mut output = String::new();
        for category in categories {
            output.push_str(&format!("{} {}\n", category.key(), category.label()));
        }
        output
    }

    fn format_removed(&self, kind: &str, id: &str) -> String {
        format!("deleted {kind} {id}\n")
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {error}")
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
///
/// # Returns
/// A boxed OutputFormatter instance
#[must_use]
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
