//! Data model: raw scraped input on one side, normalized numeric records
//! plus per-locale language packs on the other.
//!
//! Raw field names follow the scraped JSON so a manifest can be fed straight
//! from the fetch layer. Output records carry only integer identifiers into
//! the interning tables (plus verbatim icon filenames), keeping the dataset
//! locale-independent.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleSet;

// ── Input contract ──────────────────────────────────────────────────────────

/// One table row from a guide page, fields still raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAction {
    /// Icon image URL as scraped.
    pub icon: String,
    pub skillname: String,
    pub classification: String,
    pub cast: String,
    pub recast: String,
    /// Description text, one entry per line as extracted from the cell.
    #[serde(default)]
    pub content: Vec<String>,
}

/// Whether a page describes a role (shared actions) or a single job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Role,
    Job,
}

/// One scraped guide page in one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntity {
    /// URL slug of the page; keys output filenames, never interned.
    pub slug: String,
    /// Role name for role pages, job name for job pages.
    pub name: String,
    /// Entity icon URL as scraped.
    pub icon: String,
    /// Owning role's name; present on job pages only.
    #[serde(default)]
    pub role: Option<String>,
    pub actions: Vec<RawAction>,
}

/// A locale-aligned bundle of the same page fetched in every configured
/// locale, in locale order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityInput {
    pub kind: EntityKind,
    pub pages: LocaleSet<RawEntity>,
}

/// Top-level scrape manifest consumed by a compilation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub locales: Vec<String>,
    pub entities: Vec<EntityInput>,
}

// ── Output contract ─────────────────────────────────────────────────────────

/// A normalized action: numeric identifiers and derived timing fields.
///
/// `name_id`, `classification_id` and `content_id` are foreign keys into
/// the respective interning tables. `combo_action_ids` are self-referential
/// keys into the action-name table, in source "X or Y" order. Timing fields
/// are seconds, with `-1.0` meaning unbounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRecord {
    pub name_id: u32,
    /// Final path segment of the canonical-locale icon URL.
    pub icon: String,
    pub classification_id: u32,
    pub cast_seconds: f64,
    pub recast_seconds: f64,
    pub content_id: u32,
    pub duration_seconds: f64,
    pub combo_action_ids: Vec<u32>,
}

/// A role or job with its normalized actions.
///
/// `name_id` indexes the role-name table for roles and the job-name table
/// for jobs; `role_id` indexes the role-name table and is present on jobs
/// only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityGroup {
    pub kind: EntityKind,
    pub slug: String,
    pub name_id: u32,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<u32>,
    pub actions: Vec<ActionRecord>,
}

/// One locale's view of the final interning tables, emitted as a
/// locale-keyed text dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguagePack {
    pub job: Vec<String>,
    pub role: Vec<String>,
    pub action: Vec<String>,
    #[serde(rename = "type")]
    pub classification: Vec<String>,
    pub content: Vec<Vec<String>>,
}

/// Final path segment of an icon URL.
pub fn icon_filename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
