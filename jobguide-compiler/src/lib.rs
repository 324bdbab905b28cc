//! Cross-locale text interning and action-metadata normalization.
//!
//! Takes guide pages scraped in parallel locales (already fetched and
//! field-extracted by the host) and produces a relationally-normalized
//! dataset: action records carrying integer identifiers into shared,
//! deduplicated per-locale string tables, with timings and combo
//! cross-references parsed out of the free-form description text.
//!
//! The engine is pure and synchronous: no I/O, no network, no shared
//! globals. A [`Compiler`] owns all interning tables for one pass; every
//! failure is fatal to that pass.

pub mod compile;
pub mod content;
pub mod error;
pub mod intern;
pub mod locale;
pub mod timing;
pub mod types;

pub use compile::Compiler;
pub use content::{ContentFields, resolve_content};
pub use error::CompileError;
pub use intern::{InternTable, TextTables};
pub use locale::{LocaleSet, Locales};
pub use timing::{INFINITE, parse_duration};
pub use types::{
    ActionRecord, EntityGroup, EntityInput, EntityKind, LanguagePack, Manifest, RawAction,
    RawEntity, icon_filename,
};
