//! Locale configuration and locale-aligned value sets.
//!
//! The compiler processes every entity in all configured locales at once.
//! The first configured locale is the canonical one: its text drives
//! identifier assignment and all derived-field parsing.

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// The ordered list of locale tags for a compilation pass (e.g. `["na", "jp"]`).
///
/// Index 0 is the canonical locale. The design is specialized to two parallel
/// locale streams in practice but is N-locale general.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locales {
    tags: Vec<String>,
}

impl Locales {
    pub fn new(tags: Vec<String>) -> Result<Self, CompileError> {
        if tags.is_empty() {
            return Err(CompileError::NoLocales);
        }
        Ok(Self { tags })
    }

    /// Number of configured locales.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag of the canonical locale (the first configured one).
    pub fn canonical(&self) -> &str {
        &self.tags[0]
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// One value per configured locale, in locale order.
///
/// Index 0 holds the canonical-locale value. The values must describe the
/// same logical entity across locales (translations of one another); that
/// alignment is the caller's contract and is not structurally verifiable
/// here beyond arity checks at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleSet<T>(Vec<T>);

impl<T> LocaleSet<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical-locale value.
    ///
    /// Callers must have validated arity against the configured locale set
    /// first; an empty set panics.
    pub fn canonical(&self) -> &T {
        &self.0[0]
    }

    pub fn get(&self, locale_idx: usize) -> Option<&T> {
        self.0.get(locale_idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Build a new locale set by projecting each per-locale value.
    pub fn project<U>(&self, f: impl FnMut(&T) -> U) -> LocaleSet<U> {
        LocaleSet(self.0.iter().map(f).collect())
    }
}
