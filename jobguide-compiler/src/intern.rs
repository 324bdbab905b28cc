//! Cross-locale text interning tables.
//!
//! Each semantic category (role names, job names, action names,
//! classification labels, content blocks) gets its own table and ID space.
//! A table holds one ordered value sequence per locale; index `i` in every
//! locale's sequence denotes the same logical entity, so a single integer
//! identifier indexes the corresponding translation in every locale.
//!
//! Tables are append-only for the duration of a run: identifiers are dense,
//! 0-based, and assigned in canonical-locale first-seen order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::CompileError;
use crate::locale::LocaleSet;
use crate::types::LanguagePack;

/// A deduplicating table of locale-aligned values for one category.
///
/// `V` is `String` for scalar categories and `Vec<String>` for content
/// blocks, whose equality is structural (whole-sequence equality).
#[derive(Debug, Clone)]
pub struct InternTable<V> {
    /// One sequence per locale; `seqs[0]` is the canonical locale.
    seqs: Vec<Vec<V>>,
    /// Canonical value -> assigned identifier.
    index: HashMap<V, u32>,
}

impl<V: Clone + Eq + Hash + Debug> InternTable<V> {
    pub fn new(locale_count: usize) -> Self {
        Self {
            seqs: vec![Vec::new(); locale_count],
            index: HashMap::new(),
        }
    }

    /// Assign an identifier to a value observed in every locale at once.
    ///
    /// The canonical value is looked up by exact equality. On a hit the
    /// existing identifier is returned without mutating any sequence; the
    /// non-canonical values are assumed consistent with what was stored
    /// (optimistic consistency — debug builds warn on divergence). On a
    /// miss, every locale's value is appended at the same new index.
    pub fn intern(&mut self, values: &LocaleSet<V>) -> Result<u32, CompileError> {
        if values.len() != self.seqs.len() {
            return Err(CompileError::LocaleMismatch {
                expected: self.seqs.len(),
                got: values.len(),
            });
        }

        if let Some(&id) = self.index.get(values.canonical()) {
            #[cfg(debug_assertions)]
            self.warn_on_divergence(id, values);
            return Ok(id);
        }

        let id = self.seqs[0].len() as u32;
        for (seq, value) in self.seqs.iter_mut().zip(values.iter()) {
            seq.push(value.clone());
        }
        self.index.insert(values.canonical().clone(), id);
        Ok(id)
    }

    /// Look up the identifier already assigned to a canonical-locale value.
    pub fn index_of<Q>(&self, canonical: &Q) -> Option<u32>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(canonical).copied()
    }

    /// Number of interned entries (equal across all locale sequences).
    pub fn len(&self) -> usize {
        self.seqs[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.seqs[0].is_empty()
    }

    /// The ordered value sequence for one locale.
    pub fn locale_seq(&self, locale_idx: usize) -> &[V] {
        &self.seqs[locale_idx]
    }

    #[cfg(debug_assertions)]
    fn warn_on_divergence(&self, id: u32, values: &LocaleSet<V>) {
        for (locale_idx, value) in values.iter().enumerate().skip(1) {
            let stored = &self.seqs[locale_idx][id as usize];
            if stored != value {
                log::warn!(
                    "locale {} value for id {} diverges from stored entry: {:?} != {:?}",
                    locale_idx,
                    id,
                    value,
                    stored
                );
            }
        }
    }
}

/// The five per-category tables of one compilation pass.
#[derive(Debug, Clone)]
pub struct TextTables {
    pub roles: InternTable<String>,
    pub jobs: InternTable<String>,
    pub actions: InternTable<String>,
    pub classifications: InternTable<String>,
    pub contents: InternTable<Vec<String>>,
}

impl TextTables {
    pub fn new(locale_count: usize) -> Self {
        Self {
            roles: InternTable::new(locale_count),
            jobs: InternTable::new(locale_count),
            actions: InternTable::new(locale_count),
            classifications: InternTable::new(locale_count),
            contents: InternTable::new(locale_count),
        }
    }

    /// Snapshot every table's sequence for one locale as a language pack.
    pub fn language_pack(&self, locale_idx: usize) -> LanguagePack {
        LanguagePack {
            job: self.jobs.locale_seq(locale_idx).to_vec(),
            role: self.roles.locale_seq(locale_idx).to_vec(),
            action: self.actions.locale_seq(locale_idx).to_vec(),
            classification: self.classifications.locale_seq(locale_idx).to_vec(),
            content: self.contents.locale_seq(locale_idx).to_vec(),
        }
    }
}
