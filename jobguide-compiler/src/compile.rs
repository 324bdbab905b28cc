//! The two-pass compilation driver.
//!
//! Pass 1 walks every entity in input order and interns names,
//! classifications and content blocks across all locales, parsing cast and
//! recast from the canonical-locale text as it goes. Pass 2 then resolves
//! `Duration:` and `Combo Action:` annotations against the fully populated
//! action-name table, so combo references may point at actions of any
//! entity, earlier or later in the run.
//!
//! A `Compiler` owns the tables for the duration of a pass; any error
//! leaves them in an unusable state (tables never roll back).

use crate::content::resolve_content;
use crate::error::CompileError;
use crate::intern::TextTables;
use crate::locale::{LocaleSet, Locales};
use crate::timing::parse_duration;
use crate::types::{ActionRecord, EntityGroup, EntityInput, EntityKind, RawEntity, icon_filename};

/// Owns the interning tables for one compilation pass.
pub struct Compiler {
    locales: Locales,
    tables: TextTables,
}

impl Compiler {
    pub fn new(locales: Locales) -> Self {
        let tables = TextTables::new(locales.len());
        Self { locales, tables }
    }

    pub fn locales(&self) -> &Locales {
        &self.locales
    }

    pub fn tables(&self) -> &TextTables {
        &self.tables
    }

    pub fn into_tables(self) -> TextTables {
        self.tables
    }

    /// Normalize every entity, preserving input order.
    pub fn compile(&mut self, entities: &[EntityInput]) -> Result<Vec<EntityGroup>, CompileError> {
        let mut groups = Vec::with_capacity(entities.len());
        for entity in entities {
            groups.push(self.intern_entity(entity)?);
        }

        // Action names are all interned now; cross-references can resolve
        // regardless of entity order.
        for group in &mut groups {
            for action in &mut group.actions {
                let lines = &self.tables.contents.locale_seq(0)[action.content_id as usize];
                let fields = resolve_content(lines, &self.tables.actions)?;
                action.duration_seconds = fields.duration_seconds;
                action.combo_action_ids = fields.combo_action_ids;
            }
        }

        Ok(groups)
    }

    /// Pass 1 for one entity: intern everything, parse timings, derive icon
    /// filenames. Duration/combo fields are left at their defaults.
    fn intern_entity(&mut self, entity: &EntityInput) -> Result<EntityGroup, CompileError> {
        self.check_alignment(&entity.pages)?;
        let canonical = entity.pages.canonical();

        let name_values = entity.pages.project(|page| page.name.clone());
        let (name_id, role_id) = match entity.kind {
            EntityKind::Role => (self.tables.roles.intern(&name_values)?, None),
            EntityKind::Job => {
                let role_values = entity
                    .pages
                    .iter()
                    .map(|page| {
                        page.role.clone().ok_or_else(|| CompileError::MissingRole {
                            slug: page.slug.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let role_id = self.tables.roles.intern(&LocaleSet::new(role_values))?;
                (self.tables.jobs.intern(&name_values)?, Some(role_id))
            }
        };

        let mut actions = Vec::with_capacity(canonical.actions.len());
        for i in 0..canonical.actions.len() {
            let raw = &canonical.actions[i];
            actions.push(ActionRecord {
                name_id: self
                    .tables
                    .actions
                    .intern(&entity.pages.project(|page| page.actions[i].skillname.clone()))?,
                icon: icon_filename(&raw.icon).to_string(),
                classification_id: self.tables.classifications.intern(
                    &entity
                        .pages
                        .project(|page| page.actions[i].classification.clone()),
                )?,
                cast_seconds: parse_duration(&raw.cast)?,
                recast_seconds: parse_duration(&raw.recast)?,
                content_id: self
                    .tables
                    .contents
                    .intern(&entity.pages.project(|page| page.actions[i].content.clone()))?,
                duration_seconds: 0.0,
                combo_action_ids: Vec::new(),
            });
        }

        log::debug!(
            "interned {} actions for {:?} page {}",
            actions.len(),
            entity.kind,
            canonical.slug
        );

        Ok(EntityGroup {
            kind: entity.kind,
            slug: canonical.slug.clone(),
            name_id,
            icon: icon_filename(&canonical.icon).to_string(),
            role_id,
            actions,
        })
    }

    /// Every configured locale must be present and carry the same number of
    /// actions; beyond that, cross-locale content alignment is the caller's
    /// contract.
    fn check_alignment(&self, pages: &LocaleSet<RawEntity>) -> Result<(), CompileError> {
        if pages.len() != self.locales.len() {
            return Err(CompileError::LocaleMismatch {
                expected: self.locales.len(),
                got: pages.len(),
            });
        }
        let expected = pages.canonical().actions.len();
        for page in pages.iter() {
            if page.actions.len() != expected {
                return Err(CompileError::LocaleMismatch {
                    expected,
                    got: page.actions.len(),
                });
            }
        }
        Ok(())
    }
}
