//! Derived fields parsed out of an action's description text.
//!
//! Two annotation prefixes are recognized in the canonical-locale content
//! lines: `Duration:` feeds the duration parser, and `Combo Action:` names
//! one or more actions (joined with " or ") that must already be interned
//! in the canonical action-name table. Combo resolution therefore runs only
//! after the whole pass has interned every action name (see
//! [`crate::compile`]); a missing name at that point is a genuine data
//! mismatch and fails the pass.

use crate::error::CompileError;
use crate::intern::InternTable;
use crate::timing::parse_duration;

const DURATION_PREFIX: &str = "Duration:";
const COMBO_PREFIX: &str = "Combo Action:";
const COMBO_SEPARATOR: &str = " or ";

/// Fields derived from one action's content lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFields {
    pub duration_seconds: f64,
    pub combo_action_ids: Vec<u32>,
}

impl Default for ContentFields {
    fn default() -> Self {
        Self {
            duration_seconds: 0.0,
            combo_action_ids: Vec::new(),
        }
    }
}

/// Scan canonical-locale content lines for `Duration:` and `Combo Action:`
/// annotations. Last matching line wins for either prefix; lines without a
/// recognized prefix are ignored and absent annotations leave the defaults
/// (`0.0`, no combo references).
pub fn resolve_content(
    lines: &[String],
    actions: &InternTable<String>,
) -> Result<ContentFields, CompileError> {
    let mut fields = ContentFields::default();

    for line in lines {
        if let Some(rest) = line.strip_prefix(DURATION_PREFIX) {
            fields.duration_seconds = parse_duration(rest)?;
        } else if let Some(rest) = line.strip_prefix(COMBO_PREFIX) {
            fields.combo_action_ids = rest
                .split(COMBO_SEPARATOR)
                .map(|part| {
                    let name = part.trim();
                    actions
                        .index_of(name)
                        .ok_or_else(|| CompileError::UnresolvedCombo {
                            name: name.to_string(),
                        })
                })
                .collect::<Result<_, _>>()?;
        }
    }

    Ok(fields)
}
