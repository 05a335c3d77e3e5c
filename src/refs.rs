//! Cross-reference resolution.
//!
//! Every member is entered twice, under its internal id and under its raw
//! display name, and both keys share one [`RefTarget`].

use crate::error::{Error, Result};
use crate::escape::Escaper;
use crate::model::MemberRecord;
use std::collections::HashMap;
use std::rc::Rc;

/// Resolved target of a cross-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefTarget {
    /// Escaped display name
    pub name: String,
    /// External manual label
    pub label: String,
    /// Internal id
    pub id: String,
}

/// Lookup table from id or name to [`RefTarget`].
///
/// Names are not checked for uniqueness: when two members share a name, the
/// later member owns the name key. Id keys are always distinct.
#[derive(Debug, Clone, Default)]
pub struct RefTable {
    entries: HashMap<String, Rc<RefTarget>>,
}

impl RefTable {
    /// A table with no entries; references render as empty strings against it.
    pub fn empty() -> Self {
        RefTable::default()
    }

    pub fn build(members: &[MemberRecord<'_>], escaper: &Escaper) -> Result<Self> {
        let mut entries: HashMap<String, Rc<RefTarget>> = HashMap::with_capacity(members.len() * 2);
        for member in members {
            let target = Rc::new(RefTarget {
                name: escaper.escape(&member.name),
                label: member.label()?.to_string(),
                id: member.id.to_string(),
            });
            entries.insert(member.id.to_string(), Rc::clone(&target));
            if let Some(previous) = entries.insert(member.name.clone(), Rc::clone(&target)) {
                if previous.id != target.id {
                    tracing::warn!(
                        name = %member.name,
                        replaced = %previous.id,
                        by = %target.id,
                        "duplicate member name, references by name resolve to the later member"
                    );
                }
            }
        }
        Ok(RefTable { entries })
    }

    pub fn lookup(&self, key: &str) -> Result<&RefTarget> {
        self.entries
            .get(key)
            .map(Rc::as_ref)
            .ok_or_else(|| Error::UnresolvedReference(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
