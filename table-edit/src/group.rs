//! Registry of grouped tables.

use std::collections::HashMap;

use crate::editor::EditorId;

/// Tables that submit together, keyed by group.
///
/// Members are kept in registration order. The newest member of a group is the
/// one that keeps its submit control.
#[derive(Debug, Default, Clone)]
pub struct GroupRegistry {
    groups: HashMap<String, Vec<EditorId>>,
}

impl GroupRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Add an editor to a group.
    ///
    /// Returns the members registered before it, which must give up their
    /// submit control.
    pub fn register(&mut self, group: impl Into<String>, id: EditorId) -> Vec<EditorId> {
        let members = self.groups.entry(group.into()).or_default();
        let previous = members.clone();
        members.push(id);
        previous
    }

    /// Members of a group in registration order.
    pub fn members(&self, group: &str) -> &[EditorId] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The member that owns the group's submit control.
    pub fn submitter(&self, group: &str) -> Option<EditorId> {
        self.members(group).last().copied()
    }

    pub fn contains(&self, group: &str, id: EditorId) -> bool {
        self.members(group).contains(&id)
    }

    /// Get total number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no group has been registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
