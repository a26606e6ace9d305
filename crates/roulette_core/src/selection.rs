//! Selected/unselected bookkeeping over a roster snapshot.

use std::collections::HashSet;

use shared::domain::{Member, MemberId};
use tracing::debug;

/// Owns the selected half of a roster. The unselected half is never stored;
/// it is derived on demand from the roster with [`derived_unselected`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: Vec<Member>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[Member] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected.iter().any(|m| &m.id == id)
    }

    pub fn select_all(&mut self, roster: &[Member]) -> &[Member] {
        let mut seen = HashSet::with_capacity(roster.len());
        let mut next: Vec<Member> = roster
            .iter()
            .filter(|m| seen.insert(&m.id))
            .cloned()
            .collect();
        next.sort();
        self.selected = next;
        &self.selected
    }

    pub fn unselect_all(&mut self) -> &[Member] {
        self.selected.clear();
        &self.selected
    }

    /// Unknown ids are ignored: the caller may hold an id from an older
    /// roster snapshot.
    pub fn select(&mut self, id: &MemberId, roster: &[Member]) -> &[Member] {
        if self.is_selected(id) {
            return &self.selected;
        }
        let Some(member) = roster.iter().find(|m| &m.id == id) else {
            debug!(member_id = %id, "select ignored; id not in roster");
            return &self.selected;
        };

        let pos = self
            .selected
            .binary_search(member)
            .unwrap_or_else(|pos| pos);
        self.selected.insert(pos, member.clone());
        &self.selected
    }

    pub fn unselect(&mut self, id: &MemberId) -> &[Member] {
        let before = self.selected.len();
        self.selected.retain(|m| &m.id != id);
        if self.selected.len() == before {
            debug!(member_id = %id, "unselect ignored; id not selected");
        }
        &self.selected
    }

    /// Re-reads the selection against a refreshed roster: members that left
    /// the roster are dropped and the rest pick up the roster's current copy.
    pub fn retain_roster(&mut self, roster: &[Member]) -> &[Member] {
        let ids: HashSet<&MemberId> = self.selected.iter().map(|m| &m.id).collect();
        let mut seen = HashSet::with_capacity(ids.len());
        let mut next: Vec<Member> = roster
            .iter()
            .filter(|m| ids.contains(&m.id) && seen.insert(&m.id))
            .cloned()
            .collect();
        next.sort();
        self.selected = next;
        &self.selected
    }
}

pub fn derived_unselected(roster: &[Member], selected: &[Member]) -> Vec<Member> {
    let selected_ids: HashSet<&MemberId> = selected.iter().map(|m| &m.id).collect();
    let mut unselected: Vec<Member> = roster
        .iter()
        .filter(|m| !selected_ids.contains(&m.id))
        .cloned()
        .collect();
    unselected.sort();
    unselected
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
