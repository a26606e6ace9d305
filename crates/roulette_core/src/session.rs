//! One user's roster, selection and group size.

use rand::Rng;
use shared::{
    domain::{InitialSelection, Member, MemberId, RosterStatus, SessionId},
    protocol::ResultPayload,
};
use tracing::{info, warn};

use crate::{
    display::to_display_result,
    error::{RollBlock, RouletteError},
    input::parse_group_size,
    partition::{check_group_size, roll_with},
    selection::{derived_unselected, SelectionManager},
};

/// Session-scoped state. Sessions never share a selection; callers that
/// serve several users keep one `Session` per user.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    status: RosterStatus,
    roster: Vec<Member>,
    selection: SelectionManager,
    group_size: usize,
    initial_selection: InitialSelection,
    roster_seen: bool,
}

impl Session {
    pub fn new(initial_selection: InitialSelection) -> Self {
        Self {
            id: SessionId::new(),
            status: RosterStatus::Loading,
            roster: Vec::new(),
            selection: SelectionManager::new(),
            group_size: 0,
            initial_selection,
            roster_seen: false,
        }
    }

    pub fn with_roster(initial_selection: InitialSelection, roster: Vec<Member>) -> Self {
        let mut session = Self::new(initial_selection);
        session.roster_loaded(roster);
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn status(&self) -> &RosterStatus {
        &self.status
    }

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn selected(&self) -> &[Member] {
        self.selection.selected()
    }

    pub fn unselected(&self) -> Vec<Member> {
        derived_unselected(&self.roster, self.selection.selected())
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Installs a roster. The first roster applies the initial selection; a
    /// refresh keeps the current selection minus members that disappeared.
    pub fn roster_loaded(&mut self, roster: Vec<Member>) {
        self.roster = roster;
        self.status = RosterStatus::Available;
        if self.roster_seen {
            self.selection.retain_roster(&self.roster);
        } else {
            self.roster_seen = true;
            match self.initial_selection {
                InitialSelection::All => {
                    self.selection.select_all(&self.roster);
                }
                InitialSelection::None => {
                    self.selection.unselect_all();
                }
            }
        }
        info!(
            session_id = %self.id,
            roster = self.roster.len(),
            selected = self.selection.len(),
            "roster available"
        );
    }

    pub fn roster_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(session_id = %self.id, %reason, "roster unavailable");
        self.status = RosterStatus::Failed(reason);
    }

    pub fn select(&mut self, id: &MemberId) -> Result<&[Member], RouletteError> {
        self.ensure_available()?;
        Ok(self.selection.select(id, &self.roster))
    }

    pub fn unselect(&mut self, id: &MemberId) -> Result<&[Member], RouletteError> {
        self.ensure_available()?;
        Ok(self.selection.unselect(id))
    }

    pub fn select_all(&mut self) -> Result<&[Member], RouletteError> {
        self.ensure_available()?;
        Ok(self.selection.select_all(&self.roster))
    }

    pub fn unselect_all(&mut self) -> Result<&[Member], RouletteError> {
        self.ensure_available()?;
        Ok(self.selection.unselect_all())
    }

    pub fn set_group_size(&mut self, size: usize) {
        self.group_size = size;
    }

    /// Sets the group size from raw text input and returns the parsed value.
    pub fn set_group_size_input(&mut self, text: &str) -> usize {
        self.group_size = parse_group_size(text);
        self.group_size
    }

    /// `None` when a roll can run with the current selection and size.
    pub fn roll_block(&self) -> Option<RollBlock> {
        check_group_size(self.selection.len(), self.group_size)
            .err()
            .map(RollBlock::from)
    }

    pub fn roll(&self) -> Result<ResultPayload, RouletteError> {
        self.roll_using(&mut rand::thread_rng())
    }

    pub fn roll_using<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ResultPayload, RouletteError> {
        self.ensure_available()?;
        if let Some(block) = self.roll_block() {
            return Err(block.into());
        }

        let groups = roll_with(self.selection.selected(), self.group_size, rng)?;
        let mut payload = to_display_result(&groups, self.group_size);
        payload.session_id = Some(self.id);
        info!(
            session_id = %self.id,
            members = payload.total_members,
            group_size = self.group_size,
            groups = payload.group_count(),
            "rolled groups"
        );
        Ok(payload)
    }

    fn ensure_available(&self) -> Result<(), RouletteError> {
        if self.status.is_available() {
            Ok(())
        } else {
            Err(RouletteError::RosterUnavailable(self.status.clone()))
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
