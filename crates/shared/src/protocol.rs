use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Member, MemberId, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: MemberId,
    pub name: String,
}

impl From<&Member> for MemberSummary {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupView {
    /// 1-based position of the group in the result.
    pub number: usize,
    pub members: Vec<MemberSummary>,
}

impl GroupView {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }
}

/// Everything the display side needs to present one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    pub group_size: usize,
    pub total_members: usize,
    pub groups: Vec<GroupView>,
    pub generated_at: DateTime<Utc>,
}

impl ResultPayload {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
