use chrono::Utc;
use shared::{
    domain::Member,
    protocol::{GroupView, MemberSummary, ResultPayload},
};

pub fn to_display_result(groups: &[Vec<Member>], group_size: usize) -> ResultPayload {
    let groups: Vec<GroupView> = groups
        .iter()
        .enumerate()
        .map(|(index, members)| GroupView {
            number: index + 1,
            members: members.iter().map(MemberSummary::from).collect(),
        })
        .collect();

    ResultPayload {
        session_id: None,
        group_size,
        total_members: groups.iter().map(|g| g.members.len()).sum(),
        groups,
        generated_at: Utc::now(),
    }
}
