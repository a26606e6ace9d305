use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};
use shared::error::{ApiError, ErrorCode};

use super::*;

fn seven() -> Vec<Member> {
    ["Grace", "Alice", "Frank", "Bob", "Erin", "Carol", "Dave"]
        .iter()
        .enumerate()
        .map(|(i, name)| Member::new(format!("m{i}"), *name))
        .collect()
}

#[test]
fn new_session_waits_for_roster() {
    let mut session = Session::new(InitialSelection::All);
    assert_eq!(session.status(), &RosterStatus::Loading);
    let err = session.select_all().expect_err("roster not loaded");
    assert!(matches!(err, RouletteError::RosterUnavailable(RosterStatus::Loading)));
    assert!(matches!(session.roll(), Err(RouletteError::RosterUnavailable(_))));
}

#[test]
fn initial_selection_all_selects_everyone_sorted() {
    let session = Session::with_roster(InitialSelection::All, seven());
    let names: Vec<_> = session.selected().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace"]
    );
    assert!(session.unselected().is_empty());
}

#[test]
fn initial_selection_none_starts_empty() {
    let session = Session::with_roster(InitialSelection::None, seven());
    assert!(session.selected().is_empty());
    assert_eq!(session.unselected().len(), 7);
}

#[test]
fn size_zero_blocks_roll() {
    let session = Session::with_roster(InitialSelection::All, seven());
    assert_eq!(session.roll_block(), Some(RollBlock::SizeUnset));
    let err = session.roll().expect_err("blocked");
    assert_eq!(err, RouletteError::Blocked(RollBlock::SizeUnset));
}

#[test]
fn size_above_selected_count_blocks_roll() {
    let mut session = Session::with_roster(InitialSelection::None, seven());
    for id in ["m0", "m1", "m2", "m3"] {
        session.select(&MemberId::from(id)).expect("select");
    }
    session.set_group_size(5);
    assert_eq!(
        session.roll_block(),
        Some(RollBlock::SizeExceedsSelected {
            size: 5,
            selected: 4
        })
    );
    let api = ApiError::from(&session.roll().expect_err("blocked"));
    assert_eq!(api.code, ErrorCode::GroupSizeTooLarge);
}

#[test]
fn seven_members_by_three_rolls_three_two_two() {
    let mut session = Session::with_roster(InitialSelection::All, seven());
    assert_eq!(session.set_group_size_input("3"), 3);
    let mut rng = StdRng::seed_from_u64(1);
    let payload = session.roll_using(&mut rng).expect("roll");

    let sizes: Vec<_> = payload.groups.iter().map(|g| g.members.len()).collect();
    assert_eq!(sizes, vec![3, 2, 2]);
    assert_eq!(payload.total_members, 7);
    assert_eq!(payload.session_id, Some(session.id()));

    let ids: HashSet<_> = payload
        .groups
        .iter()
        .flat_map(|g| g.members.iter().map(|m| m.id.clone()))
        .collect();
    assert_eq!(ids.len(), 7);
}

#[test]
fn five_members_by_five_is_single_group() {
    let roster: Vec<_> = seven().into_iter().take(5).collect();
    let mut session = Session::with_roster(InitialSelection::All, roster);
    session.set_group_size(5);
    let payload = session.roll().expect("roll");
    assert_eq!(payload.group_count(), 1);
    assert_eq!(payload.groups[0].members.len(), 5);
}

#[test]
fn invalid_size_text_disables_roll() {
    let mut session = Session::with_roster(InitialSelection::All, seven());
    session.set_group_size_input("two");
    assert_eq!(session.group_size(), 0);
    assert_eq!(session.roll_block(), Some(RollBlock::SizeUnset));
}

#[test]
fn roll_does_not_reorder_selection() {
    let mut session = Session::with_roster(InitialSelection::All, seven());
    session.set_group_size(2);
    let before = session.selected().to_vec();
    session.roll().expect("roll");
    assert_eq!(session.selected(), before.as_slice());
}

#[test]
fn refresh_keeps_selection_for_remaining_members() {
    let mut session = Session::with_roster(InitialSelection::None, seven());
    session.select(&MemberId::from("m1")).expect("select");
    session.select(&MemberId::from("m6")).expect("select");

    let refreshed: Vec<_> = seven().into_iter().filter(|m| m.id.as_str() != "m6").collect();
    session.roster_loaded(refreshed);

    let ids: Vec<_> = session.selected().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["m1"]);
    assert_eq!(session.unselected().len(), 5);
}

#[test]
fn failed_refresh_gates_operations() {
    let mut session = Session::with_roster(InitialSelection::All, seven());
    session.roster_failed("connection refused");
    let err = session.unselect(&MemberId::from("m1")).expect_err("gated");
    assert_eq!(
        err,
        RouletteError::RosterUnavailable(RosterStatus::Failed("connection refused".into()))
    );
    assert_eq!(session.selected().len(), 7);
}

#[test]
fn sessions_do_not_share_selection() {
    let mut a = Session::with_roster(InitialSelection::All, seven());
    let b = Session::with_roster(InitialSelection::All, seven());
    a.unselect_all().expect("unselect");
    assert!(a.selected().is_empty());
    assert_eq!(b.selected().len(), 7);
    assert_ne!(a.id(), b.id());
}
