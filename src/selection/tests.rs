use super::*;

fn ids(names: &[&str]) -> Vec<TrackId> {
    names.iter().map(|n| TrackId::from(*n)).collect()
}

fn store_with(names: &[&str], active: Option<&str>) -> SharedSelection {
    let store = SharedSelection::new(ids(names));
    if let Some(a) = active {
        store.set_active(a.into());
    }
    store
}

fn active(store: &SharedSelection) -> Option<String> {
    store.snapshot().active.map(|id| id.to_string())
}

#[test]
fn next_advances_then_wraps_to_first() {
    let store = store_with(&["A", "B", "C"], Some("B"));

    assert_eq!(select_next(&store), Some("C".into()));
    assert_eq!(active(&store).as_deref(), Some("C"));

    assert_eq!(select_next(&store), Some("A".into()));
    assert_eq!(active(&store).as_deref(), Some("A"));
}

#[test]
fn previous_from_first_wraps_to_last() {
    let store = store_with(&["A", "B", "C"], Some("A"));
    assert_eq!(select_previous(&store), Some("C".into()));
    assert_eq!(active(&store).as_deref(), Some("C"));
}

#[test]
fn next_then_previous_round_trips_for_every_position() {
    let list = ids(&["A", "B", "C", "D"]);
    for start in &list {
        let next = next_id(&list, Some(start)).unwrap();
        assert_eq!(previous_id(&list, Some(next)), Some(start));

        let prev = previous_id(&list, Some(start)).unwrap();
        assert_eq!(next_id(&list, Some(prev)), Some(start));
    }
}

#[test]
fn navigation_on_empty_list_is_a_noop() {
    let store = store_with(&[], Some("X"));
    let rx = store.subscribe();

    assert_eq!(select_next(&store), None);
    assert_eq!(select_previous(&store), None);
    assert_eq!(active(&store).as_deref(), Some("X"));
    assert!(rx.try_recv().is_err());
}

#[test]
fn unknown_active_id_starts_from_the_boundaries() {
    let list = ids(&["A", "B", "C"]);
    let stray = TrackId::from("Z");
    assert_eq!(next_id(&list, Some(&stray)), Some(&list[0]));
    assert_eq!(previous_id(&list, Some(&stray)), Some(&list[2]));
    assert_eq!(next_id(&list, None), Some(&list[0]));
    assert_eq!(previous_id(&list, None), Some(&list[2]));
}

#[test]
fn single_track_list_selects_itself() {
    let list = ids(&["A"]);
    assert_eq!(next_id(&list, Some(&list[0])), Some(&list[0]));
    assert_eq!(previous_id(&list, Some(&list[0])), Some(&list[0]));
}

#[test]
fn subscribers_only_hear_actual_changes() {
    let store = store_with(&["A", "B"], None);
    let rx = store.subscribe();

    store.set_active("A".into());
    store.set_active("A".into());
    store.set_active("B".into());

    let heard: Vec<TrackId> = rx.try_iter().collect();
    assert_eq!(heard, ids(&["A", "B"]));
}

#[test]
fn dropped_subscribers_are_pruned() {
    let store = store_with(&["A", "B"], None);
    let kept = store.subscribe();
    drop(store.subscribe());

    store.set_active("A".into());
    store.set_active("B".into());

    assert_eq!(kept.try_iter().count(), 2);
}

#[test]
fn clones_share_state() {
    let store = store_with(&["A", "B"], Some("A"));
    let other = store.clone();
    select_next(&other);
    assert_eq!(active(&store).as_deref(), Some("B"));
}
