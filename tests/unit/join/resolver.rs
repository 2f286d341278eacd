use super::*;
use crate::animation::value::Attributes;
use std::collections::BTreeSet;

fn registry_of(keys: &[char]) -> SceneRegistry<char> {
    let mut reg = SceneRegistry::new();
    for &k in keys {
        reg.create(k, Attributes::new()).unwrap();
    }
    reg
}

fn key_set<'a>(keys: impl Iterator<Item = &'a char>) -> BTreeSet<char> {
    keys.copied().collect()
}

#[test]
fn disjoint_keys_enter_and_exit_everything() {
    let reg = registry_of(&['a', 'b', 'c']);
    let join = resolve_by_value(['x', 'y'], &reg);
    assert_eq!(join.enter_keys().copied().collect::<Vec<_>>(), vec!['x', 'y']);
    assert_eq!(join.exit_keys().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    assert!(join.update.is_empty());
}

#[test]
fn unchanged_keys_join_as_pure_update() {
    let reg = registry_of(&['a', 'b', 'c']);
    for _ in 0..2 {
        let join = resolve_by_value(['a', 'b', 'c'], &reg);
        assert_eq!(join.update_keys().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
        assert!(join.is_structurally_unchanged());
    }
}

#[test]
fn partitions_are_complete_and_disjoint() {
    let prior = ['a', 'b', 'c', 'd', 'e'];
    let reg = registry_of(&prior);
    let new = ['d', 'f', 'a', 'g'];
    let join = resolve_by_value(new, &reg);

    let enter = key_set(join.enter_keys());
    let update = key_set(join.update_keys());
    let exit = key_set(join.exit_keys());

    assert!(enter.is_disjoint(&update));
    assert!(enter.is_disjoint(&exit));
    assert!(update.is_disjoint(&exit));
    assert_eq!(
        enter.union(&update).copied().collect::<BTreeSet<_>>(),
        new.into_iter().collect()
    );
    assert_eq!(
        update.union(&exit).copied().collect::<BTreeSet<_>>(),
        prior.into_iter().collect()
    );
}

#[test]
fn update_pairs_datum_with_existing_element_and_new_slot() {
    let reg = registry_of(&['a', 'b']);
    let join = resolve(
        [("b", 2), ("a", 1)],
        |d: &(&str, i32)| d.0.chars().next().unwrap(),
        &reg,
    );
    assert_eq!(join.update.len(), 2);
    let first = &join.update[0];
    assert_eq!(first.key, 'b');
    assert_eq!(first.datum, ("b", 2));
    assert_eq!(first.element.key(), &'b');
    assert_eq!(first.slot, Slot { index: 0, count: 2 });
}

#[test]
fn exit_slots_refer_to_prior_alive_positions() {
    let reg = registry_of(&['a', 'b', 'c']);
    let join = resolve_by_value(['b'], &reg);
    let slots: Vec<_> = join.exit.iter().map(|x| (x.key, x.slot)).collect();
    assert_eq!(
        slots,
        vec![
            ('a', Slot { index: 0, count: 3 }),
            ('c', Slot { index: 2, count: 3 })
        ]
    );
}

#[test]
fn duplicate_keys_keep_first_occurrence() {
    let reg = SceneRegistry::<u32>::new();
    let join = resolve(
        [(1, "first"), (2, "other"), (1, "second")],
        |d: &(u32, &str)| d.0,
        &reg,
    );

    assert_eq!(join.enter.len(), 2);
    assert_eq!(join.enter[0].datum, (1, "first"));
    assert_eq!(join.enter[1].slot, Slot { index: 1, count: 2 });
    assert_eq!(join.duplicates.len(), 1);
    assert_eq!(join.duplicates[0].datum, (1, "second"));
    assert_eq!(join.duplicates[0].position, 2);
}

#[test]
fn structurally_equal_values_collide_under_default_identity() {
    let reg = SceneRegistry::<String>::new();
    let join = resolve_by_value(["a".to_owned(), "a".to_owned()], &reg);
    assert_eq!(join.enter.len(), 1);
    assert_eq!(join.duplicates.len(), 1);
}

#[test]
fn exiting_elements_are_not_authoritative() {
    let mut reg = registry_of(&['a', 'b']);
    reg.get_mut(&'a').unwrap().set_alive(false);

    // 'a' is mid-exit: it neither exits again nor counts as an update.
    let join = resolve_by_value(['b'], &reg);
    assert!(join.exit.is_empty());
    assert_eq!(join.update_keys().copied().collect::<Vec<_>>(), vec!['b']);

    // Re-entering 'a' revives it through the enter partition.
    let join = resolve_by_value(['a', 'b'], &reg);
    assert_eq!(join.enter.len(), 1);
    assert_eq!(join.enter[0].key, 'a');
    assert!(join.enter[0].revived);
}

#[test]
fn slot_fraction_handles_empty_sources() {
    assert_eq!(Slot { index: 0, count: 0 }.fraction(), 0.0);
    assert_eq!(Slot { index: 1, count: 4 }.fraction(), 0.25);
}
