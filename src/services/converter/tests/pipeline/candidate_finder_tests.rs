use std::sync::Arc;

use uuid::Uuid;

use super::*;
use crate::services::catalog::{same_card, CanonicalSet};
use crate::test_utils::{card, lotr_set, record, set_for_game};

fn build_index(sets: Vec<CanonicalSet>) -> (Vec<Arc<CanonicalSet>>, NameIndex) {
    let sets: Vec<Arc<CanonicalSet>> = sets.into_iter().map(Arc::new).collect();
    let index = NameIndex::build(&sets);
    (sets, index)
}

#[test]
fn test_exact_name_with_hobbit_set_alias() {
    let (sets, index) = build_index(vec![lotr_set(
        "The Hobbit: An Unexpected Journey",
        true,
        vec![card("Ring of Barahir", 10)],
    )]);

    let found = find_candidates(
        &record("Ring of Barahir", "An Unexpected Journey", 1),
        &index,
        &SetAliasResolver::default(),
    );

    assert_eq!(found.len(), 1);
    assert!(same_card(&found[0], &sets[0].cards[0]));
}

#[test]
fn test_single_name_matches_dual_card() {
    let (_, index) = build_index(vec![lotr_set(
        "Core Set",
        true,
        vec![card("Aragorn/Strider", 3)],
    )]);
    let resolver = SetAliasResolver::default();

    let found = find_candidates(&record("Aragorn", "", 1), &index, &resolver);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Aragorn/Strider");

    // Dual import against the same card agrees on both names
    let found = find_candidates(&record("aragorn / strider", "", 1), &index, &resolver);
    assert_eq!(found.len(), 1);

    // Second name disagrees
    let found = find_candidates(&record("Aragorn/Elessar", "", 1), &index, &resolver);
    assert!(found.is_empty());
}

#[test]
fn test_dual_import_matches_single_name_card() {
    let (_, index) = build_index(vec![lotr_set("Core Set", true, vec![card("Gandalf", 3)])]);

    let found = find_candidates(
        &record("Gandalf/Stormcrow", "", 1),
        &index,
        &SetAliasResolver::default(),
    );
    assert_eq!(found.len(), 1);
}

#[test]
fn test_overlap_rule_accepts_every_dual_sharing_first_name() {
    let (_, index) = build_index(vec![lotr_set(
        "Core Set",
        true,
        vec![card("Gandalf/Stormcrow", 1), card("Gandalf/Grey Pilgrim", 2)],
    )]);

    let found = find_candidates(&record("Gandalf", "", 1), &index, &SetAliasResolver::default());
    assert_eq!(found.len(), 2);
}

#[test]
fn test_set_label_filters_candidates() {
    let (_, index) = build_index(vec![
        lotr_set("Core Set", true, vec![card("Gandalf", 5)]),
        lotr_set("Over Hill and Under Hill", true, vec![card("Gandalf", 20)]),
    ]);

    let found = find_candidates(
        &record("Gandalf", "The Hobbit - Over Hill and Under Hill", 1),
        &index,
        &SetAliasResolver::default(),
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].multiverse_id, 20);
}

#[test]
fn test_blank_set_label_skips_set_comparison() {
    let (_, index) = build_index(vec![
        lotr_set("Core Set", true, vec![card("Gandalf", 5)]),
        lotr_set("Over Hill and Under Hill", true, vec![card("Gandalf", 20)]),
    ]);

    let found = find_candidates(
        &record("Gandalf", "  ", 1),
        &index,
        &SetAliasResolver::default(),
    );
    assert_eq!(found.len(), 2);
    // Bucket order is preserved
    assert_eq!(found[0].multiverse_id, 5);
    assert_eq!(found[1].multiverse_id, 20);
}

#[test]
fn test_other_game_ignores_set_label() {
    let other_game = Uuid::new_v4();
    let (_, index) = build_index(vec![set_for_game(
        other_game,
        "Alpha",
        vec![card("Black Lotus", 600)],
    )]);

    let found = find_candidates(
        &record("Black Lotus", "Beta", 1),
        &index,
        &SetAliasResolver::default(),
    );
    assert_eq!(found.len(), 1);
}

#[test]
fn test_unknown_name_returns_empty() {
    let (_, index) = build_index(vec![lotr_set("Core Set", true, vec![card("Gandalf", 5)])]);

    let found = find_candidates(
        &record("Saruman", "", 1),
        &index,
        &SetAliasResolver::default(),
    );
    assert!(found.is_empty());
}

#[test]
fn test_names_agree_overlap_only() {
    let a = vec!["gandalf".to_string()];
    let b = vec!["gandalf".to_string(), "stormcrow".to_string()];
    let c = vec!["gandalf".to_string(), "grey pilgrim".to_string()];

    assert!(names_agree(&a, &b));
    assert!(names_agree(&b, &a));
    assert!(!names_agree(&b, &c));
}

#[test]
fn test_set_check_uses_owning_set_name() {
    // Cards pushed after construction never get their set fields stamped
    let mut set = lotr_set("The Hobbit: On the Doorstep", true, Vec::new());
    let ring = Arc::new(card("Ring of Barahir", 4));
    assert!(ring.set_name.is_empty());
    set.cards.push(CardRef::clone(&ring));
    let (_, index) = build_index(vec![set]);

    let found = find_candidates(
        &record("Ring of Barahir", "On the Doorstep", 1),
        &index,
        &SetAliasResolver::default(),
    );

    assert_eq!(found.len(), 1);
    assert!(same_card(&found[0], &ring));
}
