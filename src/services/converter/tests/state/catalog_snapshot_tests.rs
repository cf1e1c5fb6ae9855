use super::*;
use crate::services::catalog::same_card;
use crate::test_utils::{card, lotr_set};

fn sample_sets() -> Vec<CanonicalSet> {
    vec![
        lotr_set("Core Set", true, vec![card("Gandalf", 5), card("Aragorn", 8)]),
        lotr_set("Promo", false, vec![card("Gandalf", 90)]),
        lotr_set("Over Hill and Under Hill", true, vec![card("Gandalf", 20)]),
    ]
}

#[test]
fn test_snapshot_indexes_searchable_sets_only() {
    let snapshot = CatalogSnapshot::new(sample_sets());

    assert_eq!(snapshot.card_count(), 4);
    assert_eq!(snapshot.index().card_count(), 3);
    assert_eq!(snapshot.index().bucket("gandalf").unwrap().len(), 2);
}

#[test]
fn test_sets_by_recency_orders_by_max_multiverse_id() {
    let snapshot = CatalogSnapshot::new(sample_sets());
    let ordered = snapshot.sets_by_recency();
    let names: Vec<&str> = ordered.iter().map(|set| set.name.as_str()).collect();

    assert_eq!(names, vec!["Promo", "Over Hill and Under Hill", "Core Set"]);
}

#[test]
fn test_find_card_by_id() {
    let snapshot = CatalogSnapshot::new(sample_sets());
    let promo = Arc::clone(&snapshot.sets()[1].cards[0]);

    let found = snapshot.find_card(promo.id).expect("promo card");
    assert!(same_card(&found, &promo));
    assert!(snapshot.find_card(Uuid::new_v4()).is_none());
}

#[test]
fn test_reload_swaps_without_touching_old_snapshot() {
    let shared = SharedCatalog::new(sample_sets());
    let before = shared.snapshot();

    let after = shared.reload(vec![lotr_set("Core Set", true, vec![card("Legolas", 2)])]);

    assert!(Arc::ptr_eq(&after, &shared.snapshot()));
    assert!(!Arc::ptr_eq(&before, &after));
    // The old snapshot still answers as before
    assert_eq!(before.index().bucket("gandalf").unwrap().len(), 2);
    assert!(after.index().bucket("gandalf").is_none());
    assert!(after.index().bucket("legolas").is_some());
}

#[test]
fn test_default_shared_catalog_is_empty() {
    let shared = SharedCatalog::default();
    assert!(shared.snapshot().index().is_empty());
    assert!(shared.snapshot().sets().is_empty());
}
