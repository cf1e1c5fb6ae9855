use std::sync::Once;

use deckmatch_lib::services::catalog::{CanonicalCard, CanonicalSet};
use deckmatch_lib::services::converter::LOTR_GAME_ID;
use uuid::Uuid;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn lotr_set(name: &str, cards: &[(&str, i32)]) -> CanonicalSet {
    let cards = cards
        .iter()
        .map(|(card_name, multiverse_id)| {
            CanonicalCard::new(Uuid::new_v4(), *card_name, *multiverse_id)
        })
        .collect();
    CanonicalSet::new(Uuid::new_v4(), name, LOTR_GAME_ID, true, cards).expect("valid set")
}
