//! Property tests for selection and placement

use mb_core::catalog::{
    ObjectTemplate, TemplateParts, PROP_CANONICAL_BLUEPRINT, TAG_BASE_OBJECT,
    TAG_NO_MYSTERY_BOX, TAG_TERRAIN,
};
use mb_core::host::World;
use mb_core::object::{GameObject, Position};
use mb_core::prize::{choose_cell, is_valid_prize, PrizeSelector};
use mb_core::zone::{Terrain, Zone};
use mb_core::{GameRng, OpenError};
use proptest::prelude::*;

fn arb_template() -> impl Strategy<Value = ObjectTemplate> {
    (
        0u8..8,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(None), Just(Some(true)), Just(Some(false))],
    )
        .prop_map(|(bits, base, terrain, excluded, canonical)| {
            let mut t = ObjectTemplate::new("T")
                .with_parts(TemplateParts::from_bits_truncate(bits));
            if base {
                t = t.with_tag(TAG_BASE_OBJECT);
            }
            if terrain {
                t = t.with_tag(TAG_TERRAIN);
            }
            if excluded {
                t = t.with_tag(TAG_NO_MYSTERY_BOX);
            }
            match canonical {
                Some(true) => t.with_prop(PROP_CANONICAL_BLUEPRINT, "T"),
                Some(false) => t.with_prop(PROP_CANONICAL_BLUEPRINT, "Other"),
                None => t,
            }
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<ObjectTemplate>> {
    prop::collection::vec(arb_template(), 1..30).prop_map(|ts| {
        ts.into_iter()
            .enumerate()
            .map(|(i, t)| {
                // Keep canonical markers consistent with the renamed template
                let name = format!("T{i}");
                let canonical = match t.prop(PROP_CANONICAL_BLUEPRINT) {
                    Some("T") => Some(name.clone()),
                    Some(other) => Some(other.to_string()),
                    None => None,
                };
                let mut t = ObjectTemplate { name, ..t };
                if let Some(c) = canonical {
                    t = t.with_prop(PROP_CANONICAL_BLUEPRINT, c);
                }
                t
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn selector_never_returns_invalid(catalog in arb_catalog(), seed in any::<u64>()) {
        let selector = PrizeSelector::new(500);
        let mut rng = GameRng::new(seed);
        match selector.select(&catalog, &mut rng) {
            Ok(selection) => {
                prop_assert!(is_valid_prize(selection.template));
                prop_assert!(selection.draws >= 1 && selection.draws <= 500);
            }
            Err(e) => prop_assert_eq!(e, OpenError::NoPrizeAvailable { draws: 500 }),
        }
    }

    #[test]
    fn selector_exhausts_on_all_invalid(catalog in arb_catalog(), seed in any::<u64>()) {
        let invalid: Vec<_> = catalog.into_iter().filter(|t| !is_valid_prize(t)).collect();
        prop_assume!(!invalid.is_empty());
        let selector = PrizeSelector::new(64);
        let mut rng = GameRng::new(seed);
        prop_assert_eq!(
            selector.select(&invalid, &mut rng).unwrap_err(),
            OpenError::NoPrizeAvailable { draws: 64 }
        );
    }

    #[test]
    fn placement_prefers_free_cells(
        x in 0i8..80,
        y in 0i8..25,
        blocked in prop::collection::vec(any::<bool>(), 8),
        walls in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut zone = Zone::new();
        let anchor = Position::new(x, y);
        zone.add_object(GameObject::new("Crate", "crate"), anchor);
        for (n, block) in anchor.neighbors().zip(blocked) {
            if block {
                if walls {
                    zone.set_terrain(n, Terrain::Wall);
                } else {
                    zone.add_object(GameObject::new("Crate", "crate"), n);
                }
            }
        }
        let free = zone.empty_adjacent_cells(anchor);
        let mut rng = GameRng::new(seed);
        let cell = choose_cell(&zone, anchor, &mut rng);
        if free.is_empty() {
            prop_assert_eq!(cell, anchor);
        } else {
            prop_assert!(free.contains(&cell));
            prop_assert!(zone.is_empty(cell));
        }
    }
}
