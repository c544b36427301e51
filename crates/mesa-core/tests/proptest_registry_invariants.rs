//! Property-based invariant tests for the table registry.
//!
//! Verifies:
//! 1. Ids handed out by `create` are strictly increasing from 1, with no
//!    repeats, across arbitrary create/remove interleavings
//! 2. A vacant table always has an empty party label
//! 3. Failed creates never advance the id counter
//! 4. Enumeration order is creation order
//! 5. `clear` resets the counter to 1

use mesa_core::{RegistryError, TableRegistry};
use proptest::prelude::*;

/// A registry command for random interleavings.
#[derive(Debug, Clone)]
enum Op {
    Create(i32),
    Remove(u32),
    Seat(u32, String),
    Vacate(u32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-2i32..=12).prop_map(Op::Create),
        (0u32..=20).prop_map(Op::Remove),
        ((0u32..=20), "[a-z]{0,6}").prop_map(|(id, name)| Op::Seat(id, name)),
        (0u32..=20).prop_map(Op::Vacate),
    ]
}

proptest! {
    #[test]
    fn ids_strictly_increase_across_interleavings(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut reg = TableRegistry::new();
        let mut created: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::Create(cap) => {
                    match reg.create(cap) {
                        Ok(t) => {
                            if let Some(&last) = created.last() {
                                prop_assert!(t.id > last);
                            } else {
                                prop_assert_eq!(t.id, 1);
                            }
                            created.push(t.id);
                        }
                        Err(e) => prop_assert_eq!(e, RegistryError::InvalidCapacity(cap)),
                    }
                }
                Op::Remove(id) => { reg.remove(id); }
                Op::Seat(id, name) => { let _ = reg.seat(id, &name); }
                Op::Vacate(id) => { let _ = reg.vacate(id); }
            }
        }
    }

    #[test]
    fn vacant_tables_have_empty_party(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut reg = TableRegistry::new();
        for op in ops {
            match op {
                Op::Create(cap) => { let _ = reg.create(cap); }
                Op::Remove(id) => { reg.remove(id); }
                Op::Seat(id, name) => { let _ = reg.seat(id, &name); }
                Op::Vacate(id) => { let _ = reg.vacate(id); }
            }
            for t in reg.tables() {
                if !t.occupied {
                    prop_assert!(t.party.is_empty());
                }
            }
        }
    }

    #[test]
    fn enumeration_order_is_creation_order(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut reg = TableRegistry::new();
        for op in ops {
            match op {
                Op::Create(cap) => { let _ = reg.create(cap); }
                Op::Remove(id) => { reg.remove(id); }
                Op::Seat(id, name) => { let _ = reg.seat(id, &name); }
                Op::Vacate(id) => { let _ = reg.vacate(id); }
            }
        }
        // Ids appear in ascending order because removals splice and new
        // tables append at the end with fresh ids.
        let ids: Vec<u32> = reg.tables().iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn clear_resets_counter(caps in prop::collection::vec(1i32..=10, 0..20)) {
        let mut reg = TableRegistry::new();
        for cap in caps {
            reg.create(cap).unwrap();
        }
        reg.clear();
        prop_assert!(reg.is_empty());
        prop_assert_eq!(reg.create(4).unwrap().id, 1);
    }
}
