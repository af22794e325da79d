//! Property tests for the allocator contract: exact seat totals, positive
//! outputs only, and vote monotonicity.

use std::collections::BTreeMap;

use proptest::prelude::*;

use ap_algo::{allocate, allocation::QuotaKind, allocation::allocate_largest_remainder};
use ap_core::system::Method;
use ap_core::tokens::PartyId;

const ALL_METHODS: &[Method] = &[
    Method::DHondt,
    Method::SainteLague,
    Method::LrmHare,
    Method::LrmDroop,
    Method::LrmHagenbachBischoff,
    Method::LrmImperiali,
    Method::WinnerTakesAll,
];

fn party(name: &str) -> PartyId {
    name.parse().unwrap()
}

/// 1..=5 parties with arbitrary tallies (duplicated names collapse via the map).
fn votes_strategy() -> impl Strategy<Value = BTreeMap<PartyId, u64>> {
    proptest::collection::btree_map("[A-E]", 0u64..1_000_000, 1..=5)
        .prop_map(|m| m.into_iter().map(|(k, v)| (party(&k), v)).collect())
}

proptest! {
    /// Apportionment never over- or under-allocates, for every method.
    #[test]
    fn seat_totals_are_exact(votes in votes_strategy(), seats in 0u32..=40) {
        for &method in ALL_METHODS {
            let alloc = allocate(seats, &votes, method).unwrap();
            let total: u32 = alloc.values().sum();
            prop_assert_eq!(total, seats, "method {} misallocated", method);
        }
    }

    /// Zero-seat entries are pruned from every result.
    #[test]
    fn outputs_are_seat_positive(votes in votes_strategy(), seats in 0u32..=40) {
        for &method in ALL_METHODS {
            let alloc = allocate(seats, &votes, method).unwrap();
            prop_assert!(alloc.values().all(|&s| s > 0), "method {} kept a zero entry", method);
        }
    }

    /// Seat winners are always drawn from the input tally.
    #[test]
    fn winners_come_from_the_tally(votes in votes_strategy(), seats in 0u32..=40) {
        for &method in ALL_METHODS {
            let alloc = allocate(seats, &votes, method).unwrap();
            prop_assert!(alloc.keys().all(|p| votes.contains_key(p)));
        }
    }

    /// Highest averages: raising one party's votes, all else fixed, never
    /// costs that party a seat.
    #[test]
    fn highest_averages_vote_monotonicity(
        votes in votes_strategy(),
        seats in 1u32..=20,
        pick in 0usize..5,
        boost in 1u64..=500_000,
    ) {
        let grown = votes.keys().nth(pick % votes.len()).unwrap().clone();
        let mut bigger = votes.clone();
        *bigger.get_mut(&grown).unwrap() += boost;

        for &method in &[Method::DHondt, Method::SainteLague] {
            let before = allocate(seats, &votes, method).unwrap();
            let after = allocate(seats, &bigger, method).unwrap();
            let s_before = before.get(&grown).copied().unwrap_or(0);
            let s_after = after.get(&grown).copied().unwrap_or(0);
            prop_assert!(
                s_after >= s_before,
                "method {}: {} dropped {} -> {} seats after +{} votes",
                method, grown, s_before, s_after, boost
            );
        }
    }
}

/// Largest remainder: a growing party keeps or gains seats across every
/// quota on a fixed competitive field (B 4, C 3; A sweeps 5..=12, 3 seats).
#[test]
fn largest_remainder_vote_monotonicity_sweep() {
    for quota in [
        QuotaKind::Hare,
        QuotaKind::Droop,
        QuotaKind::HagenbachBischoff,
        QuotaKind::Imperiali,
    ] {
        let mut last = 0u32;
        for a_votes in 5u64..=12 {
            let votes: BTreeMap<PartyId, u64> = [
                (party("A"), a_votes),
                (party("B"), 4),
                (party("C"), 3),
            ]
            .into_iter()
            .collect();
            let alloc = allocate_largest_remainder(3, &votes, quota).unwrap();
            let a_seats = alloc.get(&party("A")).copied().unwrap_or(0);
            assert!(
                a_seats >= last,
                "{quota:?}: A dropped {last} -> {a_seats} seats at {a_votes} votes"
            );
            last = a_seats;
        }
    }
}
