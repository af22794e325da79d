//! D'Hondt (highest averages) apportionment.
//!
//! Contract:
//! - Allocate `seats` sequentially; each round awards one seat to the party
//!   with the highest quotient v / (s + 1), where s is the seats it already
//!   holds.
//! - Pure integers; no division in comparisons (cross-multiply in u128).
//! - Tie rule: among equal quotients the seat goes to the party currently
//!   holding fewer seats; remaining ties break by ascending party name.
//!   The rule is stable across runs and is relied upon by tests.

use alloc::collections::BTreeMap;
use core::cmp::Ordering;

use ap_core::tokens::PartyId;

use crate::{prune_zero_seats, AllocError};

/// Allocate seats using D'Hondt divisors 1, 2, 3, …
pub fn allocate_dhondt(
    seats: u32,
    votes: &BTreeMap<PartyId, u64>,
) -> Result<BTreeMap<PartyId, u32>, AllocError> {
    if seats == 0 {
        return Ok(BTreeMap::new());
    }
    if votes.is_empty() {
        return Err(AllocError::NoEligibleParties);
    }

    let mut won: BTreeMap<&PartyId, u32> = votes.keys().map(|p| (p, 0)).collect();
    for _round in 0..seats {
        let winner = next_award(votes, &won);
        *won.get_mut(winner).expect("winner is seeded in the seat vector") += 1;
    }
    Ok(prune_zero_seats(won))
}

/// Argmax of v/(s+1); scan order is ascending party name, so on a full tie
/// (equal quotient, equal seats) the first name wins.
fn next_award<'a>(
    votes: &'a BTreeMap<PartyId, u64>,
    won: &BTreeMap<&'a PartyId, u32>,
) -> &'a PartyId {
    let mut best: Option<(&PartyId, u64, u32)> = None;
    for (party, &v) in votes {
        let s = won[party];
        match best {
            None => best = Some((party, v, s)),
            Some((_, best_v, best_s)) => match cmp_quotients(v, s, best_v, best_s) {
                Ordering::Greater => best = Some((party, v, s)),
                Ordering::Equal if s < best_s => best = Some((party, v, s)),
                _ => {}
            },
        }
    }
    best.expect("votes is non-empty").0
}

/// Compare v_a/(s_a+1) vs v_b/(s_b+1) without floats:
/// v_a * (s_b+1) ? v_b * (s_a+1) in u128.
fn cmp_quotients(v_a: u64, s_a: u32, v_b: u64, s_b: u32) -> Ordering {
    let lhs = (v_a as u128) * ((s_b as u128) + 1);
    let rhs = (v_b as u128) * ((s_a as u128) + 1);
    lhs.cmp(&rhs)
}
