//! Sainte-Laguë (highest averages with odd divisors) apportionment.
//!
//! Contract:
//! - Allocate `seats` sequentially; each round awards one seat to the party
//!   with the highest quotient v / (2s + 1).
//! - Pure integers; no division in comparisons (cross-multiply in u128).
//! - Tie rule: identical to D'Hondt; equal quotients go to the party with
//!   fewer seats so far, then by ascending party name.

use alloc::collections::BTreeMap;
use core::cmp::Ordering;

use ap_core::tokens::PartyId;

use crate::{prune_zero_seats, AllocError};

/// Allocate seats using Sainte-Laguë divisors 1, 3, 5, …
pub fn allocate_sainte_lague(
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

/// Compare v_a/(2*s_a+1) vs v_b/(2*s_b+1) by u128 cross-multiplication.
fn cmp_quotients(v_a: u64, s_a: u32, v_b: u64, s_b: u32) -> Ordering {
    let lhs = (v_a as u128) * (2 * (s_b as u128) + 1);
    let rhs = (v_b as u128) * (2 * (s_a as u128) + 1);
    lhs.cmp(&rhs)
}
