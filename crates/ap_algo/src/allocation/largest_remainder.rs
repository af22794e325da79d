//! Largest-remainder apportionment with selectable quota
//! (Hare, Droop, Hagenbach-Bischoff, Imperiali).
//!
//! Contract:
//! - Quota kinds (integer division throughout):
//!     * Hare:               V / m
//!     * Droop:              V / (m + 1) + 1
//!     * Hagenbach-Bischoff: V / (m + 1)
//!     * Imperiali:          V / (m + 2)
//! - Floors are v / q; remainders are v % q. If q == 0 (tiny totals),
//!   floors are 0 and remainders are the raw votes.
//! - If sum of floors < seats, leftovers go one-by-one down the remainder
//!   ranking (remainder desc, then raw votes desc, then name asc), cycling
//!   when seats outnumber parties.
//! - If sum of floors > seats, the quota under-divided (the known
//!   Hagenbach-Bischoff/Imperiali edge; the integer Hare quota can do it on
//!   tiny totals too). The allocation is recomputed with the Droop quota,
//!   which cannot over-allocate: q > V/(m+1) bounds the floor sum by m.
//!   This self-correction is contractual: the seat total must always match
//!   `seats` exactly.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use ap_core::tokens::PartyId;

use crate::{prune_zero_seats, AllocError};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum QuotaKind {
    Hare,
    Droop,
    HagenbachBischoff,
    Imperiali,
}

/// Allocate seats by largest remainder under the given quota.
pub fn allocate_largest_remainder(
    seats: u32,
    votes: &BTreeMap<PartyId, u64>,
    quota: QuotaKind,
) -> Result<BTreeMap<PartyId, u32>, AllocError> {
    if seats == 0 {
        return Ok(BTreeMap::new());
    }
    if votes.is_empty() {
        return Err(AllocError::NoEligibleParties);
    }

    let total: u128 = votes.values().map(|&v| v as u128).sum();
    let q = compute_quota(total, seats as u128, quota);

    let (mut won, remainders) = floors_and_remainders(votes, q);
    let floor_sum: u128 = won.values().map(|&s| s as u128).sum();

    if floor_sum > seats as u128 {
        // Under-dividing quota handed out more floor seats than exist.
        debug_assert!(quota != QuotaKind::Droop, "Droop quota cannot over-allocate");
        return allocate_largest_remainder(seats, votes, QuotaKind::Droop);
    }

    if floor_sum < seats as u128 {
        let leftover = (seats as u128 - floor_sum) as u32;
        distribute_leftovers(leftover, &mut won, &remainders, votes);
    }

    debug_assert_eq!(
        won.values().map(|&s| s as u128).sum::<u128>(),
        seats as u128
    );
    Ok(prune_zero_seats(won))
}

/// Integer-only quota; `seats >= 1` is guaranteed by the caller.
fn compute_quota(total: u128, seats: u128, quota: QuotaKind) -> u128 {
    match quota {
        QuotaKind::Hare => total / seats,
        QuotaKind::Droop => total / (seats + 1) + 1,
        QuotaKind::HagenbachBischoff => total / (seats + 1),
        QuotaKind::Imperiali => total / (seats + 2),
    }
}

/// Floors and remainders for quota q (q == 0 degenerates to all-remainder).
fn floors_and_remainders(
    votes: &BTreeMap<PartyId, u64>,
    q: u128,
) -> (BTreeMap<&PartyId, u32>, BTreeMap<&PartyId, u128>) {
    let mut floors: BTreeMap<&PartyId, u32> = BTreeMap::new();
    let mut rems: BTreeMap<&PartyId, u128> = BTreeMap::new();

    for (party, &v) in votes {
        let v = v as u128;
        if q == 0 {
            floors.insert(party, 0);
            rems.insert(party, v);
        } else {
            let f = v / q;
            // Saturate; real seat counts sit far below u32::MAX.
            let f = if f > u32::MAX as u128 { u32::MAX } else { f as u32 };
            floors.insert(party, f);
            rems.insert(party, v % q);
        }
    }

    (floors, rems)
}

/// Hand out `leftover` seats down the static remainder ranking
/// (remainder desc, raw votes desc, name asc), cycling if the ranking is
/// shorter than the leftover count (degenerate quotas).
fn distribute_leftovers<'a>(
    leftover: u32,
    won: &mut BTreeMap<&'a PartyId, u32>,
    remainders: &BTreeMap<&'a PartyId, u128>,
    votes: &'a BTreeMap<PartyId, u64>,
) {
    let mut ranking: Vec<(&PartyId, u128, u64)> = remainders
        .iter()
        .map(|(&party, &rem)| (party, rem, votes[party]))
        .collect();
    ranking.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| a.0.cmp(b.0))
    });

    let mut idx = 0usize;
    for _ in 0..leftover {
        let (party, _, _) = ranking[idx];
        *won.get_mut(party).expect("ranking keys come from the seat vector") += 1;
        idx += 1;
        if idx == ranking.len() {
            idx = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn tally(entries: &[(&str, u64)]) -> BTreeMap<PartyId, u64> {
        entries
            .iter()
            .map(|&(p, v)| (p.parse().unwrap(), v))
            .collect()
    }

    fn seats_vec(alloc: &BTreeMap<PartyId, u32>) -> Vec<(&str, u32)> {
        alloc.iter().map(|(p, &s)| (p.as_str(), s)).collect()
    }

    #[test]
    fn hare_five_seats_three_parties() {
        // q = 180000/5 = 36000. Floors: A 2 (rem 28000), B 1 (rem 24000),
        // C 0 (rem 20000). Leftover 2 seats go to A then B by remainder rank.
        let votes = tally(&[("A", 100_000), ("B", 60_000), ("C", 20_000)]);
        let alloc = allocate_largest_remainder(5, &votes, QuotaKind::Hare).unwrap();
        assert_eq!(seats_vec(&alloc), [("A", 3), ("B", 2)]);
    }

    #[test]
    fn droop_quota_shifts_a_seat() {
        // q = 100/(4+1) + 1 = 21: floors A 2, B 1, C 0 (rems 8, 9, 20);
        // the leftover goes to C.
        let votes = tally(&[("A", 50), ("B", 30), ("C", 20)]);
        let alloc = allocate_largest_remainder(4, &votes, QuotaKind::Droop).unwrap();
        assert_eq!(seats_vec(&alloc), [("A", 2), ("B", 1), ("C", 1)]);
    }

    #[test]
    fn imperiali_over_allocation_falls_back_to_droop() {
        // Imperiali q = 100/(2+2) = 25 hands both parties 2 floor seats for
        // a 2-seat region; the engine must recompute with the Droop quota.
        let votes = tally(&[("A", 50), ("B", 50)]);
        let imperiali = allocate_largest_remainder(2, &votes, QuotaKind::Imperiali).unwrap();
        let droop = allocate_largest_remainder(2, &votes, QuotaKind::Droop).unwrap();
        assert_eq!(imperiali, droop);
        assert_eq!(seats_vec(&imperiali), [("A", 1), ("B", 1)]);
    }

    #[test]
    fn hagenbach_bischoff_over_allocation_falls_back_to_droop() {
        // HB q = 100/(3+1) = 25: floors 2+1+1 = 4 > 3 seats.
        let votes = tally(&[("A", 50), ("B", 25), ("C", 25)]);
        let hb = allocate_largest_remainder(3, &votes, QuotaKind::HagenbachBischoff).unwrap();
        let droop = allocate_largest_remainder(3, &votes, QuotaKind::Droop).unwrap();
        assert_eq!(hb, droop);
        assert_eq!(seats_vec(&hb), [("A", 1), ("B", 1), ("C", 1)]);
    }

    #[test]
    fn remainder_tie_breaks_by_raw_votes_then_name() {
        // q = 12/3 = 4: A rem 3 (votes 7), C rem 3 (votes 3), B rem 2.
        // One floor seat (A), two leftovers: A (higher votes), then C.
        let votes = tally(&[("A", 7), ("B", 2), ("C", 3)]);
        let alloc = allocate_largest_remainder(3, &votes, QuotaKind::Hare).unwrap();
        assert_eq!(seats_vec(&alloc), [("A", 2), ("C", 1)]);
    }

    #[test]
    fn tiny_totals_cycle_the_ranking() {
        // V = 3 < seats: Hare q = 0, everything is remainder; five seats
        // cycle the two-party ranking (B first on raw votes).
        let votes = tally(&[("A", 1), ("B", 2)]);
        let alloc = allocate_largest_remainder(5, &votes, QuotaKind::Hare).unwrap();
        assert_eq!(seats_vec(&alloc), [("A", 2), ("B", 3)]);
    }

    #[test]
    fn zero_seats_is_empty_and_empty_tally_errors() {
        let votes = tally(&[("A", 5)]);
        assert!(allocate_largest_remainder(0, &votes, QuotaKind::Hare)
            .unwrap()
            .is_empty());
        let empty = BTreeMap::new();
        assert_eq!(
            allocate_largest_remainder(1, &empty, QuotaKind::Imperiali),
            Err(AllocError::NoEligibleParties)
        );
    }
}
