//! Winner-takes-all: the highest-vote party receives the region's whole
//! bloc of seats.
//!
//! Ties for the top are broken by ascending party name (scan order), the
//! same deterministic rule the highest-averages allocators use.

use alloc::collections::BTreeMap;

use ap_core::tokens::PartyId;

use crate::AllocError;

/// Grant every seat to the top-vote party.
pub fn allocate_winner_takes_all(
    seats: u32,
    votes: &BTreeMap<PartyId, u64>,
) -> Result<BTreeMap<PartyId, u32>, AllocError> {
    if seats == 0 {
        return Ok(BTreeMap::new());
    }
    let winner = top_by_votes(votes).ok_or(AllocError::NoEligibleParties)?;

    let mut alloc = BTreeMap::new();
    alloc.insert(winner.clone(), seats);
    Ok(alloc)
}

/// First party (by name) carrying the maximum vote count.
fn top_by_votes(votes: &BTreeMap<PartyId, u64>) -> Option<&PartyId> {
    let mut best: Option<(&PartyId, u64)> = None;
    for (party, &v) in votes {
        match best {
            None => best = Some((party, v)),
            Some((_, best_v)) if v > best_v => best = Some((party, v)),
            _ => {}
        }
    }
    best.map(|(party, _)| party)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(entries: &[(&str, u64)]) -> BTreeMap<PartyId, u64> {
        entries
            .iter()
            .map(|&(p, v)| (p.parse().unwrap(), v))
            .collect()
    }

    #[test]
    fn winner_takes_the_bloc() {
        let votes = tally(&[("A", 100), ("B", 260), ("C", 40)]);
        let alloc = allocate_winner_takes_all(7, &votes).unwrap();
        assert_eq!(alloc.len(), 1);
        assert_eq!(alloc[&"B".parse::<PartyId>().unwrap()], 7);
    }

    #[test]
    fn top_tie_goes_to_first_name() {
        let votes = tally(&[("B", 50), ("A", 50)]);
        let alloc = allocate_winner_takes_all(3, &votes).unwrap();
        assert_eq!(alloc[&"A".parse::<PartyId>().unwrap()], 3);
    }

    #[test]
    fn zero_seats_is_empty_and_empty_tally_errors() {
        let votes = tally(&[("A", 5)]);
        assert!(allocate_winner_takes_all(0, &votes).unwrap().is_empty());
        let empty = BTreeMap::new();
        assert_eq!(
            allocate_winner_takes_all(1, &empty),
            Err(AllocError::NoEligibleParties)
        );
    }
}
