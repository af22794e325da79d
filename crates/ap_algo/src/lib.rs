//! ap_algo — seat-apportionment formulas over a fixed vote tally.
//!
//! Every allocator shares one contract:
//! - `seats == 0` returns an empty map;
//! - empty `votes` with `seats > 0` is a caller error ([`AllocError`]):
//!   thresholding happens upstream, so an empty tally means the caller asked
//!   for seats nobody can win;
//! - the returned seat counts sum to `seats` exactly, and zero-seat parties
//!   are pruned from the output.
//!
//! All arithmetic is integer-only; quotient comparisons cross-multiply in
//! `u128` instead of dividing. Tie-breaking is deterministic and documented
//! per module; no RNG anywhere.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::collections::BTreeMap;
use core::fmt;

use ap_core::system::Method;
use ap_core::tokens::PartyId;

pub mod allocation {
    // File modules (actual implementations)
    pub mod dhondt;
    pub mod largest_remainder;
    pub mod sainte_lague;
    pub mod wta;

    // Re-export entry points; `allocate` at the crate root dispatches here.
    pub use self::dhondt::allocate_dhondt;
    pub use self::largest_remainder::{allocate_largest_remainder, QuotaKind};
    pub use self::sainte_lague::allocate_sainte_lague;
    pub use self::wta::allocate_winner_takes_all;
}

pub use allocation::QuotaKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// `seats > 0` with an empty tally; allocation is undefined, so the
    /// call fails instead of returning an empty map.
    NoEligibleParties,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::NoEligibleParties => f.write_str("no eligible parties for seats > 0"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}

/// Apportion `seats` among `votes` under `method`.
///
/// The single entry point the engine calls once per target-level region.
/// `votes` must already be filtered to eligible parties (the threshold is the
/// caller's concern).
pub fn allocate(
    seats: u32,
    votes: &BTreeMap<PartyId, u64>,
    method: Method,
) -> Result<BTreeMap<PartyId, u32>, AllocError> {
    use crate::allocation::{
        allocate_dhondt, allocate_largest_remainder, allocate_sainte_lague,
        allocate_winner_takes_all,
    };
    match method {
        Method::DHondt => allocate_dhondt(seats, votes),
        Method::SainteLague => allocate_sainte_lague(seats, votes),
        Method::LrmHare => allocate_largest_remainder(seats, votes, QuotaKind::Hare),
        Method::LrmDroop => allocate_largest_remainder(seats, votes, QuotaKind::Droop),
        Method::LrmHagenbachBischoff => {
            allocate_largest_remainder(seats, votes, QuotaKind::HagenbachBischoff)
        }
        Method::LrmImperiali => allocate_largest_remainder(seats, votes, QuotaKind::Imperiali),
        Method::WinnerTakesAll => allocate_winner_takes_all(seats, votes),
    }
}

/// Drop zero-seat entries and materialize owned keys.
pub(crate) fn prune_zero_seats(won: BTreeMap<&PartyId, u32>) -> BTreeMap<PartyId, u32> {
    won.into_iter()
        .filter(|&(_, s)| s > 0)
        .map(|(p, s)| (p.clone(), s))
        .collect()
}
