//! Result computation: threshold propagation and descent to the target level.

use std::collections::{BTreeMap, BTreeSet};

use ap_core::entities::{NodeId, Region, RegionTree};
use ap_core::system::ElectoralSystem;
use ap_core::tokens::PartyId;

use crate::result::ElectionResult;
use crate::ElectionError;

/// Strict entry-threshold test: keep a party iff
/// `100 * votes > threshold_pct * total` (u128 cross-multiply, no division).
/// A party sitting exactly on the threshold is excluded.
#[inline]
fn clears_threshold(votes: u64, total: u64, threshold_pct: u8) -> bool {
    (votes as u128) * 100 > (threshold_pct as u128) * (total as u128)
}

/// Parties whose share of the *national* vote strictly clears the threshold.
///
/// Computed once per run from the tree's root, independent of which subtree
/// the result is computed over; the same set then gates eligibility in every
/// target-level region.
pub fn national_party_set(tree: &RegionTree, system: &ElectoralSystem) -> BTreeSet<PartyId> {
    let root = tree.node(tree.root());
    let total = root.total_votes();
    root.votes()
        .iter()
        .filter(|&(_, &v)| clears_threshold(v, total, system.threshold_pct()))
        .map(|(p, _)| p.clone())
        .collect()
}

/// The votes that enter apportionment for one region.
///
/// With a precomputed national set, eligibility is membership in that set
/// (a nationally eligible party keeps its local tally however small);
/// otherwise each region applies the threshold against its own totals.
pub fn eligible_votes(
    region: &Region,
    system: &ElectoralSystem,
    national: Option<&BTreeSet<PartyId>>,
) -> BTreeMap<PartyId, u64> {
    match national {
        Some(valid) => region
            .votes()
            .iter()
            .filter(|(p, _)| valid.contains(*p))
            .map(|(p, &v)| (p.clone(), v))
            .collect(),
        None => {
            let total = region.total_votes();
            region
                .votes()
                .iter()
                .filter(|&(_, &v)| clears_threshold(v, total, system.threshold_pct()))
                .map(|(p, &v)| (p.clone(), v))
                .collect()
        }
    }
}

/// Seats for a single region: threshold filter, then the configured formula
/// with the region's own `n_seats`. Deterministic and side-effect-free.
pub fn compute_region_result(
    region: &Region,
    system: &ElectoralSystem,
    national: Option<&BTreeSet<PartyId>>,
) -> Result<BTreeMap<PartyId, u32>, ElectionError> {
    let eligible = eligible_votes(region, system, national);
    ap_algo::allocate(region.n_seats(), &eligible, system.method()).map_err(|_| {
        ElectionError::NoEligibleParties {
            region: region.name().clone(),
            seats: region.n_seats(),
        }
    })
}

/// Apply `system` to the subtree rooted at `from` and collect an
/// [`ElectionResult`] keyed by region name at the system's target level.
///
/// Preconditions (violations fail fast, never a partial result):
/// - `system.level()` is at or below `from`'s own level;
/// - every branch of the subtree reaches the target level.
pub fn compute_result<'t>(
    tree: &'t RegionTree,
    from: NodeId,
    system: &ElectoralSystem,
) -> Result<ElectionResult<'t>, ElectionError> {
    let national = system
        .national_threshold()
        .then(|| national_party_set(tree, system));

    let targets = tree.descendants_at_level(from, system.level())?;

    let mut result = BTreeMap::new();
    for id in targets {
        let region = tree.node(id);
        let seats = compute_region_result(region, system, national.as_ref())?;
        result.insert(region.name().clone(), seats);
    }

    Ok(ElectionResult::new(tree, from, system.level(), result))
}
