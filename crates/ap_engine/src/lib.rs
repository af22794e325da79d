//! ap_engine — applies an [`ElectoralSystem`](ap_core::ElectoralSystem) to a
//! region tree and answers queries over the computed result.
//!
//! Control flow (all pure, no I/O, no shared mutable state):
//! compute national party set (if the threshold is country-wide) → descend
//! the tree to the configured level → run the apportionment once per
//! target-level region → collect into an immutable [`ElectionResult`] →
//! answer diff / lost-votes / aggregation queries.
//!
//! A `RegionTree` may be shared by any number of concurrent
//! [`compute_result`] calls without synchronization; every call produces a
//! fresh result and mutates nothing.
//!
//! Errors never get logged or swallowed here; they propagate typed so the
//! presentation layer can decide how to degrade.

#![forbid(unsafe_code)]

pub mod compute;
pub mod result;

pub use compute::{compute_region_result, compute_result, eligible_votes, national_party_set};
pub use result::ElectionResult;

use ap_core::entities::TreeError;
use ap_core::system::ConfigError;
use ap_core::tokens::RegionId;
use thiserror::Error;

/// Single error surface for the engine.
///
/// `Config` is fatal misconfiguration (caught at system construction);
/// everything else is a computation-time precondition violation. The split
/// lets a caller disable a control on `Config` but surface data problems.
#[derive(Debug, Error)]
pub enum ElectionError {
    /// Invalid electoral-system parameters.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// Structural violation in the region tree or the requested descent.
    #[error("region tree: {0}")]
    Tree(#[from] TreeError),

    /// A target-level region has seats to fill but no party cleared the
    /// threshold (or the precomputed national set is empty there).
    #[error("no eligible parties in region '{region}' with {seats} seats to fill")]
    NoEligibleParties { region: RegionId, seats: u32 },

    /// Two results cover different trees or subtrees and cannot be compared.
    #[error("results cover different region subtrees")]
    ResultMismatch,

    /// A region expected at the result's level is missing from the result
    /// map (the scope node does not belong to the computed subtree).
    #[error("region '{0}' is not covered by this result")]
    MissingRegion(RegionId),
}
