//! ap_core — Core types for the apportionment engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared by the
//! engine (`ap_algo`, `ap_engine`):
//!
//! - Name tokens: `PartyId`, `RegionId`
//! - The electoral-region tree: `Region`, `RegionSpec`, `RegionTree`, `NodeId`
//! - Electoral-system configuration: `Method`, `ElectoralSystem`, and the
//!   externally visible schema constants (`SYSTEM_NAMES`, `MAX_LEVEL`,
//!   `MAX_THRESHOLD_PCT`)
//!
//! Everything here is built once and read-only afterwards; a `RegionTree`
//! can be shared across threads without synchronization.
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod errors {
    use core::fmt;

    /// Minimal error set for token validation & parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// A name token was empty or longer than the allowed maximum.
        InvalidName,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidName => write!(f, "invalid name"),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for CoreError {}
}

pub mod tokens;
pub mod entities;
pub mod system;

// Convenience re-exports (downstream crates import these from the root).
pub use entities::{NodeId, Region, RegionSpec, RegionTree, TreeError};
pub use system::{ElectoralSystem, Method, MAX_LEVEL, MAX_THRESHOLD_PCT, SYSTEM_NAMES};
pub use tokens::{PartyId, RegionId};
