//! Name tokens (`PartyId`, `RegionId`).
//!
//! Party and region names are free text; real ballots carry accents,
//! apostrophes, and punctuation ("EAJ-PNV", "¡TERUEL EXISTE!"). The only
//! invariant enforced here is a sane length (1..=200 chars).

use crate::errors::CoreError;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NAME_MIN_LEN: usize = 1;
const NAME_MAX_LEN: usize = 200;

#[inline]
fn is_valid_name(s: &str) -> bool {
    let len = s.chars().count();
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len)
}

macro_rules! def_name_token {
    ($name:ident) => {
        #[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name(String);

        impl $name {
            /// Construct from any string-like value, enforcing the length bound.
            pub fn new(s: impl Into<String>) -> Result<Self, CoreError> {
                let s = s.into();
                if is_valid_name(&s) {
                    Ok(Self(s))
                } else {
                    Err(CoreError::InvalidName)
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if is_valid_name(s) {
                    Ok(Self(s.to_string()))
                } else {
                    Err(CoreError::InvalidName)
                }
            }
        }
    };
}

def_name_token!(PartyId);
def_name_token!(RegionId);
