//! Electoral-system configuration.
//!
//! An [`ElectoralSystem`] is a validated parameter bundle: which
//! apportionment [`Method`] to run, at which region level seats are
//! assigned, and how the entry threshold is applied (against each region's
//! own votes, or once against the national totals). Invalid values are
//! rejected at construction and never silently corrected.
//!
//! The constants below are the engine's externally visible schema; callers
//! can validate dropdown inputs against them before constructing anything.

use alloc::string::String;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wire names of every supported method, in presentation order.
pub const SYSTEM_NAMES: &[&str] = &[
    "dHondt",
    "SL",
    "LRM-Hare",
    "LRM-Droop",
    "LRM-HB",
    "LRM-Imperiali",
    "Winner-Takes-All",
];

/// Finest region level a system may target (0 = country).
pub const MAX_LEVEL: u8 = 3;

/// Upper bound on the entry threshold, in percent.
pub const MAX_THRESHOLD_PCT: u8 = 15;

/// Configuration errors; always fatal to the construction that raised them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownMethod(String),
    LevelOutOfRange(u8),
    ThresholdOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownMethod(name) => write!(f, "system '{name}' not supported"),
            ConfigError::LevelOutOfRange(l) => {
                write!(f, "regional level must be between 0 and {MAX_LEVEL}, got {l}")
            }
            ConfigError::ThresholdOutOfRange(t) => write!(
                f,
                "threshold must be between 0 and {MAX_THRESHOLD_PCT} percent, got {t}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// A seat-apportionment formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Highest averages, divisors 1, 2, 3, …
    #[cfg_attr(feature = "serde", serde(rename = "dHondt"))]
    DHondt,
    /// Sainte-Laguë: highest averages, odd divisors 1, 3, 5, …
    #[cfg_attr(feature = "serde", serde(rename = "SL"))]
    SainteLague,
    /// Largest remainder, Hare quota.
    #[cfg_attr(feature = "serde", serde(rename = "LRM-Hare"))]
    LrmHare,
    /// Largest remainder, Droop quota.
    #[cfg_attr(feature = "serde", serde(rename = "LRM-Droop"))]
    LrmDroop,
    /// Largest remainder, Hagenbach-Bischoff quota.
    #[cfg_attr(feature = "serde", serde(rename = "LRM-HB"))]
    LrmHagenbachBischoff,
    /// Largest remainder, Imperiali quota.
    #[cfg_attr(feature = "serde", serde(rename = "LRM-Imperiali"))]
    LrmImperiali,
    /// The highest-vote party takes the region's whole bloc of seats.
    #[cfg_attr(feature = "serde", serde(rename = "Winner-Takes-All"))]
    WinnerTakesAll,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::DHondt => "dHondt",
            Method::SainteLague => "SL",
            Method::LrmHare => "LRM-Hare",
            Method::LrmDroop => "LRM-Droop",
            Method::LrmHagenbachBischoff => "LRM-HB",
            Method::LrmImperiali => "LRM-Imperiali",
            Method::WinnerTakesAll => "Winner-Takes-All",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dHondt" => Ok(Method::DHondt),
            "SL" => Ok(Method::SainteLague),
            "LRM-Hare" => Ok(Method::LrmHare),
            "LRM-Droop" => Ok(Method::LrmDroop),
            "LRM-HB" => Ok(Method::LrmHagenbachBischoff),
            "LRM-Imperiali" => Ok(Method::LrmImperiali),
            "Winner-Takes-All" => Ok(Method::WinnerTakesAll),
            other => Err(ConfigError::UnknownMethod(other.to_string())),
        }
    }
}

/// Validated electoral-system configuration.
///
/// Fields are private so a constructed value is valid by construction;
/// deserialize through [`ElectoralSystem::new`] if the input is untrusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ElectoralSystem {
    method: Method,
    level: u8,
    threshold_pct: u8,
    national_threshold: bool,
}

impl ElectoralSystem {
    /// Validate and bundle the parameters.
    ///
    /// `level` is the region level at which seats are assigned;
    /// `threshold_pct` is the minimum vote share (strict `>`) a party needs
    /// to enter apportionment; `national_threshold` switches the threshold
    /// denominator from each region's own votes to the national totals.
    pub fn new(
        method: Method,
        level: u8,
        threshold_pct: u8,
        national_threshold: bool,
    ) -> Result<Self, ConfigError> {
        if level > MAX_LEVEL {
            return Err(ConfigError::LevelOutOfRange(level));
        }
        if threshold_pct > MAX_THRESHOLD_PCT {
            return Err(ConfigError::ThresholdOutOfRange(threshold_pct));
        }
        Ok(Self {
            method,
            level,
            threshold_pct,
            national_threshold,
        })
    }

    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn threshold_pct(&self) -> u8 {
        self.threshold_pct
    }

    #[inline]
    pub fn national_threshold(&self) -> bool {
        self.national_threshold
    }
}
