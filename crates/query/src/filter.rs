//! Composable nuclide filters

// external crates
use log::{debug, trace};
use serde::{Deserialize, Serialize};

// standard library
use std::collections::HashSet;

// nuchart modules
use nuchart_nudat::{canonical_mode, to_seconds, Dataset, DecayMode, Lifetime, Nuclide};

// internal modules
use crate::error::{Error, Result};

/// Common behaviour of every filter stage
///
/// Each stage decides on one nuclide at a time, and [NuclideFilter::select()]
/// applies that decision to any collection of nuclide references. Stages
/// therefore chain in any order, and each can be used on its own.
///
/// ```rust
/// # use nuchart_nudat::Dataset;
/// # use nuchart_query::{Bounds, NuclideFilter, ZnaCriteria};
/// let json = r#"{
///     "1H": {"z": 1, "n": 0, "a": 1},
///     "4He": {"z": 2, "n": 2, "a": 4}
/// }"#;
/// let dataset = Dataset::from_json_str(json).unwrap();
///
/// let criteria = ZnaCriteria {
///     z: Bounds::even(),
///     ..Default::default()
/// };
///
/// let selection = criteria.select(&dataset);
/// assert_eq!(selection.len(), 1);
/// assert_eq!(selection[0].symbol, "4He");
/// ```
pub trait NuclideFilter {
    /// Decide if a single nuclide passes this filter
    fn admits(&self, nuclide: &Nuclide) -> bool;

    /// Keep every nuclide that passes, preserving the input order
    fn select<'a, I>(&self, nuclides: I) -> Vec<&'a Nuclide>
    where
        I: IntoIterator<Item = &'a Nuclide>,
    {
        nuclides
            .into_iter()
            .filter(|nuclide| self.admits(nuclide))
            .collect()
    }
}

/// Odd/even constraint on one of Z, N, or A
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// No constraint
    #[default]
    Any,
    /// Odd values only
    Odd,
    /// Even values only
    Even,
}

impl Parity {
    /// Check a value against the constraint
    pub fn admits(&self, value: u32) -> bool {
        match self {
            Parity::Any => true,
            Parity::Odd => value % 2 == 1,
            Parity::Even => value % 2 == 0,
        }
    }
}

/// Inclusive bounds and parity for one axis
///
/// Missing bounds are unbounded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Inclusive lower bound
    pub min: Option<u32>,
    /// Inclusive upper bound
    pub max: Option<u32>,
    /// Odd/even constraint
    pub parity: Parity,
}

impl Bounds {
    /// Inclusive range `min..=max`
    pub fn between(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Default::default()
        }
    }

    /// Odd values only
    pub fn odd() -> Self {
        Self {
            parity: Parity::Odd,
            ..Default::default()
        }
    }

    /// Even values only
    pub fn even() -> Self {
        Self {
            parity: Parity::Even,
            ..Default::default()
        }
    }

    /// Replace the parity constraint
    pub fn with_parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    /// Check a value against every constraint
    pub fn contains(&self, value: u32) -> bool {
        self.min.map_or(true, |min| value >= min)
            && self.max.map_or(true, |max| value <= max)
            && self.parity.admits(value)
    }
}

/// Proton, neutron, and mass number constraints
///
/// A nuclide must satisfy every axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZnaCriteria {
    /// Proton number
    pub z: Bounds,
    /// Neutron number
    pub n: Bounds,
    /// Mass number
    pub a: Bounds,
}

impl NuclideFilter for ZnaCriteria {
    fn admits(&self, nuclide: &Nuclide) -> bool {
        self.z.contains(nuclide.z) && self.n.contains(nuclide.n) && self.a.contains(nuclide.a)
    }
}

/// Half-life window in seconds
///
/// Only the first level that carries a half-life is considered. Which nuclides
/// pass depends on which bounds are set:
///
/// | min  | max  | Passes                                   |
/// | ---- | ---- | ---------------------------------------- |
/// | None | None | STABLE only                              |
/// | set  | None | STABLE, or half-life > min               |
/// | set  | set  | min < half-life < max, never STABLE      |
/// | None | set  | half-life < max, never STABLE            |
///
/// Half-lives in units that are not time units never pass.
///
/// ```rust
/// # use nuchart_query::HalfLifeRange;
/// // 1 hour to 1 day, the "Stable" pseudo-unit leaves a bound open
/// let range = HalfLifeRange::from_units(1.0, "h", 1.0, "d").unwrap();
/// assert_eq!(range, HalfLifeRange::between(3600.0, 86400.0));
///
/// let range = HalfLifeRange::from_units(5.0, "s", 0.0, "Stable").unwrap();
/// assert_eq!(range, HalfLifeRange::longer_than(5.0));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalfLifeRange {
    /// Exclusive lower bound (s)
    pub min: Option<f64>,
    /// Exclusive upper bound (s)
    pub max: Option<f64>,
}

impl HalfLifeRange {
    /// Pseudo-unit used to leave a bound open
    pub const UNBOUNDED: &'static str = "Stable";

    /// Only stable nuclides
    pub fn stable_only() -> Self {
        Self::default()
    }

    /// Stable nuclides or anything longer than `min` seconds
    pub fn longer_than(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Anything shorter than `max` seconds
    pub fn shorter_than(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Strictly between `min` and `max` seconds
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Build from values in any time unit
    ///
    /// A unit of `"Stable"` leaves that bound open. Any other unit must be a
    /// recognised time unit.
    pub fn from_units(min: f64, min_unit: &str, max: f64, max_unit: &str) -> Result<Self> {
        let range = Self {
            min: bound_seconds(min, min_unit)?,
            max: bound_seconds(max, max_unit)?,
        };

        if let (Some(min), Some(max)) = (range.min, range.max) {
            if min >= max {
                return Err(Error::EmptyRange { min, max });
            }
        }

        Ok(range)
    }
}

impl NuclideFilter for HalfLifeRange {
    fn admits(&self, nuclide: &Nuclide) -> bool {
        let Some(half_life) = nuclide.first_half_life() else {
            return false;
        };

        match (self.min, self.max, half_life.lifetime()) {
            (None, None, lifetime) => lifetime == Lifetime::Stable,
            (Some(_), None, Lifetime::Stable) => true,
            (_, _, Lifetime::Stable) => false,
            (Some(min), None, Lifetime::Seconds(s)) => s > min,
            (Some(min), Some(max), Lifetime::Seconds(s)) => s > min && s < max,
            (None, Some(max), Lifetime::Seconds(s)) => s < max,
            (_, _, Lifetime::SpecialUnit(unit)) => {
                trace!("Skipped {}, half-life in \"{unit}\"", nuclide.symbol);
                false
            }
            (_, _, Lifetime::Unknown) => false,
        }
    }
}

fn bound_seconds(value: f64, unit: &str) -> Result<Option<f64>> {
    if unit == HalfLifeRange::UNBOUNDED {
        Ok(None)
    } else {
        Ok(Some(to_seconds(value, unit)?))
    }
}

/// How requested decay modes are matched
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecayModeMatch {
    /// Decay modes are not considered
    #[default]
    Off,
    /// Every requested mode must be observed
    All,
    /// At least one requested mode must be observed
    Any,
}

/// Decay mode constraints
///
/// Decay modes are collected from the observed modes of every level of a
/// nuclide, not only the ground state. Labels are compared after
/// [canonical_mode()] is applied to both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayModeCriteria {
    /// Matching behaviour
    pub matching: DecayModeMatch,
    /// Requested decay mode labels
    pub modes: Vec<String>,
}

impl DecayModeCriteria {
    /// Require every one of `modes`
    pub fn all<S: AsRef<str>>(modes: &[S]) -> Self {
        Self::new(DecayModeMatch::All, modes)
    }

    /// Require at least one of `modes`
    pub fn any<S: AsRef<str>>(modes: &[S]) -> Self {
        Self::new(DecayModeMatch::Any, modes)
    }

    fn new<S: AsRef<str>>(matching: DecayModeMatch, modes: &[S]) -> Self {
        Self {
            matching,
            modes: modes.iter().map(|m| m.as_ref().to_string()).collect(),
        }
    }

    /// False when the filter would have no reason to run
    pub fn is_active(&self) -> bool {
        self.matching != DecayModeMatch::Off && !self.modes.is_empty()
    }
}

impl NuclideFilter for DecayModeCriteria {
    fn admits(&self, nuclide: &Nuclide) -> bool {
        let observed = observed_labels(nuclide);
        let mut requested = self.modes.iter().map(|m| canonical_mode(m));

        match self.matching {
            DecayModeMatch::Off => true,
            DecayModeMatch::All => requested.all(|m| observed.contains(m)),
            DecayModeMatch::Any => requested.any(|m| observed.contains(m)),
        }
    }
}

/// Distinct observed decay mode labels over every level
pub fn observed_labels(nuclide: &Nuclide) -> HashSet<&str> {
    nuclide
        .observed_modes()
        .map(DecayMode::canonical_mode)
        .collect()
}

/// Full set of filter criteria applied as a pipeline
///
/// Stages run in the order Z/N/A, half-life, then decay modes. The half-life
/// stage only runs if a range is given, and the decay mode stage only if it is
/// active.
///
/// This deserialises from JSON so that criteria can come straight from a
/// front end, with anything left out being unconstrained.
///
/// ```rust
/// # use nuchart_query::{DecayModeMatch, FilterCriteria, Parity};
/// let criteria: FilterCriteria = serde_json::from_str(r#"{
///     "zna": {"z": {"min": 80, "max": 95, "parity": "even"}},
///     "half_life": {"min": 1e9},
///     "decay_modes": {"matching": "any", "modes": ["A", "SF"]}
/// }"#).unwrap();
///
/// assert_eq!(criteria.zna.z.parity, Parity::Even);
/// assert_eq!(criteria.zna.n.min, None);
/// assert_eq!(criteria.decay_modes.matching, DecayModeMatch::Any);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Proton, neutron, and mass number constraints
    pub zna: ZnaCriteria,
    /// Optional half-life window
    pub half_life: Option<HalfLifeRange>,
    /// Decay mode constraints
    pub decay_modes: DecayModeCriteria,
}

impl FilterCriteria {
    /// Run every stage over the dataset
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Nuclide> {
        let mut selection = self.zna.select(dataset);
        debug!("Z/N/A filter kept {} of {}", selection.len(), dataset.len());

        if let Some(range) = &self.half_life {
            selection = range.select(selection);
            debug!("Half-life filter kept {}", selection.len());
        }

        if self.decay_modes.is_active() {
            selection = self.decay_modes.select(selection);
            debug!("Decay mode filter kept {}", selection.len());
        }

        selection
    }
}

/// Filter the dataset, see [FilterCriteria]
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Nuclide> {
    criteria.apply(dataset)
}
