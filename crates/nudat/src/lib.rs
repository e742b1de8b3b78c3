//! Read-only access to the NNDC NuDat chart of nuclides export
//!
//! This crate is intended to make using the NuDat JSON export slightly less
//! painful.
//!
//! The export is a single JSON object keyed by nuclide symbol (`232Th`), where
//! every record carries the proton, neutron, and mass numbers and a list of
//! energy levels. Every level may carry a spin-parity, mass excess, half-life,
//! and the observed/predicted decay modes with their branching ratios.
//!
//! ## Implementation
//!
//! The structure remains relatively consistent with the JSON export.
//!
//! A [Dataset] is loaded once and holds every [Nuclide] in file order. Each
//! nuclide holds a list of [Level]s, the first of which is the ground state.
//!
//! For example:
//!
//! ```rust
//! # use nuchart_nudat::{Dataset, Lifetime};
//! let json = r#"{
//!     "232Th": {
//!         "z": 90, "n": 142, "a": 232,
//!         "levels": [{
//!             "energy": {"value": 0, "unit": "keV"},
//!             "spinParity": "0+",
//!             "halflife": {"value": 1.40e10, "unit": "y"},
//!             "decayModes": {"observed": [{"mode": "A", "value": 100}], "predicted": []}
//!         }]
//!     }
//! }"#;
//!
//! let dataset = Dataset::from_json_str(json).unwrap();
//!
//! // Names are normalised, so most common spellings work
//! let thorium = dataset.find("Th-232").unwrap();
//!
//! // Half-lives collapse to seconds, STABLE, or a special unit
//! let ground = thorium.ground_state().unwrap();
//! assert_eq!(ground.lifetime(), Lifetime::Seconds(1.40e10 * 31557600.0));
//! ```
//!
//! Half-lives quoted in units that are not time units (the export has a few
//! resonance widths in eV/keV/MeV) are not errors, they are reported as
//! [Lifetime::SpecialUnit] so that they can be classified separately.

// Modules
mod dataset;
mod error;
mod level;
mod nuclide;
mod parsers;
mod uncertainty;
mod units;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use dataset::Dataset;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use level::{
    canonical_mode, DecayMode, DecayModes, Energy, Formats, HalfLife, HalfLifeValue, Level,
    Lifetime, MassExcess,
};

#[doc(inline)]
pub use nuclide::{Nuclide, NuclideName};

#[doc(inline)]
pub use uncertainty::{LimitType, Uncertainty};

#[doc(inline)]
pub use units::{to_seconds, TimeUnit, UnrecognisedUnit, JULIAN_YEAR};
