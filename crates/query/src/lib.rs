//! Query, resolve, and tabulate nuclides from a NuDat dataset
//!
//! Everything here works on a [Dataset](nuchart_nudat::Dataset) loaded by
//! `nuchart-nudat` and never modifies it. Results are references into the
//! dataset, in dataset order.
//!
//! ## Filtering
//!
//! Filters implement the [NuclideFilter] trait and can be chained freely, or
//! collected into a [FilterCriteria] to run the usual Z/N/A, half-life, and
//! decay mode pipeline in one go.
//!
//! ```rust
//! # use nuchart_nudat::Dataset;
//! # use nuchart_query::{filter, Bounds, FilterCriteria, HalfLifeRange, ZnaCriteria};
//! let json = r#"{
//!     "3H": {"z": 1, "n": 2, "levels": [{
//!         "halflife": {"value": 12.32, "unit": "y"},
//!         "decayModes": {"observed": [{"mode": "B-", "value": 100}]}
//!     }]},
//!     "4He": {"z": 2, "n": 2, "levels": [{"halflife": {"value": "STABLE"}}]},
//!     "8Be": {"z": 4, "n": 4, "levels": [{
//!         "halflife": {"value": 8.19e-17, "unit": "s"},
//!         "decayModes": {"observed": [{"mode": "A", "value": 100}]}
//!     }]}
//! }"#;
//! let dataset = Dataset::from_json_str(json).unwrap();
//!
//! // Anything up to Z=3 that lives longer than a day, or is stable
//! let criteria = FilterCriteria {
//!     zna: ZnaCriteria {
//!         z: Bounds::between(0, 3),
//!         ..Default::default()
//!     },
//!     half_life: Some(HalfLifeRange::longer_than(86400.0)),
//!     ..Default::default()
//! };
//!
//! let found: Vec<&str> = filter(&dataset, &criteria)
//!     .iter()
//!     .map(|n| n.symbol.as_str())
//!     .collect();
//! assert_eq!(found, vec!["3H", "4He"]);
//! ```
//!
//! ## Resolving
//!
//! A single nuclide is found with [search()] by free text name or any two of
//! Z, N, and A.
//!
//! ## Flattening
//!
//! [flatten()] turns a nuclide into rows for display or export, either one row
//! per observed decay mode ([Layout::Full]) or one row per level with the
//! decay modes nested ([Layout::Compact]).

// Modules
mod error;
mod filter;
mod flatten;
mod search;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use filter::{
    filter, observed_labels, Bounds, DecayModeCriteria, DecayModeMatch, FilterCriteria,
    HalfLifeRange, NuclideFilter, Parity, ZnaCriteria,
};

#[doc(inline)]
pub use flatten::{
    flatten, flatten_compact, flatten_full, BranchRow, CompactRow, FullRow, Layout, Table,
};

#[doc(inline)]
pub use search::{search, Search};
