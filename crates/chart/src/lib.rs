//! Classification and presentation data for the chart of nuclides
//!
//! This crate turns a NuDat [Dataset](nuchart_nudat::Dataset) into what is
//! needed to draw a chart of nuclides, without drawing anything itself.
//!
//! ## Classification
//!
//! Every nuclide is reduced to a single [ChartCell] label along an [Axis]:
//!
//! - [Axis::HalfLife] buckets the ground state half-life, see [HalfLifeBucket]
//! - [Axis::DecayMode] picks the dominant ground state decay mode, see
//!   [dominant_decay_mode()]
//!
//! Labels can be written to and read back from JSON with [write_cells()] and
//! [read_cells()], which also accept externally prepared categories such as
//! synthesis methods.
//!
//! ## Presentation
//!
//! A colour [Scheme] maps labels to [Rgb] colours and legend entries. A
//! [ChartArea] selects a window of the chart and builds a [ColourGrid] over
//! it, and [annotate()] provides the text for each cell.
//!
//! ```rust
//! # use nuchart_nudat::Dataset;
//! # use nuchart_chart::{classify, Axis, ChartArea, Rgb, Scheme};
//! let json = r#"{
//!     "1H": {"z": 1, "n": 0, "levels": [{"halflife": {"value": "STABLE"}}]},
//!     "3H": {"z": 1, "n": 2, "levels": [{
//!         "halflife": {"value": 12.32, "unit": "y"},
//!         "decayModes": {"observed": [{"mode": "B-", "value": 100}]}
//!     }]}
//! }"#;
//! let dataset = Dataset::from_json_str(json).unwrap();
//!
//! let cells = classify(&dataset, Axis::DecayMode);
//! let area = ChartArea::new(0, 2, 0, 2).unwrap();
//! let grid = area.colour_grid(&cells, Scheme::DecayMode);
//!
//! // Row 1 is Z=1, stable hydrogen is black and tritium is beta-minus pink
//! assert_eq!(grid.get(1, 0), Some(Rgb::BLACK));
//! assert_eq!(grid.get(1, 2), Some(Rgb(231, 140, 198)));
//! assert_eq!(grid.get(0, 0), Some(Rgb::WHITE));
//! ```

// Modules
mod annotate;
mod area;
mod cells;
mod classify;
mod error;
mod palette;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use annotate::{
    annotate, annotate_area, branch_text, half_life_text, CellText, MAX_DECAY_LINES,
};

#[doc(inline)]
pub use area::{ChartArea, ColourGrid};

#[doc(inline)]
pub use cells::{cells_from_json, cells_to_json, read_cells, write_cells};

#[doc(inline)]
pub use classify::{
    classify, classify_nuclide, dominant_decay_mode, half_life_bucket, ranked_decay_modes, Axis,
    ChartCell, DecayLabel, HalfLifeBucket,
};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use palette::{decay_colour_class, LegendEntry, Rgb, Scheme, Swatch};
