//! `nuchart` is a small toolkit for querying and classifying the NNDC NuDat
//! chart of nuclides
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nuchart_utils as utils;

#[doc(inline)]
pub use nuchart_nudat as nudat;

#[cfg(feature = "query")]
#[cfg_attr(docsrs, doc(cfg(feature = "query")))]
#[doc(inline)]
pub use nuchart_query as query;

#[cfg(feature = "chart")]
#[cfg_attr(docsrs, doc(cfg(feature = "chart")))]
#[doc(inline)]
pub use nuchart_chart as chart;
