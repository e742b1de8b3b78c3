//! Common formatting extensions shared by the nuchart crates
//!
//! These are left public for convenience.
//!
//! For example, rendering missing NuDat fields, normalising element symbols,
//! or printing long half-lives in a compact scientific form are useful
//! everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod option_ext;
mod string_ext;
mod value_ext;

// Flatten
pub use option_ext::OptionExt;
pub use string_ext::StringExt;
pub use value_ext::ValueExt;
