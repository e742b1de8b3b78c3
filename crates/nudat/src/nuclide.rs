//! Nuclide records and names

// external crates
use serde::{Deserialize, Serialize};

// nuchart modules
use nuchart_utils::f;

// internal modules
use crate::error::{Error, Result};
use crate::level::{DecayMode, HalfLife, Level};
use crate::parsers::nuclide_name;

/// A single nuclide from the NuDat export
///
/// The symbol is the key used by the export, i.e. the mass number followed by
/// the element (`232Th`, `1n`).
///
/// Levels are in the order of the export. The first level is always the ground
/// state and is the one used to represent the nuclide on the chart.
///
/// ```rust
/// # use nuchart_nudat::Nuclide;
/// let json = r#"{
///     "name": "3H", "z": 1, "n": 2, "a": 3,
///     "levels": [{"halflife": {"value": 12.32, "unit": "y"}}]
/// }"#;
///
/// let tritium: Nuclide = serde_json::from_str(json).unwrap();
/// assert_eq!(tritium.element(), "H");
/// assert!(tritium.ground_state().is_some());
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(try_from = "RawNuclide")]
pub struct Nuclide {
    /// Symbol used as the dataset key, e.g. `232Th`
    #[serde(rename = "name")]
    pub symbol: String,
    /// Proton number
    pub z: u32,
    /// Neutron number
    pub n: u32,
    /// Mass number
    pub a: u32,
    /// Energy levels, ground state first
    pub levels: Vec<Level>,
}

impl Nuclide {
    /// Ground state level, if there are any levels at all
    pub fn ground_state(&self) -> Option<&Level> {
        self.levels.first()
    }

    /// Half-life of the first level that has one
    pub fn first_half_life(&self) -> Option<&HalfLife> {
        self.levels.iter().find_map(|level| level.half_life.as_ref())
    }

    /// Every observed decay mode across all levels
    pub fn observed_modes(&self) -> impl Iterator<Item = &DecayMode> {
        self.levels.iter().flat_map(Level::observed)
    }

    /// Element symbol taken from the nuclide symbol
    ///
    /// Anything that is not a letter is dropped, so `232Th` gives `Th`.
    pub fn element(&self) -> String {
        self.symbol.chars().filter(char::is_ascii_alphabetic).collect()
    }

    /// Check the A = Z + N invariant
    pub fn validate(&self) -> Result<()> {
        if self.z.checked_add(self.n) == Some(self.a) {
            Ok(())
        } else {
            Err(Error::MassNumberMismatch {
                symbol: self.symbol.clone(),
                z: self.z,
                n: self.n,
                a: self.a,
            })
        }
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("Nuclide {}\n", self.symbol);
        s += &f!("  Z                {}\n", self.z);
        s += &f!("  N                {}\n", self.n);
        s += &f!("  A                {}\n", self.a);
        s += &f!("  Levels           {}\n", self.levels.len());
        write!(f, "{s}")
    }
}

/// Mirror of the JSON record, `a` may be left out
#[derive(Deserialize)]
struct RawNuclide {
    #[serde(default)]
    name: String,
    z: u32,
    n: u32,
    a: Option<u32>,
    #[serde(default)]
    levels: Vec<Level>,
}

impl TryFrom<RawNuclide> for Nuclide {
    type Error = Error;

    fn try_from(raw: RawNuclide) -> Result<Self> {
        let a = match raw.a {
            Some(a) => a,
            None => raw.z.checked_add(raw.n).ok_or_else(|| {
                Error::ParseError(f!("Z={} + N={} is out of range", raw.z, raw.n))
            })?,
        };

        Ok(Nuclide {
            symbol: raw.name,
            z: raw.z,
            n: raw.n,
            a,
            levels: raw.levels,
        })
    }
}

/// A nuclide name normalised to the dataset key convention
///
/// The `FromStr` trait is implemented and will try to parse free text into a
/// name. Either order of element and mass number is accepted, optionally with
/// any number of `-`, `_`, or `|` separators between them. e.g.
///
/// - `232Th`, `232-TH`, `th232`, `Th-232`, `232 Th`
///
/// The element is title-cased unless it is the neutron symbol (`n` or `N`),
/// which is kept exactly as written. Leading zeros on the mass number are
/// dropped.
///
/// ```rust
/// # use nuchart_nudat::NuclideName;
/// # use std::str::FromStr;
/// let name = NuclideName::from_str("th-0232").unwrap();
/// assert_eq!(name.element, "Th");
/// assert_eq!(name.mass_number, "232");
/// assert_eq!(name.key(), "232Th");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NuclideName {
    /// Normalised element symbol
    pub element: String,
    /// Mass number digits without leading zeros
    pub mass_number: String,
}

impl NuclideName {
    /// Dataset key for this name, mass number then element
    pub fn key(&self) -> String {
        f!("{}{}", self.mass_number, self.element)
    }
}

impl std::str::FromStr for NuclideName {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (_, name) = nuclide_name(&compact)
            .map_err(|_| Error::ParseError(f!("Could not extract a nuclide from \"{s}\"")))?;

        Ok(name)
    }
}

impl std::fmt::Display for NuclideName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mass_number_defaults_to_sum() {
        let nuclide: Nuclide = serde_json::from_str(r#"{"name": "4He", "z": 2, "n": 2}"#).unwrap();
        assert_eq!(nuclide.a, 4);
        assert!(nuclide.levels.is_empty());
        assert!(nuclide.ground_state().is_none());
        assert!(nuclide.validate().is_ok());
    }

    #[test]
    fn mismatched_mass_number() {
        let nuclide: Nuclide =
            serde_json::from_str(r#"{"name": "4He", "z": 2, "n": 2, "a": 5}"#).unwrap();
        assert!(matches!(
            nuclide.validate(),
            Err(Error::MassNumberMismatch { a: 5, .. })
        ));
    }

    #[test]
    fn mass_number_overflow() {
        let json = r#"{"name": "X", "z": 4294967295, "n": 1}"#;
        assert!(serde_json::from_str::<Nuclide>(json).is_err());

        let nuclide = Nuclide {
            z: u32::MAX,
            n: 1,
            a: 0,
            ..Default::default()
        };
        assert!(matches!(
            nuclide.validate(),
            Err(Error::MassNumberMismatch { a: 0, .. })
        ));
    }

    #[test]
    fn element_from_symbol() {
        let nuclide = Nuclide {
            symbol: "238U".to_string(),
            ..Default::default()
        };
        assert_eq!(nuclide.element(), "U");
    }

    #[test]
    fn first_half_life_skips_levels_without_one() {
        let json = r#"{"name": "X", "z": 1, "n": 1, "levels": [
            {"spinParity": "1+"},
            {"halflife": {"value": 3, "unit": "s"}}
        ]}"#;
        let nuclide: Nuclide = serde_json::from_str(json).unwrap();
        assert_eq!(nuclide.first_half_life(), Some(&HalfLife::new(3.0, "s")));
    }

    #[test]
    fn name_whitespace_is_ignored() {
        let name = NuclideName::from_str(" 232 Th ").unwrap();
        assert_eq!(name.key(), "232Th");
    }

    #[test]
    fn name_rejects_garbage() {
        assert!(NuclideName::from_str("").is_err());
        assert!(NuclideName::from_str("Th").is_err());
        assert!(NuclideName::from_str("232").is_err());
        assert!(NuclideName::from_str("Th232m").is_err());
        assert!(NuclideName::from_str("Th+232").is_err());
    }
}
