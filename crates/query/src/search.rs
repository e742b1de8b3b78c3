//! Resolve a single nuclide by name or by two of Z, N, A

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

// nuchart modules
use nuchart_nudat::{Dataset, Nuclide, NuclideName};

/// Ways of identifying a single nuclide
///
/// Any two of Z, N, and A uniquely identify a nuclide, so the third is never
/// needed. Names accept the same free text forms as [Dataset::find()].
///
/// ```rust
/// # use nuchart_nudat::Dataset;
/// # use nuchart_query::{search, Search};
/// let json = r#"{
///     "3H": {"z": 1, "n": 2, "a": 3},
///     "3He": {"z": 2, "n": 1, "a": 3}
/// }"#;
/// let dataset = Dataset::from_json_str(json).unwrap();
///
/// let helium = search(&dataset, &Search::ZA { z: 2, a: 3 }).unwrap();
/// assert_eq!(helium.symbol, "3He");
///
/// let tritium = search(&dataset, &Search::Name("h 3".into())).unwrap();
/// assert_eq!(tritium.n, 2);
///
/// assert!(search(&dataset, &Search::NA { n: 5, a: 3 }).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Search {
    /// Free text name, e.g. `232Th`, `th-232`
    Name(String),
    /// Proton and neutron numbers
    ZN {
        /// Proton number
        z: u32,
        /// Neutron number
        n: u32,
    },
    /// Proton and mass numbers
    ZA {
        /// Proton number
        z: u32,
        /// Mass number
        a: u32,
    },
    /// Neutron and mass numbers
    NA {
        /// Neutron number
        n: u32,
        /// Mass number
        a: u32,
    },
}

impl Search {
    /// Check a nuclide against the identifiers
    ///
    /// Names are compared on the normalised dataset key. Prefer [search()] for
    /// names, which goes straight to the index.
    pub fn matches(&self, nuclide: &Nuclide) -> bool {
        match self {
            Search::Name(name) => name
                .parse::<NuclideName>()
                .is_ok_and(|name| name.key() == nuclide.symbol),
            Search::ZN { z, n } => nuclide.z == *z && nuclide.n == *n,
            Search::ZA { z, a } => nuclide.z == *z && nuclide.a == *a,
            Search::NA { n, a } => nuclide.n == *n && nuclide.a == *a,
        }
    }
}

/// Find the first nuclide matching the search, in dataset order
///
/// Malformed names are not an error, they simply find nothing.
pub fn search<'a>(dataset: &'a Dataset, search: &Search) -> Option<&'a Nuclide> {
    let found = match search {
        Search::Name(name) => dataset.find(name),
        other => dataset.iter().find(|nuclide| other.matches(nuclide)),
    };

    if found.is_none() {
        debug!("No nuclide found for {search:?}");
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let json = r#"{
            "1n": {"z": 0, "n": 1},
            "1H": {"z": 1, "n": 0},
            "2H": {"z": 1, "n": 1},
            "3He": {"z": 2, "n": 1}
        }"#;
        Dataset::from_json_str(json).unwrap()
    }

    #[test]
    fn two_of_three() {
        let dataset = dataset();
        let symbol = |s: Search| search(&dataset, &s).map(|n| n.symbol.as_str());

        assert_eq!(symbol(Search::ZN { z: 1, n: 1 }), Some("2H"));
        assert_eq!(symbol(Search::ZA { z: 2, a: 3 }), Some("3He"));
        assert_eq!(symbol(Search::NA { n: 0, a: 1 }), Some("1H"));
        assert_eq!(symbol(Search::NA { n: 1, a: 1 }), Some("1n"));
        assert_eq!(symbol(Search::ZN { z: 9, n: 9 }), None);
    }

    #[test]
    fn by_name() {
        let dataset = dataset();
        assert_eq!(
            search(&dataset, &Search::Name("He-3".into())).unwrap().z,
            2
        );
        assert!(search(&dataset, &Search::Name("not a name".into())).is_none());
        assert!(search(&dataset, &Search::Name("4He".into())).is_none());
    }

    #[test]
    fn name_matches_key() {
        let nuclide = Nuclide {
            symbol: "3He".to_string(),
            ..Default::default()
        };
        assert!(Search::Name("he_3".into()).matches(&nuclide));
        assert!(!Search::Name("h3".into()).matches(&nuclide));
    }

    #[test]
    fn deserialise_from_front_end() {
        let search: Search = serde_json::from_str(r#"{"za": {"z": 2, "a": 3}}"#).unwrap();
        assert_eq!(search, Search::ZA { z: 2, a: 3 });
        let search: Search = serde_json::from_str(r#"{"name": "Th232"}"#).unwrap();
        assert_eq!(search, Search::Name("Th232".into()));
    }
}
