// internal modules
use crate::error::{Error, Result};
use crate::nuclide::{Nuclide, NuclideName};

// external crates
use log::{debug, info};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

// standard library
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Read-only handle to the NuDat dataset
///
/// The NuDat export is a single JSON object keyed by nuclide symbol. The
/// [Dataset] keeps every [Nuclide] in the order of the file alongside an index
/// by symbol, so that lookups by key are direct and scans are deterministic.
///
/// Loading validates the A = Z + N invariant of every record. The nuclide
/// symbol is always the key of the record in the file, any `name` the record
/// carries is replaced.
///
/// There is no global state, load the data once and pass the handle around.
///
/// ```rust
/// # use nuchart_nudat::Dataset;
/// let json = r#"{
///     "1n": {"z": 0, "n": 1, "a": 1},
///     "1H": {"z": 1, "n": 0, "a": 1, "levels": [{"halflife": {"value": "STABLE"}}]}
/// }"#;
///
/// let dataset = Dataset::from_json_str(json).unwrap();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.get("1H").unwrap().z, 1);
/// assert_eq!(dataset.find("h-1").unwrap().symbol, "1H");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    nuclides: Vec<Nuclide>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from nuclides, keyed by their symbols
    pub fn new(nuclides: Vec<Nuclide>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nuclides.len());

        for (i, nuclide) in nuclides.iter().enumerate() {
            nuclide.validate()?;
            if index.insert(nuclide.symbol.clone(), i).is_some() {
                return Err(Error::DuplicateNuclide(nuclide.symbol.clone()));
            }
        }

        debug!("Indexed {} nuclides", nuclides.len());
        Ok(Self { nuclides, index })
    }

    /// Read the NuDat JSON export from a file
    ///
    /// The `path` takes anything that can be turned into a `Path` reference,
    /// such as a [&str], [String], [Path], etc...
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        let reader = BufReader::new(File::open(path)?);
        Self::from_json_reader(reader)
    }

    /// Read the NuDat JSON export from any reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Entries = serde_json::from_reader(reader)?;
        Self::new(entries.0)
    }

    /// Read the NuDat JSON export from a string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Entries = serde_json::from_str(json)?;
        Self::new(entries.0)
    }

    /// Number of nuclides
    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    /// True if there are no nuclides at all
    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }

    /// Iterate over nuclides in file order
    pub fn iter(&self) -> std::slice::Iter<'_, Nuclide> {
        self.nuclides.iter()
    }

    /// All nuclides in file order
    pub fn nuclides(&self) -> &[Nuclide] {
        &self.nuclides
    }

    /// Exact lookup by dataset key, e.g. `232Th`
    pub fn get(&self, key: &str) -> Option<&Nuclide> {
        self.index.get(key).map(|&i| &self.nuclides[i])
    }

    /// Lookup by free text name
    ///
    /// Anything that does not parse as a nuclide name is simply not found. See
    /// [NuclideName] for the accepted forms.
    pub fn find(&self, name: &str) -> Option<&Nuclide> {
        let name = NuclideName::from_str(name).ok()?;
        self.get(&name.key())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Nuclide;
    type IntoIter = std::slice::Iter<'a, Nuclide>;

    fn into_iter(self) -> Self::IntoIter {
        self.nuclides.iter()
    }
}

/// Top level JSON object collected in file order
struct Entries(Vec<Nuclide>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Entries;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of nuclide symbols to nuclide records")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> core::result::Result<Entries, M::Error> {
        let mut nuclides = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((key, mut nuclide)) = map.next_entry::<String, Nuclide>()? {
            if !nuclide.symbol.is_empty() && nuclide.symbol != key {
                debug!("Record \"{}\" is stored as \"{key}\"", nuclide.symbol);
            }
            nuclide.symbol = key;
            nuclides.push(nuclide);
        }

        Ok(Entries(nuclides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "3H": {"name": "3H", "z": 1, "n": 2, "a": 3},
        "3He": {"z": 2, "n": 1, "a": 3},
        "1n": {"z": 0, "n": 1, "a": 1}
    }"#;

    #[test]
    fn keeps_file_order() {
        let dataset = Dataset::from_json_str(SMALL).unwrap();
        let symbols: Vec<&str> = dataset.iter().map(|n| n.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["3H", "3He", "1n"]);
    }

    #[test]
    fn symbol_from_key() {
        let dataset = Dataset::from_json_str(SMALL).unwrap();
        assert_eq!(dataset.get("3He").unwrap().symbol, "3He");
    }

    #[test]
    fn key_wins_over_record_name() {
        let json = r#"{"232Th": {"name": "Th232", "z": 90, "n": 142, "a": 232}}"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.get("232Th").unwrap().symbol, "232Th");
        assert_eq!(dataset.find("th-232").unwrap().z, 90);
        assert!(dataset.get("Th232").is_none());
    }

    #[test]
    fn oversized_numbers_are_rejected() {
        let json = r#"{"X": {"z": 4294967295, "n": 1}}"#;
        assert!(Dataset::from_json_str(json).is_err());
    }

    #[test]
    fn find_by_free_text() {
        let dataset = Dataset::from_json_str(SMALL).unwrap();
        assert_eq!(dataset.find("he-3").unwrap().z, 2);
        assert_eq!(dataset.find("n1").unwrap().n, 1);
        assert!(dataset.find("Li7").is_none());
        assert!(dataset.find("not a nuclide").is_none());
    }

    #[test]
    fn invalid_mass_number_is_rejected() {
        let json = r#"{"3H": {"z": 1, "n": 2, "a": 4}}"#;
        assert!(matches!(
            Dataset::from_json_str(json),
            Err(Error::MassNumberMismatch { .. })
        ));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let nuclide = Nuclide {
            symbol: "1H".to_string(),
            z: 1,
            n: 0,
            a: 1,
            levels: vec![],
        };
        assert!(matches!(
            Dataset::new(vec![nuclide.clone(), nuclide]),
            Err(Error::DuplicateNuclide(_))
        ));
    }

    #[test]
    fn not_a_map() {
        assert!(matches!(
            Dataset::from_json_str("[1, 2]"),
            Err(Error::Json(_))
        ));
    }
}
