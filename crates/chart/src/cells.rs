//! Persist labelled chart cells as JSON

// external crates
use log::info;

// internal modules
use crate::classify::ChartCell;
use crate::error::Result;

// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write chart cells to a JSON file
///
/// The file is a flat array of `{"z", "n", "type"}` objects, so a
/// classification only needs to be computed once per dataset.
///
/// ```no_run
/// # use nuchart_nudat::Dataset;
/// # use nuchart_chart::{classify, write_cells, Axis};
/// let dataset = Dataset::read_json("./data/nudat_sample.json").unwrap();
/// let cells = classify(&dataset, Axis::HalfLife);
/// write_cells("./classified_half_life.json", &cells).unwrap();
/// ```
pub fn write_cells<P: AsRef<Path>>(path: P, cells: &[ChartCell]) -> Result<()> {
    info!("Writing {} cells to {}", cells.len(), path.as_ref().display());
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, cells)?;
    Ok(())
}

/// Read chart cells from a JSON file
///
/// Any list of `{"z", "n", "type"}` objects will do, including categories that
/// are not computed here such as synthesis methods.
pub fn read_cells<P: AsRef<Path>>(path: P) -> Result<Vec<ChartCell>> {
    info!("Reading {}", path.as_ref().display());
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Chart cells as a JSON string
pub fn cells_to_json(cells: &[ChartCell]) -> Result<String> {
    Ok(serde_json::to_string(cells)?)
}

/// Chart cells from a JSON string
///
/// ```rust
/// # use nuchart_chart::{cells_from_json, ChartCell};
/// let cells = cells_from_json(r#"[{"z": 1, "n": 0, "type": "MS"}]"#).unwrap();
/// assert_eq!(cells, vec![ChartCell::new(1, 0, "MS")]);
/// ```
pub fn cells_from_json(json: &str) -> Result<Vec<ChartCell>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn string_round_trip() {
        let cells = vec![ChartCell::new(1, 0, "ST"), ChartCell::new(90, 142, "1e15s")];
        let json = cells_to_json(&cells).unwrap();
        assert_eq!(
            json,
            r#"[{"z":1,"n":0,"type":"ST"},{"z":90,"n":142,"type":"1e15s"}]"#
        );
        assert_eq!(cells_from_json(&json).unwrap(), cells);
    }

    #[test]
    fn missing_label_is_an_error() {
        assert!(matches!(
            cells_from_json(r#"[{"z": 1, "n": 0}]"#),
            Err(Error::FailedSerde(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_cells("./does/not/exist.json"),
            Err(Error::Io(_))
        ));
    }
}
