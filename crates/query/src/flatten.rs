//! Flatten a nuclide into table rows for presentation

// external crates
use serde::Serialize;

// nuchart modules
use nuchart_nudat::{HalfLife, HalfLifeValue, Level, MassExcess, Nuclide};

// internal modules
use crate::error::Result;

/// Table layout
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Layout {
    /// One row for every observed decay mode of every level
    #[default]
    Full,
    /// One row per level with decay modes nested
    Compact,
}

/// Every field of a level, one row per observed decay mode
///
/// A level without observed decay modes still gives a single row with no mode
/// or branching ratio. STABLE levels leave every half-life column empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FullRow {
    /// Dataset key, e.g. `60Co`
    #[serde(rename = "Nuclide")]
    pub nuclide: String,
    /// Proton number
    #[serde(rename = "Z")]
    pub z: u32,
    /// Neutron number
    #[serde(rename = "N")]
    pub n: u32,
    /// Mass number
    #[serde(rename = "A")]
    pub a: u32,
    /// Level energy value
    #[serde(rename = "E(level)")]
    pub energy: Option<f64>,
    /// Level energy unit
    #[serde(rename = "E(level) unit")]
    pub energy_unit: Option<String>,
    /// Spin and parity
    #[serde(rename = "Spin Parity")]
    pub spin_parity: Option<String>,
    /// Mass excess value
    #[serde(rename = "Mass Excess")]
    pub mass_excess: Option<f64>,
    /// Mass excess unit
    #[serde(rename = "Mass Excess unit")]
    pub mass_excess_unit: Option<String>,
    /// Rendered mass excess uncertainty
    #[serde(rename = "Mass Excess uncertainty")]
    pub mass_excess_uncertainty: Option<String>,
    /// Half-life value, empty for STABLE
    #[serde(rename = "Halflife")]
    pub half_life: Option<f64>,
    /// Half-life unit, empty for STABLE
    #[serde(rename = "Halflife unit")]
    pub half_life_unit: Option<String>,
    /// Rendered half-life uncertainty, empty for STABLE
    #[serde(rename = "Halflife uncertainty")]
    pub half_life_uncertainty: Option<String>,
    /// Observed decay mode label
    #[serde(rename = "Decay Mode")]
    pub decay_mode: Option<String>,
    /// Branching ratio (%)
    #[serde(rename = "Branch Ratio")]
    pub branch_ratio: Option<f64>,
}

/// Pre-formatted summary of a level
///
/// Text fields use the NDS formatted values where the export provides them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompactRow {
    /// Level energy and unit, e.g. `58.59 keV`
    #[serde(rename = "E(level)")]
    pub energy: Option<String>,
    /// Spin and parity
    #[serde(rename = "Spin Parity")]
    pub spin_parity: Option<String>,
    /// Mass excess and unit
    #[serde(rename = "Mass Excess")]
    pub mass_excess: Option<String>,
    /// Half-life and unit, or `STABLE`
    #[serde(rename = "Halflife")]
    pub half_life: Option<String>,
    /// Observed decay modes, empty when there are none
    #[serde(rename = "Decay Modes")]
    pub decay_modes: Option<Vec<BranchRow>>,
}

impl CompactRow {
    /// Number of full rows this compact row stands for
    pub fn expanded_len(&self) -> usize {
        self.decay_modes.as_ref().map_or(1, |modes| modes.len().max(1))
    }
}

/// Single entry of a nested decay mode table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BranchRow {
    /// Observed decay mode label
    #[serde(rename = "Decay Mode")]
    pub decay_mode: String,
    /// Branching ratio (%)
    #[serde(rename = "Branch Ratio")]
    pub branch_ratio: Option<f64>,
}

/// Rows of a flattened nuclide in either layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Table {
    /// See [FullRow]
    Full(Vec<FullRow>),
    /// See [CompactRow]
    Compact(Vec<CompactRow>),
}

impl Table {
    /// Number of rows as laid out
    pub fn len(&self) -> usize {
        match self {
            Table::Full(rows) => rows.len(),
            Table::Compact(rows) => rows.len(),
        }
    }

    /// True if there are no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows in the full layout
    pub fn expanded_len(&self) -> usize {
        match self {
            Table::Full(rows) => rows.len(),
            Table::Compact(rows) => rows.iter().map(CompactRow::expanded_len).sum(),
        }
    }

    /// JSON array of row objects keyed by column heading
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Flatten every level of a nuclide into rows of the chosen layout
///
/// ```rust
/// # use nuchart_nudat::Nuclide;
/// # use nuchart_query::{flatten, Layout};
/// let json = r#"{
///     "name": "212Bi", "z": 83, "n": 129, "a": 212,
///     "levels": [{
///         "energy": {"value": 0, "unit": "keV"},
///         "halflife": {"value": 60.55, "unit": "m", "formats": {"NDS": "60.55 6"}},
///         "decayModes": {"observed": [
///             {"mode": "B-", "value": 64.06},
///             {"mode": "A", "value": 35.94}
///         ]}
///     }]
/// }"#;
/// let bismuth: Nuclide = serde_json::from_str(json).unwrap();
///
/// let full = flatten(&bismuth, Layout::Full);
/// let compact = flatten(&bismuth, Layout::Compact);
///
/// assert_eq!(full.len(), 2);
/// assert_eq!(compact.len(), 1);
/// assert_eq!(compact.expanded_len(), full.len());
/// ```
pub fn flatten(nuclide: &Nuclide, layout: Layout) -> Table {
    match layout {
        Layout::Full => Table::Full(flatten_full(nuclide)),
        Layout::Compact => Table::Compact(flatten_compact(nuclide)),
    }
}

/// Rows of the [Layout::Full] table
pub fn flatten_full(nuclide: &Nuclide) -> Vec<FullRow> {
    let mut rows = Vec::new();

    for level in &nuclide.levels {
        let row = level_row(nuclide, level);
        let observed = level.observed();

        if observed.is_empty() {
            rows.push(row);
        } else {
            rows.extend(observed.iter().map(|mode| FullRow {
                decay_mode: Some(mode.mode.clone()),
                branch_ratio: mode.value,
                ..row.clone()
            }));
        }
    }

    rows
}

/// Rows of the [Layout::Compact] table
pub fn flatten_compact(nuclide: &Nuclide) -> Vec<CompactRow> {
    nuclide
        .levels
        .iter()
        .map(|level| {
            let observed = level.observed();
            let decay_modes = (!observed.is_empty()).then(|| {
                observed
                    .iter()
                    .map(|mode| BranchRow {
                        decay_mode: mode.mode.clone(),
                        branch_ratio: mode.value,
                    })
                    .collect()
            });

            CompactRow {
                energy: level.energy_text(),
                spin_parity: level.spin_parity.clone(),
                mass_excess: level.mass_excess.as_ref().and_then(MassExcess::text),
                half_life: level.half_life.as_ref().and_then(HalfLife::text),
                decay_modes,
            }
        })
        .collect()
}

/// Everything but the decay mode columns
fn level_row(nuclide: &Nuclide, level: &Level) -> FullRow {
    let mut row = FullRow {
        nuclide: nuclide.symbol.clone(),
        z: nuclide.z,
        n: nuclide.n,
        a: nuclide.a,
        spin_parity: level.spin_parity.clone(),
        ..Default::default()
    };

    if let Some(energy) = &level.energy {
        row.energy = Some(energy.value);
        row.energy_unit = Some(energy.unit.clone());
    }

    if let Some(mass_excess) = &level.mass_excess {
        row.mass_excess = mass_excess.value;
        row.mass_excess_unit = Some(mass_excess.unit.clone());
        row.mass_excess_uncertainty = mass_excess.uncertainty.as_ref().and_then(|u| u.render());
    }

    if let Some(half_life) = &level.half_life {
        if let HalfLifeValue::Value(value) = half_life.value {
            row.half_life = Some(value);
            row.half_life_unit = half_life.unit.clone();
            row.half_life_uncertainty = half_life.uncertainty.as_ref().and_then(|u| u.render());
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuchart_nudat::{DecayMode, DecayModes, Energy, Uncertainty};

    fn level(energy: f64, modes: &[(&str, f64)]) -> Level {
        Level {
            energy: Some(Energy {
                value: energy,
                unit: "keV".to_string(),
                uncertainty: None,
            }),
            decay_modes: Some(DecayModes {
                observed: modes.iter().map(|(m, v)| DecayMode::new(m, *v)).collect(),
                predicted: vec![DecayMode::unquantified("2B-")],
            }),
            ..Default::default()
        }
    }

    fn nuclide() -> Nuclide {
        Nuclide {
            symbol: "60Co".to_string(),
            z: 27,
            n: 33,
            a: 60,
            levels: vec![
                level(0.0, &[("B-", 100.0)]),
                level(58.59, &[("IT", 99.75), ("B-", 0.25)]),
                level(1000.0, &[]),
                Level::default(),
            ],
        }
    }

    #[test]
    fn full_rows_per_decay_mode() {
        let rows = flatten_full(&nuclide());
        assert_eq!(rows.len(), 5);

        assert_eq!(rows[1].decay_mode.as_deref(), Some("IT"));
        assert_eq!(rows[2].branch_ratio, Some(0.25));
        assert_eq!(rows[2].energy, Some(58.59));

        assert_eq!(rows[3].energy_unit.as_deref(), Some("keV"));
        assert!(rows[3].decay_mode.is_none());
        assert!(rows[4].energy.is_none());
        assert!(rows.iter().all(|r| r.nuclide == "60Co" && r.a == 60));
    }

    #[test]
    fn compact_nests_decay_modes() {
        let rows = flatten_compact(&nuclide());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].energy.as_deref(), Some("58.59 keV"));
        assert_eq!(rows[1].decay_modes.as_ref().unwrap().len(), 2);
        assert!(rows[2].decay_modes.is_none());
        assert!(rows[3].energy.is_none());
    }

    #[test]
    fn row_counts_agree() {
        let nuclide = nuclide();
        let full = flatten(&nuclide, Layout::Full);
        let compact = flatten(&nuclide, Layout::Compact);
        assert_eq!(full.len(), compact.expanded_len());
        assert_eq!(full.expanded_len(), full.len());
    }

    #[test]
    fn stable_half_life_columns() {
        let nuclide = Nuclide {
            symbol: "4He".to_string(),
            z: 2,
            n: 2,
            a: 4,
            levels: vec![Level {
                half_life: Some(HalfLife::stable()),
                ..Default::default()
            }],
        };

        let full = flatten_full(&nuclide);
        assert!(full[0].half_life.is_none());
        assert!(full[0].half_life_unit.is_none());
        assert!(full[0].half_life_uncertainty.is_none());

        let compact = flatten_compact(&nuclide);
        assert_eq!(compact[0].half_life.as_deref(), Some("STABLE"));
    }

    #[test]
    fn uncertainties_are_rendered() {
        let level = Level {
            half_life: Some(HalfLife {
                uncertainty: Some(Uncertainty::Asymmetric {
                    upper: 0.006,
                    lower: 0.004,
                }),
                ..HalfLife::new(10.467, "m")
            }),
            mass_excess: Some(MassExcess {
                value: Some(-61649.0),
                unit: "keV".to_string(),
                uncertainty: Some(Uncertainty::Value(0.4)),
                formats: None,
            }),
            ..Default::default()
        };

        let row = level_row(&Nuclide::default(), &level);
        assert_eq!(row.half_life_uncertainty.as_deref(), Some("+0.006 -0.004"));
        assert_eq!(row.mass_excess, Some(-61649.0));
        assert_eq!(row.mass_excess_unit.as_deref(), Some("keV"));
        assert_eq!(row.mass_excess_uncertainty.as_deref(), Some("0.4"));
    }

    #[test]
    fn json_headings() {
        let table = flatten(&nuclide(), Layout::Compact);
        let json = table.to_json().unwrap();
        assert!(json.starts_with(r#"[{"E(level)":"0 keV","#));
        assert!(json.contains(r#""Decay Modes":[{"Decay Mode":"B-","Branch Ratio":100.0}]"#));
    }
}
