//! Text drawn on top of each chart cell

// external crates
use itertools::Itertools;
use serde::Serialize;

// nuchart modules
use nuchart_nudat::{Dataset, DecayMode, HalfLifeValue, Level, Nuclide, Uncertainty};
use nuchart_utils::{f, OptionExt, ValueExt};

// internal modules
use crate::area::ChartArea;
use crate::classify::ranked_decay_modes;

/// Most decay modes written on a single cell
pub const MAX_DECAY_LINES: usize = 3;

/// Annotation for one nuclide
///
/// ```rust
/// # use nuchart_nudat::Nuclide;
/// # use nuchart_chart::annotate;
/// let json = r#"{
///     "name": "212Bi", "z": 83, "n": 129, "a": 212,
///     "levels": [{
///         "halflife": {"value": 60.55, "unit": "m"},
///         "decayModes": {"observed": [
///             {"mode": "A", "value": 35.94},
///             {"mode": "B-", "value": 64.06}
///         ]}
///     }]
/// }"#;
/// let bismuth: Nuclide = serde_json::from_str(json).unwrap();
///
/// let text = annotate(&bismuth);
/// assert_eq!(text.element, "Bi");
/// assert_eq!(text.name, "212Bi");
/// assert_eq!(text.detail(), "60.55 min\n\nB- = 64.06%\nA = 35.94%");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CellText {
    /// Proton number
    pub z: u32,
    /// Neutron number
    pub n: u32,
    /// Element symbol
    pub element: String,
    /// Mass number followed by element, e.g. `232Th`
    pub name: String,
    /// Ground state half-life, empty if unknown
    pub half_life: String,
    /// Leading decay modes with branching ratios
    pub decay_modes: Vec<String>,
}

impl CellText {
    /// Half-life, a blank line, then one decay mode per line
    pub fn detail(&self) -> String {
        if self.decay_modes.is_empty() {
            f!("{}\n", self.half_life)
        } else {
            f!("{}\n\n{}", self.half_life, self.decay_modes.iter().join("\n"))
        }
    }
}

/// Build the annotation for a single nuclide from its ground state
pub fn annotate(nuclide: &Nuclide) -> CellText {
    let element = nuclide.element();
    let ground = nuclide.ground_state();

    CellText {
        z: nuclide.z,
        n: nuclide.n,
        name: f!("{}{element}", nuclide.a),
        element,
        half_life: ground.map(half_life_text).unwrap_or_default(),
        decay_modes: ground
            .map(|level| {
                ranked_decay_modes(level)
                    .into_iter()
                    .take(MAX_DECAY_LINES)
                    .map(branch_text)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Annotations for every nuclide inside the chart area, in dataset order
pub fn annotate_area(dataset: &Dataset, area: &ChartArea) -> Vec<CellText> {
    dataset
        .iter()
        .filter(|nuclide| area.contains(nuclide.z, nuclide.n))
        .map(annotate)
        .collect()
}

/// Short half-life text for a cell
///
/// Minutes are written `min` so they are not mistaken for metres, and long
/// values use scientific notation.
///
/// ```rust
/// # use nuchart_nudat::{HalfLife, Level};
/// # use nuchart_chart::half_life_text;
/// let level = |half_life| Level { half_life: Some(half_life), ..Default::default() };
///
/// assert_eq!(half_life_text(&level(HalfLife::new(10.2, "m"))), "10.2 min");
/// assert_eq!(half_life_text(&level(HalfLife::new(1.4e10, "y"))), "1.40e+10 y");
/// assert_eq!(half_life_text(&level(HalfLife::stable())), "STABLE");
/// assert_eq!(half_life_text(&Level::default()), "");
/// ```
pub fn half_life_text(level: &Level) -> String {
    let Some(half_life) = &level.half_life else {
        return String::new();
    };

    let value = match half_life.value {
        HalfLifeValue::Stable => return "STABLE".to_string(),
        HalfLifeValue::Missing => return String::new(),
        HalfLifeValue::Value(value) if value > 1e4 => value.sci(2, 2),
        HalfLifeValue::Value(value) => f!("{value}"),
    };

    match half_life.unit.as_deref() {
        Some("m") => f!("{value} min"),
        unit => f!("{value} {}", unit.display_or_blank()),
    }
}

/// Decay mode and branching ratio for a cell, e.g. `B- = 100%`
///
/// Long ratios are cut short, or written in scientific notation if they are
/// tiny. Limits use the matching inequality and modes without a ratio are
/// marked with `?`.
///
/// ```rust
/// # use nuchart_nudat::{DecayMode, LimitType, Uncertainty};
/// # use nuchart_chart::branch_text;
/// assert_eq!(branch_text(&DecayMode::new("A", 100.0)), "A = 100%");
/// assert_eq!(branch_text(&DecayMode::new("B-", 0.000021)), "B- = 2.10e-05%");
/// assert_eq!(branch_text(&DecayMode::new("EC", 12.3456789)), "EC = 12.3456%");
/// assert_eq!(branch_text(&DecayMode::unquantified("SF")), "SF ?");
///
/// let limit = DecayMode {
///     uncertainty: Some(Uncertainty::Limit {
///         limit_type: LimitType::Lower,
///         is_inclusive: true,
///     }),
///     ..DecayMode::new("EC", 5.0)
/// };
/// assert_eq!(branch_text(&limit), "EC ≥ 5%");
/// ```
pub fn branch_text(mode: &DecayMode) -> String {
    let label = mode.canonical_mode();
    let Some(value) = mode.value else {
        return f!("{label} ?");
    };

    let mut number = f!("{value}");
    if number.len() > 7 {
        if value > 1e-3 {
            number.truncate(7);
        } else {
            number = value.sci(2, 2);
        }
    }

    let relation = mode
        .uncertainty
        .as_ref()
        .and_then(Uncertainty::limit_symbol)
        .unwrap_or("=");

    f!("{label} {relation} {number}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuchart_nudat::{DecayModes, HalfLife, LimitType};

    fn nuclide(modes: Vec<DecayMode>) -> Nuclide {
        Nuclide {
            symbol: "100Sn".to_string(),
            z: 50,
            n: 50,
            a: 100,
            levels: vec![Level {
                half_life: Some(HalfLife::new(1.16, "s")),
                decay_modes: Some(DecayModes {
                    observed: modes,
                    predicted: vec![DecayMode::unquantified("ECP")],
                }),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn at_most_three_modes() {
        let text = annotate(&nuclide(vec![
            DecayMode::new("EC", 90.0),
            DecayMode::new("EC+B+", 5.0),
            DecayMode::new("B+P", 4.0),
            DecayMode::new("A", 1.0),
        ]));
        assert_eq!(
            text.decay_modes,
            vec!["EC = 90%", "EC+B+ = 5%", "B+P = 4%"]
        );
    }

    #[test]
    fn unquantified_modes_come_last() {
        let text = annotate(&nuclide(vec![DecayMode::new("EC", 100.0)]));
        assert_eq!(text.half_life, "1.16 s");
        assert_eq!(text.decay_modes, vec!["EC = 100%", "ECP ?"]);
        assert_eq!(text.detail(), "1.16 s\n\nEC = 100%\nECP ?");
    }

    #[test]
    fn empty_nuclide() {
        let text = annotate(&Nuclide {
            symbol: "39Na".to_string(),
            z: 11,
            n: 28,
            a: 39,
            levels: vec![],
        });
        assert_eq!(text.name, "39Na");
        assert_eq!(text.element, "Na");
        assert!(text.half_life.is_empty());
        assert!(text.decay_modes.is_empty());
        assert_eq!(text.detail(), "\n");
    }

    #[test]
    fn upper_limits() {
        let mode = DecayMode {
            uncertainty: Some(Uncertainty::Limit {
                limit_type: LimitType::Upper,
                is_inclusive: false,
            }),
            ..DecayMode::new("SF", 1.1e-9)
        };
        assert_eq!(branch_text(&mode), "SF < 1.10e-09%");
    }

    #[test]
    fn small_ratios_use_two_decimals() {
        assert_eq!(branch_text(&DecayMode::new("B+", 0.0001234)), "B+ = 1.23e-04%");
        assert_eq!(branch_text(&DecayMode::new("B+", 0.00012)), "B+ = 0.00012%");
        assert_eq!(branch_text(&DecayMode::new("A", 0.00101)), "A = 0.00101%");
    }

    #[test]
    fn plain_uncertainty_is_equality() {
        let mode = DecayMode {
            uncertainty: Some(Uncertainty::Value(0.03)),
            ..DecayMode::new("IT", 99.75)
        };
        assert_eq!(branch_text(&mode), "IT = 99.75%");
    }

    #[test]
    fn short_half_lives_are_plain() {
        let level = Level {
            half_life: Some(HalfLife::new(10000.0, "s")),
            ..Default::default()
        };
        assert_eq!(half_life_text(&level), "10000 s");

        let level = Level {
            half_life: Some(HalfLife::new(10000.5, "s")),
            ..Default::default()
        };
        assert_eq!(half_life_text(&level), "1.00e+04 s");
    }
}
