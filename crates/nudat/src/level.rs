// external crates
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// nuchart modules
use nuchart_utils::{f, OptionExt};

// internal modules
use crate::uncertainty::Uncertainty;
use crate::units::TimeUnit;

/// Data for a single energy level of a nuclide
///
/// This is almost a mirror of a `levels` entry in the NuDat JSON export.
///
/// ## Why Option?
///
/// Every block of a level is optional in the export. Excited states are often
/// missing a mass excess, many levels have no known half-life, and decay modes
/// only exist for levels that are known to decay.
///
/// For transparency the data remain the standard [Option] type, and accessors
/// such as [Level::lifetime()] collapse the nested options into one value so
/// that callers never have to probe each layer.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Level {
    /// Excitation energy of the level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<Energy>,

    /// Spin and parity, e.g. `0+`, `(7/2-)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_parity: Option<String>,

    /// Mass excess
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_excess: Option<MassExcess>,

    /// Half-life of the level
    #[serde(rename = "halflife", skip_serializing_if = "Option::is_none")]
    pub half_life: Option<HalfLife>,

    /// Observed and predicted decay modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay_modes: Option<DecayModes>,
}

impl Level {
    /// Reduce the half-life of this level to a [Lifetime]
    pub fn lifetime(&self) -> Lifetime {
        self.half_life
            .as_ref()
            .map_or(Lifetime::Unknown, HalfLife::lifetime)
    }

    /// True only if the half-life is the STABLE marker
    pub fn is_stable(&self) -> bool {
        self.half_life.as_ref().is_some_and(HalfLife::is_stable)
    }

    /// Observed decay modes, empty if there are none
    pub fn observed(&self) -> &[DecayMode] {
        self.decay_modes
            .as_ref()
            .map(|modes| modes.observed.as_slice())
            .unwrap_or(&[])
    }

    /// Observed followed by predicted decay modes, empty if there are none
    pub fn all_decay_modes(&self) -> Vec<&DecayMode> {
        self.decay_modes
            .as_ref()
            .map(|modes| modes.observed.iter().chain(&modes.predicted).collect())
            .unwrap_or_default()
    }

    /// Level energy and unit as a single string, e.g. `0 keV`
    pub fn energy_text(&self) -> Option<String> {
        self.energy.as_ref().map(|e| f!("{} {}", e.value, e.unit))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Level\n".to_string();
        s += &f!("  Energy           {}\n", self.energy_text().display());
        s += &f!("  Spin parity      {}\n", self.spin_parity.display());
        s += &f!(
            "  Mass excess      {}\n",
            self.mass_excess.as_ref().and_then(MassExcess::text).display()
        );
        s += &f!(
            "  Half life        {}\n",
            self.half_life.as_ref().and_then(HalfLife::text).display()
        );
        for mode in self.observed() {
            s += &f!("  Decay mode       {mode}\n");
        }
        write!(f, "{s}")
    }
}

/// Excitation energy of a level
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Energy {
    /// Energy value
    pub value: f64,
    /// Energy unit, usually keV
    pub unit: String,
    /// Uncertainty on the energy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<Uncertainty>,
}

/// Pre-formatted representations of a value
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Formats {
    /// Nuclear Data Sheets style, e.g. `1.40E10 y 1`
    #[serde(rename = "NDS", skip_serializing_if = "Option::is_none")]
    pub nds: Option<String>,
}

/// Mass excess of a level
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct MassExcess {
    /// Mass excess value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Mass excess unit, usually keV
    pub unit: String,
    /// Uncertainty on the mass excess
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<Uncertainty>,
    /// Pre-formatted representations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Formats>,
}

impl MassExcess {
    /// NDS formatted value followed by the unit
    ///
    /// Falls back to the raw value when no formatted string is available.
    pub fn text(&self) -> Option<String> {
        let value = nds_text(&self.formats).or_else(|| self.value.map(|v| f!("{v}")))?;
        Some(f!("{value} {}", self.unit))
    }
}

/// The numeric part of a half-life
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum HalfLifeValue {
    /// The literal `STABLE` marker
    Stable,
    /// A finite half-life in the accompanying unit
    Value(f64),
    /// No value was given
    #[default]
    Missing,
}

impl HalfLifeValue {
    /// True for the [HalfLifeValue::Missing] variant
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl<'de> Deserialize<'de> for HalfLifeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            Null,
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Null => HalfLifeValue::Missing,
            Raw::Number(value) => HalfLifeValue::Value(value),
            Raw::Text(text) if text.trim().eq_ignore_ascii_case("STABLE") => HalfLifeValue::Stable,
            Raw::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) => HalfLifeValue::Value(value),
                Err(_) => {
                    warn!("Unable to interpret half-life value \"{text}\", treated as missing");
                    HalfLifeValue::Missing
                }
            },
        })
    }
}

impl Serialize for HalfLifeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HalfLifeValue::Stable => serializer.serialize_str("STABLE"),
            HalfLifeValue::Value(value) => serializer.serialize_f64(*value),
            HalfLifeValue::Missing => serializer.serialize_none(),
        }
    }
}

/// Half-life of a level
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct HalfLife {
    /// Either the STABLE marker or a value in `unit`
    #[serde(skip_serializing_if = "HalfLifeValue::is_missing")]
    pub value: HalfLifeValue,
    /// Unit symbol, not guaranteed to be a time unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Uncertainty on the half-life
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<Uncertainty>,
    /// Pre-formatted representations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Formats>,
}

impl HalfLife {
    /// A stable half-life
    pub fn stable() -> Self {
        Self {
            value: HalfLifeValue::Stable,
            ..Default::default()
        }
    }

    /// A finite half-life in the given unit
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value: HalfLifeValue::Value(value),
            unit: Some(unit.to_string()),
            ..Default::default()
        }
    }

    /// True only for the STABLE marker
    pub fn is_stable(&self) -> bool {
        self.value == HalfLifeValue::Stable
    }

    /// Collapse the value and unit into a [Lifetime]
    ///
    /// ```rust
    /// # use nuchart_nudat::{HalfLife, Lifetime};
    /// assert_eq!(HalfLife::new(2.0, "m").lifetime(), Lifetime::Seconds(120.0));
    /// assert_eq!(HalfLife::stable().lifetime(), Lifetime::Stable);
    /// assert_eq!(
    ///     HalfLife::new(5.0, "keV").lifetime(),
    ///     Lifetime::SpecialUnit("keV".to_string())
    /// );
    /// ```
    pub fn lifetime(&self) -> Lifetime {
        match self.value {
            HalfLifeValue::Stable => Lifetime::Stable,
            HalfLifeValue::Missing => Lifetime::Unknown,
            HalfLifeValue::Value(value) => {
                let unit = self.unit.as_deref().unwrap_or_default();
                match unit.parse::<TimeUnit>() {
                    Ok(unit) => Lifetime::Seconds(unit.to_seconds(value)),
                    Err(_) => Lifetime::SpecialUnit(unit.to_string()),
                }
            }
        }
    }

    /// `STABLE`, or the NDS formatted value followed by the unit
    pub fn text(&self) -> Option<String> {
        match self.value {
            HalfLifeValue::Stable => Some("STABLE".to_string()),
            HalfLifeValue::Missing => None,
            HalfLifeValue::Value(value) => {
                let text = nds_text(&self.formats).unwrap_or_else(|| f!("{value}"));
                Some(f!("{text} {}", self.unit.display_or_blank()))
            }
        }
    }
}

/// Half-life reduced to something directly comparable
#[derive(Debug, Clone, PartialEq)]
pub enum Lifetime {
    /// The STABLE marker
    Stable,
    /// Finite half-life converted to seconds
    Seconds(f64),
    /// Half-life quoted in a unit that is not a time unit
    SpecialUnit(String),
    /// No half-life information
    Unknown,
}

/// Observed and predicted decay modes of a level
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct DecayModes {
    /// Experimentally observed decay modes
    pub observed: Vec<DecayMode>,
    /// Theoretically predicted decay modes
    pub predicted: Vec<DecayMode>,
}

/// A single decay mode and its branching ratio
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct DecayMode {
    /// Decay mode label, e.g. `B-`, `A`, `EC+B+`
    pub mode: String,
    /// Branching ratio (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Uncertainty on the branching ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<Uncertainty>,
}

impl DecayMode {
    /// A decay mode with a known branching ratio
    pub fn new(mode: &str, value: f64) -> Self {
        Self {
            mode: mode.to_string(),
            value: Some(value),
            uncertainty: None,
        }
    }

    /// A decay mode without a branching ratio
    pub fn unquantified(mode: &str) -> Self {
        Self {
            mode: mode.to_string(),
            ..Default::default()
        }
    }

    /// Has a branching ratio
    pub fn is_quantified(&self) -> bool {
        self.value.is_some()
    }

    /// Label with known data-entry variants fixed, see [canonical_mode()]
    pub fn canonical_mode(&self) -> &str {
        canonical_mode(&self.mode)
    }
}

impl std::fmt::Display for DecayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} %", self.mode, self.value.display())
    }
}

/// Fix known inconsistencies in decay mode labels
///
/// The export writes beta-minus as `β⁻` in a couple of places rather than
/// `B-`. Composite modes such as `2B-` are genuinely different decays and are
/// left alone.
///
/// ```rust
/// # use nuchart_nudat::canonical_mode;
/// assert_eq!(canonical_mode("β⁻"), "B-");
/// assert_eq!(canonical_mode("B-"), "B-");
/// assert_eq!(canonical_mode("2B-"), "2B-");
/// ```
pub fn canonical_mode(label: &str) -> &str {
    match label {
        "β⁻" => "B-",
        other => other,
    }
}

fn nds_text(formats: &Option<Formats>) -> Option<String> {
    formats.as_ref().and_then(|f| f.nds.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(json: &str) -> Level {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn stable_marker() {
        let level = level(r#"{"halflife": {"value": "STABLE"}}"#);
        assert!(level.is_stable());
        assert_eq!(level.lifetime(), Lifetime::Stable);
        assert_eq!(level.half_life.unwrap().text().unwrap(), "STABLE");
    }

    #[test]
    fn numeric_half_life() {
        let level = level(
            r#"{"halflife": {"value": 10.5, "unit": "h", "formats": {"NDS": "10.5 2"}}}"#,
        );
        assert_eq!(level.lifetime(), Lifetime::Seconds(10.5 * 3600.0));
        assert_eq!(level.half_life.unwrap().text().unwrap(), "10.5 2 h");
    }

    #[test]
    fn special_unit() {
        let level = level(r#"{"halflife": {"value": 1.2, "unit": "MeV"}}"#);
        assert_eq!(level.lifetime(), Lifetime::SpecialUnit("MeV".to_string()));
    }

    #[test]
    fn missing_half_life_parts() {
        assert_eq!(Level::default().lifetime(), Lifetime::Unknown);
        let level = level(r#"{"halflife": {"unit": "s"}}"#);
        assert_eq!(level.lifetime(), Lifetime::Unknown);
    }

    #[test]
    fn decay_mode_accessors() {
        let level = level(
            r#"{"decayModes": {
                "observed": [{"mode": "A", "value": 60}],
                "predicted": [{"mode": "SF"}]
            }}"#,
        );
        assert_eq!(level.observed().len(), 1);
        let all = level.all_decay_modes();
        assert_eq!(all.len(), 2);
        assert!(all[0].is_quantified());
        assert!(!all[1].is_quantified());
        assert!(Level::default().observed().is_empty());
    }

    #[test]
    fn mass_excess_text() {
        let level = level(
            r#"{"massExcess": {"value": 35448.3, "unit": "keV", "formats": {"NDS": "35448.3 19"}}}"#,
        );
        assert_eq!(
            level.mass_excess.unwrap().text().unwrap(),
            "35448.3 19 keV"
        );

        let bare = MassExcess {
            value: Some(-100.5),
            unit: "keV".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.text().unwrap(), "-100.5 keV");
    }

    #[test]
    fn stable_serialises_as_marker() {
        let json = serde_json::to_string(&HalfLife::stable()).unwrap();
        assert_eq!(json, r#"{"value":"STABLE"}"#);
    }
}
