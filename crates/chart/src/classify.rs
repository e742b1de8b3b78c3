//! Reduce every nuclide to a single chart label

// external crates
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

// nuchart modules
use nuchart_nudat::{canonical_mode, Dataset, DecayMode, Level, Lifetime, Nuclide};

/// Which property of the ground state is used to label a nuclide
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Half-life bucket, see [HalfLifeBucket]
    #[default]
    HalfLife,
    /// Dominant decay mode, see [DecayLabel]
    DecayMode,
}

/// Half-life of a ground state reduced to a chart bucket
///
/// Finite half-lives fall into one of 17 buckets, each covering everything
/// below the next boundary in [HalfLifeBucket::BOUNDARIES]. The remaining
/// variants cover the cases where there is no number to bucket.
///
/// ```rust
/// # use nuchart_chart::HalfLifeBucket;
/// assert_eq!(HalfLifeBucket::from_seconds(5e-8).key(), "l100ns");
/// assert_eq!(HalfLifeBucket::from_seconds(1.0).key(), "1s");
/// assert_eq!(HalfLifeBucket::from_seconds(3.15e7).key(), "10Ms");
/// assert_eq!(HalfLifeBucket::from_seconds(1e20).key(), "1e15s");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HalfLifeBucket {
    /// t < 100 ns
    Under100ns,
    /// 100 ns <= t < 1 us
    From100ns,
    /// 1 us <= t < 10 us
    From1us,
    /// 10 us <= t < 100 us
    From10us,
    /// 100 us <= t < 1 ms
    From100us,
    /// 1 ms <= t < 10 ms
    From1ms,
    /// 10 ms <= t < 100 ms
    From10ms,
    /// 100 ms <= t < 1 s
    From100ms,
    /// 1 s <= t < 10 s
    From1s,
    /// 10 s <= t < 100 s
    From10s,
    /// 100 s <= t < 1 ks
    From100s,
    /// 1 ks <= t < 10 ks
    From1ks,
    /// 10 ks <= t < 100 ks
    From10ks,
    /// 100 ks <= t < 10 Ms
    From100ks,
    /// 10 Ms <= t < 1e10 s
    From10Ms,
    /// 1e10 s <= t < 1e15 s
    From1e10s,
    /// t >= 1e15 s
    From1e15s,
    /// STABLE ground state
    Stable,
    /// Half-life quoted in a unit that is not a time unit
    SpecialUnit,
    /// No ground state or no half-life
    Unknown,
}

impl HalfLifeBucket {
    /// Upper bounds (s) of every finite bucket but the last
    pub const BOUNDARIES: [f64; 16] = [
        1e-7, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 1.0, 10.0, 100.0, 1e3, 1e4, 1e5, 1e7, 1e10, 1e15,
    ];

    /// Finite buckets in ascending order
    pub const FINITE: [HalfLifeBucket; 17] = [
        Self::Under100ns,
        Self::From100ns,
        Self::From1us,
        Self::From10us,
        Self::From100us,
        Self::From1ms,
        Self::From10ms,
        Self::From100ms,
        Self::From1s,
        Self::From10s,
        Self::From100s,
        Self::From1ks,
        Self::From10ks,
        Self::From100ks,
        Self::From10Ms,
        Self::From1e10s,
        Self::From1e15s,
    ];

    /// Every bucket, finite buckets first
    pub const ALL: [HalfLifeBucket; 20] = [
        Self::Under100ns,
        Self::From100ns,
        Self::From1us,
        Self::From10us,
        Self::From100us,
        Self::From1ms,
        Self::From10ms,
        Self::From100ms,
        Self::From1s,
        Self::From10s,
        Self::From100s,
        Self::From1ks,
        Self::From10ks,
        Self::From100ks,
        Self::From10Ms,
        Self::From1e10s,
        Self::From1e15s,
        Self::Stable,
        Self::SpecialUnit,
        Self::Unknown,
    ];

    /// Bucket for a finite half-life in seconds
    pub fn from_seconds(seconds: f64) -> Self {
        let index = Self::BOUNDARIES
            .iter()
            .position(|&boundary| seconds < boundary)
            .unwrap_or(Self::BOUNDARIES.len());
        Self::FINITE[index]
    }

    /// Bucket for any [Lifetime]
    pub fn from_lifetime(lifetime: &Lifetime) -> Self {
        match lifetime {
            Lifetime::Stable => Self::Stable,
            Lifetime::Seconds(seconds) => Self::from_seconds(*seconds),
            Lifetime::SpecialUnit(_) => Self::SpecialUnit,
            Lifetime::Unknown => Self::Unknown,
        }
    }

    /// Short key used for persistence and colour lookup
    pub fn key(&self) -> &'static str {
        match self {
            Self::Under100ns => "l100ns",
            Self::From100ns => "100ns",
            Self::From1us => "1us",
            Self::From10us => "10us",
            Self::From100us => "100us",
            Self::From1ms => "1ms",
            Self::From10ms => "10ms",
            Self::From100ms => "100ms",
            Self::From1s => "1s",
            Self::From10s => "10s",
            Self::From100s => "100s",
            Self::From1ks => "1ks",
            Self::From10ks => "10ks",
            Self::From100ks => "100ks",
            Self::From10Ms => "10Ms",
            Self::From1e10s => "1e10s",
            Self::From1e15s => "1e15s",
            Self::Stable => "ST",
            Self::SpecialUnit => "SU",
            Self::Unknown => "UN",
        }
    }

    /// Find a bucket from its key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.key() == key)
    }
}

impl std::fmt::Display for HalfLifeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl From<HalfLifeBucket> for String {
    fn from(bucket: HalfLifeBucket) -> Self {
        bucket.key().to_string()
    }
}

impl TryFrom<String> for HalfLifeBucket {
    type Error = String;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Self::from_key(&key).ok_or_else(|| format!("unknown half-life bucket \"{key}\""))
    }
}

/// Dominant decay mode of a ground state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecayLabel {
    /// No decay modes, but the half-life is STABLE
    Stable,
    /// Nothing to go on
    Unknown,
    /// Label of the leading decay mode, e.g. `B-`
    Mode(String),
}

impl DecayLabel {
    /// Label text used for persistence and colour lookup
    pub fn key(&self) -> &str {
        match self {
            Self::Stable => "STABLE",
            Self::Unknown => "UNKNOWN",
            Self::Mode(mode) => mode,
        }
    }
}

impl std::fmt::Display for DecayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A labelled cell of the chart
///
/// Serialises to `{"z": 90, "n": 142, "type": "1e15s"}`, the same shape used
/// for any per-nuclide category such as synthesis methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartCell {
    /// Proton number
    pub z: u32,
    /// Neutron number
    pub n: u32,
    /// Category key
    #[serde(rename = "type")]
    pub label: String,
}

impl ChartCell {
    /// Cell at (Z, N) with any label
    pub fn new(z: u32, n: u32, label: impl Into<String>) -> Self {
        Self {
            z,
            n,
            label: label.into(),
        }
    }
}

/// Half-life bucket of the ground state
///
/// Only the first level is considered, even if it has no half-life and later
/// levels do.
pub fn half_life_bucket(nuclide: &Nuclide) -> HalfLifeBucket {
    nuclide
        .ground_state()
        .map_or(HalfLifeBucket::Unknown, |level| {
            HalfLifeBucket::from_lifetime(&level.lifetime())
        })
}

/// Observed and predicted decay modes ordered by branching ratio
///
/// Modes with a branching ratio come first, largest first. Equal ratios keep
/// their input order. Modes without a ratio follow in input order.
///
/// ```rust
/// # use nuchart_nudat::{DecayMode, DecayModes, Level};
/// # use nuchart_chart::ranked_decay_modes;
/// let level = Level {
///     decay_modes: Some(DecayModes {
///         observed: vec![DecayMode::unquantified("EC"), DecayMode::new("A", 5.0)],
///         predicted: vec![DecayMode::new("B-", 95.0)],
///     }),
///     ..Default::default()
/// };
///
/// let ranked: Vec<&str> = ranked_decay_modes(&level)
///     .iter()
///     .map(|m| m.mode.as_str())
///     .collect();
/// assert_eq!(ranked, vec!["B-", "A", "EC"]);
/// ```
pub fn ranked_decay_modes(level: &Level) -> Vec<&DecayMode> {
    let (quantified, unquantified): (Vec<&DecayMode>, Vec<&DecayMode>) = level
        .all_decay_modes()
        .into_iter()
        .partition(|mode| mode.is_quantified());

    quantified
        .into_iter()
        .sorted_by(|a, b| ratio(b).total_cmp(&ratio(a)))
        .chain(unquantified)
        .collect()
}

fn ratio(mode: &DecayMode) -> f64 {
    mode.value.unwrap_or_default()
}

/// Dominant decay mode of the ground state
///
/// A ground state with no decay mode block at all is [DecayLabel::Stable] if
/// its half-life is STABLE. A decay mode block with nothing in it is always
/// [DecayLabel::Unknown].
pub fn dominant_decay_mode(nuclide: &Nuclide) -> DecayLabel {
    let Some(level) = nuclide.ground_state() else {
        return DecayLabel::Unknown;
    };

    if level.decay_modes.is_none() {
        return if level.is_stable() {
            DecayLabel::Stable
        } else {
            DecayLabel::Unknown
        };
    }

    ranked_decay_modes(level)
        .first()
        .map_or(DecayLabel::Unknown, |mode| {
            DecayLabel::Mode(canonical_mode(&mode.mode).to_string())
        })
}

/// Label a single nuclide along the chosen axis
pub fn classify_nuclide(nuclide: &Nuclide, axis: Axis) -> ChartCell {
    let label = match axis {
        Axis::HalfLife => half_life_bucket(nuclide).key().to_string(),
        Axis::DecayMode => dominant_decay_mode(nuclide).key().to_string(),
    };
    ChartCell::new(nuclide.z, nuclide.n, label)
}

/// Label every nuclide in the dataset, in dataset order
///
/// ```rust
/// # use nuchart_nudat::Dataset;
/// # use nuchart_chart::{classify, Axis};
/// let json = r#"{
///     "4He": {"z": 2, "n": 2, "levels": [{"halflife": {"value": "STABLE"}}]},
///     "8Be": {"z": 4, "n": 4, "levels": [{
///         "halflife": {"value": 8.19e-17, "unit": "s"},
///         "decayModes": {"observed": [{"mode": "A", "value": 100}]}
///     }]}
/// }"#;
/// let dataset = Dataset::from_json_str(json).unwrap();
///
/// let cells = classify(&dataset, Axis::HalfLife);
/// assert_eq!(cells[0].label, "ST");
/// assert_eq!(cells[1].label, "l100ns");
///
/// let cells = classify(&dataset, Axis::DecayMode);
/// assert_eq!(cells[0].label, "STABLE");
/// assert_eq!(cells[1].label, "A");
/// ```
pub fn classify(dataset: &Dataset, axis: Axis) -> Vec<ChartCell> {
    let cells: Vec<ChartCell> = dataset
        .iter()
        .map(|nuclide| classify_nuclide(nuclide, axis))
        .collect();

    debug!("Classified {} nuclides by {axis:?}", cells.len());
    cells
}
