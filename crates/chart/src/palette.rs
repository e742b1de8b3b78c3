//! Colours and legends for every chart scheme

// external crates
use serde::{Deserialize, Serialize};

// nuchart modules
use nuchart_nudat::canonical_mode;
use nuchart_utils::f;

// internal modules
use crate::classify::Axis;

/// 8-bit RGB colour
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure white, the chart background
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Pure black
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Perceived brightness, 0 to 255
    pub fn luma(&self) -> f64 {
        0.299 * self.0 as f64 + 0.587 * self.1 as f64 + 0.114 * self.2 as f64
    }

    /// Text colour that stays readable on top of this colour
    ///
    /// ```rust
    /// # use nuchart_chart::Rgb;
    /// assert_eq!(Rgb(255, 255, 66).text_colour(), Rgb::BLACK);
    /// assert_eq!(Rgb(41, 0, 107).text_colour(), Rgb::WHITE);
    /// ```
    pub fn text_colour(&self) -> Rgb {
        if self.luma() > 128.0 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Hex string, e.g. `#ff9473`
    pub fn hex(&self) -> String {
        f!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Colour and legend text for one category key
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Category key as found in a [ChartCell](crate::ChartCell) label
    pub key: &'static str,
    /// Fill colour
    pub colour: Rgb,
    /// Legend text
    pub legend: &'static str,
}

const fn swatch(key: &'static str, colour: Rgb, legend: &'static str) -> Swatch {
    Swatch {
        key,
        colour,
        legend,
    }
}

const HALF_LIFE: [Swatch; 20] = [
    swatch("l100ns", Rgb(247, 189, 222), "<100ns"),
    swatch("100ns", Rgb(255, 198, 165), "100ns ~ 1us"),
    swatch("1us", Rgb(255, 231, 198), "1us ~ 10us"),
    swatch("10us", Rgb(255, 255, 156), "10us ~ 100us"),
    swatch("100us", Rgb(255, 255, 16), "100us ~ 1ms"),
    swatch("1ms", Rgb(231, 247, 132), "1ms ~ 10ms"),
    swatch("10ms", Rgb(214, 239, 57), "10ms ~ 100ms"),
    swatch("100ms", Rgb(173, 222, 99), "100ms ~ 1s"),
    swatch("1s", Rgb(82, 181, 82), "1s ~ 10s"),
    swatch("10s", Rgb(99, 189, 181), "10s ~ 100s"),
    swatch("100s", Rgb(99, 198, 222), "100s ~ 1ks"),
    swatch("1ks", Rgb(0, 165, 198), "1ks ~ 10ks"),
    swatch("10ks", Rgb(8, 154, 148), "10ks ~ 100ks"),
    swatch("100ks", Rgb(0, 132, 165), "100ks ~ 10Ms"),
    swatch("10Ms", Rgb(49, 82, 165), "10Ms ~ 1e10s"),
    swatch("1e10s", Rgb(41, 0, 107), "1e10s ~ 1e15s"),
    swatch("1e15s", Rgb(0, 0, 0), ">1e15s"),
    swatch("ST", Rgb(0, 0, 0), "STABLE"),
    swatch("SU", Rgb(255, 148, 115), "SpecialUnit"),
    swatch("UN", Rgb(224, 224, 224), "UNKNOWN"),
];

const DECAY_MODE: [Swatch; 9] = [
    swatch("P", Rgb(255, 148, 115), "Proton"),
    swatch("N", Rgb(156, 123, 189), "Neutron"),
    swatch("A", Rgb(255, 255, 66), "Alpha"),
    swatch("B-", Rgb(231, 140, 198), "Beta-"),
    swatch("EC+B+", Rgb(99, 198, 222), "Beta+ ElectronCapture"),
    swatch("EC", Rgb(0, 132, 165), "ElectronCapture"),
    swatch("SF", Rgb(82, 181, 82), "SpontaneousFission"),
    swatch("STABLE", Rgb(0, 0, 0), "STABLE"),
    swatch("UNKNOWN", Rgb(224, 224, 224), "UNKNOWN"),
];

const SYNTHESIS_METHOD: [Swatch; 8] = [
    swatch("MS", Rgb(0, 0, 0), "Mass Spectroscopy"),
    swatch("RD", Rgb(0, 255, 255), "Radioactive Decay"),
    swatch("LP", Rgb(255, 165, 0), "Light Particles"),
    swatch("FI", Rgb(255, 255, 0), "Fission"),
    swatch("FU", Rgb(255, 0, 0), "Fusion"),
    swatch("SP", Rgb(0, 0, 255), "Spallation"),
    swatch("PF", Rgb(0, 127, 0), "Projectile Fragmentation"),
    swatch("UN", Rgb(127, 0, 127), "Transfer/Deep Inelastic"),
];

/// Colour scheme of a chart
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Half-life bucket keys
    #[default]
    HalfLife,
    /// Dominant decay mode labels
    DecayMode,
    /// Discovery or synthesis method codes
    SynthesisMethod,
}

impl From<Axis> for Scheme {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::HalfLife => Scheme::HalfLife,
            Axis::DecayMode => Scheme::DecayMode,
        }
    }
}

impl Scheme {
    /// Every swatch of the scheme in legend order
    pub fn swatches(&self) -> &'static [Swatch] {
        match self {
            Scheme::HalfLife => &HALF_LIFE,
            Scheme::DecayMode => &DECAY_MODE,
            Scheme::SynthesisMethod => &SYNTHESIS_METHOD,
        }
    }

    /// Swatch with exactly this key
    pub fn swatch(&self, key: &str) -> Option<&'static Swatch> {
        self.swatches().iter().find(|swatch| swatch.key == key)
    }

    /// Fill colour for a cell label
    ///
    /// Decay mode labels are first folded into their colour class with
    /// [decay_colour_class()], so every decay label has a colour. Other schemes
    /// only colour known keys.
    ///
    /// ```rust
    /// # use nuchart_chart::{Rgb, Scheme};
    /// assert_eq!(Scheme::HalfLife.colour("1s"), Some(Rgb(82, 181, 82)));
    /// assert_eq!(Scheme::HalfLife.colour("2s"), None);
    /// assert_eq!(Scheme::DecayMode.colour("2B-"), Scheme::DecayMode.colour("B-"));
    /// ```
    pub fn colour(&self, label: &str) -> Option<Rgb> {
        let key = match self {
            Scheme::DecayMode => decay_colour_class(label),
            _ => label,
        };
        self.swatch(key).map(|swatch| swatch.colour)
    }

    /// Legend entries in display order
    ///
    /// The half-life legend shares one entry between the longest bucket and
    /// stable nuclides since both are drawn in black.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.swatches()
            .iter()
            .filter_map(|swatch| match (self, swatch.key) {
                (Scheme::HalfLife, "ST") => None,
                (Scheme::HalfLife, "1e15s") => Some(LegendEntry {
                    colour: swatch.colour,
                    label: ">1e15s or Stable",
                }),
                _ => Some(LegendEntry {
                    colour: swatch.colour,
                    label: swatch.legend,
                }),
            })
            .collect()
    }
}

/// Single entry of a chart legend
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Patch colour
    pub colour: Rgb,
    /// Legend text
    pub label: &'static str,
}

/// Decay mode colour class for any decay label
///
/// Multi-particle emissions are drawn in the colour of the single particle
/// mode and anything without a class of its own is `UNKNOWN`.
///
/// ```rust
/// # use nuchart_chart::decay_colour_class;
/// assert_eq!(decay_colour_class("2B-"), "B-");
/// assert_eq!(decay_colour_class("3P"), "P");
/// assert_eq!(decay_colour_class("EC+B+"), "EC+B+");
/// assert_eq!(decay_colour_class("IT"), "UNKNOWN");
/// ```
pub fn decay_colour_class(label: &str) -> &'static str {
    let label = canonical_mode(label);
    if let Some(swatch) = DECAY_MODE.iter().find(|swatch| swatch.key == label) {
        return swatch.key;
    }

    match label {
        "2B-" => "B-",
        "2P" | "3P" => "P",
        "2N" => "N",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::HalfLifeBucket;

    #[test]
    fn every_bucket_has_a_colour() {
        for bucket in HalfLifeBucket::ALL {
            assert!(Scheme::HalfLife.colour(bucket.key()).is_some(), "{bucket}");
        }
    }

    #[test]
    fn luma_threshold() {
        assert_eq!(Rgb::WHITE.text_colour(), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.text_colour(), Rgb::WHITE);
        // 0.299*0 + 0.587*132 + 0.114*165 = 96.3
        assert_eq!(Rgb(0, 132, 165).text_colour(), Rgb::WHITE);
        // 0.299*224 + 0.587*224 + 0.114*224 = 224
        assert_eq!(Rgb(224, 224, 224).text_colour(), Rgb::BLACK);
    }

    #[test]
    fn hex_strings() {
        assert_eq!(Rgb(255, 148, 115).hex(), "#ff9473");
        assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn composite_decay_labels_fold() {
        for (label, class) in [
            ("β⁻", "B-"),
            ("2B-", "B-"),
            ("2P", "P"),
            ("3P", "P"),
            ("2N", "N"),
            ("STABLE", "STABLE"),
            ("ECP", "UNKNOWN"),
            ("", "UNKNOWN"),
        ] {
            assert_eq!(decay_colour_class(label), class, "{label}");
        }
        assert_eq!(
            Scheme::DecayMode.colour("IT"),
            Some(Rgb(224, 224, 224))
        );
    }

    #[test]
    fn half_life_legend() {
        let legend = Scheme::HalfLife.legend();
        assert_eq!(legend.len(), 19);
        assert_eq!(legend[0].label, "<100ns");
        assert_eq!(legend[16].label, ">1e15s or Stable");
        assert_eq!(legend[17].label, "SpecialUnit");
        assert!(legend.iter().all(|entry| entry.label != "STABLE"));
    }

    #[test]
    fn other_legends_are_complete() {
        let decay = Scheme::DecayMode.legend();
        assert_eq!(decay.len(), 9);
        assert_eq!(decay[2].label, "Alpha");

        let synthesis = Scheme::SynthesisMethod.legend();
        assert_eq!(synthesis.len(), 8);
        assert_eq!(synthesis[7].label, "Transfer/Deep Inelastic");
        assert_eq!(Scheme::SynthesisMethod.colour("FU"), Some(Rgb(255, 0, 0)));
    }
}
