//! Uncertainty descriptors attached to NuDat values

// external crates
use log::warn;
use serde::{Deserialize, Serialize};

// nuchart modules
use nuchart_utils::f;

/// Direction of a limit uncertainty
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitType {
    /// The true value is above the quoted value
    Lower,
    /// The true value is below the quoted value
    Upper,
}

impl LimitType {
    /// Tag used by the NuDat export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "lower" => Some(Self::Lower),
            "upper" => Some(Self::Upper),
            _ => None,
        }
    }
}

/// Uncertainty on a quoted value
///
/// The NuDat export uses a `type` tag with a few different shapes depending on
/// the kind of uncertainty. Anything that does not fit one of the known shapes
/// is kept as [Uncertainty::Unspecified].
///
/// ```rust
/// # use nuchart_nudat::{LimitType, Uncertainty};
/// let unc = Uncertainty::Limit {
///     limit_type: LimitType::Lower,
///     is_inclusive: true,
/// };
/// assert_eq!(unc.render(), Some("≥".to_string()));
///
/// let unc = Uncertainty::Asymmetric { upper: 0.3, lower: 0.2 };
/// assert_eq!(unc.render(), Some("+0.3 -0.2".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawUncertainty", into = "RawUncertainty")]
pub enum Uncertainty {
    /// Plain symmetric uncertainty on the value
    Value(f64),
    /// Different upper and lower uncertainties
    Asymmetric { upper: f64, lower: f64 },
    /// The value is approximate
    Approximation,
    /// The value is only a limit
    Limit {
        limit_type: LimitType,
        is_inclusive: bool,
    },
    /// No usable uncertainty information
    Unspecified,
}

impl Uncertainty {
    /// Symbol used when the uncertainty is a limit
    pub fn limit_symbol(&self) -> Option<&'static str> {
        match self {
            Self::Limit {
                limit_type,
                is_inclusive,
            } => Some(match (limit_type, is_inclusive) {
                (LimitType::Lower, true) => "≥",
                (LimitType::Lower, false) => ">",
                (LimitType::Upper, true) => "≤",
                (LimitType::Upper, false) => "<",
            }),
            _ => None,
        }
    }

    /// Short text form used in tabular output
    ///
    /// Asymmetric uncertainties are `+upper -lower`, approximations `≈`, limits
    /// the relevant inequality, and a plain uncertainty is the number itself.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Value(value) => Some(f!("{value}")),
            Self::Asymmetric { upper, lower } => Some(f!("+{upper} -{lower}")),
            Self::Approximation => Some("≈".to_string()),
            Self::Limit { .. } => self.limit_symbol().map(str::to_string),
            Self::Unspecified => None,
        }
    }
}

impl std::fmt::Display for Uncertainty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.render() {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "none"),
        }
    }
}

/// Mirror of the JSON object for (de)serialisation
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawUncertainty {
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upper_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lower_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_inclusive: Option<bool>,
}

impl From<RawUncertainty> for Uncertainty {
    fn from(raw: RawUncertainty) -> Self {
        match raw.kind.as_str() {
            "asymmetric" => match (raw.upper_limit, raw.lower_limit) {
                (Some(upper), Some(lower)) => Uncertainty::Asymmetric { upper, lower },
                _ => {
                    warn!("Asymmetric uncertainty without both limits, ignored");
                    Uncertainty::Unspecified
                }
            },
            "approximation" => Uncertainty::Approximation,
            "limit" => match raw.limit_type.as_deref().map(LimitType::from_tag) {
                Some(Some(limit_type)) => Uncertainty::Limit {
                    limit_type,
                    is_inclusive: raw.is_inclusive.unwrap_or(false),
                },
                Some(None) => {
                    warn!("Unknown limit type {:?}, ignored", raw.limit_type);
                    Uncertainty::Unspecified
                }
                None => Uncertainty::Unspecified,
            },
            _ => match raw.value {
                Some(value) => Uncertainty::Value(value),
                None => Uncertainty::Unspecified,
            },
        }
    }
}

impl From<Uncertainty> for RawUncertainty {
    fn from(unc: Uncertainty) -> Self {
        match unc {
            Uncertainty::Value(value) => RawUncertainty {
                kind: "symmetric".to_string(),
                value: Some(value),
                ..Default::default()
            },
            Uncertainty::Asymmetric { upper, lower } => RawUncertainty {
                kind: "asymmetric".to_string(),
                upper_limit: Some(upper),
                lower_limit: Some(lower),
                ..Default::default()
            },
            Uncertainty::Approximation => RawUncertainty {
                kind: "approximation".to_string(),
                ..Default::default()
            },
            Uncertainty::Limit {
                limit_type,
                is_inclusive,
            } => RawUncertainty {
                kind: "limit".to_string(),
                limit_type: Some(limit_type.as_str().to_string()),
                is_inclusive: Some(is_inclusive),
                ..Default::default()
            },
            Uncertainty::Unspecified => RawUncertainty {
                kind: "none".to_string(),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Uncertainty {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn symmetric_and_value_tags() {
        assert_eq!(
            parse(r#"{"type": "symmetric", "value": 4}"#),
            Uncertainty::Value(4.0)
        );
        assert_eq!(
            parse(r#"{"type": "value", "value": 0.5}"#),
            Uncertainty::Value(0.5)
        );
    }

    #[test]
    fn asymmetric_tag() {
        let unc = parse(r#"{"type": "asymmetric", "upperLimit": 12, "lowerLimit": 7}"#);
        assert_eq!(unc, Uncertainty::Asymmetric { upper: 12.0, lower: 7.0 });
        assert_eq!(unc.render().unwrap(), "+12 -7");
    }

    #[test]
    fn limit_symbols() {
        let cases = [
            ("lower", true, "≥"),
            ("lower", false, ">"),
            ("upper", true, "≤"),
            ("upper", false, "<"),
        ];
        for (limit, inclusive, symbol) in cases {
            let json =
                f!(r#"{{"type": "limit", "limitType": "{limit}", "isInclusive": {inclusive}}}"#);
            assert_eq!(parse(&json).render().unwrap(), symbol);
        }
    }

    #[test]
    fn odd_limit_type_degrades() {
        let unc = parse(r#"{"type": "limit", "limitType": "sideways", "isInclusive": true}"#);
        assert_eq!(unc, Uncertainty::Unspecified);
        assert_eq!(parse(r#"{"type": "limit"}"#), Uncertainty::Unspecified);
    }

    #[test]
    fn limit_serialises_with_tag() {
        let unc = Uncertainty::Limit {
            limit_type: LimitType::Upper,
            is_inclusive: false,
        };
        let json = serde_json::to_string(&unc).unwrap();
        assert_eq!(
            json,
            r#"{"type":"limit","limitType":"upper","isInclusive":false}"#
        );
        assert_eq!(parse(&json), unc);
    }

    #[test]
    fn approximation_tag() {
        assert_eq!(parse(r#"{"type": "approximation"}"#).render().unwrap(), "≈");
    }

    #[test]
    fn unknown_tags_keep_values() {
        assert_eq!(
            parse(r#"{"type": "systematics", "value": 3}"#),
            Uncertainty::Value(3.0)
        );
        assert_eq!(parse(r#"{"type": "unreported"}"#), Uncertainty::Unspecified);
        assert_eq!(Uncertainty::Unspecified.render(), None);
    }

    #[test]
    fn serialise_uses_tagged_form() {
        let json = serde_json::to_string(&Uncertainty::Approximation).unwrap();
        assert_eq!(json, r#"{"type":"approximation"}"#);
    }
}
