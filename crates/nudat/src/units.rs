//! Half-life unit conversion

// standard library
use std::str::FromStr;

/// Seconds in a Julian year
pub const JULIAN_YEAR: f64 = 31_557_600.0;

/// Time units used for NuDat half-lives
///
/// Symbols are case sensitive, `m` is minutes and `My` is mega-years.
///
/// ```rust
/// # use nuchart_nudat::TimeUnit;
/// # use std::str::FromStr;
/// let unit = TimeUnit::from_str("ms").unwrap();
/// assert_eq!(unit, TimeUnit::Millisecond);
/// assert_eq!(unit.factor(), 1e-3);
/// assert_eq!(TimeUnit::Minute.symbol(), "m");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    /// Femtoseconds (`fs`)
    Femtosecond,
    /// Picoseconds (`ps`)
    Picosecond,
    /// Nanoseconds (`ns`)
    Nanosecond,
    /// Microseconds (`us`)
    Microsecond,
    /// Milliseconds (`ms`)
    Millisecond,
    /// Seconds (`s`)
    Second,
    /// Minutes (`m`)
    Minute,
    /// Hours (`h`)
    Hour,
    /// Days (`d`)
    Day,
    /// Julian years (`y`)
    Year,
    /// Thousands of years (`ky`)
    Kiloyear,
    /// Millions of years (`My`)
    Megayear,
    /// Billions of years (`Gy`)
    Gigayear,
}

impl TimeUnit {
    /// Every recognised unit, shortest first
    pub const ALL: [TimeUnit; 13] = [
        TimeUnit::Femtosecond,
        TimeUnit::Picosecond,
        TimeUnit::Nanosecond,
        TimeUnit::Microsecond,
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Year,
        TimeUnit::Kiloyear,
        TimeUnit::Megayear,
        TimeUnit::Gigayear,
    ];

    /// Symbol as written in the NuDat export
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Femtosecond => "fs",
            TimeUnit::Picosecond => "ps",
            TimeUnit::Nanosecond => "ns",
            TimeUnit::Microsecond => "us",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
            TimeUnit::Year => "y",
            TimeUnit::Kiloyear => "ky",
            TimeUnit::Megayear => "My",
            TimeUnit::Gigayear => "Gy",
        }
    }

    /// Multiplicative factor to seconds
    pub fn factor(&self) -> f64 {
        match self {
            TimeUnit::Femtosecond => 1e-15,
            TimeUnit::Picosecond => 1e-12,
            TimeUnit::Nanosecond => 1e-9,
            TimeUnit::Microsecond => 1e-6,
            TimeUnit::Millisecond => 1e-3,
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86400.0,
            TimeUnit::Year => JULIAN_YEAR,
            TimeUnit::Kiloyear => JULIAN_YEAR * 1e3,
            TimeUnit::Megayear => JULIAN_YEAR * 1e6,
            TimeUnit::Gigayear => JULIAN_YEAR * 1e9,
        }
    }

    /// Convert a value in this unit to seconds
    pub fn to_seconds(&self, value: f64) -> f64 {
        value * self.factor()
    }
}

impl FromStr for TimeUnit {
    type Err = UnrecognisedUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| UnrecognisedUnit(s.to_string()))
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A unit that is not in the conversion table
///
/// This is an expected outcome rather than a failure. The NuDat export has a
/// handful of half-lives quoted in energy widths (eV, keV, ...) and these are
/// classified separately on the chart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised half-life unit \"{0}\"")]
pub struct UnrecognisedUnit(pub String);

/// Convert a half-life value and unit symbol to seconds
///
/// ```rust
/// # use nuchart_nudat::{to_seconds, UnrecognisedUnit};
/// assert_eq!(to_seconds(2.0, "m"), Ok(120.0));
/// assert_eq!(to_seconds(1.0, "y"), Ok(31557600.0));
/// assert_eq!(
///     to_seconds(10.0, "keV"),
///     Err(UnrecognisedUnit("keV".to_string()))
/// );
/// ```
pub fn to_seconds(value: f64, unit: &str) -> Result<f64, UnrecognisedUnit> {
    Ok(TimeUnit::from_str(unit)?.to_seconds(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for unit in TimeUnit::ALL {
            assert_eq!(TimeUnit::from_str(unit.symbol()), Ok(unit));
        }
    }

    #[test]
    fn case_sensitive_symbols() {
        assert_eq!(TimeUnit::from_str("m"), Ok(TimeUnit::Minute));
        assert_eq!(TimeUnit::from_str("My"), Ok(TimeUnit::Megayear));
        assert!(TimeUnit::from_str("M").is_err());
        assert!(TimeUnit::from_str("MS").is_err());
        assert!(TimeUnit::from_str("").is_err());
    }

    #[test]
    fn year_multiples() {
        assert_eq!(to_seconds(1.0, "ky"), Ok(31557600e3));
        assert_eq!(to_seconds(1.0, "My"), Ok(31557600e6));
        assert_eq!(to_seconds(1.0, "Gy"), Ok(31557600e9));
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(to_seconds(1.0, "fs"), Ok(1e-15));
        assert_eq!(to_seconds(1.0, "ps"), Ok(1e-12));
        assert_eq!(to_seconds(1.0, "ns"), Ok(1e-9));
        assert_eq!(to_seconds(1.0, "us"), Ok(1e-6));
        assert_eq!(to_seconds(1.0, "ms"), Ok(1e-3));
    }

    #[test]
    fn unknown_unit_is_reported() {
        let err = to_seconds(3.0, "eV").unwrap_err();
        assert_eq!(err.0, "eV");
    }
}
