//! Tenor keys and the Treasury column label mapping.
//!
//! The Treasury CSV names its columns `"1 Mo"`, `"1.5 Month"`, `"10 Yr"` and
//! so on. Internally every tenor is a [`TenorKey`]: years as a fraction,
//! rounded to four decimals for sub-year maturities (one month is `0.0833`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scale between years and the stored integer representation.
const SCALE: f64 = 10_000.0;

/// Raw Treasury column labels and their keys in ten-thousandths of a year.
///
/// Sub-year keys are `round(months / 12, 4)`.
const TENOR_LABELS: [(&str, u32); 14] = [
    ("1 Mo", 833),
    ("1.5 Month", 1_250),
    ("2 Mo", 1_667),
    ("3 Mo", 2_500),
    ("4 Mo", 3_333),
    ("6 Mo", 5_000),
    ("1 Yr", 10_000),
    ("2 Yr", 20_000),
    ("3 Yr", 30_000),
    ("5 Yr", 50_000),
    ("7 Yr", 70_000),
    ("10 Yr", 100_000),
    ("20 Yr", 200_000),
    ("30 Yr", 300_000),
];

/// A tenor measured in years.
///
/// Stored as integer ten-thousandths of a year so keys are exact,
/// hashable and totally ordered.
///
/// # Example
///
/// ```rust
/// use parcurve_core::TenorKey;
///
/// let one_month = TenorKey::from_label("1 Mo").unwrap();
/// assert_eq!(one_month.years(), 0.0833);
/// assert_eq!(one_month.label(), "1 Mo");
///
/// // Keys outside the Treasury table fall back to "<n> Yr".
/// assert_eq!(TenorKey::from_years(15.0).label(), "15 Yr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct TenorKey(u32);

impl TenorKey {
    /// Creates a key from a tenor in years, rounded to four decimals.
    ///
    /// Negative inputs clamp to zero.
    #[must_use]
    pub fn from_years(years: f64) -> Self {
        Self((years.max(0.0) * SCALE).round() as u32)
    }

    /// Looks up the key for a raw Treasury column label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        TENOR_LABELS
            .iter()
            .find(|(raw, _)| *raw == label)
            .map(|&(_, key)| Self(key))
    }

    /// Returns the tenor in years.
    #[must_use]
    pub fn years(&self) -> f64 {
        f64::from(self.0) / SCALE
    }

    /// Returns the Treasury label for this key, or `"<n> Yr"` when the key
    /// is not one of the published tenors.
    #[must_use]
    pub fn label(&self) -> String {
        TENOR_LABELS
            .iter()
            .find(|&&(_, key)| key == self.0)
            .map_or_else(|| format!("{self} Yr"), |(raw, _)| (*raw).to_string())
    }

    /// Returns every published tenor, shortest first.
    pub fn all() -> impl Iterator<Item = TenorKey> {
        TENOR_LABELS.iter().map(|&(_, key)| Self(key))
    }
}

impl fmt::Display for TenorKey {
    /// Formats the tenor in years without trailing zeros (`0.0833`, `10`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 10_000;
        let frac = self.0 % 10_000;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:04}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl From<TenorKey> for f64 {
    fn from(key: TenorKey) -> Self {
        key.years()
    }
}

impl From<f64> for TenorKey {
    fn from(years: f64) -> Self {
        Self::from_years(years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sub_year_keys_are_rounded_month_fractions() {
        assert_eq!(TenorKey::from_label("1 Mo").unwrap().years(), 0.0833);
        assert_eq!(TenorKey::from_label("1.5 Month").unwrap().years(), 0.125);
        assert_eq!(TenorKey::from_label("2 Mo").unwrap().years(), 0.1667);
        assert_eq!(TenorKey::from_label("4 Mo").unwrap().years(), 0.3333);
        assert_eq!(TenorKey::from_label("6 Mo").unwrap().years(), 0.5);
        assert_eq!(TenorKey::from_years(1.0 / 12.0), TenorKey::from_label("1 Mo").unwrap());
    }

    #[test]
    fn test_year_keys_are_integers() {
        for (label, years) in [("1 Yr", 1.0), ("7 Yr", 7.0), ("30 Yr", 30.0)] {
            assert_eq!(TenorKey::from_label(label).unwrap().years(), years);
        }
    }

    #[test]
    fn test_mapping_is_bijective() {
        let keys: HashSet<_> = TenorKey::all().collect();
        assert_eq!(keys.len(), TENOR_LABELS.len());

        for (label, _) in TENOR_LABELS {
            let key = TenorKey::from_label(label).unwrap();
            assert_eq!(key.label(), label);
        }
    }

    #[test]
    fn test_unknown_label() {
        assert!(TenorKey::from_label("Date").is_none());
        assert!(TenorKey::from_label("15 Yr").is_none());
        assert_eq!(TenorKey::from_label(" 3 Mo ").unwrap().years(), 0.25);
    }

    #[test]
    fn test_unmapped_key_label_fallback() {
        assert_eq!(TenorKey::from_years(15.0).label(), "15 Yr");
        assert_eq!(TenorKey::from_years(0.75).label(), "0.75 Yr");
    }

    #[test]
    fn test_display() {
        assert_eq!(TenorKey::from_years(10.0).to_string(), "10");
        assert_eq!(TenorKey::from_years(0.0833).to_string(), "0.0833");
        assert_eq!(TenorKey::from_years(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_ordering_follows_maturity() {
        let keys: Vec<_> = TenorKey::all().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_serde_as_years() {
        let key = TenorKey::from_label("3 Mo").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "0.25");
        let back: TenorKey = serde_json::from_str("10.0").unwrap();
        assert_eq!(back, TenorKey::from_years(10.0));
    }
}
