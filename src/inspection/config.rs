//! Inspection configuration
//!
//! This module provides the two options of the serial version inspection: whether an existing,
//! differing `serialVersionUID` should be reported, and which declared values are never
//! reported because they are deliberate placeholders.

use std::collections::BTreeSet;

use crate::{Error, Result};

/// Preference key of [`InspectionConfig::warn_for_incorrect_value`]
pub const WARN_FOR_INCORRECT_VALUE_KEY: &str = "warn-for-incorrect-value";

/// Preference key of [`InspectionConfig::ignored_values`]
pub const IGNORED_VALUES_KEY: &str = "wfiv-ingored-values";

/// Default preference value of [`IGNORED_VALUES_KEY`]
pub const IGNORED_VALUES_DEFAULT: &str = "0L,1L";

/// Configuration for the serial version inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionConfig {
    /// Report a declared value that differs from the computed one (default: false)
    pub warn_for_incorrect_value: bool,

    /// Declared values that are never reported as incorrect (default: `{0, 1}`)
    pub ignored_values: BTreeSet<i64>,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            warn_for_incorrect_value: false,
            ignored_values: BTreeSet::from([0, 1]),
        }
    }
}

impl InspectionConfig {
    /// Reports differing values, ignoring the default placeholders `0` and `1`
    #[must_use]
    pub fn checked() -> Self {
        Self {
            warn_for_incorrect_value: true,
            ..Self::default()
        }
    }

    /// Reports every declared value that differs from the computed one
    #[must_use]
    pub fn strict() -> Self {
        Self {
            warn_for_incorrect_value: true,
            ignored_values: BTreeSet::new(),
        }
    }

    /// Returns true if `value` is one of the ignored placeholders
    #[must_use]
    pub fn is_ignored(&self, value: i64) -> bool {
        self.ignored_values.contains(&value)
    }

    /// Builds a configuration from stored key/value preferences.
    ///
    /// Missing keys keep their defaults and unknown keys are skipped.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSetting`] if a known key carries an unparsable value.
    pub fn from_preferences<'a, I>(preferences: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();

        for (key, value) in preferences {
            match key {
                WARN_FOR_INCORRECT_VALUE_KEY => {
                    config.warn_for_incorrect_value = parse_bool(key, value)?;
                }
                IGNORED_VALUES_KEY => {
                    config.ignored_values = parse_ignored_values(value)?;
                }
                _ => log::debug!("skipping unknown inspection preference '{key}'"),
            }
        }

        Ok(config)
    }

    /// Renders the preferences this configuration was built from
    #[must_use]
    pub fn to_preferences(&self) -> Vec<(&'static str, String)> {
        let ignored = self
            .ignored_values
            .iter()
            .map(|value| format!("{value}L"))
            .collect::<Vec<_>>()
            .join(",");

        vec![
            (
                WARN_FOR_INCORRECT_VALUE_KEY,
                self.warn_for_incorrect_value.to_string(),
            ),
            (IGNORED_VALUES_KEY, ignored),
        ]
    }
}

/// Parses a comma separated list of `long` literals such as `0L,1L`.
///
/// Whitespace and empty entries are skipped; the `L`/`l` suffix and `_` separators are
/// optional, and `0x` prefixed entries are read as hexadecimal.
///
/// # Errors
/// Returns [`Error::InvalidSetting`] if an entry is not an integer literal.
pub fn parse_ignored_values(value: &str) -> Result<BTreeSet<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            parse_long_literal(entry).ok_or_else(|| Error::InvalidSetting {
                key: IGNORED_VALUES_KEY.to_string(),
                value: entry.to_string(),
            })
        })
        .collect()
}

fn parse_long_literal(literal: &str) -> Option<i64> {
    let digits = literal
        .strip_suffix(|c: char| c == 'L' || c == 'l')
        .unwrap_or(literal)
        .replace('_', "");

    let (negative, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.as_str()),
    };

    if magnitude.starts_with(is_sign) {
        return None;
    }

    match magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        // Hex literals cover the full 64-bit pattern, 0xFFFF_FFFF_FFFF_FFFFL is -1
        Some(hex) if !hex.starts_with(is_sign) => {
            let bits = u64::from_str_radix(hex, 16).ok()? as i64;
            Some(if negative { bits.wrapping_neg() } else { bits })
        }
        Some(_) => None,
        None => {
            let value = magnitude.parse::<i128>().ok()?;
            i64::try_from(if negative { -value } else { value }).ok()
        }
    }
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(Error::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspection_config_presets() {
        let default = InspectionConfig::default();
        assert!(!default.warn_for_incorrect_value);
        assert!(default.is_ignored(0));
        assert!(default.is_ignored(1));
        assert!(!default.is_ignored(2));

        let checked = InspectionConfig::checked();
        assert!(checked.warn_for_incorrect_value);
        assert_eq!(checked.ignored_values, default.ignored_values);

        let strict = InspectionConfig::strict();
        assert!(strict.warn_for_incorrect_value);
        assert!(!strict.is_ignored(1));
    }

    #[test]
    fn test_default_matches_stored_default() {
        assert_eq!(
            parse_ignored_values(IGNORED_VALUES_DEFAULT).unwrap(),
            InspectionConfig::default().ignored_values
        );
    }

    #[test]
    fn test_parse_ignored_values() {
        let values = parse_ignored_values(" 42L, -7l ,, 1_000, 0x7FFFFFFFFFFFFFFFL,").unwrap();
        assert_eq!(values, BTreeSet::from([-7, 42, 1000, i64::MAX]));

        assert!(parse_ignored_values("").unwrap().is_empty());
        assert_eq!(
            parse_ignored_values("-9223372036854775808L").unwrap(),
            BTreeSet::from([i64::MIN])
        );
        assert_eq!(
            parse_ignored_values("0xFFFFFFFFFFFFFFFFL").unwrap(),
            BTreeSet::from([-1])
        );

        match parse_ignored_values("0L,one") {
            Err(Error::InvalidSetting { key, value }) => {
                assert_eq!(key, IGNORED_VALUES_KEY);
                assert_eq!(value, "one");
            }
            other => panic!("Expected InvalidSetting, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ignored_values_rejects_bad_signs() {
        for literal in ["--5L", "-+5", "0x-1L", "-0x+1", "9223372036854775808L"] {
            assert!(
                matches!(
                    parse_ignored_values(literal),
                    Err(Error::InvalidSetting { .. })
                ),
                "{literal} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_preferences() {
        let config = InspectionConfig::from_preferences([
            (WARN_FOR_INCORRECT_VALUE_KEY, "TRUE"),
            (IGNORED_VALUES_KEY, "5L"),
            ("unrelated", "whatever"),
        ])
        .unwrap();

        assert!(config.warn_for_incorrect_value);
        assert_eq!(config.ignored_values, BTreeSet::from([5]));

        let empty = InspectionConfig::from_preferences(std::iter::empty()).unwrap();
        assert_eq!(empty, InspectionConfig::default());

        let invalid = InspectionConfig::from_preferences([(WARN_FOR_INCORRECT_VALUE_KEY, "yes")]);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_to_preferences_roundtrip() {
        let config = InspectionConfig {
            warn_for_incorrect_value: true,
            ignored_values: BTreeSet::from([-3, 0, 12]),
        };

        let stored = config.to_preferences();
        assert_eq!(stored[1], (IGNORED_VALUES_KEY, "-3L,0L,12L".to_string()));

        let restored =
            InspectionConfig::from_preferences(stored.iter().map(|(k, v)| (*k, v.as_str())))
                .unwrap();
        assert_eq!(restored, config);
    }
}
