//! User Preferences
//!
//! The four inputs collected from the dashboard sidebar: display name,
//! year, month and chart color. Year and month are closed enumerations so
//! an out-of-range value can't be represented once parsed.
//!
//! Year and month are carried through to the page but do not filter any of
//! the generated data.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Display name used when no name was submitted
pub const DEFAULT_DISPLAY_NAME: &str = "Usuario";

/// Chart color used when no color was submitted
pub const DEFAULT_CHART_COLOR: &str = "#3498db";

/// Errors raised when raw form values fall outside the closed input sets
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrefsError {
    #[error("Invalid year: {0} (expected one of 2021, 2022, 2023)")]
    InvalidYear(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(String),

    #[error("Invalid chart color: {0} (expected #rrggbb)")]
    InvalidColor(String),
}

/// Selectable year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Year {
    #[default]
    Y2021,
    Y2022,
    Y2023,
}

impl Year {
    /// All years offered by the sidebar, in display order
    pub const ALL: [Year; 3] = [Year::Y2021, Year::Y2022, Year::Y2023];

    pub fn value(self) -> u16 {
        match self {
            Year::Y2021 => 2021,
            Year::Y2022 => 2022,
            Year::Y2023 => 2023,
        }
    }

    pub fn parse(s: &str) -> Result<Self, PrefsError> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(|v| Year::try_from(v).ok())
            .ok_or_else(|| PrefsError::InvalidYear(s.to_string()))
    }
}

impl TryFrom<u16> for Year {
    type Error = PrefsError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2021 => Ok(Year::Y2021),
            2022 => Ok(Year::Y2022),
            2023 => Ok(Year::Y2023),
            other => Err(PrefsError::InvalidYear(other.to_string())),
        }
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.value()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Selectable month, 1 through 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub fn new(value: u8) -> Result<Self, PrefsError> {
        if (1..=12).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PrefsError::InvalidMonth(value.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All months offered by the sidebar
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    pub fn parse(s: &str) -> Result<Self, PrefsError> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(|v| Month::new(v).ok())
            .ok_or_else(|| PrefsError::InvalidMonth(s.to_string()))
    }
}

impl Default for Month {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for Month {
    type Error = PrefsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated `#rrggbb` color, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct ChartColor(String);

impl ChartColor {
    /// Parse `#rrggbb` or the `#rgb` shorthand
    pub fn parse(s: &str) -> Result<Self, PrefsError> {
        let re = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
            .map_err(|_| PrefsError::InvalidColor(s.to_string()))?;

        let trimmed = s.trim();
        let caps = re
            .captures(trimmed)
            .ok_or_else(|| PrefsError::InvalidColor(s.to_string()))?;

        let digits = caps[1].to_ascii_lowercase();
        let expanded = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect::<String>()
        } else {
            digits
        };

        Ok(Self(format!("#{}", expanded)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChartColor {
    fn default() -> Self {
        Self(DEFAULT_CHART_COLOR.to_string())
    }
}

impl From<ChartColor> for String {
    fn from(color: ChartColor) -> Self {
        color.0
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Untyped sidebar values as submitted by the form or the CLI
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPreferences {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// The active user's dashboard settings for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPreferences {
    display_name: String,
    year: Year,
    month: Month,
    chart_color: ChartColor,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            year: Year::default(),
            month: Month::default(),
            chart_color: ChartColor::default(),
        }
    }
}

impl UserPreferences {
    pub fn new(
        display_name: impl Into<String>,
        year: Year,
        month: Month,
        chart_color: ChartColor,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            year,
            month,
            chart_color,
        }
    }

    /// Build preferences from raw form values.
    ///
    /// Absent values take their defaults. A present but empty name is kept
    /// as-is; only a missing name falls back to [`DEFAULT_DISPLAY_NAME`].
    /// A blank year, month or color is treated as absent.
    pub fn from_params(raw: &RawPreferences) -> Result<Self, PrefsError> {
        let mut prefs = Self::default();

        if let Some(name) = &raw.name {
            prefs.display_name = name.clone();
        }
        if let Some(year) = non_blank(&raw.year) {
            prefs.year = Year::parse(year)?;
        }
        if let Some(month) = non_blank(&raw.month) {
            prefs.month = Month::parse(month)?;
        }
        if let Some(color) = non_blank(&raw.color) {
            prefs.chart_color = ChartColor::parse(color)?;
        }

        Ok(prefs)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn chart_color(&self) -> &ChartColor {
        &self.chart_color
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: Option<&str>, year: Option<&str>, month: Option<&str>, color: Option<&str>) -> RawPreferences {
        RawPreferences {
            name: name.map(String::from),
            year: year.map(String::from),
            month: month.map(String::from),
            color: color.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.display_name(), "Usuario");
        assert_eq!(prefs.year(), Year::Y2021);
        assert_eq!(prefs.month().value(), 1);
        assert_eq!(prefs.chart_color().as_str(), "#3498db");
    }

    #[test]
    fn test_from_empty_params_uses_defaults() {
        let prefs = UserPreferences::from_params(&RawPreferences::default()).unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn test_empty_name_is_kept() {
        let prefs = UserPreferences::from_params(&raw(Some(""), None, None, None)).unwrap();
        assert_eq!(prefs.display_name(), "");
    }

    #[test]
    fn test_full_params() {
        let prefs = UserPreferences::from_params(&raw(
            Some("Ana"),
            Some("2023"),
            Some("12"),
            Some("#000000"),
        ))
        .unwrap();

        assert_eq!(prefs.display_name(), "Ana");
        assert_eq!(prefs.year().value(), 2023);
        assert_eq!(prefs.month().value(), 12);
        assert_eq!(prefs.chart_color().as_str(), "#000000");
    }

    #[test]
    fn test_year_outside_set_rejected() {
        let err = UserPreferences::from_params(&raw(None, Some("2020"), None, None)).unwrap_err();
        assert_eq!(err, PrefsError::InvalidYear("2020".to_string()));
    }

    #[test]
    fn test_month_bounds() {
        assert!(Month::parse("0").is_err());
        assert!(Month::parse("13").is_err());
        assert!(Month::parse("abc").is_err());
        assert_eq!(Month::parse("7").unwrap().value(), 7);
        assert_eq!(Month::all().count(), 12);
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(ChartColor::parse("#ABCDEF").unwrap().as_str(), "#abcdef");
        assert_eq!(ChartColor::parse("#f0a").unwrap().as_str(), "#ff00aa");
        assert!(ChartColor::parse("3498db").is_err());
        assert!(ChartColor::parse("#12345").is_err());
        assert!(ChartColor::parse("red").is_err());
    }

    #[test]
    fn test_blank_color_falls_back_to_default() {
        let prefs = UserPreferences::from_params(&raw(None, None, None, Some(" "))).unwrap();
        assert_eq!(prefs.chart_color().as_str(), DEFAULT_CHART_COLOR);
    }
}
