//! Catalog of the PWS API endpoints and query parameters

use crate::error::{PwsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A PWS API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    /// Most recent observation
    Current,
    /// Every observation of the last day
    RapidHistory,
    /// Daily summaries for the last seven days
    #[serde(rename = "daily-summary-7d")]
    DailySummary7d,
    /// Hourly observations for the last seven days
    #[serde(rename = "hourly-7d")]
    Hourly7d,
}

impl Endpoint {
    /// All endpoints in display order
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Current,
        Endpoint::RapidHistory,
        Endpoint::DailySummary7d,
        Endpoint::Hourly7d,
    ];

    /// URL path relative to the API base
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Current => "observations/current",
            Endpoint::RapidHistory => "observations/all/1day",
            Endpoint::DailySummary7d => "dailysummary/7day",
            Endpoint::Hourly7d => "observations/hourly/7day",
        }
    }

    /// Human-readable label, also used in export file names
    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Current => "Current Conditions",
            Endpoint::RapidHistory => "1 Day - Rapid History",
            Endpoint::DailySummary7d => "7 Day History",
            Endpoint::Hourly7d => "7 Day - Hourly History",
        }
    }

    /// Short name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Current => "current",
            Endpoint::RapidHistory => "rapid-history",
            Endpoint::DailySummary7d => "daily-summary-7d",
            Endpoint::Hourly7d => "hourly-7d",
        }
    }

    /// Response field holding the record list
    pub fn record_field(&self) -> &'static str {
        match self {
            Endpoint::DailySummary7d => "summaries",
            _ => "observations",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Endpoint {
    type Err = PwsError;

    /// Accepts the short name or the URL path
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Endpoint::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s) || e.path() == s)
            .ok_or_else(|| PwsError::UnknownEndpoint(s.to_string()))
    }
}

/// Unit system requested from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    /// English units
    English,
    /// Metric units
    Metric,
    /// Hybrid units (UK)
    Hybrid,
    /// Metric SI units
    MetricSi,
}

impl Unit {
    /// All units in display order
    pub const ALL: [Unit; 4] = [Unit::English, Unit::Metric, Unit::Hybrid, Unit::MetricSi];

    /// Single-letter code sent as `units=`
    pub fn code(&self) -> &'static str {
        match self {
            Unit::English => "e",
            Unit::Metric => "m",
            Unit::Hybrid => "h",
            Unit::MetricSi => "s",
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Unit::English => "English units",
            Unit::Metric => "Metric units",
            Unit::Hybrid => "Hybrid units (UK)",
            Unit::MetricSi => "Metric SI units",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Unit {
    type Err = PwsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "english" => Ok(Unit::English),
            "m" | "metric" => Ok(Unit::Metric),
            "h" | "hybrid" => Ok(Unit::Hybrid),
            "s" | "metric-si" | "si" => Ok(Unit::MetricSi),
            other => Err(PwsError::UnknownUnit(other.to_string())),
        }
    }
}

/// Numeric precision of returned values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericPrecision {
    /// Decimal values (`numericPrecision=decimal`)
    #[default]
    Decimal,
    /// Integer values, the API default when the parameter is omitted
    Integer,
}

impl NumericPrecision {
    /// Query value, `None` when the parameter should be omitted
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            NumericPrecision::Decimal => Some("decimal"),
            NumericPrecision::Integer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields() {
        assert_eq!(Endpoint::Current.record_field(), "observations");
        assert_eq!(Endpoint::RapidHistory.record_field(), "observations");
        assert_eq!(Endpoint::Hourly7d.record_field(), "observations");
        assert_eq!(Endpoint::DailySummary7d.record_field(), "summaries");
    }

    #[test]
    fn test_endpoint_from_name_and_path() {
        assert_eq!("current".parse::<Endpoint>().unwrap(), Endpoint::Current);
        assert_eq!(
            "dailysummary/7day".parse::<Endpoint>().unwrap(),
            Endpoint::DailySummary7d
        );
        assert_eq!("Hourly-7D".parse::<Endpoint>().unwrap(), Endpoint::Hourly7d);
        assert!(matches!(
            "observations/all/7day".parse::<Endpoint>(),
            Err(PwsError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn test_unit_codes() {
        for unit in Unit::ALL {
            assert_eq!(unit.code().parse::<Unit>().unwrap(), unit);
        }
        assert!("x".parse::<Unit>().is_err());
    }

    #[test]
    fn test_numeric_precision_query() {
        assert_eq!(NumericPrecision::Decimal.query_value(), Some("decimal"));
        assert_eq!(NumericPrecision::Integer.query_value(), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Endpoint::DailySummary7d).unwrap();
        assert_eq!(json, "\"daily-summary-7d\"");
        let unit: Unit = serde_json::from_str("\"metric-si\"").unwrap();
        assert_eq!(unit, Unit::MetricSi);
    }
}
