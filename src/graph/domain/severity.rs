use serde::{Deserialize, Deserializer, Serialize};

/// Raw CVSS score as carried by the report.
///
/// The server emits floats, older reports carry strings, and either may be
/// null or absent. The text is kept as received so it can be displayed
/// verbatim; [`CvssScore::value`] interprets it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CvssScore(String);

impl CvssScore {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the score, if the text is a finite number.
    pub fn value(&self) -> Option<f64> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl std::fmt::Display for CvssScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deserializes an optional score from a JSON string, number, or null.
pub(crate) fn deserialize_optional_score<'de, D>(
    deserializer: D,
) -> Result<Option<CvssScore>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(CvssScore(s)),
        Some(serde_json::Value::Number(n)) => Some(CvssScore(n.to_string())),
        Some(other) => Some(CvssScore(other.to_string())),
    })
}

/// Display tier of a CVE node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    /// severity < 4
    Low,
    /// 4 <= severity < 8
    High,
    /// severity >= 8, or no parseable score at all
    Critical,
}

impl SeverityTier {
    /// Lower bound of the high tier
    pub const HIGH_THRESHOLD: f64 = 4.0;
    /// Lower bound of the critical tier
    pub const CRITICAL_THRESHOLD: f64 = 8.0;

    /// Tier for a numeric severity. `None` maps to `Critical`.
    pub fn from_severity(severity: Option<f64>) -> Self {
        match severity {
            Some(s) if s < Self::HIGH_THRESHOLD => SeverityTier::Low,
            Some(s) if s < Self::CRITICAL_THRESHOLD => SeverityTier::High,
            _ => SeverityTier::Critical,
        }
    }

    /// Tier from the CVSS v3 score, falling back to v2.
    pub fn from_scores(v3: Option<&CvssScore>, v2: Option<&CvssScore>) -> Self {
        Self::from_severity(effective_severity(v3, v2))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::High => "high",
            SeverityTier::Critical => "critical",
        }
    }
}

/// CVSS v3 value if parseable, else CVSS v2 value, else `None` ("unknown").
pub fn effective_severity(v3: Option<&CvssScore>, v2: Option<&CvssScore>) -> Option<f64> {
    v3.and_then(CvssScore::value)
        .or_else(|| v2.and_then(CvssScore::value))
}
