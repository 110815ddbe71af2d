/*!
 * Severity levels accepted by `reportLevel`.
 *
 * Serialized as lowercase strings, exactly as the reporting client expects:
 * `"debug"`, `"info"`, `"warning"`, `"error"`, `"critical"`.
 *
 * Variants are declared from least to most severe so that `Ord` follows
 * severity: `Level::Debug < Level::Critical`.
 */
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLevelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /**
     * Returns the string used on the wire.
     * E.g. `Level::Warning` -> `"warning"`.
     */
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/**
 * Parses a wire-format level name.
 *
 * Matching is exact: `"Error"` or `"warn"` are rejected, the same way the
 * serde representation rejects them.
 */
impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_valid_level() {
        for name in ["debug", "info", "warning", "error", "critical"] {
            let level: Level = name.parse().expect("valid level should parse");
            assert_eq!(level.as_str(), name);
            assert_eq!(level.to_string(), name);
        }
    }

    /**
     * Anything outside the enumerated set is rejected, including the
     * near-misses other logging libraries use.
     */
    #[test]
    fn test_parse_rejects_unknown_levels() {
        for name in ["warn", "fatal", "trace", "Error", "", " info"] {
            let err = name.parse::<Level>().unwrap_err();
            assert_eq!(err.0, name);
        }
    }

    #[test]
    fn test_ordering_follows_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);

        let mut sorted = Level::ALL;
        sorted.sort();
        assert_eq!(sorted, Level::ALL);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Level::Critical).unwrap(), r#""critical""#);

        let parsed: Level = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(parsed, Level::Warning);

        assert!(serde_json::from_str::<Level>(r#""WARNING""#).is_err());
    }
}
