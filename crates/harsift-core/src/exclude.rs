//! Query-parameter suppression rules (`-e NAME=VALUE`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::har::QueryParam;

/// Raised when a rule is not of the form `NAME=VALUE`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid exclude rule {0:?}: expected NAME=VALUE")]
pub struct ParseExcludeError(pub String);

/// Suppresses one query-parameter value from the report.
///
/// A parameter is dropped from the "Query String:" lines only when both its
/// name and its value match a rule; the entry itself still appears. The
/// value part may be empty (`debug=` suppresses `debug` with no value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExcludeRule {
    pub name: String,
    pub value: String,
}

impl ExcludeRule {
    pub fn matches(&self, param: &QueryParam) -> bool {
        self.name == param.name && self.value == param.value
    }
}

impl FromStr for ExcludeRule {
    type Err = ParseExcludeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok(ExcludeRule {
                name: name.to_string(),
                value: value.to_string(),
            }),
            _ => Err(ParseExcludeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ExcludeRule {
    type Error = ParseExcludeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ExcludeRule> for String {
    fn from(rule: ExcludeRule) -> Self {
        rule.to_string()
    }
}

impl fmt::Display for ExcludeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: &str) -> QueryParam {
        QueryParam {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn parses_name_value() {
        let rule: ExcludeRule = "token=secret".parse().unwrap();
        assert_eq!(rule.name, "token");
        assert_eq!(rule.value, "secret");
    }

    #[test]
    fn value_may_be_empty() {
        let rule: ExcludeRule = "debug=".parse().unwrap();
        assert_eq!(rule.name, "debug");
        assert!(rule.value.is_empty());
    }

    #[test]
    fn value_keeps_extra_equals_signs() {
        let rule: ExcludeRule = "sig=a=b".parse().unwrap();
        assert_eq!(rule.value, "a=b");
    }

    #[test]
    fn rejects_missing_separator_and_empty_name() {
        assert!("noequals".parse::<ExcludeRule>().is_err());
        assert!("=value".parse::<ExcludeRule>().is_err());
    }

    #[test]
    fn matches_needs_both_fields() {
        let rule: ExcludeRule = "token=secret".parse().unwrap();
        assert!(rule.matches(&param("token", "secret")));
        assert!(!rule.matches(&param("token", "other")));
        assert!(!rule.matches(&param("other", "secret")));
    }

    #[test]
    fn display_round_trips() {
        let rule: ExcludeRule = "token=secret".parse().unwrap();
        assert_eq!(rule.to_string().parse::<ExcludeRule>().unwrap(), rule);
    }
}
