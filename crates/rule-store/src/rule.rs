//! Rule and RuleSet

use crate::error::ConfigurationError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// A single keyword rule
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// Trigger keywords, compared case-insensitively as substrings
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Reply returned verbatim on match
    pub reply: String,
    /// Whether this reply may be picked when nothing matches
    #[serde(default, rename = "fallback")]
    pub is_fallback: bool,
}

impl Rule {
    /// Create a keyword rule
    pub fn new<I, S>(keywords: I, reply: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            reply: reply.into(),
            is_fallback: false,
        }
    }

    /// Create a keyword-less fallback rule
    pub fn fallback(reply: impl Into<String>) -> Self {
        Self {
            keywords: Vec::new(),
            reply: reply.into(),
            is_fallback: true,
        }
    }
}

/// Ordered, immutable rule table
///
/// Order matters: the first rule with a matching keyword wins. Keywords are
/// stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Wrap an already-built rule list
    pub fn new(mut rules: Vec<Rule>) -> Self {
        for rule in &mut rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        Self { rules }
    }

    /// Parse a JSON array of rule objects
    pub fn from_json_str(content: &str) -> Result<Self, ConfigurationError> {
        // Entries go through a map first; serde would otherwise accept a
        // positional array as a `Rule`.
        let entries: Vec<Map<String, Value>> = serde_json::from_str(content)?;
        let rules = entries
            .into_iter()
            .map(|entry| serde_json::from_value(Value::Object(entry)))
            .collect::<Result<Vec<Rule>, _>>()?;
        let set = Self::new(rules);

        let fallback_count = set.rules.iter().filter(|r| r.is_fallback).count();
        info!("Loaded {} rules ({} fallback)", set.len(), fallback_count);
        if fallback_count == 0 {
            warn!("No fallback rules configured, unmatched messages get the default reply");
        }

        Ok(set)
    }

    /// Read and parse the rule file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        debug!("Reading rule file {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ConfigurationError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigurationError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::from_json_str(&content)
    }

    /// Rules in load order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replies of every fallback rule, in load order
    pub fn fallback_replies(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|r| r.is_fallback)
            .map(|r| r.reply.as_str())
            .collect()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}
