//! Keyword Matching and Fallback Selection

use rand::seq::SliceRandom;
use rand::Rng;
use rule_store::RuleSet;
use tracing::debug;

/// Reply used when nothing matches and no fallback rule exists
pub const DEFAULT_REPLY: &str = "Sorry, I don't understand. Try asking something else.";

/// Which path produced a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A keyword of the rule at `rule_index` is contained in the message
    Matched { rule_index: usize, keyword: String },
    /// Randomly chosen fallback reply
    Fallback,
    /// Fixed default reply
    Default,
}

impl Outcome {
    /// Short label for logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Matched { .. } => "matched",
            Outcome::Fallback => "fallback",
            Outcome::Default => "default",
        }
    }
}

/// Reply together with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reply: String,
    pub outcome: Outcome,
}

/// Trim and lower-case a message; a missing message becomes empty
pub fn normalize(message: Option<&str>) -> String {
    message.unwrap_or_default().trim().to_lowercase()
}

/// Resolve a reply using the thread-local RNG for fallback selection
pub fn resolve(message: Option<&str>, rules: &RuleSet) -> String {
    resolve_with_rng(message, rules, &mut rand::thread_rng())
}

/// Resolve a reply with a caller-supplied RNG
pub fn resolve_with_rng<R: Rng + ?Sized>(
    message: Option<&str>,
    rules: &RuleSet,
    rng: &mut R,
) -> String {
    resolve_detailed(message, rules, rng).reply
}

/// Resolve a reply and report which path was taken
///
/// Rules are scanned in load order and keywords in listed order. Matching is
/// plain substring containment, so `"hi"` matches `"this"`. Keywords are
/// already lower-case in a `RuleSet`.
pub fn resolve_detailed<R: Rng + ?Sized>(
    message: Option<&str>,
    rules: &RuleSet,
    rng: &mut R,
) -> Resolution {
    let msg = normalize(message);

    for (rule_index, rule) in rules.rules().iter().enumerate() {
        for keyword in &rule.keywords {
            if msg.contains(keyword.as_str()) {
                debug!("Rule {} matched on keyword {:?}", rule_index, keyword);
                return Resolution {
                    reply: rule.reply.clone(),
                    outcome: Outcome::Matched {
                        rule_index,
                        keyword: keyword.clone(),
                    },
                };
            }
        }
    }

    match rules.fallback_replies().choose(rng) {
        Some(reply) => Resolution {
            reply: (*reply).to_string(),
            outcome: Outcome::Fallback,
        },
        None => Resolution {
            reply: DEFAULT_REPLY.to_string(),
            outcome: Outcome::Default,
        },
    }
}
