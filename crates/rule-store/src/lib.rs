//! Rule Store
//!
//! Holds the ordered keyword rule table that drives the chatbot's replies.
//! The table is parsed once from a JSON resource and never written again.

mod error;
mod rule;

pub use error::ConfigurationError;
pub use rule::{Rule, RuleSet};
