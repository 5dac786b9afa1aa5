//! Reply Resolver
//!
//! Maps an incoming chat message to exactly one reply using the rule table.

mod resolver;

pub use resolver::{
    normalize, resolve, resolve_detailed, resolve_with_rng, Outcome, Resolution, DEFAULT_REPLY,
};
