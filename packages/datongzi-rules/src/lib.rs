//! Rules engine for Da Tong Zi (打筒子).
//!
//! Three entry points cover the whole engine:
//!
//! - [`recognize`] classifies a set of cards as one of ten play shapes.
//! - [`beats`] decides whether a play may follow the current one.
//! - [`decompose`] splits a hand into non-overlapping resource buckets.
//!
//! All operations are pure functions over plain values and are safe to call
//! from any number of threads.

pub mod domain;
pub mod errors;

pub use domain::{
    beats, decompose, has_beating_play, pattern_beats, recognize, try_parse_cards, Card,
    HandPatterns, Pattern, PlayType, Rank, Suit,
};
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rules_test_support::logging::init();
}
