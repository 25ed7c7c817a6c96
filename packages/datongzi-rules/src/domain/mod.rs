//! Domain layer: card model, pattern recognition, play validation and hand
//! decomposition. Everything here is pure and deterministic.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod fixtures;
pub mod formation;
pub mod hand_patterns;
pub mod play_types;
pub mod recognizer;
pub mod validator;

#[cfg(test)]
mod tests_hand_patterns;
#[cfg(test)]
mod tests_validator;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use fixtures::CardFixtures;
pub use formation::{
    can_form_airplane, can_form_airplane_with_wings, can_form_consecutive_pairs,
    can_form_triple_with_two, has_beating_play,
};
pub use hand_patterns::{decompose, HandPatterns};
pub use play_types::{Pattern, PlayType};
pub use recognizer::{is_contiguous_run, recognize, recognizes_as};
pub use validator::{beats, pattern_beats};
