//! Play validation: can a new play follow the current one?
//!
//! Hierarchy, checked in order:
//! 1. Dizha beats everything but an equal-or-higher Dizha.
//! 2. Tongzi beats any Bomb, and a Tongzi lower by (rank, suit).
//! 3. Bomb beats any non-trump, and a Bomb lower by (rank, count).
//! 4. Otherwise only the same play type (and chain length) with higher strength.

use std::cmp::Ordering;

use tracing::debug;

use super::cards_types::Card;
use super::play_types::{Pattern, PlayType};
use super::recognizer::recognize;

/// Check whether `new_cards` may be played over `current`.
///
/// With no current play (unopened round) any recognizable play is legal.
/// Unrecognizable cards never beat anything.
pub fn beats(new_cards: &[Card], current: Option<&Pattern>) -> bool {
    let Some(new_pattern) = recognize(new_cards) else {
        debug!(card_count = new_cards.len(), "New play has no valid pattern");
        return false;
    };
    let Some(current) = current else {
        return true;
    };

    let legal = pattern_beats(&new_pattern, current);
    if !legal {
        debug!(
            new = %new_pattern,
            current = %current,
            "Play does not beat current pattern"
        );
    }
    legal
}

/// Compare two recognized patterns under the beat hierarchy.
pub fn pattern_beats(new: &Pattern, current: &Pattern) -> bool {
    use PlayType::{Bomb, Dizha, Tongzi};

    match (new.play_type, current.play_type) {
        (Dizha, Dizha) => new.primary_rank > current.primary_rank,
        (Dizha, _) => true,
        (_, Dizha) => false,

        (Tongzi, Bomb) => true,
        (Tongzi, Tongzi) => {
            let ord = new
                .primary_rank
                .cmp(&current.primary_rank)
                .then_with(|| compare_suits(new, current));
            ord == Ordering::Greater
        }
        (Tongzi, _) => false,
        (_, Tongzi) => false,

        (Bomb, Bomb) => {
            let ord = new
                .primary_rank
                .cmp(&current.primary_rank)
                .then_with(|| new.card_count.cmp(&current.card_count));
            ord == Ordering::Greater
        }
        (Bomb, _) => true,
        (_, Bomb) => false,

        (new_type, current_type) => {
            if new_type != current_type {
                return false;
            }
            if new_type.is_chain() && new.chain_length() != current.chain_length() {
                return false;
            }
            new.strength > current.strength
        }
    }
}

// Tongzi patterns always carry a suit; a missing suit never wins the tie.
fn compare_suits(new: &Pattern, current: &Pattern) -> Ordering {
    match (new.primary_suit, current.primary_suit) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}
