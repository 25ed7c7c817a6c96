//! Pattern recognition: card multiset -> at most one `Pattern`.
//!
//! Shapes are tested in a fixed priority order and the first match wins. The
//! order only matters where shapes can overlap, which is the Airplane /
//! AirplaneWithWings pair: an input that is an exact airplane (every rank has
//! three cards, one contiguous run) is always classified as `Airplane`, and the
//! wings check only runs when that fails.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::cards_types::{Card, Rank, Suit};
use super::play_types::{Pattern, PlayType};

type ShapeCheck = fn(&CardCounts) -> Option<Pattern>;

/// Recognition priority. First match wins.
const SHAPE_PRIORITY: [(PlayType, ShapeCheck); 10] = [
    (PlayType::Dizha, check_dizha),
    (PlayType::Tongzi, check_tongzi),
    (PlayType::Bomb, check_bomb),
    (PlayType::Airplane, check_airplane),
    (PlayType::AirplaneWithWings, check_airplane_with_wings),
    (PlayType::TripleWithTwo, check_triple_with_two),
    (PlayType::Triple, check_triple),
    (PlayType::ConsecutivePairs, check_consecutive_pairs),
    (PlayType::Pair, check_pair),
    (PlayType::Single, check_single),
];

/// Input grouped by rank and by (suit, rank). Built fresh for every call.
struct CardCounts {
    total: usize,
    by_rank: BTreeMap<Rank, usize>,
    by_suit_rank: BTreeMap<(Suit, Rank), usize>,
}

impl CardCounts {
    fn from_cards(cards: &[Card]) -> Self {
        let mut by_rank = BTreeMap::new();
        let mut by_suit_rank = BTreeMap::new();
        for card in cards {
            *by_rank.entry(card.rank).or_insert(0) += 1;
            *by_suit_rank.entry((card.suit, card.rank)).or_insert(0) += 1;
        }
        Self {
            total: cards.len(),
            by_rank,
            by_suit_rank,
        }
    }

    /// The rank and its count, when the input holds exactly one rank.
    fn sole_rank(&self) -> Option<(Rank, usize)> {
        if self.by_rank.len() != 1 {
            return None;
        }
        self.by_rank.iter().next().map(|(&rank, &count)| (rank, count))
    }

    /// Distinct ranks, ascending, when every rank has exactly `count` cards.
    fn uniform_ranks(&self, count: usize) -> Option<Vec<Rank>> {
        if self.by_rank.values().any(|&c| c != count) {
            return None;
        }
        Some(self.by_rank.keys().copied().collect())
    }
}

/// Recognize the play formed by `cards`.
///
/// Returns `None` for an empty input or any multiset matching none of the ten
/// shapes. The result does not depend on the order of `cards`.
pub fn recognize(cards: &[Card]) -> Option<Pattern> {
    if cards.is_empty() {
        debug!("Empty card set has no pattern");
        return None;
    }

    let counts = CardCounts::from_cards(cards);
    let pattern = SHAPE_PRIORITY
        .iter()
        .find_map(|(_, check)| check(&counts));

    match &pattern {
        Some(p) => trace!(
            play_type = %p.play_type,
            primary_rank = %p.primary_rank,
            card_count = p.card_count,
            strength = p.strength,
            "Recognized pattern"
        ),
        None => debug!(
            card_count = counts.total,
            distinct_ranks = counts.by_rank.len(),
            "No valid pattern recognized"
        ),
    }
    pattern
}

/// True if `cards` are recognized as exactly `play_type`.
pub fn recognizes_as(cards: &[Card], play_type: PlayType) -> bool {
    recognize(cards).is_some_and(|p| p.play_type == play_type)
}

/// True if ascending `ranks` step by exactly one on the linear rank scale.
///
/// An empty or single-rank slice is trivially contiguous. There is no
/// wraparound between Two and Five.
pub fn is_contiguous_run(ranks: &[Rank]) -> bool {
    ranks.windows(2).all(|w| w[0].precedes(w[1]))
}

fn base_strength(rank: Rank) -> u32 {
    u32::from(rank.value())
}

fn chain_strength(ranks: &[Rank]) -> Option<u32> {
    let highest = ranks.last()?;
    Some(base_strength(*highest) * 1000 + ranks.len() as u32)
}

fn chain_pattern(play_type: PlayType, ranks: Vec<Rank>, card_count: usize) -> Option<Pattern> {
    let primary_rank = *ranks.last()?;
    let strength = chain_strength(&ranks)?;
    Some(Pattern {
        play_type,
        primary_rank,
        primary_suit: None,
        secondary_ranks: ranks,
        card_count,
        strength,
    })
}

fn simple_pattern(play_type: PlayType, rank: Rank, card_count: usize) -> Pattern {
    Pattern {
        play_type,
        primary_rank: rank,
        primary_suit: None,
        secondary_ranks: Vec::new(),
        card_count,
        strength: base_strength(rank),
    }
}

fn check_dizha(counts: &CardCounts) -> Option<Pattern> {
    if counts.total != 8 {
        return None;
    }
    let (rank, _) = counts.sole_rank()?;
    let two_of_each = Suit::ALL
        .iter()
        .all(|&suit| counts.by_suit_rank.get(&(suit, rank)) == Some(&2));
    if !two_of_each {
        return None;
    }
    Some(Pattern {
        play_type: PlayType::Dizha,
        primary_rank: rank,
        primary_suit: None,
        secondary_ranks: Vec::new(),
        card_count: 8,
        strength: base_strength(rank) * 100_000,
    })
}

fn check_tongzi(counts: &CardCounts) -> Option<Pattern> {
    if counts.total != 3 || counts.by_suit_rank.len() != 1 {
        return None;
    }
    let (&(suit, rank), _) = counts.by_suit_rank.iter().next()?;
    Some(Pattern {
        play_type: PlayType::Tongzi,
        primary_rank: rank,
        primary_suit: Some(suit),
        secondary_ranks: Vec::new(),
        card_count: 3,
        strength: base_strength(rank) * 10_000 + u32::from(suit.value()) * 1000,
    })
}

fn check_bomb(counts: &CardCounts) -> Option<Pattern> {
    if counts.total < 4 {
        return None;
    }
    let (rank, count) = counts.sole_rank()?;
    Some(Pattern {
        play_type: PlayType::Bomb,
        primary_rank: rank,
        primary_suit: None,
        secondary_ranks: Vec::new(),
        card_count: count,
        strength: base_strength(rank) * 1000 + count as u32,
    })
}

fn check_airplane(counts: &CardCounts) -> Option<Pattern> {
    if counts.total < 6 || counts.total % 3 != 0 {
        return None;
    }
    let ranks = counts.uniform_ranks(3)?;
    if !is_contiguous_run(&ranks) {
        return None;
    }
    chain_pattern(PlayType::Airplane, ranks, counts.total)
}

/// Body: a contiguous run of N >= 2 ranks holding exactly three cards each.
/// Wings: everything else, N..=2N cards of any composition.
///
/// Runs are tried longest first, leftmost first within a length; the first body
/// whose wing count fits is accepted.
fn check_airplane_with_wings(counts: &CardCounts) -> Option<Pattern> {
    if counts.total < 8 {
        return None;
    }
    let candidates: Vec<Rank> = counts
        .by_rank
        .iter()
        .filter(|(_, &count)| count == 3)
        .map(|(&rank, _)| rank)
        .collect();
    if candidates.len() < 2 {
        return None;
    }

    for length in (2..=candidates.len()).rev() {
        for body in candidates.windows(length) {
            if !is_contiguous_run(body) {
                continue;
            }
            let wings = counts.total - 3 * length;
            if (length..=2 * length).contains(&wings) {
                return chain_pattern(PlayType::AirplaneWithWings, body.to_vec(), counts.total);
            }
        }
    }
    None
}

fn check_triple_with_two(counts: &CardCounts) -> Option<Pattern> {
    if counts.total != 5 || counts.by_rank.len() != 2 {
        return None;
    }
    let triple_rank = counts
        .by_rank
        .iter()
        .find_map(|(&rank, &count)| (count == 3).then_some(rank))?;
    // Five cards over two ranks with one triple leaves exactly a pair.
    Some(simple_pattern(PlayType::TripleWithTwo, triple_rank, 5))
}

fn check_triple(counts: &CardCounts) -> Option<Pattern> {
    if counts.total != 3 {
        return None;
    }
    let (rank, _) = counts.sole_rank()?;
    Some(simple_pattern(PlayType::Triple, rank, 3))
}

fn check_consecutive_pairs(counts: &CardCounts) -> Option<Pattern> {
    if counts.total < 4 || counts.total % 2 != 0 {
        return None;
    }
    let ranks = counts.uniform_ranks(2)?;
    if !is_contiguous_run(&ranks) {
        return None;
    }
    chain_pattern(PlayType::ConsecutivePairs, ranks, counts.total)
}

fn check_pair(counts: &CardCounts) -> Option<Pattern> {
    if counts.total != 2 {
        return None;
    }
    let (rank, _) = counts.sole_rank()?;
    Some(simple_pattern(PlayType::Pair, rank, 2))
}

fn check_single(counts: &CardCounts) -> Option<Pattern> {
    if counts.total != 1 {
        return None;
    }
    let (&(suit, rank), _) = counts.by_suit_rank.iter().next()?;
    Some(Pattern {
        primary_suit: Some(suit),
        ..simple_pattern(PlayType::Single, rank, 1)
    })
}
