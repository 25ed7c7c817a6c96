//! Hand formation checks for the must-beat rule: "if you can beat it, you must".
//!
//! Each check builds a small set of concrete candidate plays from the hand and
//! confirms them through the recognizer (and, for [`has_beating_play`], through
//! [`beats`]). This keeps the checks consistent with recognition without
//! enumerating every legal play.

use std::collections::BTreeMap;

use super::cards_types::{Card, Rank, Suit};
use super::play_types::{Pattern, PlayType};
use super::recognizer::{is_contiguous_run, recognize};
use super::validator::beats;

/// The hand's cards grouped by rank, each group sorted ascending.
struct RankGroups(BTreeMap<Rank, Vec<Card>>);

impl RankGroups {
    fn new(hand: &[Card]) -> Self {
        let mut groups: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        for card in hand {
            groups.entry(card.rank).or_default().push(*card);
        }
        for cards in groups.values_mut() {
            cards.sort();
        }
        Self(groups)
    }

    fn ranks_with_at_least(&self, n: usize) -> Vec<Rank> {
        self.0
            .iter()
            .filter(|(_, cards)| cards.len() >= n)
            .map(|(&rank, _)| rank)
            .collect()
    }

    fn take(&self, rank: Rank, n: usize) -> Vec<Card> {
        self.0
            .get(&rank)
            .map(|cards| cards.iter().take(n).copied().collect())
            .unwrap_or_default()
    }

    /// Contiguous runs of `len` ranks, each holding at least `per_rank` cards.
    fn runs(&self, per_rank: usize, len: usize) -> Vec<Vec<Rank>> {
        if len < 2 {
            return Vec::new();
        }
        self.ranks_with_at_least(per_rank)
            .windows(len)
            .filter(|w| is_contiguous_run(w))
            .map(<[Rank]>::to_vec)
            .collect()
    }

    fn chain_cards(&self, run: &[Rank], per_rank: usize) -> Vec<Card> {
        run.iter().flat_map(|&r| self.take(r, per_rank)).collect()
    }

    /// Three cards of `rank` spanning at least two suits (so not a Tongzi).
    fn mixed_triple(&self, rank: Rank) -> Option<Vec<Card>> {
        let cards = self.0.get(&rank)?;
        let first = *cards.first()?;
        let other_pos = cards.iter().position(|c| c.suit != first.suit)?;
        let mut triple = vec![first, cards[other_pos]];
        triple.extend(
            cards
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != 0 && i != other_pos)
                .map(|(_, c)| *c)
                .take(1),
        );
        (triple.len() == 3).then_some(triple)
    }

    /// First airplane on `run` that `accept` takes, wings included.
    ///
    /// Wings come only from ranks outside the body, between `run.len()` and
    /// twice that many cards. Every split of the wing count across those ranks
    /// is tried, lowest ranks filled first, and the recognizer (through
    /// `accept`) decides which groupings are real wings. A third card on a rank
    /// next to the body, for example, turns the play into a longer Airplane.
    fn find_airplane_with_wings(
        &self,
        run: &[Rank],
        accept: &dyn Fn(&[Card]) -> bool,
    ) -> Option<Vec<Card>> {
        let spare: Vec<&[Card]> = self
            .0
            .iter()
            .filter(|(rank, _)| !run.contains(rank))
            .map(|(_, cards)| cards.as_slice())
            .collect();
        let mut play = self.chain_cards(run, 3);
        search_wings(&spare, &mut play, 0, (run.len(), 2 * run.len()), accept)
    }

    /// A triple of `rank` plus the lowest pair of another rank.
    fn triple_with_two(&self, rank: Rank) -> Option<Vec<Card>> {
        let mut play = self.take(rank, 3);
        if play.len() < 3 {
            return None;
        }
        let pair_rank = self
            .ranks_with_at_least(2)
            .into_iter()
            .find(|&r| r != rank)?;
        play.extend(self.take(pair_rank, 2));
        Some(play)
    }
}

/// Depth-first over how many cards each spare rank gives to the wings.
fn search_wings(
    spare: &[&[Card]],
    play: &mut Vec<Card>,
    wings: usize,
    (min, max): (usize, usize),
    accept: &dyn Fn(&[Card]) -> bool,
) -> Option<Vec<Card>> {
    let available: usize = spare.iter().map(|cards| cards.len()).sum();
    if wings + available < min {
        return None;
    }
    let Some((cards, rest)) = spare.split_first() else {
        return accept(play.as_slice()).then(|| play.clone());
    };
    for take in (0..=cards.len().min(max - wings)).rev() {
        play.extend_from_slice(&cards[..take]);
        let found = search_wings(rest, play, wings + take, (min, max), accept);
        play.truncate(play.len() - take);
        if found.is_some() {
            return found;
        }
    }
    None
}

fn forms_above(cards: &[Card], play_type: PlayType, chain_len: usize, min_rank: Rank) -> bool {
    recognize(cards).is_some_and(|p| {
        p.play_type == play_type && p.chain_length() == chain_len && p.primary_rank > min_rank
    })
}

/// Can `hand` form `num_pairs` consecutive pairs whose highest rank is above `min_rank`?
pub fn can_form_consecutive_pairs(hand: &[Card], num_pairs: usize, min_rank: Rank) -> bool {
    let groups = RankGroups::new(hand);
    groups.runs(2, num_pairs).iter().any(|run| {
        let play = groups.chain_cards(run, 2);
        forms_above(&play, PlayType::ConsecutivePairs, num_pairs, min_rank)
    })
}

/// Can `hand` form `num_triples` consecutive triples whose highest rank is above `min_rank`?
pub fn can_form_airplane(hand: &[Card], num_triples: usize, min_rank: Rank) -> bool {
    let groups = RankGroups::new(hand);
    groups.runs(3, num_triples).iter().any(|run| {
        let play = groups.chain_cards(run, 3);
        forms_above(&play, PlayType::Airplane, num_triples, min_rank)
    })
}

/// Can `hand` form an airplane with wings on a body of `num_triples` ranks whose
/// highest rank is above `min_rank`?
pub fn can_form_airplane_with_wings(hand: &[Card], num_triples: usize, min_rank: Rank) -> bool {
    let groups = RankGroups::new(hand);
    let accept = |play: &[Card]| {
        forms_above(play, PlayType::AirplaneWithWings, num_triples, min_rank)
    };
    groups
        .runs(3, num_triples)
        .iter()
        .any(|run| groups.find_airplane_with_wings(run, &accept).is_some())
}

/// Can `hand` form a triple above `min_rank` carrying a pair of another rank?
pub fn can_form_triple_with_two(hand: &[Card], min_rank: Rank) -> bool {
    let groups = RankGroups::new(hand);
    groups
        .ranks_with_at_least(3)
        .into_iter()
        .filter(|&r| r > min_rank)
        .any(|rank| {
            groups
                .triple_with_two(rank)
                .is_some_and(|play| forms_above(&play, PlayType::TripleWithTwo, 0, min_rank))
        })
}

/// Does `hand` contain any play that beats `current`?
///
/// Considers same-type plays of matching shape and every trump the hand holds.
pub fn has_beating_play(hand: &[Card], current: &Pattern) -> bool {
    candidate_plays(hand, current)
        .iter()
        .any(|play| beats(play, Some(current)))
}

fn candidate_plays(hand: &[Card], current: &Pattern) -> Vec<Vec<Card>> {
    let groups = RankGroups::new(hand);
    let mut plays = same_type_candidates(&groups, current);
    plays.extend(trump_candidates(&groups));
    plays
}

fn same_type_candidates(groups: &RankGroups, current: &Pattern) -> Vec<Vec<Card>> {
    let len = current.chain_length();
    match current.play_type {
        PlayType::Single => groups.0.keys().map(|&r| groups.take(r, 1)).collect(),
        PlayType::Pair => groups
            .ranks_with_at_least(2)
            .into_iter()
            .map(|r| groups.take(r, 2))
            .collect(),
        PlayType::Triple => groups
            .ranks_with_at_least(3)
            .into_iter()
            .filter_map(|r| groups.mixed_triple(r))
            .collect(),
        PlayType::TripleWithTwo => groups
            .ranks_with_at_least(3)
            .into_iter()
            .filter_map(|r| groups.triple_with_two(r))
            .collect(),
        PlayType::ConsecutivePairs => groups
            .runs(2, len)
            .iter()
            .map(|run| groups.chain_cards(run, 2))
            .collect(),
        PlayType::Airplane => groups
            .runs(3, len)
            .iter()
            .map(|run| groups.chain_cards(run, 3))
            .collect(),
        PlayType::AirplaneWithWings => groups
            .runs(3, len)
            .iter()
            .filter_map(|run| {
                groups.find_airplane_with_wings(run, &|play: &[Card]| beats(play, Some(current)))
            })
            .collect(),
        PlayType::Bomb | PlayType::Tongzi | PlayType::Dizha => Vec::new(),
    }
}

/// Every bomb (all cards of a rank), Tongzi and Dizha the hand can form.
fn trump_candidates(groups: &RankGroups) -> Vec<Vec<Card>> {
    let mut plays = Vec::new();
    for cards in groups.0.values() {
        if cards.len() >= 4 {
            plays.push(cards.clone());
        }
        for suit in Suit::ALL {
            let suited: Vec<Card> = cards.iter().filter(|c| c.suit == suit).copied().collect();
            if suited.len() >= 3 {
                plays.push(suited[..3].to_vec());
            }
        }
        let dizha: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(move |&suit| cards.iter().filter(move |c| c.suit == suit).take(2).copied())
            .collect();
        if dizha.len() == 8 {
            plays.push(dizha);
        }
    }
    plays
}
