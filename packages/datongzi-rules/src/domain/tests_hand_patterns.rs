use crate::domain::{decompose, recognize, Card, CardFixtures, HandPatterns, PlayType, Rank};

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

fn assert_partitions(hand: &[Card], patterns: &HandPatterns) {
    assert_eq!(sorted(patterns.all_cards()), sorted(hand.to_vec()));
    assert_eq!(patterns.total_cards, hand.len());
}

#[test]
fn four_kings_form_one_bomb() {
    let hand = CardFixtures::hand("KS KH KC KD");
    let p = decompose(&hand);

    assert_eq!(p.bombs.len(), 1);
    assert_eq!(p.bombs[0].len(), 4);
    assert!(p.triples.is_empty());
    assert!(p.pairs.is_empty());
    assert!(p.singles.is_empty());
    assert_eq!(p.trump_count, 1);
    assert!(p.has_control_cards);
    assert_eq!(p.play_count(), 1);
    assert_partitions(&hand, &p);
}

#[test]
fn empty_hand() {
    let p = decompose(&[]);
    assert_eq!(p, HandPatterns::default());
    assert_eq!(p.play_count(), 0);
    assert!(!p.has_control_cards);
}

#[test]
fn dizha_comes_out_before_bombs() {
    let hand = CardFixtures::hand("9S 9S 9H 9H 9C 9C 9D 9D");
    let p = decompose(&hand);
    assert_eq!(p.dizha.len(), 1);
    assert!(p.bombs.is_empty());
    assert_eq!(p.trump_count, 1);
    assert!(!p.has_control_cards);
    assert_partitions(&hand, &p);
}

#[test]
fn multi_deck_hand_yields_repeated_dizha() {
    let hand = CardFixtures::hand(&"QS QS QH QH QC QC QD QD ".repeat(2));
    let p = decompose(&hand);
    assert_eq!(p.dizha.len(), 2);
    assert_eq!(p.trump_count, 2);
    assert_partitions(&hand, &p);
}

#[test]
fn tongzi_comes_out_before_bombs() {
    let hand = CardFixtures::hand("KS KS KS KH");
    let p = decompose(&hand);
    assert_eq!(p.tongzi, vec![CardFixtures::hand("KS KS KS")]);
    assert!(p.bombs.is_empty());
    assert_eq!(p.singles, CardFixtures::hand("KH"));
    assert_eq!(p.trump_count, 1);
}

#[test]
fn multi_deck_bomb_holds_every_card_of_the_rank() {
    let hand = CardFixtures::hand("KS KS KH KC KD 5D");
    let p = decompose(&hand);
    assert_eq!(p.bombs.len(), 1);
    assert_eq!(p.bombs[0].len(), 5);
    assert_eq!(p.singles, CardFixtures::hand("5D"));
}

#[test]
fn triples_are_not_split_into_pairs() {
    let hand = CardFixtures::hand("5S 5H 5C 6S 6H");
    let p = decompose(&hand);
    assert_eq!(p.triples.len(), 1);
    assert!(p.consecutive_pair_chains.is_empty());
    assert_eq!(p.pairs, vec![CardFixtures::hand("6S 6H")]);
    assert!(p.singles.is_empty());
}

#[test]
fn airplane_chain_then_leftover_pair() {
    let hand = CardFixtures::hand("5S 5H 5C 6S 6H 6C 7S 7H");
    let p = decompose(&hand);
    assert_eq!(p.airplane_chains.len(), 1);
    assert_eq!(p.airplane_chains[0].len(), 6);
    assert!(p.triples.is_empty());
    assert_eq!(p.pairs, vec![CardFixtures::hand("7S 7H")]);
    assert_partitions(&hand, &p);
}

#[test]
fn consecutive_pairs_and_single() {
    let hand = CardFixtures::hand("9S 9H TS TH JS JH 2S");
    let p = decompose(&hand);
    assert_eq!(p.consecutive_pair_chains.len(), 1);
    let chain = recognize(&p.consecutive_pair_chains[0]).unwrap();
    assert_eq!(chain.play_type, PlayType::ConsecutivePairs);
    assert_eq!(chain.chain_length(), 3);
    assert_eq!(p.singles, CardFixtures::hand("2S"));
    assert!(p.has_control_cards);
}

#[test]
fn separate_chains_sorted_by_strength() {
    let hand = CardFixtures::hand("5S 5H 6S 6H 7S 7H 9S 9H TS TH");
    let p = decompose(&hand);
    assert_eq!(p.consecutive_pair_chains.len(), 2);
    let tops: Vec<Rank> = p
        .consecutive_pair_chains
        .iter()
        .map(|g| recognize(g).unwrap().primary_rank)
        .collect();
    assert_eq!(tops, vec![Rank::Ten, Rank::Seven]);
}

#[test]
fn buckets_sorted_descending() {
    let hand = CardFixtures::hand("5S 5H 9S 9H KS KH 6D 2C AS 8H");
    let p = decompose(&hand);
    let pair_ranks: Vec<Rank> = p.pairs.iter().map(|g| g[0].rank).collect();
    assert_eq!(pair_ranks, vec![Rank::King, Rank::Nine, Rank::Five]);
    assert_eq!(p.singles, CardFixtures::hand("2C AS 8H 6D"));
}

#[test]
fn no_control_cards_in_a_low_hand() {
    let p = decompose(&CardFixtures::hand("5S 6H 7D QC"));
    assert!(!p.has_control_cards);
    assert_eq!(p.singles.len(), 4);
}

#[test]
fn every_group_recognizes_as_its_bucket() {
    let hand = CardFixtures::hand(
        "5S 5S 5S 6H 6C 6D 6S 7S 7H 7C 8S 8H 8C 9D 9D TS TH JS JH QC KD AS AH AC 2S 2H",
    );
    let p = decompose(&hand);
    assert_partitions(&hand, &p);

    let buckets = [
        (&p.dizha, PlayType::Dizha),
        (&p.tongzi, PlayType::Tongzi),
        (&p.bombs, PlayType::Bomb),
        (&p.airplane_chains, PlayType::Airplane),
        (&p.triples, PlayType::Triple),
        (&p.consecutive_pair_chains, PlayType::ConsecutivePairs),
        (&p.pairs, PlayType::Pair),
    ];
    for (groups, expected) in buckets {
        for group in groups {
            assert_eq!(recognize(group).map(|r| r.play_type), Some(expected));
        }
    }
    assert_eq!(p.tongzi.len(), 1);
    assert_eq!(p.bombs.len(), 1);
    assert_eq!(p.airplane_chains.len(), 1);
    assert_eq!(p.triples.len(), 1);
    assert_eq!(p.trump_count, 2);
}

#[test]
fn display_summarizes_bucket_counts() {
    let p = decompose(&CardFixtures::hand("KS KH KC KD 5S 5H 9D"));
    let text = p.to_string();
    assert!(text.starts_with("HandPatterns(7 cards):"));
    assert!(text.contains("Trump: 1 (Dizha:0, Tongzi:0, Bombs:1)"));
    assert!(text.contains("Pairs:1, Singles:1"));
}

#[test]
fn serde_round_trip() {
    let p = decompose(&CardFixtures::hand("KS KH KC 5S 5H 9D"));
    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"KS\""));
    let back: HandPatterns = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
