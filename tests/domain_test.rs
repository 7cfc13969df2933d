//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_equity::domain::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// 52 разные карты, порядок фиксированный: масть за мастью, ранги 2..A.
#[test]
fn standard_deck_has_52_unique_cards_in_fixed_order() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    assert_eq!(deck.cards[0], c(Rank::Two, Suit::Clubs));
    assert_eq!(deck.cards[12], c(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.cards[13], c(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards[51], c(Rank::Ace, Suit::Spades));

    // Детерминированность: два вызова дают одно и то же.
    assert_eq!(deck, Deck::standard_52());
}

#[test]
fn deck_without_hole_cards_leaves_48() {
    let used = [
        c(Rank::Ace, Suit::Spades),
        c(Rank::King, Suit::Spades),
        c(Rank::Six, Suit::Diamonds),
        c(Rank::Six, Suit::Clubs),
    ];
    let deck = Deck::without(&used);

    assert_eq!(deck.len(), 48);
    for card in &used {
        assert!(!deck.contains(card));
    }
    assert!(deck.contains(&c(Rank::Ace, Suit::Hearts)));
}

#[test]
fn is_used_requires_rank_and_suit_match() {
    let used = [c(Rank::Ace, Suit::Spades), c(Rank::Ten, Suit::Hearts)];

    assert!(is_used(&c(Rank::Ace, Suit::Spades), &used));
    assert!(!is_used(&c(Rank::Ace, Suit::Hearts), &used));
    assert!(!is_used(&c(Rank::King, Suit::Spades), &used));
    assert!(!is_used(&c(Rank::Ace, Suit::Spades), &[]));
}

#[test]
fn rank_values_and_order() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Ace.value(), 14);
    assert!(Rank::King < Rank::Ace);
    assert!(Rank::Two < Rank::Three);

    for r in Rank::ALL {
        assert_eq!(Rank::from_value(r.value()), Some(r));
    }
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn suit_colors() {
    assert!(Suit::Hearts.is_red());
    assert!(Suit::Diamonds.is_red());
    assert_eq!(Suit::Clubs.color(), SuitColor::Black);
    assert_eq!(Suit::Spades.color(), SuitColor::Black);
}

#[test]
fn card_text_format() {
    let ace: Card = "As".parse().unwrap();
    assert_eq!(ace, c(Rank::Ace, Suit::Spades));
    assert_eq!(ace.to_string(), "As");

    let ten: Card = "td".parse().unwrap();
    assert_eq!(ten.to_string(), "Td");

    assert_eq!("7c".parse::<Card>().unwrap(), c(Rank::Seven, Suit::Clubs));
}

#[test]
fn card_parse_errors() {
    assert_eq!(
        "1s".parse::<Card>().unwrap_err(),
        CardParseError::InvalidRank('1')
    );
    assert_eq!(
        "Ax".parse::<Card>().unwrap_err(),
        CardParseError::InvalidSuit('x')
    );
    assert!(matches!(
        "Asd".parse::<Card>().unwrap_err(),
        CardParseError::BadLength(_)
    ));
    assert!(matches!(
        "".parse::<Card>().unwrap_err(),
        CardParseError::BadLength(_)
    ));
}

#[test]
fn parse_cards_splits_hands() {
    let hand = parse_cards("AsKs").unwrap();
    assert_eq!(hand, vec![c(Rank::Ace, Suit::Spades), c(Rank::King, Suit::Spades)]);

    let spaced = parse_cards("6d 6c").unwrap();
    assert_eq!(spaced, vec![c(Rank::Six, Suit::Diamonds), c(Rank::Six, Suit::Clubs)]);

    assert!(parse_cards("AsK").is_err());
    assert!(parse_cards("AsKz").is_err());
}

#[test]
fn hand_rank_sentinel_is_lowest() {
    assert_eq!(HandRank::default(), HandRank::NO_HAND);
    assert!(!HandRank::NO_HAND.is_valid());
    assert!(HandRank(1) > HandRank::NO_HAND);
}
