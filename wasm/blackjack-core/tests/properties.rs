use std::collections::HashSet;

use blackjack_core::{battle, Battle, Card, Deck, Hand, HandState, Rank, Suit};
use proptest::prelude::*;

fn card_strategy() -> impl Strategy<Value = Card> {
    (
        proptest::sample::select(Rank::ALL.to_vec()),
        proptest::sample::select(Suit::ALL.to_vec()),
    )
        .prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// Recounts a hand from scratch the way cards are added one at a time.
fn recount(cards: &[Card]) -> u8 {
    let mut value = 0u8;
    let mut aces = 0u8;
    let mut aces_high = true;
    for card in cards {
        if card.rank() == Rank::Ace {
            aces += 1;
            value += if aces_high { 11 } else { 1 };
        } else {
            value += card.rank().blackjack_value();
        }
        if value > 21 && aces_high && aces > 0 {
            aces_high = false;
            value -= aces * 10;
        }
    }
    value
}

proptest! {
    #[test]
    fn test_battle_is_antisymmetric(a in card_strategy(), b in card_strategy(), aces_high in any::<bool>()) {
        let forward = battle(&a, &b, aces_high);
        let backward = battle(&b, &a, aces_high);
        if a == b {
            prop_assert_eq!(forward, Battle::Tie);
            prop_assert_eq!(backward, Battle::Tie);
        } else {
            prop_assert_ne!(forward, Battle::Tie);
            prop_assert_eq!(forward == Battle::Win, backward == Battle::Lose);
        }
    }

    #[test]
    fn test_same_rank_decided_by_suit(rank in proptest::sample::select(Rank::ALL.to_vec()), aces_high in any::<bool>()) {
        let low = Card::new(rank, Suit::Clubs);
        let high = Card::new(rank, Suit::Spades);
        prop_assert_eq!(battle(&high, &low, aces_high), Battle::Win);
        prop_assert_eq!(battle(&low, &high, aces_high), Battle::Lose);
    }

    #[test]
    fn test_draw_52_covers_every_card(seed in any::<u64>(), burn in 0i64..52) {
        let mut deck = Deck::seeded(seed);
        if burn > 0 {
            deck.draw_many(burn).unwrap();
        }
        // Finish the current deck, which refills it, then take a full one.
        let rest = 52 - burn;
        let tail: HashSet<Card> = deck.draw_many(rest).unwrap().into_iter().collect();
        prop_assert_eq!(tail.len() as i64, rest);
        let full: HashSet<Card> = deck.draw_many(52).unwrap().into_iter().collect();
        prop_assert_eq!(full.len(), 52);
        prop_assert_eq!(deck.remaining_cards(), 52);
    }

    #[test]
    fn test_hand_value_matches_cards(seed in any::<u64>(), hits in 0usize..8) {
        let mut deck = Deck::seeded(seed);
        let mut hand = Hand::deal(&mut deck);
        for _ in 0..hits {
            hand.hit(&mut deck);
        }
        prop_assert_eq!(hand.value(), recount(hand.cards()));
        let expected = match hand.value() {
            21 if hand.cards().len() == 2 => HandState::Blackjack,
            21 => HandState::Staying,
            v if v > 21 => HandState::Busted,
            _ => HandState::Playing,
        };
        prop_assert_eq!(hand.state(), expected);
    }

    #[test]
    fn test_finished_hands_do_not_change(seed in any::<u64>()) {
        let mut deck = Deck::seeded(seed);
        let mut hand = Hand::deal(&mut deck);
        while !hand.is_terminal() {
            hand.hit(&mut deck);
        }
        let before = hand.clone();
        let remaining = deck.remaining_cards();
        hand.hit(&mut deck);
        hand.stay();
        prop_assert_eq!(hand, before);
        prop_assert_eq!(deck.remaining_cards(), remaining);
    }
}
