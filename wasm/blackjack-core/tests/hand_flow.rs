use std::collections::VecDeque;

use blackjack_core::{Card, CardSource, Deck, Error, Hand, HandState, Rank, Suit};

struct Scripted(VecDeque<Card>);

impl Scripted {
    fn new(cards: &[Card]) -> Self {
        Scripted(cards.iter().copied().collect())
    }
}

impl CardSource for Scripted {
    fn draw(&mut self) -> Card {
        self.0.pop_front().expect("script ran out of cards")
    }
}

fn card(rank: Rank, suit: Suit) -> Card {
    Card::make(Some(rank), Some(suit)).unwrap()
}

#[test]
fn test_queen_ace_is_blackjack() {
    let mut source = Scripted::new(&[card(Rank::Queen, Suit::Hearts), card(Rank::Ace, Suit::Spades)]);
    let hand = Hand::deal(&mut source);
    assert_eq!(hand.value(), 21);
    assert_eq!(hand.state(), HandState::Blackjack);
}

#[test]
fn test_soft_ace_demoted_on_bust() {
    let mut source = Scripted::new(&[
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
    ]);
    let mut hand = Hand::deal(&mut source);
    let mut values = vec![hand.value()];
    hand.hit(&mut source);
    values.push(hand.value());
    assert_eq!(hand.state(), HandState::Playing);
    hand.hit(&mut source);
    values.push(hand.value());
    assert_eq!(values, vec![5, 16, 13]);
    assert_eq!(hand.state(), HandState::Playing);
}

#[test]
fn test_queen_seven_ten_busts() {
    let mut source = Scripted::new(&[
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ten, Suit::Diamonds),
    ]);
    let mut hand = Hand::deal(&mut source);
    hand.hit(&mut source);
    assert_eq!(hand.value(), 27);
    assert_eq!(hand.state(), HandState::Busted);
}

#[test]
fn test_split_sevens() {
    let seven = card(Rank::Seven, Suit::Diamonds);
    let mut source = Scripted::new(&[
        seven,
        seven,
        card(Rank::Two, Suit::Clubs),
        card(Rank::Ten, Suit::Diamonds),
    ]);
    let hand = Hand::deal(&mut source);
    let [left, right] = hand.split(&mut source).unwrap();
    assert_eq!((left.value(), left.state()), (9, HandState::Playing));
    assert_eq!((right.value(), right.state()), (17, HandState::Playing));
}

#[test]
fn test_split_ineligible_leaves_hand_alone() {
    let mut source = Scripted::new(&[card(Rank::Queen, Suit::Hearts), card(Rank::Three, Suit::Clubs)]);
    let hand = Hand::deal(&mut source);
    let cards = hand.cards().to_vec();
    assert!(matches!(hand.split(&mut source), Err(Error::InvalidState(_))));
    assert_eq!(hand.cards(), cards.as_slice());
    assert_eq!(hand.value(), 13);
    assert_eq!(hand.state(), HandState::Playing);
}

#[test]
fn test_hands_share_a_deck() {
    let mut deck = Deck::seeded(11);
    let mut first = Hand::deal(&mut deck);
    let second = Hand::deal(&mut deck);
    first.hit(&mut deck);
    let dealt = first.cards().len() + second.cards().len();
    assert_eq!(deck.remaining_cards(), 52 - dealt);
    for card in first.cards().iter().chain(second.cards()) {
        assert!(!deck.contains(card));
    }
}

#[test]
fn test_play_out_until_done() {
    let mut deck = Deck::seeded(12);
    for _ in 0..200 {
        let mut hand = Hand::deal(&mut deck);
        while !hand.is_terminal() {
            hand.hit(&mut deck);
        }
        assert_ne!(hand.state(), HandState::Playing);
        assert!(hand.value() >= 21 || hand.state() == HandState::Staying);
    }
}
