use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};
use crate::deck::CardSource;
use crate::error::{Error, Result, SPLIT_NOT_ALLOWED};

const BLACKJACK: u8 = 21;
const ACE_HIGH: u8 = 11;
const ACE_LOW: u8 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandState {
    Playing,
    Staying,
    Busted,
    Blackjack,
}

impl HandState {
    pub const fn name(self) -> &'static str {
        match self {
            HandState::Playing => "PLAYING",
            HandState::Staying => "STAYING",
            HandState::Busted => "BUSTED",
            HandState::Blackjack => "BLACKJACK",
        }
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A blackjack hand. Cards keep their draw order and the value is updated
/// as each card arrives; aces count 11 until that would bust the hand, at
/// which point every ace held so far drops to 1 for good.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    value: u8,
    aces: u8,
    aces_high: bool,
    state: HandState,
}

impl Hand {
    fn empty() -> Self {
        Hand {
            cards: Vec::with_capacity(2),
            value: 0,
            aces: 0,
            aces_high: true,
            state: HandState::Playing,
        }
    }

    /// Deals a fresh two-card hand.
    pub fn deal<S: CardSource + ?Sized>(source: &mut S) -> Self {
        let mut hand = Hand::empty();
        hand.add(source.draw());
        hand.add(source.draw());
        hand
    }

    fn from_split<S: CardSource + ?Sized>(card: Card, source: &mut S) -> Self {
        let mut hand = Hand::empty();
        hand.add(card);
        hand.add(source.draw());
        hand
    }

    /// Takes another card. Does nothing once the hand has finished.
    pub fn hit<S: CardSource + ?Sized>(&mut self, source: &mut S) {
        if self.state == HandState::Playing {
            self.add(source.draw());
        }
    }

    pub fn stay(&mut self) {
        if self.state == HandState::Playing {
            self.state = HandState::Staying;
        }
    }

    /// Two cards of the same rank, or any two ten-valued cards.
    pub fn can_split(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => {
                first.rank() == second.rank()
                    || (first.rank().is_ten_valued() && second.rank().is_ten_valued())
            }
            _ => false,
        }
    }

    /// Builds two new hands, one per original card in order, each completed
    /// with a fresh draw. `self` is left as it was.
    pub fn split<S: CardSource + ?Sized>(&self, source: &mut S) -> Result<[Hand; 2]> {
        match self.cards.as_slice() {
            [first, second] if self.can_split() => {
                debug!("splitting {first} and {second}");
                let left = Hand::from_split(*first, source);
                let right = Hand::from_split(*second, source);
                Ok([left, right])
            }
            _ => Err(Error::state(SPLIT_NOT_ALLOWED)),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    pub fn aces(&self) -> u8 {
        self.aces
    }

    /// At least one ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.aces_high && self.aces > 0
    }

    pub fn is_terminal(&self) -> bool {
        self.state != HandState::Playing
    }

    fn add(&mut self, card: Card) {
        self.cards.push(card);
        if card.rank() == Rank::Ace {
            self.aces += 1;
            self.value += if self.aces_high { ACE_HIGH } else { ACE_LOW };
        } else {
            self.value += card.rank().blackjack_value();
        }

        while self.value > BLACKJACK && self.aces_high && self.aces > 0 {
            self.aces_high = false;
            self.value -= self.aces * (ACE_HIGH - ACE_LOW);
        }

        self.state = if self.value == BLACKJACK {
            if self.cards.len() == 2 {
                HandState::Blackjack
            } else {
                HandState::Staying
            }
        } else if self.value > BLACKJACK {
            HandState::Busted
        } else {
            HandState::Playing
        };
        trace!("{card} -> {} {}", self.value, self.state);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " ({}, {})", self.value, self.state)
    }
}
