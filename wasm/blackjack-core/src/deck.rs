use std::collections::{HashSet, VecDeque};

use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::card::Card;
use crate::error::{Error, Result};

/// Anything a hand can pull its next card from.
pub trait CardSource {
    fn draw(&mut self) -> Card;
}

/// A single 52-card deck drawn without replacement. Once the last card is
/// drawn the deck refills itself, so a draw never fails on an empty deck.
pub struct Deck<R = SmallRng> {
    cards: Vec<Card>,
    stacked: VecDeque<Card>,
    rng: R,
}

impl Deck<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Deck::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Deck::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> Deck<R> {
    pub fn new(rng: R) -> Self {
        Deck {
            cards: Card::all().collect(),
            stacked: VecDeque::new(),
            rng,
        }
    }

    /// Puts every card back, dropping anything stacked.
    pub fn reshuffle(&mut self) {
        self.cards.clear();
        self.cards.extend(Card::all());
        self.stacked.clear();
        debug!("deck reshuffled, {} cards", self.cards.len());
    }

    pub fn draw(&mut self) -> Card {
        let card = match self.stacked.pop_front() {
            Some(card) => card,
            None => {
                let index = self.rng.gen_range(0..self.cards.len());
                self.cards.swap_remove(index)
            }
        };
        if self.remaining_cards() == 0 {
            self.reshuffle();
        }
        card
    }

    /// Draws one card at a time, so a reshuffle may happen part way through.
    pub fn draw_many(&mut self, amount: i64) -> Result<Vec<Card>> {
        check_amount(amount)?;
        Ok((0..amount).map(|_| self.draw()).collect())
    }

    /// Moves `cards` out of the pool so the next draws return them in order,
    /// ahead of anything stacked earlier. Nothing changes on error.
    pub fn stack(&mut self, cards: &[Card]) -> Result<()> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in cards {
            if !self.cards.contains(card) || !seen.insert(*card) {
                return Err(Error::argument(format!("{card} is not in the deck")));
            }
        }
        self.cards.retain(|card| !seen.contains(card));
        for card in cards.iter().rev() {
            self.stacked.push_front(*card);
        }
        Ok(())
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len() + self.stacked.len()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card) || self.stacked.contains(card)
    }
}

pub(crate) fn check_amount(amount: i64) -> Result<()> {
    if amount == 0 {
        return Err(Error::argument("Cannot draw zero cards!"));
    }
    if amount < 0 {
        return Err(Error::argument("Cannot draw a negative number of cards!"));
    }
    Ok(())
}

impl<R: Rng> CardSource for Deck<R> {
    fn draw(&mut self) -> Card {
        Deck::draw(self)
    }
}
