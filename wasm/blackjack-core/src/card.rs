use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    /// Counts high or low depending on the game.
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ordering strength, 2 through 14 with the ace high.
    pub const fn strength(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    /// Points this rank adds to a blackjack total, with the ace counted high.
    pub const fn blackjack_value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other.strength(),
        }
    }

    pub const fn is_ten_valued(self) -> bool {
        matches!(self, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rank = match s.trim().to_ascii_uppercase().as_str() {
            "TWO" | "2" => Rank::Two,
            "THREE" | "3" => Rank::Three,
            "FOUR" | "4" => Rank::Four,
            "FIVE" | "5" => Rank::Five,
            "SIX" | "6" => Rank::Six,
            "SEVEN" | "7" => Rank::Seven,
            "EIGHT" | "8" => Rank::Eight,
            "NINE" | "9" => Rank::Nine,
            "TEN" | "10" | "T" => Rank::Ten,
            "JACK" | "J" => Rank::Jack,
            "QUEEN" | "Q" => Rank::Queen,
            "KING" | "K" => Rank::King,
            "ACE" | "A" => Rank::Ace,
            _ => return Err(Error::argument(format!("Unknown rank: {s}"))),
        };
        Ok(rank)
    }
}

/// Declaration order is the tie-break order: clubs lowest, spades highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let suit = match s.trim().to_ascii_uppercase().as_str() {
            "CLUBS" | "C" | "♣" => Suit::Clubs,
            "DIAMONDS" | "D" | "♦" => Suit::Diamonds,
            "HEARTS" | "H" | "♥" => Suit::Hearts,
            "SPADES" | "S" | "♠" => Suit::Spades,
            _ => return Err(Error::argument(format!("Unknown suit: {s}"))),
        };
        Ok(suit)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Battle {
    Win,
    Lose,
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Builds a card from parts that may be missing, rank checked first.
    pub fn make(rank: Option<Rank>, suit: Option<Suit>) -> Result<Self> {
        let rank = rank.ok_or_else(|| Error::argument("A card's rank cannot be null"))?;
        let suit = suit.ok_or_else(|| Error::argument("A card's suit cannot be null"))?;
        Ok(Card::new(rank, suit))
    }

    /// Samples a rank and a suit independently. Unlike [`crate::Deck::draw`]
    /// this never depletes anything, so repeats are possible.
    pub fn draw_random<R: Rng>(rng: &mut R) -> Self {
        let rank = Rank::ALL[rng.gen_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[rng.gen_range(0..Suit::ALL.len())];
        Card::new(rank, suit)
    }

    /// The 52 canonical cards, suit-major.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }

    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Battles with aces high.
    pub fn battle(&self, opponent: &Card) -> Battle {
        battle(self, opponent, true)
    }

    pub fn battle_with(&self, opponent: &Card, aces_high: bool) -> Battle {
        battle(self, opponent, aces_high)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Accepts the display form (`"JACK of HEARTS"`) or a short form (`"JH"`, `"10♠"`).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        if let [rank, of, suit] = words.as_slice() {
            if of.eq_ignore_ascii_case("of") {
                return Ok(Card::new(rank.parse()?, suit.parse()?));
            }
        }
        let unknown = || Error::argument(format!("Unknown card: {s}"));
        let (split, _) = trimmed.char_indices().last().ok_or_else(unknown)?;
        if split == 0 {
            return Err(unknown());
        }
        let (rank, suit) = trimmed.split_at(split);
        match (rank.parse::<Rank>(), suit.parse::<Suit>()) {
            (Ok(rank), Ok(suit)) => Ok(Card::new(rank, suit)),
            _ => Err(unknown()),
        }
    }
}

fn battle_strength(rank: Rank, aces_high: bool) -> u8 {
    match rank {
        Rank::Ace if !aces_high => 1,
        other => other.strength(),
    }
}

/// Resolves which card is stronger. Equal ranks fall back to the suit order;
/// only an exact duplicate ties.
pub fn battle(card: &Card, opponent: &Card, aces_high: bool) -> Battle {
    if card == opponent {
        return Battle::Tie;
    }
    let wins = if card.rank == opponent.rank {
        card.suit > opponent.suit
    } else {
        battle_strength(card.rank, aces_high) > battle_strength(opponent.rank, aces_high)
    };
    if wins {
        Battle::Win
    } else {
        Battle::Lose
    }
}
