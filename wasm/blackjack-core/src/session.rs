use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    card::{battle, Battle, Card},
    deck::{check_amount, Deck},
    error::{Error, Result},
    hand::{Hand, HandState},
};

fn default_amount() -> i64 {
    1
}

fn default_aces_high() -> bool {
    true
}

fn rng_for(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleInput {
    pub card: String,
    pub opponent: String,
    #[serde(default = "default_aces_high")]
    pub aces_high: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub outcome: Battle,
}

pub fn run_battle(input: BattleInput) -> Result<BattleResult> {
    let card: Card = input.card.parse()?;
    let opponent: Card = input.opponent.parse()?;
    Ok(BattleResult {
        outcome: battle(&card, &opponent, input.aces_high),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawInput {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_amount")]
    pub amount: i64,
    /// Sample each card independently instead of dealing from a deck.
    #[serde(default)]
    pub with_replacement: bool,
}

pub fn run_draw(input: DrawInput) -> Result<Vec<String>> {
    let cards = if input.with_replacement {
        check_amount(input.amount)?;
        let mut rng = rng_for(input.seed);
        (0..input.amount).map(|_| Card::draw_random(&mut rng)).collect()
    } else {
        Deck::new(rng_for(input.seed)).draw_many(input.amount)?
    };
    Ok(cards.iter().map(Card::to_string).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stay,
    Split,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SessionAction {
    pub action: Action,
    #[serde(default)]
    pub hand: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    #[serde(default)]
    pub seed: Option<u64>,
    /// Cards dealt first, in order, before the deck turns random.
    #[serde(default)]
    pub stacked: Vec<String>,
    #[serde(default)]
    pub actions: Vec<SessionAction>,
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandSnapshot {
    pub cards: Vec<String>,
    pub value: u8,
    pub state: HandState,
    pub soft: bool,
    pub can_split: bool,
}

impl From<&Hand> for HandSnapshot {
    fn from(hand: &Hand) -> Self {
        HandSnapshot {
            cards: hand.cards().iter().map(Card::to_string).collect(),
            value: hand.value(),
            state: hand.state(),
            soft: hand.is_soft(),
            can_split: hand.can_split(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub hands: Vec<HandSnapshot>,
    pub remaining: usize,
}

pub fn build_deck(seed: Option<u64>, stacked: &[String]) -> Result<Deck> {
    let mut deck = Deck::new(rng_for(seed));
    let cards = stacked
        .iter()
        .map(|card| card.parse())
        .collect::<Result<Vec<Card>>>()?;
    deck.stack(&cards)?;
    Ok(deck)
}

pub fn run(input: SessionInput) -> Result<SessionResult> {
    run_with_progress(input, |_current, _total| {})
}

/// Deals one hand and applies each action in order. A split replaces the
/// hand it names with its two children.
pub fn run_with_progress<F>(input: SessionInput, mut progress_cb: F) -> Result<SessionResult>
where
    F: FnMut(u32, u32),
{
    let mut deck = build_deck(input.seed, &input.stacked)?;
    let mut hands = vec![Hand::deal(&mut deck)];
    let total = input.actions.len() as u32;

    for (index, step) in input.actions.iter().enumerate() {
        let hand = hands
            .get_mut(step.hand)
            .ok_or_else(|| Error::argument(format!("No hand at index {}", step.hand)))?;
        match step.action {
            Action::Hit => hand.hit(&mut deck),
            Action::Stay => hand.stay(),
            Action::Split => {
                let [left, right] = hand.split(&mut deck)?;
                hands.splice(step.hand..=step.hand, [left, right]);
            }
        }
        progress_cb(index as u32 + 1, total);
    }

    Ok(SessionResult {
        hands: hands.iter().map(HandSnapshot::from).collect(),
        remaining: deck.remaining_cards(),
    })
}
