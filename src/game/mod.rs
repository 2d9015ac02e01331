//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::hand::CardList;
use crate::result::RoundOutcome;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{BettingStatus, RoundPhase};

/// Cash the player starts with.
pub const STARTING_CASH: u32 = 1000;

/// Bets are placed in multiples of this amount.
pub const BET_UNIT: u32 = 10;

/// A blackjack game engine that manages the deck, hands, and balances.
///
/// The game owns every card: the multiset union of `deck`, `player_hand`,
/// and `dealer_hand` is always the canonical 52-card set. Cards move
/// between the three lists and are never duplicated.
pub struct Game {
    /// Undealt cards.
    pub deck: CardList,
    /// The player's hand.
    pub player_hand: CardList,
    /// The dealer's hand.
    pub dealer_hand: CardList,
    /// Cash balance.
    pub cash: u32,
    /// Cash at stake for the current round.
    pub pot: u32,
    /// Outcome of the round in progress.
    pub outcome: RoundOutcome,
    /// Current round phase.
    pub phase: RoundPhase,
    /// Random number generator for draw positions.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck starts in rank-within-suit order; it is never shuffled.
    /// Every deal instead draws from a uniformly random deck position,
    /// which is equivalent to drawing from a shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DECK_SIZE, Game};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Self::fresh_deck(),
            player_hand: CardList::new(),
            dealer_hand: CardList::new(),
            cash: STARTING_CASH,
            pot: 0,
            outcome: RoundOutcome::Undecided,
            phase: RoundPhase::Betting,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds the canonical 52-card deck.
    fn fresh_deck() -> CardList {
        let mut deck = CardList::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                deck.add(Card::new(suit, rank));
            }
        }

        deck
    }

    /// Removes a card from a uniformly random deck position.
    ///
    /// The deck is non-empty whenever the round flow can reach a draw: a
    /// hand busts long before the deck runs dry.
    pub(crate) fn random_draw(&mut self) -> Card {
        let position = self.rng.random_range(0..self.deck.len());
        log::trace!("drawing position {position} of {}", self.deck.len());
        self.deck.draw(position)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
