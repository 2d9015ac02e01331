//! A terminal blackjack game engine with a pot-carry betting loop.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! betting, the deal, the player's hit/stand loop, the dealer's bounded
//! draw-to-17, and settlement of the shared pot. The terminal front-end
//! (prompting, rendering, pacing) lives in the binary and only ever talks
//! to the engine through the methods here.
//!
//! # Example
//!
//! ```
//! use twentyone::{BettingStatus, Game};
//!
//! let mut game = Game::new(42);
//! match game.betting_status() {
//!     BettingStatus::Open { cash, pot } => {
//!         assert_eq!(cash, 1000);
//!         assert_eq!(pot, 0);
//!     }
//!     BettingStatus::Broke => unreachable!(),
//! }
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, DealError, SettleError, ShowdownError};
pub use game::{BET_UNIT, BettingStatus, Game, RoundPhase, STARTING_CASH};
pub use hand::{CardList, hand_value};
pub use result::{RoundOutcome, Settlement};
