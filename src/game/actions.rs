use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundOutcome;

use super::{Game, RoundPhase};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// The hand is rescored after the draw: over 21 ends the round with
    /// [`RoundOutcome::PlayerLose`], exactly 21 ends it with
    /// [`RoundOutcome::PlayerBlackjack`], and anything lower leaves the
    /// player's turn open. Returns the drawn card for the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player turn phase.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        let card = self.random_draw();
        self.player_hand.add(card);

        let value = self.player_hand.value();
        log::debug!("player hits {card}; hand value {value}");

        if value > 21 {
            self.outcome = RoundOutcome::PlayerLose;
            self.phase = RoundPhase::RoundOver;
        } else if value == 21 {
            self.outcome = RoundOutcome::PlayerBlackjack;
            self.phase = RoundPhase::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Play passes to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player turn phase.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        log::debug!("player stands at {}", self.player_hand.value());
        self.phase = RoundPhase::DealerTurn;

        Ok(())
    }
}
