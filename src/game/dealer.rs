use crate::card::Card;
use crate::error::{SettleError, ShowdownError};
use crate::result::{RoundOutcome, Settlement};

use super::{Game, RoundPhase};

fn blackjack_payout(pot: u32) -> u32 {
    (f64::from(pot) * 2.5).floor() as u32
}

impl Game {
    /// Dealer plays out their hand according to the house rule.
    ///
    /// The dealer draws one card at a time while their score is below 17
    /// and not above the player's score; a dealer already beating the
    /// player has no reason to keep drawing. The loop is bounded by the
    /// deck: every draw raises the dealer's total, so it terminates well
    /// within the 52-card set.
    ///
    /// After the loop the round resolves: a dealer bust or a lower final
    /// score is a player win, a higher score is a loss, and equal scores
    /// tie. Returns the cards the dealer drew, for the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn phase.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(ShowdownError::InvalidPhase);
        }

        let player_value = self.player_hand.value();
        let mut drawn_cards = Vec::new();

        loop {
            let dealer_value = self.dealer_hand.value();
            if dealer_value >= 17 || dealer_value > player_value {
                break;
            }

            let card = self.random_draw();
            log::debug!("dealer draws {card}");
            self.dealer_hand.add(card);
            drawn_cards.push(card);
        }

        let dealer_value = self.dealer_hand.value();
        self.outcome = if dealer_value > 21 {
            RoundOutcome::PlayerWin
        } else if dealer_value > player_value {
            RoundOutcome::PlayerLose
        } else if dealer_value == player_value {
            RoundOutcome::Tie
        } else {
            RoundOutcome::PlayerWin
        };
        self.phase = RoundPhase::RoundOver;
        log::debug!("dealer stops at {dealer_value} vs player {player_value}: {:?}", self.outcome);

        Ok(drawn_cards)
    }

    /// Settles the round's outcome against the pot.
    ///
    /// Blackjack pays 2.5x the pot (floored to whole dollars), a win pays
    /// 2x, a loss forfeits the pot, and a tie leaves the pot on the table
    /// for the next round. The outcome is consumed: the game returns to
    /// the betting phase with the outcome reset to
    /// [`RoundOutcome::Undecided`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over, or if the outcome is not
    /// one a round can end with.
    pub fn settle(&mut self) -> Result<Settlement, SettleError> {
        if self.phase != RoundPhase::RoundOver {
            return Err(SettleError::InvalidPhase);
        }

        let outcome = self.outcome;
        let winnings = match outcome {
            RoundOutcome::PlayerBlackjack => blackjack_payout(self.pot),
            RoundOutcome::PlayerWin => self.pot.saturating_mul(2),
            RoundOutcome::PlayerLose | RoundOutcome::Tie => 0,
            RoundOutcome::Broke | RoundOutcome::Quit | RoundOutcome::Undecided => {
                return Err(SettleError::NoOutcome);
            }
        };

        self.cash = self.cash.saturating_add(winnings);
        if outcome != RoundOutcome::Tie {
            self.pot = 0;
        }

        self.outcome = RoundOutcome::Undecided;
        self.phase = RoundPhase::Betting;
        log::debug!(
            "settled {outcome:?}: winnings={winnings} cash={} pot={}",
            self.cash,
            self.pot
        );

        Ok(Settlement {
            outcome,
            winnings,
            cash: self.cash,
            pot: self.pot,
        })
    }
}
