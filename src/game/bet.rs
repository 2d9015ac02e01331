use crate::error::{BetError, DealError};
use crate::result::RoundOutcome;

use super::{BET_UNIT, BettingStatus, Game, RoundPhase};

impl Game {
    /// Reports whether another round can be played.
    ///
    /// When cash has fallen below one bet unit and no pot is carried over,
    /// the game is over: the outcome is set to [`RoundOutcome::Broke`] and
    /// [`BettingStatus::Broke`] is returned without prompting for a bet.
    pub fn betting_status(&mut self) -> BettingStatus {
        if self.cash < BET_UNIT && self.pot == 0 {
            log::debug!("out of funds: cash={} pot={}", self.cash, self.pot);
            self.outcome = RoundOutcome::Broke;
            return BettingStatus::Broke;
        }

        BettingStatus::Open {
            cash: self.cash,
            pot: self.pot,
        }
    }

    /// Declines another round, ending the game.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress; the game can only be
    /// left during the betting phase.
    pub fn resign(&mut self) -> Result<(), BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::InvalidPhase);
        }

        self.outcome = RoundOutcome::Quit;

        Ok(())
    }

    /// Moves a bet from cash into the pot.
    ///
    /// A zero bet is accepted when a tie left money on the table; the pot
    /// must end up greater than zero either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase, the amount
    /// is not a multiple of [`BET_UNIT`], the amount exceeds the available
    /// cash, or the pot would stay empty.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::InvalidPhase);
        }
        if amount % BET_UNIT != 0 {
            return Err(BetError::NotMultipleOfUnit);
        }
        if amount > self.cash {
            return Err(BetError::InsufficientCash);
        }
        if amount + self.pot == 0 {
            return Err(BetError::EmptyPot);
        }

        self.cash -= amount;
        self.pot += amount;
        log::debug!("bet {amount} placed; cash={} pot={}", self.cash, self.pot);

        Ok(())
    }

    /// Deals the round's initial hands: two cards to the player, then two
    /// to the dealer, each drawn from a random deck position.
    ///
    /// Any cards still held from the previous round are returned to the
    /// deck first, so dealing always starts from the full 52-card set. If
    /// the player's opening score is exactly 21 the round ends immediately
    /// with [`RoundOutcome::PlayerBlackjack`]; otherwise play passes to the
    /// player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Betting {
            return Err(DealError::InvalidPhase);
        }

        while let Some(card) = self.player_hand.pop() {
            self.deck.add(card);
        }
        while let Some(card) = self.dealer_hand.pop() {
            self.deck.add(card);
        }

        for _ in 0..2 {
            let card = self.random_draw();
            self.player_hand.add(card);
        }
        for _ in 0..2 {
            let card = self.random_draw();
            self.dealer_hand.add(card);
        }

        let player_value = self.player_hand.value();
        log::debug!(
            "dealt; player={player_value} dealer={}",
            self.dealer_hand.value()
        );

        if player_value == 21 {
            self.outcome = RoundOutcome::PlayerBlackjack;
            self.phase = RoundPhase::RoundOver;
        } else {
            self.phase = RoundPhase::PlayerTurn;
        }

        Ok(())
    }
}
