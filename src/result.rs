//! Round outcome and settlement types.

/// Terminal result of a betting round, or of the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Cash is below the minimum bet and the pot is empty; the game is over.
    Broke,
    /// The player declined another round; the game is over.
    Quit,
    /// No outcome yet.
    Undecided,
    /// The player reached exactly 21; pays 2.5x the pot.
    PlayerBlackjack,
    /// The player beat the dealer; pays 2x the pot.
    PlayerWin,
    /// The player busted or the dealer finished higher; the pot is lost.
    PlayerLose,
    /// Equal totals; the pot stays on the table.
    Tie,
}

impl RoundOutcome {
    /// Returns whether this outcome ends the whole game rather than one round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Broke | Self::Quit)
    }
}

/// Cash movement produced by settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome that was settled.
    pub outcome: RoundOutcome,
    /// Amount paid into the player's cash.
    pub winnings: u32,
    /// Cash balance after settlement.
    pub cash: u32,
    /// Pot after settlement (non-zero only after a tie).
    pub pot: u32,
}
