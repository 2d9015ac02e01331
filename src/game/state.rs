//! Round phase types.

/// Phase of the current betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Accepting the continue decision and a bet.
    Betting,
    /// Waiting for hit/stand decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the pot can be settled.
    RoundOver,
}

/// Funds check at the top of the betting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BettingStatus {
    /// A round can be played.
    Open {
        /// Current cash balance.
        cash: u32,
        /// Pot carried over from a tie.
        pot: u32,
    },
    /// Cash is below the minimum bet and the pot is empty.
    Broke,
}
