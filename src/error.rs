//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round phase for betting.
    #[error("invalid round phase for betting")]
    InvalidPhase,
    /// Bet is not a multiple of the table unit.
    #[error("bets must be placed in multiples of 10")]
    NotMultipleOfUnit,
    /// Bet exceeds the available cash.
    #[error("you may only bet the cash that you have")]
    InsufficientCash,
    /// Zero bet onto an empty pot; nothing would be at stake.
    #[error("the pot must be greater than zero")]
    EmptyPot,
}

/// Errors that can occur during the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidPhase,
}

/// Errors that can occur during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidPhase,
}

/// Errors that can occur during dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round phase for dealer play.
    #[error("invalid round phase for dealer play")]
    InvalidPhase,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid round phase for settlement.
    #[error("invalid round phase for settlement")]
    InvalidPhase,
    /// The round has no outcome to settle.
    #[error("the round has no outcome to settle")]
    NoOutcome,
}
