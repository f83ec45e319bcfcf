//! Error types for game operations.
//!
//! Every rejection leaves the game untouched.

use thiserror::Error;

/// Errors that can occur while placing or removing chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Chips can only move during the betting phase.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Chip amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The wallet holds less than the chip value.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// No chip at the given index.
    #[error("no chip at that position")]
    ChipNotFound,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No chips have been placed.
    #[error("no bet has been placed")]
    NoBetPlaced,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit and stand are only legal on the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The dealer only draws on the dealer's turn.
    #[error("not the dealer's turn")]
    NotDealerTurn,
}

/// Errors that can occur when closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has not reached its result yet.
    #[error("round has not finished")]
    NotFinished,
}

/// Errors reported by an advisory text service.
#[cfg(feature = "session")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachError {
    /// The service has no credentials or endpoint configured.
    #[error("advice service is not configured")]
    NotConfigured,
    /// The service could not be reached or returned an error.
    #[error("advice service unavailable: {0}")]
    Unavailable(alloc::string::String),
}
