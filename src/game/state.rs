//! Game phase types.

use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};
use crate::money::Money;
use crate::result::RoundResult;

/// The phase of the table, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Accepting chips for the next round.
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is settled and on display.
    Result,
}

/// Cards and stake of a round in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Round {
    pub bet: u64,
    pub player: Hand,
    pub dealer: DealerHand,
}

/// Internal game state. Each variant carries only what is valid in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
    Betting { chips: Vec<u64> },
    PlayerTurn(Round),
    DealerTurn(Round),
    Result { round: Round, result: RoundResult },
}

impl Phase {
    pub(crate) const fn tag(&self) -> GamePhase {
        match self {
            Self::Betting { .. } => GamePhase::Betting,
            Self::PlayerTurn(_) => GamePhase::PlayerTurn,
            Self::DealerTurn(_) => GamePhase::DealerTurn,
            Self::Result { .. } => GamePhase::Result,
        }
    }

    pub(crate) const fn round(&self) -> Option<&Round> {
        match self {
            Self::Betting { .. } => None,
            Self::PlayerTurn(round) | Self::DealerTurn(round) | Self::Result { round, .. } => {
                Some(round)
            }
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Betting { chips: Vec::new() }
    }
}

/// A point-in-time copy of everything a table display needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Wallet balance, with placed chips already deducted.
    pub wallet: Money,
    /// Chips placed so far, or the committed bet once dealt.
    pub bet: u64,
    /// Individual chips on the betting spot (betting phase only).
    pub chips: Vec<u64>,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand. The hole card is face down until the player stands.
    pub dealer: DealerHand,
    /// The current phase.
    pub phase: GamePhase,
    /// Result message while a settled round is on display.
    pub message: Option<&'static str>,
    /// Settlement while a settled round is on display.
    pub result: Option<RoundResult>,
}
