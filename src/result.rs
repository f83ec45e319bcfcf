//! Round outcome and settlement records.

use core::fmt;

use crate::money::Money;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. The bet is lost.
    PlayerBust,
    /// Dealer went over 21. Pays 2× the bet.
    DealerBust,
    /// Two-card 21. Pays 2.5× the bet.
    Blackjack,
    /// Player beat the dealer. Pays 2× the bet.
    Win,
    /// Dealer beat the player. The bet is lost.
    Lose,
    /// Equal totals. The bet is returned.
    Push,
}

impl Outcome {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player Bust!",
            Self::DealerBust => "Dealer Bust! You Win!",
            Self::Blackjack => "Blackjack! You Win!",
            Self::Win => "You Win!",
            Self::Lose => "You Lose!",
            Self::Push => "Push!",
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::Blackjack | Self::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Settlement of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The committed bet.
    pub bet: u64,
    /// Amount credited back to the wallet, stake included.
    pub payout: Money,
    /// The player's final score.
    pub player_score: u16,
    /// The dealer's final score.
    pub dealer_score: u16,
}
