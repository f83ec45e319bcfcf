use crate::card::Card;
use crate::error::DealerError;
use crate::money::Money;
use crate::result::{Outcome, RoundResult};

use super::state::{Phase, Round};
use super::{Game, draw};

/// The dealer draws while below this total and stands on anything at or
/// above it, soft totals included.
pub const DEALER_STANDS_ON: u16 = 17;

/// What a single dealer step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and may draw again.
    Drew(Card),
    /// The dealer stood (or busted) and the round is settled.
    Finished(RoundResult),
}

/// Decides the outcome of a round and the amount owed back to the wallet.
///
/// Checks run in a fixed order: player bust, dealer bust, natural, then the
/// comparison of totals. A natural is paid even against a dealer natural.
pub(super) fn settle(round: &Round) -> RoundResult {
    let bet = round.bet;
    let player_score = round.player.score();
    let dealer_score = round.dealer.score();

    let outcome = if round.player.is_bust() {
        Outcome::PlayerBust
    } else if round.dealer.is_bust() {
        Outcome::DealerBust
    } else if round.player.is_blackjack() {
        Outcome::Blackjack
    } else if player_score > dealer_score {
        Outcome::Win
    } else if player_score < dealer_score {
        Outcome::Lose
    } else {
        Outcome::Push
    };

    let payout = match outcome {
        Outcome::PlayerBust | Outcome::Lose => Money::ZERO,
        Outcome::Push => Money::from_chips(bet),
        Outcome::DealerBust | Outcome::Win => Money::from_chips(bet.saturating_mul(2)),
        // 2.5x, counted in half-chips.
        Outcome::Blackjack => Money::from_halves(bet.saturating_mul(5)),
    };

    RoundResult {
        outcome,
        bet,
        payout,
        player_score,
        dealer_score,
    }
}

impl Game {
    /// Advances the dealer by one step.
    ///
    /// Below 17 the dealer draws one card. At 17 or more, bust included, the
    /// round is settled and the wallet credited. Callers pace the steps to
    /// animate the draw.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    ///
    /// # Panics
    ///
    /// Panics if the deck is exhausted, which the reshuffle threshold rules
    /// out.
    pub fn dealer_step(&self) -> Result<DealerStep, DealerError> {
        let mut guard = self.table.lock();
        let table = &mut *guard;
        let Phase::DealerTurn(round) = &mut table.phase else {
            return Err(DealerError::NotDealerTurn);
        };

        if round.dealer.score() < DEALER_STANDS_ON {
            let card = draw(&mut table.deck);
            round.dealer.add_card(card);
            log::debug!("dealer draws {:?}, score {}", card.rank(), round.dealer.score());
            return Ok(DealerStep::Drew(card));
        }

        table.finish();
        match &table.phase {
            Phase::Result { result, .. } => Ok(DealerStep::Finished(*result)),
            _ => Err(DealerError::NotDealerTurn),
        }
    }

    /// Plays the dealer's hand to the end without pausing.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    ///
    /// # Panics
    ///
    /// Panics if the deck is exhausted, which the reshuffle threshold rules
    /// out.
    pub fn dealer_play(&self) -> Result<RoundResult, DealerError> {
        loop {
            if let DealerStep::Finished(result) = self.dealer_step()? {
                return Ok(result);
            }
        }
    }
}
