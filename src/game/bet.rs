use crate::error::{BetError, DealError};
use crate::hand::{BLACKJACK, DealerHand, Hand};
use crate::money::Money;

use super::state::{Phase, Round};
use super::{Game, draw};

impl Game {
    /// Places a chip on the betting spot, debiting the wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the chip is zero, or
    /// the wallet holds less than the chip value.
    pub fn place_bet(&self, amount: u64) -> Result<(), BetError> {
        let mut guard = self.table.lock();
        let table = &mut *guard;
        let Phase::Betting { chips } = &mut table.phase else {
            return Err(BetError::InvalidState);
        };

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let Some(rest) = table.wallet.checked_sub(Money::from_chips(amount)) else {
            return Err(BetError::InsufficientFunds);
        };

        table.wallet = rest;
        chips.push(amount);

        Ok(())
    }

    /// Takes the chip at `index` back off the betting spot, crediting the
    /// wallet. Returns the chip value.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets or there is no chip at
    /// `index`.
    pub fn remove_bet(&self, index: usize) -> Result<u64, BetError> {
        let mut guard = self.table.lock();
        let table = &mut *guard;
        let Phase::Betting { chips } = &mut table.phase else {
            return Err(BetError::InvalidState);
        };

        if index >= chips.len() {
            return Err(BetError::ChipNotFound);
        }

        let amount = chips.remove(index);
        table.wallet = table.wallet.saturating_add(Money::from_chips(amount));

        Ok(amount)
    }

    /// Commits the placed chips and deals the opening cards.
    ///
    /// A deck running below the reshuffle threshold is replaced first. Four
    /// cards go out alternately, player first, so the player holds the first
    /// and third and the dealer the second and fourth. A player natural ends
    /// the round at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets or no chips have been
    /// placed.
    ///
    /// # Panics
    ///
    /// Panics if the deck runs out mid-deal, which the reshuffle threshold
    /// rules out unless it has been configured below four.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut guard = self.table.lock();
        let table = &mut *guard;
        let Phase::Betting { chips } = &table.phase else {
            return Err(DealError::InvalidState);
        };

        let bet: u64 = chips.iter().sum();
        if bet == 0 {
            return Err(DealError::NoBetPlaced);
        }

        self.reshuffle_if_needed(table);

        let mut player = Hand::new();
        let mut dealer = DealerHand::new();
        player.add_card(draw(&mut table.deck));
        dealer.add_card(draw(&mut table.deck));
        player.add_card(draw(&mut table.deck));
        dealer.add_card(draw(&mut table.deck));

        log::debug!(
            "dealt: bet {bet}, player {}, dealer shows {:?}",
            player.score(),
            dealer.up_card().map(|card| card.rank())
        );

        let natural = player.score() == BLACKJACK;
        table.phase = Phase::PlayerTurn(Round {
            bet,
            player,
            dealer,
        });

        if natural {
            table.finish();
        }

        Ok(())
    }
}
