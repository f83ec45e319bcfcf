use core::mem;

use crate::card::Card;
use crate::error::ActionError;

use super::state::Phase;
use super::{Game, draw};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// A hand that goes over 21 settles the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    ///
    /// # Panics
    ///
    /// Panics if the deck is exhausted, which the reshuffle threshold rules
    /// out.
    pub fn hit(&self) -> Result<Card, ActionError> {
        let mut guard = self.table.lock();
        let table = &mut *guard;
        let Phase::PlayerTurn(round) = &mut table.phase else {
            return Err(ActionError::NotPlayerTurn);
        };

        let card = draw(&mut table.deck);
        round.player.add_card(card);
        log::debug!("player hits {:?}, score {}", card.rank(), round.player.score());

        if round.player.is_bust() {
            table.finish();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The hole card is turned over and the dealer takes the table.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<(), ActionError> {
        let mut table = self.table.lock();
        if !matches!(table.phase, Phase::PlayerTurn(_)) {
            return Err(ActionError::NotPlayerTurn);
        }

        table.phase = match mem::take(&mut table.phase) {
            Phase::PlayerTurn(mut round) => {
                round.dealer.reveal_hole();
                Phase::DealerTurn(round)
            }
            other => other,
        };

        Ok(())
    }
}
