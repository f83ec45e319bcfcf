//! Game engine and state management.

use core::mem;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::{DealerHand, Hand};
use crate::money::Money;
use crate::options::{BASE_CHIPS, GameOptions, HIGH_ROLLER_CHIPS};
use crate::result::RoundResult;
use crate::strategy::{Advice, advise};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STANDS_ON, DealerStep};
pub use state::{GamePhase, TableView};

use state::Phase;

/// Everything that changes during play. Always mutated under one lock.
#[derive(Debug)]
struct Table {
    deck: Deck,
    wallet: Money,
    phase: Phase,
}

impl Table {
    /// Settles a round in progress and moves to the result phase.
    ///
    /// Any other phase is left as it was.
    fn finish(&mut self) {
        self.phase = match mem::take(&mut self.phase) {
            Phase::PlayerTurn(mut round) | Phase::DealerTurn(mut round) => {
                round.dealer.reveal_hole();
                let result = dealer::settle(&round);
                self.wallet = self.wallet.saturating_add(result.payout);
                log::info!(
                    "round settled: {:?}, bet {}, payout {}, wallet {}",
                    result.outcome,
                    result.bet,
                    result.payout,
                    self.wallet
                );
                Phase::Result { round, result }
            }
            other => other,
        };
    }
}

/// A single-player blackjack table.
///
/// The game owns the deck, the wallet and the round in progress. All state
/// sits behind one lock, so every action is applied whole or rejected with no
/// effect, and the game can be shared across threads and timer tasks.
pub struct Game {
    /// Table options.
    options: GameOptions,
    /// Deck, wallet and phase.
    table: Mutex<Table>,
    /// Random number generator for reshuffles.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is shuffled immediately and the table opens for betting.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), GamePhase::Betting);
    /// assert_eq!(game.wallet(), bjtable::Money::from_chips(1000));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::fresh(&mut rng);

        Self {
            table: Mutex::new(Table {
                deck,
                wallet: Money::from_chips(options.starting_wallet),
                phase: Phase::default(),
            }),
            options,
            rng: Mutex::new(rng),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Replaces the remaining deck. Cards are dealt front first.
    ///
    /// This is a replay and testing hook, not part of normal play. The deck
    /// is taken as given: nothing checks that it is a real 52-card deck, so
    /// duplicated or missing cards will be dealt as arranged. A deck shorter
    /// than the reshuffle threshold is replaced at the next deal.
    pub fn set_deck(&self, deck: Deck) {
        self.table.lock().deck = deck;
    }

    /// Returns whether the next deal will start from a fresh deck.
    pub fn needs_reshuffle(&self) -> bool {
        self.table.lock().deck.len() < self.options.reshuffle_threshold
    }

    fn reshuffle_if_needed(&self, table: &mut Table) {
        if table.deck.len() < self.options.reshuffle_threshold {
            log::debug!(
                "{} cards left, replacing deck with a fresh shuffle",
                table.deck.len()
            );
            table.deck = Deck::fresh(&mut *self.rng.lock());
        }
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.table.lock().deck.len()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.table.lock().phase.tag()
    }

    /// Returns the wallet balance.
    pub fn wallet(&self) -> Money {
        self.table.lock().wallet
    }

    /// Returns the chips placed so far, or the committed bet once dealt.
    pub fn bet(&self) -> u64 {
        match &self.table.lock().phase {
            Phase::Betting { chips } => chips.iter().sum(),
            phase => phase.round().map_or(0, |round| round.bet),
        }
    }

    /// Returns the chip denominations the player may choose from.
    ///
    /// High-roller chips unlock as the wallet grows; a chip larger than the
    /// wallet may still be listed and is rejected when placed.
    pub fn available_chips(&self) -> Vec<u64> {
        let wallet = self.wallet();
        BASE_CHIPS
            .iter()
            .chain(
                HIGH_ROLLER_CHIPS
                    .iter()
                    .filter(|&&chip| wallet >= Money::from_chips(chip)),
            )
            .copied()
            .collect()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.table
            .lock()
            .phase
            .round()
            .map(|round| round.player.clone())
            .unwrap_or_default()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.table
            .lock()
            .phase
            .round()
            .map(|round| round.dealer.clone())
            .unwrap_or_default()
    }

    /// Returns the settlement of the round on display, if any.
    pub fn last_result(&self) -> Option<RoundResult> {
        match &self.table.lock().phase {
            Phase::Result { result, .. } => Some(*result),
            _ => None,
        }
    }

    /// Returns the basic-strategy advice for the live hand.
    ///
    /// Only the player's cards and the dealer's up-card are consulted.
    /// Outside the player's turn the advice is [`Advice::Unknown`].
    pub fn advice(&self) -> Advice {
        match &self.table.lock().phase {
            Phase::PlayerTurn(round) => advise(round.player.cards(), round.dealer.up_card()),
            _ => Advice::Unknown,
        }
    }

    /// Returns a snapshot of the table.
    pub fn snapshot(&self) -> TableView {
        let table = self.table.lock();
        let (bet, chips): (u64, Vec<u64>) = match &table.phase {
            Phase::Betting { chips } => (chips.iter().sum(), chips.clone()),
            phase => (phase.round().map_or(0, |round| round.bet), Vec::new()),
        };
        let round = table.phase.round().cloned().unwrap_or_default();
        let result = match &table.phase {
            Phase::Result { result, .. } => Some(*result),
            _ => None,
        };

        TableView {
            wallet: table.wallet,
            bet,
            chips,
            player: round.player,
            dealer: round.dealer,
            phase: table.phase.tag(),
            message: result.map(|r| r.outcome.message()),
            result,
        }
    }

    /// Clears the settled round and reopens the table for betting.
    ///
    /// Hands are discarded, the bet returns to zero and the result message
    /// is cleared. The deck carries over to the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached its result.
    pub fn clear_round(&self) -> Result<(), RoundError> {
        let mut table = self.table.lock();
        if !matches!(table.phase, Phase::Result { .. }) {
            return Err(RoundError::NotFinished);
        }

        table.phase = Phase::default();
        drop(table);
        log::debug!("round cleared, table open for betting");

        Ok(())
    }
}

/// Draws the front card.
///
/// The reshuffle threshold guarantees enough cards for any round, so an empty
/// deck means the table is corrupt and play cannot continue.
fn draw(deck: &mut Deck) -> Card {
    deck.draw()
        .expect("deck exhausted: reshuffle threshold must cover a full round")
}

impl core::fmt::Debug for Game {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Game")
            .field("options", &self.options)
            .field("phase", &self.phase())
            .field("wallet", &self.wallet())
            .finish_non_exhaustive()
    }
}
