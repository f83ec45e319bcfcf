//! A paced table session on the Tokio runtime.
//!
//! [`Game`] only moves when asked. A [`Session`] wraps it for an interactive
//! front end: after the player stands it plays the dealer out one card per
//! `dealer_draw_delay`, and it clears every settled round after
//! `result_display_delay`. At most one timed task is pending at a time and
//! the session owns its handle, so tearing the session down stops the table
//! where it is.

use alloc::string::String;
use alloc::sync::Arc;
use core::future::Future;

use tokio::task::JoinHandle;
use tokio::time;

use crate::card::Card;
use crate::coach::Coach;
use crate::error::{ActionError, BetError, DealError};
use crate::game::{DealerStep, Game, GamePhase, TableView};
use crate::strategy::Advice;
use crate::sync::Mutex;

/// An interactive table session driving the timed transitions of a [`Game`].
///
/// Action methods spawn Tokio tasks and must be called from within a Tokio
/// runtime.
pub struct Session {
    game: Arc<Game>,
    coach: Coach,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl Session {
    /// Creates a session over `game` with no advice service.
    #[must_use]
    pub fn new(game: Arc<Game>) -> Self {
        Self::with_coach(game, Coach::default())
    }

    /// Creates a session over `game` backed by `coach`.
    #[must_use]
    pub const fn with_coach(game: Arc<Game>, coach: Coach) -> Self {
        Self {
            game,
            coach,
            timer: Mutex::new(None),
        }
    }

    /// Returns the underlying game.
    #[must_use]
    pub const fn game(&self) -> &Arc<Game> {
        &self.game
    }

    /// Places a chip. See [`Game::place_bet`].
    ///
    /// # Errors
    ///
    /// Returns the game's rejection unchanged.
    pub fn place_bet(&self, amount: u64) -> Result<(), BetError> {
        self.game.place_bet(amount)
    }

    /// Removes a chip. See [`Game::remove_bet`].
    ///
    /// # Errors
    ///
    /// Returns the game's rejection unchanged.
    pub fn remove_bet(&self, index: usize) -> Result<u64, BetError> {
        self.game.remove_bet(index)
    }

    /// Deals a round. A player natural settles at once and is cleared after
    /// the display delay.
    ///
    /// # Errors
    ///
    /// Returns the game's rejection unchanged.
    pub fn deal(&self) -> Result<(), DealError> {
        self.game.deal()?;
        self.schedule_reset_if_settled();
        Ok(())
    }

    /// Hits. A bust is cleared after the display delay.
    ///
    /// # Errors
    ///
    /// Returns the game's rejection unchanged.
    pub fn hit(&self) -> Result<Card, ActionError> {
        let card = self.game.hit()?;
        self.schedule_reset_if_settled();
        Ok(card)
    }

    /// Stands and starts the paced dealer play.
    ///
    /// # Errors
    ///
    /// Returns the game's rejection unchanged.
    pub fn stand(&self) -> Result<(), ActionError> {
        self.game.stand()?;
        self.schedule(play_dealer(Arc::clone(&self.game)));
        Ok(())
    }

    /// Returns a snapshot of the table.
    pub fn snapshot(&self) -> TableView {
        self.game.snapshot()
    }

    /// Returns the basic-strategy advice for the live hand.
    pub fn advice(&self) -> Advice {
        self.game.advice()
    }

    /// Asks the coach about the live hand.
    ///
    /// Returns `None` outside the player's turn. Service failures come back
    /// as fallback text.
    pub async fn coach_advice(&self) -> Option<String> {
        let view = self.game.snapshot();
        if view.phase != GamePhase::PlayerTurn {
            return None;
        }
        let up_card = *view.dealer.up_card()?;

        Some(self.coach.advice_text(&view.player, &up_card).await)
    }

    /// Returns whether a timed transition is pending.
    pub fn is_busy(&self) -> bool {
        self.timer
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancels any pending timed transition. The table stays as it is.
    pub fn shutdown(&self) {
        if let Some(handle) = self.timer.lock().take() {
            handle.abort();
            log::debug!("session shut down, pending transition cancelled");
        }
    }

    fn schedule_reset_if_settled(&self) {
        if self.game.phase() == GamePhase::Result {
            self.schedule(clear_after_display(Arc::clone(&self.game)));
        }
    }

    fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut timer = self.timer.lock();
        if let Some(previous) = timer.take() {
            previous.abort();
        }
        *timer = Some(tokio::spawn(task));
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("busy", &self.is_busy())
            .finish_non_exhaustive()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn play_dealer(game: Arc<Game>) {
    let delay = game.options().dealer_draw_delay;

    loop {
        time::sleep(delay).await;
        match game.dealer_step() {
            Ok(DealerStep::Drew(_)) => {}
            Ok(DealerStep::Finished(_)) => break,
            Err(err) => {
                log::warn!("dealer play stopped: {err}");
                return;
            }
        }
    }

    clear_after_display(game).await;
}

async fn clear_after_display(game: Arc<Game>) {
    time::sleep(game.options().result_display_delay).await;
    if let Err(err) = game.clear_round() {
        log::warn!("could not clear round: {err}");
    }
}
