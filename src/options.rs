//! Table configuration options.

use core::time::Duration;

/// Chip denominations always offered at the table.
pub const BASE_CHIPS: [u64; 6] = [10, 25, 50, 100, 500, 1000];

/// High-roller chips, each offered once the wallet reaches its value.
pub const HIGH_ROLLER_CHIPS: [u64; 4] =
    [100_000, 1_000_000, 1_000_000_000, 1_000_000_000_000];

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_wallet(500)
///     .with_dealer_draw_delay(Duration::from_millis(250));
/// assert_eq!(options.starting_wallet, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Wallet balance at the start of the session.
    pub starting_wallet: u64,
    /// A fresh deck replaces the current one when fewer cards than this
    /// remain at deal time.
    pub reshuffle_threshold: usize,
    /// Pause between dealer draws.
    pub dealer_draw_delay: Duration,
    /// How long a settled round stays on the table before it is cleared.
    pub result_display_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_wallet: 1000,
            reshuffle_threshold: 26,
            dealer_draw_delay: Duration::from_secs(1),
            result_display_delay: Duration::from_secs(3),
        }
    }
}

impl GameOptions {
    /// Sets the starting wallet balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_wallet(250);
    /// assert_eq!(options.starting_wallet, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_wallet(mut self, wallet: u64) -> Self {
        self.starting_wallet = wallet;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(0);
    /// assert_eq!(options.reshuffle_threshold, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the pause between dealer draws.
    #[must_use]
    pub const fn with_dealer_draw_delay(mut self, delay: Duration) -> Self {
        self.dealer_draw_delay = delay;
        self
    }

    /// Sets how long a settled round stays on the table.
    #[must_use]
    pub const fn with_result_display_delay(mut self, delay: Duration) -> Self {
        self.result_display_delay = delay;
        self
    }
}
