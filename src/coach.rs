//! Free-text advice from an external coaching service.
//!
//! The service is optional and fallible. Whatever happens on its side, the
//! player gets a message back and the game state is never touched.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use async_trait::async_trait;

use crate::card::Card;
use crate::error::CoachError;
use crate::hand::Hand;

/// Shown when no advice service is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "API Key is not configured. The AI Coach is unavailable.";

/// Shown when the advice service fails.
pub const UNAVAILABLE_MESSAGE: &str =
    "Couldn't get advice from the coach right now. Please try again.";

/// A service that comments on a hand in free text.
#[async_trait]
pub trait AdviceService: Send + Sync {
    /// Requests advice for `player` against the dealer's `up_card`.
    async fn request_advice(&self, player: &Hand, up_card: &Card) -> Result<String, CoachError>;
}

/// The default service: always reports that it is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCoach;

#[async_trait]
impl AdviceService for NoCoach {
    async fn request_advice(&self, _player: &Hand, _up_card: &Card) -> Result<String, CoachError> {
        Err(CoachError::NotConfigured)
    }
}

/// Renders the question put to a language-model coach.
///
/// ```
/// use bjtable::{Card, Hand, Rank, Suit, coach::advice_prompt};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
/// hand.add_card(Card::new(Suit::Hearts, Rank::Seven));
/// let prompt = advice_prompt(&hand, &Card::new(Suit::Clubs, Rank::King));
///
/// assert!(prompt.contains("Ace and 7 (total value: 18)"));
/// assert!(prompt.contains("showing a King"));
/// ```
#[must_use]
pub fn advice_prompt(player: &Hand, up_card: &Card) -> String {
    let ranks: Vec<&str> = player.cards().iter().map(|c| c.rank().name()).collect();

    format!(
        "You are a blackjack strategy expert providing concise advice based on standard basic \
         strategy. The player has a hand of {} (total value: {}). The dealer is showing a {}. \
         Should the player hit or stand? Provide a direct recommendation (e.g., \"You should \
         HIT.\") followed by a very brief one-sentence explanation.",
        ranks.join(" and "),
        player.score(),
        up_card.rank().name()
    )
}

/// Wraps an [`AdviceService`] and turns its failures into fallback text.
#[derive(Clone)]
pub struct Coach {
    service: Arc<dyn AdviceService>,
}

impl Coach {
    /// Creates a coach backed by `service`.
    #[must_use]
    pub fn new(service: Arc<dyn AdviceService>) -> Self {
        Self { service }
    }

    /// Asks the service for advice, falling back to a fixed message.
    pub async fn advice_text(&self, player: &Hand, up_card: &Card) -> String {
        match self.service.request_advice(player, up_card).await {
            Ok(text) => text,
            Err(CoachError::NotConfigured) => {
                log::warn!("advice service not configured");
                NOT_CONFIGURED_MESSAGE.to_string()
            }
            Err(err) => {
                log::warn!("advice service failed: {err}");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}

impl Default for Coach {
    fn default() -> Self {
        Self::new(Arc::new(NoCoach))
    }
}

impl core::fmt::Debug for Coach {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coach").finish_non_exhaustive()
    }
}
