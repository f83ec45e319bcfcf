//! The 52-card deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards, dealt from the front.
///
/// A fresh deck holds one card per suit and rank. Cards only ever leave the
/// deck; running low is handled by replacing the whole deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck, suits outer and ranks inner.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Returns a shuffled copy of this deck, leaving `self` untouched.
    ///
    /// Fisher–Yates: walks from the last index down to 1 and swaps each
    /// position with a uniformly chosen index in `0..=i`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();

        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }

        Self::from_cards(cards)
    }

    /// Creates a fresh deck and shuffles it.
    #[must_use]
    pub fn fresh<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new().shuffled(rng)
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the remaining cards in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
