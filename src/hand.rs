//! Scoring and the player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Best total a hand can reach without busting.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u64 = 0;
    let mut aces: u64 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u64::from(card.value());
    }

    while value > u64::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= u64::from(BLACKJACK);
    // Anything past u16::MAX is far over 21, so clamping keeps it a bust.
    (u16::try_from(value).unwrap_or(u16::MAX), is_soft)
}

/// Scores a set of cards.
///
/// Every ace starts at 11 and is downgraded to 1, one at a time, while the
/// total exceeds 21. The result may still exceed 21 (a bust).
///
/// ```
/// use bjtable::{Card, Rank, Suit, score};
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
/// ];
/// assert_eq!(score(&cards), 12);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether an ace is still counted as 11 in the scored total.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    score: u16,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            score: 0,
        }
    }

    /// Adds a card to the hand and rescores it.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.score = score(&self.cards);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cached score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score > BLACKJACK
    }

    /// Returns whether the hand is a natural: 21 with exactly two cards.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The first card dealt to the dealer is the hole card and stays face down
/// until the player stands; the second is the up-card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand and rescores it.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in deal order, hole card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the score a spectator can see: the up-card alone while the
    /// hole card is down.
    #[must_use]
    pub fn visible_score(&self) -> u16 {
        if self.hole_revealed {
            self.score()
        } else {
            self.up_card().map_or(0, |card| u16::from(card.value()))
        }
    }

    /// Returns the full cached score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.hand.score()
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::deck::Deck;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Spades, r)).collect()
    }

    #[test]
    fn aces_downgrade_one_at_a_time() {
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 12);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::King])), 21);
        assert_eq!(
            score(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight])),
            21
        );
        assert_eq!(score(&cards(&[Rank::King, Rank::Queen, Rank::Two])), 22);
    }

    #[test]
    fn full_deck_scores_without_clamping() {
        let deck: Vec<Card> = Deck::new().iter().copied().collect();
        assert_eq!(score(&deck), 340);
        assert!(!is_soft(&deck));

        let aces = vec![Card::new(Suit::Spades, Rank::Ace); 25];
        assert_eq!(score(&aces), 25);

        let huge = vec![Card::new(Suit::Spades, Rank::King); 7000];
        assert_eq!(score(&huge), u16::MAX);
    }

    #[test]
    fn softness_tracks_the_eleven() {
        assert!(is_soft(&cards(&[Rank::Ace, Rank::Seven])));
        assert!(!is_soft(&cards(&[Rank::Ace, Rank::Seven, Rank::Nine])));
        assert!(is_soft(&cards(&[Rank::Ace, Rank::Ace, Rank::Six])));
        assert!(!is_soft(&cards(&[Rank::Ten, Rank::Seven])));
    }

    #[test]
    fn hand_rescores_after_each_card() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(hand.score(), 11);
        hand.add_card(Card::new(Suit::Clubs, Rank::King));
        assert_eq!(hand.score(), 21);
        assert!(hand.is_blackjack());
        hand.add_card(Card::new(Suit::Clubs, Rank::Five));
        assert_eq!(hand.score(), 16);
        assert!(!hand.is_blackjack());
        assert!(!hand.is_bust());
    }

    #[test]
    fn dealer_hides_hole_card_score() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, Rank::King));
        dealer.add_card(Card::new(Suit::Clubs, Rank::Six));

        assert_eq!(dealer.up_card().map(Card::rank), Some(Rank::Six));
        assert_eq!(dealer.visible_score(), 6);

        dealer.reveal_hole();
        assert_eq!(dealer.visible_score(), 16);
    }
}
