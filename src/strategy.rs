//! Basic-strategy advisor for hit/stand decisions.

use crate::card::Card;
use crate::hand::{is_soft, score};

/// A basic-strategy recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    /// Draw another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// No recommendation: the dealer's up-card is not known.
    Unknown,
}

/// Recommends hitting or standing for `player_cards` against the dealer's
/// up-card.
///
/// Returns [`Advice::Unknown`] when no up-card is given. Soft and hard totals
/// follow separate tables; the advisor never randomizes.
///
/// ```
/// use bjtable::{Advice, Card, Rank, Suit, advise};
///
/// let soft_18 = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Seven),
/// ];
/// let nine = Card::new(Suit::Clubs, Rank::Nine);
/// let six = Card::new(Suit::Clubs, Rank::Six);
///
/// assert_eq!(advise(&soft_18, Some(&nine)), Advice::Hit);
/// assert_eq!(advise(&soft_18, Some(&six)), Advice::Stand);
/// ```
#[must_use]
pub fn advise(player_cards: &[Card], dealer_up_card: Option<&Card>) -> Advice {
    let Some(up_card) = dealer_up_card else {
        return Advice::Unknown;
    };

    let player_value = score(player_cards);
    let dealer_value = up_card.value();

    if is_soft(player_cards) {
        match player_value {
            19.. => Advice::Stand,
            18 if (2..=8).contains(&dealer_value) => Advice::Stand,
            _ => Advice::Hit,
        }
    } else {
        match player_value {
            17.. => Advice::Stand,
            13..=16 if (2..=6).contains(&dealer_value) => Advice::Stand,
            12 if (4..=6).contains(&dealer_value) => Advice::Stand,
            _ => Advice::Hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> alloc::vec::Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Hearts, r)).collect()
    }

    fn up(rank: Rank) -> Card {
        Card::new(Suit::Clubs, rank)
    }

    #[test]
    fn unknown_without_up_card() {
        assert_eq!(advise(&hand(&[Rank::Ten, Rank::Six]), None), Advice::Unknown);
    }

    #[test]
    fn soft_totals() {
        let soft_19 = hand(&[Rank::Ace, Rank::Eight]);
        let soft_18 = hand(&[Rank::Ace, Rank::Seven]);
        let soft_17 = hand(&[Rank::Ace, Rank::Six]);

        assert_eq!(advise(&soft_19, Some(&up(Rank::Ten))), Advice::Stand);
        assert_eq!(advise(&soft_18, Some(&up(Rank::Two))), Advice::Stand);
        assert_eq!(advise(&soft_18, Some(&up(Rank::Eight))), Advice::Stand);
        assert_eq!(advise(&soft_18, Some(&up(Rank::Nine))), Advice::Hit);
        assert_eq!(advise(&soft_18, Some(&up(Rank::King))), Advice::Hit);
        assert_eq!(advise(&soft_18, Some(&up(Rank::Ace))), Advice::Hit);
        assert_eq!(advise(&soft_17, Some(&up(Rank::Six))), Advice::Hit);
    }

    #[test]
    fn hard_totals() {
        let hard_17 = hand(&[Rank::Ten, Rank::Seven]);
        let hard_16 = hand(&[Rank::Ten, Rank::Six]);
        let hard_13 = hand(&[Rank::Ten, Rank::Three]);
        let hard_12 = hand(&[Rank::Ten, Rank::Two]);
        let hard_11 = hand(&[Rank::Six, Rank::Five]);

        assert_eq!(advise(&hard_17, Some(&up(Rank::Ace))), Advice::Stand);
        assert_eq!(advise(&hard_16, Some(&up(Rank::Six))), Advice::Stand);
        assert_eq!(advise(&hard_16, Some(&up(Rank::Seven))), Advice::Hit);
        assert_eq!(advise(&hard_13, Some(&up(Rank::Two))), Advice::Stand);
        assert_eq!(advise(&hard_12, Some(&up(Rank::Three))), Advice::Hit);
        assert_eq!(advise(&hard_12, Some(&up(Rank::Four))), Advice::Stand);
        assert_eq!(advise(&hard_12, Some(&up(Rank::Six))), Advice::Stand);
        assert_eq!(advise(&hard_12, Some(&up(Rank::Seven))), Advice::Hit);
        assert_eq!(advise(&hard_11, Some(&up(Rank::Six))), Advice::Hit);
    }

    #[test]
    fn hard_after_aces_downgrade() {
        // A + 6 + 9 = 16 with the ace at 1.
        let hard_16 = hand(&[Rank::Ace, Rank::Six, Rank::Nine]);
        assert_eq!(advise(&hard_16, Some(&up(Rank::Five))), Advice::Stand);
        assert_eq!(advise(&hard_16, Some(&up(Rank::Ten))), Advice::Hit);
    }
}
