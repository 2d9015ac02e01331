//! The card-sequence engine and hand scoring.

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        2..=10 => rank,
        11..=13 => 10,
        _ => 1,
    }
}

/// Computes the blackjack value of a sequence of cards.
///
/// Aces count 1 on the first pass; afterwards each ace is promoted from 1
/// to 10 (adding 9) while the running total is still below 13. Promoting
/// past that point could only push a playable hand toward a bust, so the
/// loop stops there. Two consequences worth knowing: a pair of aces scores
/// 20 (both promote), and no two-card hand can reach 21.
///
/// Takes a slice rather than a [`CardList`] so a renderer can score the
/// visible prefix of a hand; game decisions always score the full hand.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        total = total.saturating_add(card_value(card.rank));
    }

    while total < 13 && aces > 0 {
        total += 9;
        aces -= 1;
    }

    total
}

/// An ordered sequence of owned cards.
///
/// Insertion order is deal/draw order. Cards are moved between lists (deck
/// and hands), never copied, so the union of all lists in a game is always
/// the canonical 52-card set.
#[derive(Debug, Clone, Default)]
pub struct CardList {
    /// Cards in list order, head first.
    cards: Vec<Card>,
}

impl CardList {
    /// Creates a new empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a new empty list with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Appends a card at the tail.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the head card, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Removes and returns the card at `position`, zero-based from the head.
    /// The remaining cards keep their relative order.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`. Callers derive positions from the
    /// current length, so an out-of-range position is a programming error.
    pub fn draw(&mut self, position: usize) -> Card {
        assert!(
            position < self.cards.len(),
            "draw position {position} out of range for list of {}",
            self.cards.len()
        );
        self.cards.remove(position)
    }

    /// Returns the cards in list order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the blackjack value of the whole list.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }
}
