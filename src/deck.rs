//! A single 52-card deck, consumed one card at a time.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeck;

/// An ordered deck of cards. Dealing removes from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck holding exactly one card per
    /// (suit, rank) combination, in `Suit::ALL` x `Rank::ALL` order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a freshly shuffled deck.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck with an explicit card order.
    ///
    /// The last card of `cards` is dealt first. Mainly useful for setting
    /// up known deals in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeck`] if no cards remain. A 52-card deck never runs
    /// out within a normal round, but the engine guards rather than assumes.
    pub fn deal(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// Returns the cards remaining, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is out of cards.
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

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::Deck;
    use crate::card::DECK_SIZE;
    use crate::error::EmptyDeck;

    #[test]
    fn new_deck_has_52_distinct_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        let distinct: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(distinct.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_preserves_the_card_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let deck = Deck::shuffled(&mut rng);

        let mut sorted: Vec<_> = deck.cards().to_vec();
        let mut reference: Vec<_> = Deck::new().cards().to_vec();
        sorted.sort_by_key(|c| format!("{c}"));
        reference.sort_by_key(|c| format!("{c}"));
        assert_eq!(sorted, reference);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(Deck::shuffled(&mut rng_a), Deck::shuffled(&mut rng_b));

        let mut rng_c = ChaCha8Rng::seed_from_u64(43);
        assert_ne!(Deck::shuffled(&mut rng_c), Deck::shuffled(&mut rng_b));
    }

    #[test]
    fn deal_removes_exactly_one_card_from_the_back() {
        let mut deck = Deck::new();
        let expected = *deck.cards().last().unwrap();

        let dealt = deck.deal().unwrap();
        assert_eq!(dealt, expected);
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(!deck.cards().contains(&dealt));
    }

    #[test]
    fn deal_on_empty_deck_fails_without_corrupting_state() {
        let mut deck = Deck::from_cards(Vec::new());
        assert_eq!(deck.deal(), Err(EmptyDeck));
        assert_eq!(deck.deal(), Err(EmptyDeck));
        assert!(deck.is_empty());
    }
}
