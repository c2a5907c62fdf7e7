//! Player and dealer hand representations.

use crate::card::{Card, Rank};

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(card.rank.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && total <= 21;
    (total, is_soft)
}

/// The player's hand. Append-only within a round.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the adjusted total of the hand.
    ///
    /// Aces count 11 each, then drop to 1 one at a time while the total
    /// exceeds 21 and unconverted aces remain.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is soft (contains an ace still counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// Scores the same way as [`Hand`] but tracks whether the hole card has
/// been revealed, so a renderer can show exactly one card face down until
/// the dealer plays.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
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

    /// Calculates the visible total (only the up card while the hole card
    /// is hidden).
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        if self.hole_revealed {
            self.total()
        } else {
            self.cards.first().map_or(0, |c| c.rank.value())
        }
    }

    /// Calculates the adjusted total of the full hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is soft (contains an ace still counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{DealerHand, Hand};
    use crate::card::{Card, Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Hearts, rank));
        }
        hand
    }

    #[test]
    fn total_without_aces_is_the_plain_sum() {
        assert_eq!(hand_of(&[Rank::Two, Rank::Nine]).total(), 11);
        assert_eq!(hand_of(&[Rank::Ten, Rank::King, Rank::Queen]).total(), 30);
        assert_eq!(hand_of(&[Rank::Jack, Rank::Seven]).total(), 17);
    }

    #[test]
    fn one_ace_stays_soft_while_it_fits() {
        let hand = hand_of(&[Rank::Ace, Rank::King]);
        assert_eq!(hand.total(), 21);
        assert!(hand.is_soft());
        assert!(!hand.is_bust());
    }

    #[test]
    fn ace_drops_to_one_when_the_total_would_bust() {
        let hand = hand_of(&[Rank::Ace, Rank::King, Rank::Five]);
        assert_eq!(hand.total(), 16);
        assert!(!hand.is_soft());
    }

    #[test]
    fn aces_convert_one_at_a_time_greedily() {
        // 11 + 11 + 9 = 31, one conversion suffices: 21.
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(hand.total(), 21);

        // 11 + 11 + 10 + 10 = 42, both aces convert: 22, still bust.
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
        assert_eq!(hand.total(), 22);
        assert!(hand.is_bust());
        assert!(!hand.is_soft());
    }

    #[test]
    fn dealer_hand_hides_the_hole_card_until_revealed() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Spades, Rank::Ace));
        dealer.add_card(Card::new(Suit::Clubs, Rank::Six));

        assert!(!dealer.is_hole_revealed());
        assert_eq!(dealer.visible_total(), 11);

        dealer.reveal_hole();
        assert_eq!(dealer.visible_total(), 17);
        assert!(dealer.is_soft());
    }

    #[test]
    fn clear_resets_cards_and_hole_visibility() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, Rank::Ten));
        dealer.reveal_hole();

        dealer.clear();
        assert!(dealer.is_empty());
        assert!(!dealer.is_hole_revealed());
    }
}
