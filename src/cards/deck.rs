use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered deck of cards.
///
/// Unlike a hand, order is the whole point here: the trick deals from the
/// top, so a deck is a sequence rather than a set. A deck is built once,
/// shuffled once, and afterwards only read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 52 cards in canonical order, suit by suit.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Rank::all().into_iter().map(move |r| Card::from((r, s))))
                .collect(),
        )
    }
    /// A uniformly random permutation drawn from the given source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.0.shuffle(rng);
        deck
    }
    /// The top `n` cards, in order.
    pub fn deal(&self, n: usize) -> Vec<Card> {
        assert!(n <= self.0.len(), "cannot deal {} from {}", n, self.0.len());
        self.0[..n].to_vec()
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        Self::shuffled(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn permutation(deck: &Deck) -> bool {
        deck.size() == 52 && deck.cards().iter().collect::<HashSet<_>>().len() == 52
    }

    #[test]
    fn fresh_deck_is_complete() {
        assert!(permutation(&Deck::new()));
        assert!(Deck::new()
            .cards()
            .iter()
            .all(|c| u8::from(*c) < 52));
    }

    #[test]
    fn shuffle_is_permutation() {
        (0..32).map(|_| Deck::random()).for_each(|d| assert!(permutation(&d)));
    }

    #[test]
    fn shuffles_are_independent() {
        let a = Deck::random();
        let b = Deck::random();
        let c = Deck::random();
        assert!(a != b || b != c);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let a = Deck::shuffled(&mut SmallRng::seed_from_u64(21));
        let b = Deck::shuffled(&mut SmallRng::seed_from_u64(21));
        assert_eq!(a, b);
    }

    #[test]
    fn deal_takes_from_top() {
        let deck = Deck::random();
        let hand = deck.deal(21);
        assert_eq!(hand.len(), 21);
        assert_eq!(hand.as_slice(), &deck.cards()[..21]);
    }
}
