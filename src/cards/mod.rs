//! Playing card primitives.
//!
//! - [`Rank`] and [`Suit`] — the two halves of a card
//! - [`Card`] — a `(Rank, Suit)` pair encoded in one byte
//! - [`Deck`] — an ordered, shuffled sequence to deal from
mod card;
mod deck;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use rank::*;
pub use suit::*;
