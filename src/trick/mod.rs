//! The partition and recombine state machine behind the Twenty-One trick.
//!
//! ## Stages
//!
//! 1. **Columns** — [`Columns`] deals 21 cards round-robin into three columns
//!    of seven and [`Columns::gather`] stacks them back with the named column
//!    in the middle. Three rounds of this park the participant's card at
//!    position [`MIDDLE`], whichever columns were named.
//! 2. **Piles** — [`packets`] cuts the gathered cards into five piles, and a
//!    [`Narrowing`] of piles discards or keeps whatever the participant names,
//!    always in the direction that keeps their card alive.
//! 3. **Cards** — the surviving pile is narrowed the same way, card by card.
//!
//! [`Session`] drives all three against any [`Participant`].
//!
//! [`Participant`]: crate::players::Participant
mod columns;
mod event;
mod narrowing;
mod packets;
mod pile;
mod session;
mod subject;
mod verdict;

#[cfg(test)]
mod tests;

pub use columns::*;
pub use event::*;
pub use narrowing::*;
pub use packets::*;
pub use pile::*;
pub use session::*;
pub use subject::*;
pub use verdict::*;

/// Cards taken off the top of the shuffled deck.
pub const DEAL: usize = 21;
/// Column rounds before the participant's card is pinned down.
pub const ROUNDS: usize = 3;
/// Index of the participant's card once the column rounds are over.
pub const MIDDLE: usize = DEAL / 2;
