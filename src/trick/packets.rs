use super::DEAL;
use super::pile::Pile;
use crate::cards::Card;

/// Cut points for the five piles of the elimination stage: 4, 4, 4, 4, 5.
pub const PACKETS: [usize; 6] = [0, 4, 8, 12, 16, DEAL];

/// Cut the gathered cards into five contiguous piles.
/// Only ever called on the 21 cards left by the column rounds.
pub fn packets(cards: &[Card]) -> Vec<Pile> {
    assert_eq!(cards.len(), DEAL, "packets are cut from exactly {} cards", DEAL);
    PACKETS
        .windows(2)
        .map(|w| Pile::from(cards[w[0]..w[1]].to_vec()))
        .collect()
}
