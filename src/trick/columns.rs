use super::pile::Pile;
use crate::cards::Card;

/// Three columns dealt round-robin: card `i` lands in column `i % 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns([Pile; 3]);

impl Columns {
    pub fn piles(&self) -> &[Pile; 3] {
        &self.0
    }
    /// Which column holds the card, by equality.
    pub fn locate(&self, card: &Card) -> Option<usize> {
        self.0.iter().position(|pile| pile.contains(card))
    }
    /// Stack the columns back into one sequence with column `chosen`
    /// (0-based) sandwiched between the other two.
    ///
    /// The outer columns keep their relative order, so the result depends only
    /// on `chosen` and the columns themselves.
    ///
    /// # Panics
    ///
    /// Panics if `chosen` is not 0, 1, or 2.
    pub fn gather(&self, chosen: usize) -> Vec<Card> {
        let order = match chosen {
            0 => [1, 0, 2],
            1 => [0, 1, 2],
            2 => [0, 2, 1],
            _ => panic!("no column {} among 3", chosen),
        };
        order
            .iter()
            .flat_map(|&i| self.0[i].cards().iter().copied())
            .collect()
    }
}

/// Deal a sequence into three even columns.
/// Lengths that do not split evenly would leave ragged columns and break the
/// middle-position guarantee, so they are refused.
impl TryFrom<Vec<Card>> for Columns {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.is_empty() || cards.len() % 3 != 0 {
            return Err(format!("cannot deal {} cards into 3 even columns", cards.len()));
        }
        let mut columns: [Vec<Card>; 3] = Default::default();
        cards
            .into_iter()
            .enumerate()
            .for_each(|(i, card)| columns[i % 3].push(card));
        Ok(Self(columns.map(Pile::from)))
    }
}

impl std::fmt::Display for Columns {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, pile) in self.0.iter().enumerate() {
            writeln!(f, "Pile {}: {}", i + 1, pile)?;
        }
        Ok(())
    }
}
