use crate::cards::Card;

/// An ordered run of cards shown to the participant as one labelled group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile(Vec<Card>);

impl Pile {
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Index of a card within the pile, by equality.
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.0.iter().position(|c| c == card)
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Pile> for Vec<Card> {
    fn from(pile: Pile) -> Self {
        pile.0
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
