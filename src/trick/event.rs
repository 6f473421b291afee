use super::columns::Columns;
use super::pile::Pile;
use super::subject::Subject;
use super::verdict::Verdict;
use crate::cards::Card;

/// Everything the participant is shown over the course of a trick.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The three dealt columns.
    Columns(&'a Columns),
    /// The surviving piles of the elimination stage.
    Piles(&'a [Pile]),
    /// The surviving cards of the last pile.
    Cards(&'a [Card]),
    /// What happened to the participant's picks.
    Verdict(Subject, Verdict),
    /// A single pile is left and the card stage begins.
    Collapsed,
    /// The last card standing.
    Reveal(Card),
}

impl Event<'_> {
    /// Labelled rows for events that lay cards out on the table.
    pub fn rows(&self) -> Vec<(String, String)> {
        match self {
            Event::Columns(columns) => columns
                .piles()
                .iter()
                .enumerate()
                .map(|(i, p)| (format!("Pile {}", i + 1), p.to_string()))
                .collect(),
            Event::Piles(piles) => piles
                .iter()
                .enumerate()
                .map(|(i, p)| (format!("Pile {}", i + 1), p.to_string()))
                .collect(),
            Event::Cards(cards) => cards
                .iter()
                .enumerate()
                .map(|(i, c)| (format!("Card {}", i + 1), c.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl<'a> From<&'a [Pile]> for Event<'a> {
    fn from(piles: &'a [Pile]) -> Self {
        Event::Piles(piles)
    }
}
impl<'a> From<&'a [Card]> for Event<'a> {
    fn from(cards: &'a [Card]) -> Self {
        Event::Cards(cards)
    }
}

impl std::fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Verdict(subject, verdict) => write!(f, "{}", verdict.announce(*subject)),
            Event::Collapsed => write!(f, "Only one pile remaining. Now I will find your card."),
            Event::Reveal(card) => write!(f, "The final card left is {}, your card.", card),
            _ => write!(
                f,
                "{}",
                self.rows()
                    .into_iter()
                    .map(|(label, cards)| format!("{}: {}", label, cards))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}
