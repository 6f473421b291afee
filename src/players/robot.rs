use super::participant::Participant;
use crate::cards::Card;
use crate::trick::{Columns, Event, Subject};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Automatic participant.
///
/// Secretly settles on one of the dealt cards the first time it sees the
/// columns (unless handed one up front), points at its column truthfully every
/// round, and picks piles and cards uniformly at random.
#[derive(Debug)]
pub struct Robot {
    secret: Option<Card>,
    revealed: Option<Card>,
    rng: SmallRng,
}

impl Robot {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            secret: None,
            revealed: None,
            rng,
        }
    }
    /// A robot that has already made up its mind.
    pub fn holding(card: Card, seed: u64) -> Self {
        Self {
            secret: Some(card),
            revealed: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn secret(&self) -> Option<Card> {
        self.secret
    }
    pub fn revealed(&self) -> Option<Card> {
        self.revealed
    }
    /// Whether the revealed card was the one it had in mind.
    pub fn fooled(&self) -> bool {
        self.revealed.is_some() && self.revealed == self.secret
    }
}

impl Participant for Robot {
    fn notify(&mut self, event: &Event) -> anyhow::Result<()> {
        if let Event::Reveal(card) = event {
            self.revealed = Some(*card);
        }
        Ok(())
    }
    fn column(&mut self, columns: &Columns) -> anyhow::Result<usize> {
        let secret = match self.secret {
            Some(card) => card,
            None => {
                let dealt = columns
                    .piles()
                    .iter()
                    .flat_map(|p| p.cards().iter().copied())
                    .collect::<Vec<_>>();
                let card = *dealt
                    .choose(&mut self.rng)
                    .ok_or_else(|| anyhow::anyhow!("no cards dealt"))?;
                log::debug!("robot is thinking of {}", card.short());
                self.secret = Some(card);
                card
            }
        };
        columns
            .locate(&secret)
            .ok_or_else(|| anyhow::anyhow!("{} was not dealt", secret))
    }
    fn one(&mut self, _: Subject, n: usize) -> anyhow::Result<usize> {
        Ok(self.rng.random_range(0..n))
    }
    fn two(&mut self, _: Subject, n: usize) -> anyhow::Result<[usize; 2]> {
        let picks = rand::seq::index::sample(&mut self.rng, n, 2);
        Ok([picks.index(0), picks.index(1)])
    }
}
