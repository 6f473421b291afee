use super::*;
use crate::cards::{Card, Deck};
use crate::players::Participant;
use rand::rngs::SmallRng;

/// One performance of the trick against one participant.
///
/// The session owns everything that changes during the trick: the random
/// source for the shuffle and the participant answering questions. Card
/// sequences are threaded through the stages by value.
pub struct Session<P> {
    participant: P,
    rng: SmallRng,
}

impl<P> Session<P> {
    pub fn new(participant: P, rng: SmallRng) -> Self {
        Self { participant, rng }
    }
    pub fn participant(&self) -> &P {
        &self.participant
    }
    pub fn into_participant(self) -> P {
        self.participant
    }
}

impl<P: Participant> Session<P> {
    /// Shuffle, deal, run every stage, and return the revealed card.
    pub fn perform(&mut self) -> anyhow::Result<Card> {
        let deck = Deck::shuffled(&mut self.rng);
        log::info!("dealing {} cards from a fresh deck", DEAL);
        let cards = self.columns(deck.deal(DEAL))?;
        let target = cards[MIDDLE];
        log::debug!("participant's card is {}", target.short());
        let pile = self.piles(packets(&cards), target)?;
        self.participant.notify(&Event::Collapsed)?;
        let card = self.cards(pile, target)?;
        debug_assert_eq!(card, target);
        log::info!("revealing {}", card.short());
        self.participant.notify(&Event::Reveal(card))?;
        Ok(card)
    }

    /// The column rounds. The participant's card is never looked at here;
    /// the dealing pattern alone moves it to the middle.
    fn columns(&mut self, cards: Vec<Card>) -> anyhow::Result<Vec<Card>> {
        (0..ROUNDS).try_fold(cards, |cards, round| {
            let columns = Columns::try_from(cards).map_err(anyhow::Error::msg)?;
            self.participant.notify(&Event::Columns(&columns))?;
            let chosen = self.participant.column(&columns)?;
            anyhow::ensure!(chosen < 3, "participant named column {} of 3", chosen);
            log::debug!("round {}: column {}", round + 1, chosen + 1);
            if round + 1 == ROUNDS {
                self.participant.notify(&Event::Columns(&columns))?;
            }
            Ok(columns.gather(chosen))
        })
    }

    fn piles(&mut self, piles: Vec<Pile>, target: Card) -> anyhow::Result<Pile> {
        let held = piles
            .iter()
            .position(|p| p.contains(&target))
            .unwrap_or_else(|| unreachable!("{} missing from the packets", target));
        log::info!("narrowing {} piles", piles.len());
        let pile = self.whittle(Subject::Pile, Narrowing::new(piles, held))?;
        debug_assert!(pile.contains(&target));
        Ok(pile)
    }

    fn cards(&mut self, pile: Pile, target: Card) -> anyhow::Result<Card> {
        let held = pile
            .position(&target)
            .unwrap_or_else(|| unreachable!("{} missing from the last pile", target));
        log::info!("narrowing {} cards", pile.size());
        self.whittle(Subject::Card, Narrowing::new(Vec::<Card>::from(pile), held))
    }

    /// Ask for two picks while more than two items remain, then one pick
    /// between the last two.
    fn whittle<T>(&mut self, subject: Subject, mut narrowing: Narrowing<T>) -> anyhow::Result<T>
    where
        for<'a> Event<'a>: From<&'a [T]>,
    {
        while narrowing.size() > 1 {
            let n = narrowing.size();
            self.participant.notify(&Event::from(narrowing.items()))?;
            let verdict = match n {
                2 => {
                    let pick = self.participant.one(subject, n)?;
                    anyhow::ensure!(pick < n, "participant picked {} {} of {}", subject, pick, n);
                    narrowing.eliminate(&[pick])
                }
                _ => {
                    let [a, b] = self.participant.two(subject, n)?;
                    anyhow::ensure!(
                        a < n && b < n && a != b,
                        "participant picked {} {:?} of {}",
                        subject.plural(),
                        [a, b],
                        n
                    );
                    narrowing.eliminate(&[a, b])
                }
            };
            log::debug!(
                "{:?}: {} {} left, target at {}",
                verdict,
                narrowing.size(),
                subject.plural(),
                narrowing.target()
            );
            self.participant.notify(&Event::Verdict(subject, verdict))?;
        }
        Ok(narrowing.survivor())
    }
}
