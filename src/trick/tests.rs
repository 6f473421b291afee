use super::*;
use crate::cards::{Card, Deck};
use crate::players::{Console, Participant, Robot};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Cursor;

/// The 21 cards a session seeded with `seed` will deal.
fn dealt(seed: u64) -> Vec<Card> {
    Deck::shuffled(&mut SmallRng::seed_from_u64(seed)).deal(DEAL)
}

/// Column answers (1-based, newline separated) that follow `target`.
fn follow(cards: Vec<Card>, target: Card) -> String {
    let mut answers = String::new();
    (0..ROUNDS).fold(cards, |cards, _| {
        let columns = Columns::try_from(cards).expect("even");
        let chosen = columns.locate(&target).expect("dealt");
        answers.push_str(&format!("{}\n", chosen + 1));
        columns.gather(chosen)
    });
    answers
}

#[test]
fn robot_is_always_found() {
    for seed in 0..64 {
        let robot = Robot::new(SmallRng::seed_from_u64(seed + 1000));
        let mut session = Session::new(robot, SmallRng::seed_from_u64(seed));
        let card = session.perform().expect("robots always answer");
        let robot = session.into_participant();
        assert_eq!(robot.secret(), Some(card));
        assert!(robot.fooled());
        assert_eq!(robot.revealed(), Some(card));
    }
}

#[test]
fn found_from_every_starting_position() {
    let seed = 21;
    let cards = dealt(seed);
    for (i, card) in cards.iter().enumerate() {
        let robot = Robot::holding(*card, i as u64);
        let mut session = Session::new(robot, SmallRng::seed_from_u64(seed));
        assert_eq!(session.perform().expect("answered"), *card, "start {}", i);
    }
}

#[test]
fn console_performance_reveals_card() {
    let seed = 7;
    let cards = dealt(seed);
    let target = cards[0];
    let mut input = follow(cards, target);
    // alternating answers fit whichever question comes next;
    // the misfits are rejected and asked again
    input.push_str(&"1 2\n1\n".repeat(16));
    let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut session = Session::new(console, SmallRng::seed_from_u64(seed));
    assert_eq!(session.perform().expect("enough answers"), target);
    let text = String::from_utf8_lossy(session.participant().writer()).into_owned();
    assert_eq!(text.matches("Which number pile is your card in? ").count(), ROUNDS);
    assert!(text.contains("Pile 5: "));
    assert!(text.contains("Only one pile remaining. Now I will find your card."));
    assert!(text.ends_with(&format!("The final card left is {}, your card.\n\n", target)));
}

#[test]
fn console_runs_dry() {
    let console = Console::new(Cursor::new(b"1\n2\n".to_vec()), Vec::new());
    let mut session = Session::new(console, SmallRng::seed_from_u64(3));
    assert!(session.perform().is_err());
}

#[test]
fn pile_scenario_keeps_then_discards() {
    let cards = Deck::new().deal(DEAL);
    let piles = packets(&cards);
    let mut narrowing = Narrowing::new(piles.clone(), 2);
    // "3 4" holds the target pile: keep both
    assert_eq!(narrowing.eliminate(&[2, 3]), Verdict::Kept { removed: 3 });
    assert_eq!(narrowing.items(), &piles[2..4]);
    assert_eq!(narrowing.target(), 0);
    // "2" misses it: that pile goes
    assert_eq!(narrowing.eliminate(&[1]), Verdict::Discarded { removed: 1 });
    assert_eq!(narrowing.survivor(), piles[2]);
}

#[test]
fn pile_scenario_keeps_single_pick() {
    let piles = packets(&Deck::new().deal(DEAL));
    let mut narrowing = Narrowing::new(piles.clone(), 2);
    narrowing.eliminate(&[2, 3]);
    // "1" is the target pile: the other goes
    assert_eq!(narrowing.eliminate(&[0]), Verdict::Kept { removed: 1 });
    assert_eq!(narrowing.survivor(), piles[2]);
}

#[test]
fn middle_card_survives_any_elimination() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..256 {
        let cards = Deck::shuffled(&mut rng).deal(DEAL);
        let target = cards[MIDDLE];
        let mut robot = Robot::holding(target, 0);
        let mut piles = Narrowing::new(packets(&cards), 2);
        while piles.size() > 1 {
            let n = piles.size();
            match n {
                2 => piles.eliminate(&[robot.one(Subject::Pile, n).expect("robot")]),
                _ => piles.eliminate(&robot.two(Subject::Pile, n).expect("robot")),
            };
            assert!(piles.held().contains(&target));
        }
        assert!(piles.survivor().contains(&target));
    }
}
