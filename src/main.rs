use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::IsTerminal;
use twentyone::cli::Args;
use twentyone::players::*;
use twentyone::trick::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    twentyone::log(args.level(), args.logs)?;
    match args.seed {
        Some(seed) => log::info!("shuffling with seed {}", seed),
        None => log::info!("shuffling with entropy"),
    }
    let mut rng = args.rng();
    if args.robot {
        let robot = Robot::new(SmallRng::from_rng(&mut rng));
        let robot = play(robot, rng)?;
        match (robot.secret(), robot.revealed()) {
            (Some(secret), Some(_)) if robot.fooled() => {
                println!("The robot was thinking of {}. Found.", secret)
            }
            (Some(secret), Some(revealed)) => {
                println!("The robot was thinking of {}, not {}.", secret, revealed)
            }
            _ => log::warn!("the robot never picked a card"),
        }
    } else if args.plain || !std::io::stdin().is_terminal() {
        play(Console::stdio(), rng)?;
    } else {
        play(Human, rng)?;
    }
    Ok(())
}

fn play<P: Participant>(participant: P, rng: SmallRng) -> anyhow::Result<P> {
    log::info!("starting the trick");
    let mut session = Session::new(participant, rng);
    let card = session.perform()?;
    log::info!("trick finished on {}", card.short());
    Ok(session.into_participant())
}
