use clap::ArgAction;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Parser)]
#[command(author, version, about = "Performs the Twenty-One card trick", long_about = None)]
pub struct Args {
    #[arg(long, help = "Seed the shuffle for a reproducible deal")]
    pub seed: Option<u64>,
    #[arg(long, help = "Let an automatic participant pick and follow a card")]
    pub robot: bool,
    #[arg(long, help = "Plain line prompts instead of the interactive terminal")]
    pub plain: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Log more (-v info, -vv debug)")]
    pub verbose: u8,
    #[arg(long, help = "Also write a debug log under logs/")]
    pub logs: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    /// Seeded when asked, otherwise fresh from the OS.
    pub fn rng(&self) -> SmallRng {
        self.seed
            .map(SmallRng::seed_from_u64)
            .unwrap_or_else(SmallRng::from_os_rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["twentyone"]).expect("no args needed");
        assert_eq!(args.seed, None);
        assert!(!args.robot && !args.plain && !args.logs);
        assert_eq!(args.level(), log::LevelFilter::Warn);
    }

    #[test]
    fn verbosity_stacks() {
        let args = Args::try_parse_from(["twentyone", "-vv"]).expect("valid");
        assert_eq!(args.level(), log::LevelFilter::Debug);
    }

    #[test]
    fn seed_reproduces_deal() {
        let args = Args::try_parse_from(["twentyone", "--seed", "21", "--robot"]).expect("valid");
        assert!(args.robot);
        assert_eq!(
            Deck::shuffled(&mut args.rng()),
            Deck::shuffled(&mut args.rng())
        );
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(Args::try_parse_from(["twentyone", "--seed", "abc"]).is_err());
    }
}
