//! The Twenty-One card trick.
//!
//! Twenty-one cards are dealt into three columns, the participant names the
//! column holding their card, and the columns are gathered with that one in
//! the middle. After three rounds the card is the eleventh from the top. The
//! trick then hides that fact behind a round of pile and card eliminations
//! that always end on the participant's card.
//!
//! - [`cards`] — ranks, suits, cards, and the shuffled deck
//! - [`trick`] — the deal, gather, and elimination state machine
//! - [`players`] — participants answering the trick's questions
pub mod cards;
pub mod players;
pub mod trick;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level, and optionally a DEBUG
/// level log file under `logs/` named by the current unix time.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];
    if file {
        std::fs::create_dir_all("logs")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(format!("logs/{}.log", time))?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
