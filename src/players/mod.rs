//! Participants in the trick.
//!
//! Concrete types implementing [`Participant`], each answering the same three
//! questions through a different channel.
//!
//! ## Implementations
//!
//! - [`Console`] — Line prompts over any reader and writer (stdin/stdout, files, tests)
//! - [`Human`] — Interactive terminal prompts (requires `cli` feature)
//! - [`Robot`] — Automatic participant that secretly picks a card and plays along
mod answer;
mod console;
#[cfg(feature = "cli")]
mod human;
mod participant;
mod robot;

pub use answer::*;
pub use console::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use participant::*;
pub use robot::*;
