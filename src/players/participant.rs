use crate::trick::{Columns, Event, Subject};

/// Anyone or anything that can play the participant's part.
///
/// Every answer is a validated, 0-based index; how the question is put and how
/// bad answers are handled is up to the implementation. Errors are reserved
/// for a channel that can no longer answer at all (closed input, broken
/// terminal); a wrong answer is never an error.
pub trait Participant {
    /// Show what happened on the table.
    fn notify(&mut self, event: &Event) -> anyhow::Result<()>;
    /// Which of the three columns holds your card?
    fn column(&mut self, columns: &Columns) -> anyhow::Result<usize>;
    /// Pick one of `n` items.
    fn one(&mut self, subject: Subject, n: usize) -> anyhow::Result<usize>;
    /// Pick two different items of `n`.
    fn two(&mut self, subject: Subject, n: usize) -> anyhow::Result<[usize; 2]>;
}
