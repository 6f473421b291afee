use super::answer::*;
use super::participant::Participant;
use crate::trick::{Columns, Event, Subject};
use std::io::BufRead;
use std::io::Write;

/// Line-oriented participant over any reader and writer.
///
/// Prompts are written verbatim, one answer is read per line, and a rejected
/// answer is met with its diagnostic and the same prompt again, as many times
/// as it takes. Running out of input is the only way out without an answer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, Rejection>,
    ) -> anyhow::Result<T> {
        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;
            let ref mut bytes = Vec::new();
            if self.reader.read_until(b'\n', bytes)? == 0 {
                anyhow::bail!("input closed while waiting for an answer");
            }
            let line = String::from_utf8_lossy(bytes);
            match parse(line.as_ref()) {
                Ok(answer) => return Ok(answer),
                Err(rejection) => {
                    log::debug!("rejected {:?}: {:?}", line.trim(), rejection);
                    writeln!(self.writer, "{}", rejection)?;
                    writeln!(self.writer)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Participant for Console<R, W> {
    fn notify(&mut self, event: &Event) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", event)?;
        writeln!(self.writer)?;
        Ok(())
    }
    fn column(&mut self, _: &Columns) -> anyhow::Result<usize> {
        self.ask(COLUMN, |s| parse_one(s, Subject::Pile, 3))
    }
    fn one(&mut self, subject: Subject, n: usize) -> anyhow::Result<usize> {
        self.ask(&prompt_one(subject), |s| parse_one(s, subject, n))
    }
    fn two(&mut self, subject: Subject, n: usize) -> anyhow::Result<[usize; 2]> {
        self.ask(&prompt_two(subject), |s| parse_two(s, subject, n))
    }
}
