use super::answer::*;
use super::participant::Participant;
use crate::trick::{Columns, Event, Subject};
use colored::Colorize;
use dialoguer::Input;

/// Interactive participant at a terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn ask<T>(prompt: &str, parse: impl Fn(&str) -> Result<T, Rejection>) -> anyhow::Result<T> {
        let text = Input::<String>::new()
            .with_prompt(prompt.trim_end())
            .allow_empty(true)
            .validate_with(|i: &String| Self::validate(&parse, i))
            .report(false)
            .interact_text()?;
        Ok(parse(&text)?)
    }
    /// Diagnostic shown under the prompt, empty answers included.
    fn validate<T>(parse: impl Fn(&str) -> Result<T, Rejection>, text: &str) -> Result<(), String> {
        parse(text).map(|_| ()).map_err(|e| e.to_string())
    }
}

impl Participant for Human {
    fn notify(&mut self, event: &Event) -> anyhow::Result<()> {
        match event {
            Event::Columns(_) | Event::Piles(_) | Event::Cards(_) => {
                for (label, cards) in event.rows() {
                    println!("{} {}", format!("{}:", label).bold(), cards);
                }
            }
            Event::Verdict(..) => println!("{}", event.to_string().dimmed()),
            Event::Collapsed => println!("{}", event.to_string().yellow()),
            Event::Reveal(_) => println!("{}", event.to_string().green().bold()),
        }
        println!();
        Ok(())
    }
    fn column(&mut self, _: &Columns) -> anyhow::Result<usize> {
        Self::ask(COLUMN, |s| parse_one(s, Subject::Pile, 3))
    }
    fn one(&mut self, subject: Subject, n: usize) -> anyhow::Result<usize> {
        Self::ask(&prompt_one(subject), |s| parse_one(s, subject, n))
    }
    fn two(&mut self, subject: Subject, n: usize) -> anyhow::Result<[usize; 2]> {
        Self::ask(&prompt_two(subject), |s| parse_two(s, subject, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_gets_diagnostic() {
        assert_eq!(
            Human::validate(|s| parse_one(s, Subject::Pile, 3), ""),
            Err(String::from("Only enter the number of the pile."))
        );
        assert_eq!(
            Human::validate(|s| parse_two(s, Subject::Pile, 5), ""),
            Err(Rejection::Malformed(Subject::Pile).to_string())
        );
    }

    #[test]
    fn valid_answer_passes() {
        assert_eq!(Human::validate(|s| parse_one(s, Subject::Card, 2), "2"), Ok(()));
    }
}
