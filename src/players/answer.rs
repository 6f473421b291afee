use crate::trick::Subject;

/// Question put during the column rounds.
pub const COLUMN: &str = "Which number pile is your card in? ";

/// "Pick one" question for the elimination stage.
pub fn prompt_one(subject: Subject) -> String {
    format!("Please select a {} at random. ", subject)
}

/// "Pick two" question for the elimination stage.
pub fn prompt_two(subject: Subject) -> String {
    format!(
        "Please select 2 {} at random. (Separate {} numbers with a space) ",
        subject.plural(),
        subject
    )
}

/// Why a typed answer was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Empty, signed, or not a number at all.
    NonNumeric(Subject),
    /// A number, but not one of `1..=n`.
    OutOfRange(Subject, usize),
    /// Not exactly two numbers separated by whitespace.
    Malformed(Subject),
    /// The same number twice.
    Duplicate(Subject),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Rejection::NonNumeric(s) => write!(f, "Only enter the number of the {}.", s),
            Rejection::OutOfRange(s, n) => {
                write!(f, "{} number has to be between 1 and {}.", s.title(), n)
            }
            Rejection::Malformed(s) => write!(
                f,
                "Please format your input with your 2 chosen {} numbers separated by a space.",
                s
            ),
            Rejection::Duplicate(s) => write!(f, "Please choose 2 different {}.", s.plural()),
        }
    }
}

impl std::error::Error for Rejection {}

/// Parse a single 1-based number in `1..=n` into a 0-based index.
pub fn parse_one(text: &str, subject: Subject, n: usize) -> Result<usize, Rejection> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::NonNumeric(subject));
    }
    match text.parse::<usize>() {
        Ok(i) if (1..=n).contains(&i) => Ok(i - 1),
        _ => Err(Rejection::OutOfRange(subject, n)),
    }
}

/// Parse two distinct 1-based numbers in `1..=n` into 0-based indices.
pub fn parse_two(text: &str, subject: Subject, n: usize) -> Result<[usize; 2], Rejection> {
    let numbers = text
        .split_whitespace()
        .map(|token| parse_one(token, subject, n))
        .collect::<Vec<_>>();
    match numbers.as_slice() {
        [Ok(a), Ok(b)] if a == b => Err(Rejection::Duplicate(subject)),
        [Ok(a), Ok(b)] => Ok([*a, *b]),
        [Err(Rejection::NonNumeric(_)), _] | [_, Err(Rejection::NonNumeric(_))] => {
            Err(Rejection::Malformed(subject))
        }
        [Err(e), _] | [_, Err(e)] => Err(*e),
        _ => Err(Rejection::Malformed(subject)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_accepts_bounds() {
        assert_eq!(parse_one("1", Subject::Pile, 3), Ok(0));
        assert_eq!(parse_one(" 3\n", Subject::Pile, 3), Ok(2));
    }

    #[test]
    fn one_rejects_out_of_range() {
        assert_eq!(parse_one("0", Subject::Pile, 3), Err(Rejection::OutOfRange(Subject::Pile, 3)));
        assert_eq!(parse_one("6", Subject::Pile, 3), Err(Rejection::OutOfRange(Subject::Pile, 3)));
        assert_eq!(
            parse_one("99999999999999999999999", Subject::Pile, 3),
            Err(Rejection::OutOfRange(Subject::Pile, 3))
        );
    }

    #[test]
    fn one_rejects_non_numeric() {
        for text in ["abc", "", "   ", "-1", "+2", "2.0", "1 2"] {
            assert_eq!(
                parse_one(text, Subject::Card, 2),
                Err(Rejection::NonNumeric(Subject::Card)),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn two_accepts_distinct_pair() {
        assert_eq!(parse_two("3 4", Subject::Pile, 5), Ok([2, 3]));
        assert_eq!(parse_two("  5\t1 ", Subject::Pile, 5), Ok([4, 0]));
    }

    #[test]
    fn two_rejects_duplicates() {
        assert_eq!(parse_two("2 2", Subject::Pile, 5), Err(Rejection::Duplicate(Subject::Pile)));
    }

    #[test]
    fn two_rejects_out_of_range() {
        assert_eq!(parse_two("1 6", Subject::Pile, 5), Err(Rejection::OutOfRange(Subject::Pile, 5)));
        assert_eq!(parse_two("0 2", Subject::Card, 4), Err(Rejection::OutOfRange(Subject::Card, 4)));
    }

    #[test]
    fn two_rejects_malformed() {
        for text in ["", "1", "12", "1 2 3", "a b", "1,2", "1 x"] {
            assert_eq!(
                parse_two(text, Subject::Pile, 5),
                Err(Rejection::Malformed(Subject::Pile)),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn diagnostics() {
        assert_eq!(
            Rejection::OutOfRange(Subject::Pile, 3).to_string(),
            "Pile number has to be between 1 and 3."
        );
        assert_eq!(
            Rejection::NonNumeric(Subject::Pile).to_string(),
            "Only enter the number of the pile."
        );
        assert_eq!(
            prompt_two(Subject::Pile),
            "Please select 2 piles at random. (Separate pile numbers with a space) "
        );
        assert_eq!(prompt_one(Subject::Card), "Please select a card at random. ");
    }
}
