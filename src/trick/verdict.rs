use super::subject::Subject;

/// Outcome of one elimination round.
///
/// Whether the participant's picks were kept or thrown away depends only on
/// whether they hold the participant's card; either way the card survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The picks survive and `removed` other items are dropped.
    Kept { removed: usize },
    /// The `removed` picks themselves are dropped.
    Discarded { removed: usize },
}

impl Verdict {
    pub fn removed(&self) -> usize {
        match self {
            Verdict::Kept { removed } | Verdict::Discarded { removed } => *removed,
        }
    }
    /// The announcement read out to the participant.
    pub fn announce(&self, subject: Subject) -> String {
        let noun = match self.removed() {
            1 => subject.to_string(),
            _ => subject.plural().to_string(),
        };
        match (self, self.removed()) {
            (Verdict::Kept { .. }, _) => format!("The other {} will be removed.", noun),
            (Verdict::Discarded { .. }, 1) => format!("This {} will be removed.", noun),
            (Verdict::Discarded { .. }, _) => format!("These {} will be removed.", noun),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcements() {
        assert_eq!(
            Verdict::Kept { removed: 3 }.announce(Subject::Pile),
            "The other piles will be removed."
        );
        assert_eq!(
            Verdict::Kept { removed: 1 }.announce(Subject::Pile),
            "The other pile will be removed."
        );
        assert_eq!(
            Verdict::Discarded { removed: 2 }.announce(Subject::Card),
            "These cards will be removed."
        );
        assert_eq!(
            Verdict::Discarded { removed: 1 }.announce(Subject::Card),
            "This card will be removed."
        );
    }
}
