/// What the participant is being asked to pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Pile,
    Card,
}

impl Subject {
    /// Capitalised form for the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            Subject::Pile => "Pile",
            Subject::Card => "Card",
        }
    }
    pub fn plural(&self) -> &'static str {
        match self {
            Subject::Pile => "piles",
            Subject::Card => "cards",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Subject::Pile => write!(f, "pile"),
            Subject::Card => write!(f, "card"),
        }
    }
}
