/// Card suit.
///
/// Only the label matters to the trick; the ordering (S < D < H < C) is the
/// order in which a fresh [`Deck`] lays the suits out.
///
/// [`Deck`]: super::deck::Deck
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Spade = 0,
    Diamond = 1,
    Heart = 2,
    Club = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::Spade, Suit::Diamond, Suit::Heart, Suit::Club]
    }
    /// Lowercase single character notation.
    pub fn short(&self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Spade,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Club,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "s" | "♠" | "spades" => Ok(Suit::Spade),
            "d" | "♦" | "diamonds" => Ok(Suit::Diamond),
            "h" | "♥" | "hearts" => Ok(Suit::Heart),
            "c" | "♣" | "clubs" => Ok(Suit::Club),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::Spade => write!(f, "Spades"),
            Suit::Diamond => write!(f, "Diamonds"),
            Suit::Heart => write!(f, "Hearts"),
            Suit::Club => write!(f, "Clubs"),
        }
    }
}
