/// Card suit: hearts, diamonds, clubs, spades.
///
/// Suits never affect the payout of a hand except through the flush
/// pattern, so any relabeling of suits is a symmetry of every pay schedule.
/// [`Permutation`] enumerates those relabelings.
///
/// The ordering (H < D < C < S) is the deck order of the stored strategy
/// tables. It breaks ties between equal ranks when canonical keys are formed.
///
/// [`Permutation`]: super::permutation::Permutation
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    H = 0,
    D = 1,
    C = 2,
    S = 3,
}

impl Suit {
    /// All four suits in deck order.
    pub const fn all() -> [Suit; 4] {
        [Suit::H, Suit::D, Suit::C, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::H => '♥',
            Suit::D => '♦',
            Suit::C => '♣',
            Suit::S => '♠',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::H,
            1 => Suit::D,
            2 => Suit::C,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
/// every card of the suit, one bit per rank nibble
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::H => 0x0001111111111111,
            Suit::D => 0x0002222222222222,
            Suit::C => 0x0004444444444444,
            Suit::S => 0x0008888888888888,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "♥" => Ok(Suit::H),
            "d" | "♦" => Ok(Suit::D),
            "c" | "♣" => Ok(Suit::C),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::H => write!(f, "h"),
            Suit::D => write!(f, "d"),
            Suit::C => write!(f, "c"),
            Suit::S => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::C;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Suit::H) == 0b0001000100010001000100010001000100010001000100010001);
        assert!(u64::from(Suit::D) == 0b0010001000100010001000100010001000100010001000100010);
        assert!(u64::from(Suit::C) == 0b0100010001000100010001000100010001000100010001000100);
        assert!(u64::from(Suit::S) == 0b1000100010001000100010001000100010001000100010001000);
    }

    #[test]
    fn parse_symbols() {
        assert_eq!(Suit::try_from("♥"), Ok(Suit::H));
        assert_eq!(Suit::try_from("S"), Ok(Suit::S));
        assert!(Suit::try_from("x").is_err());
    }
}
