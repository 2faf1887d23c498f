/// Called result of one pitch.
///
/// A strike here covers a called strike, a swinging strike, and a swung-at
/// strike that stays in the park. Home runs are not a pitch result; they end
/// the at-bat and never advance the count.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pitch {
    Ball,
    Strike,
}

impl Pitch {
    pub const fn all() -> [Self; 2] {
        [Self::Ball, Self::Strike]
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Ball => 'B',
            Self::Strike => 'S',
        }
    }
}

impl TryFrom<char> for Pitch {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'B' => Ok(Self::Ball),
            'S' => Ok(Self::Strike),
            _ => Err(format!("invalid pitch: {}", c)),
        }
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
