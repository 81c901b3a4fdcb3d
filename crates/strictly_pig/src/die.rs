//! The die and the sources that throw it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A face of a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum DieFace {
    /// 1, the bust face.
    One,
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
}

impl DieFace {
    /// All faces in ascending order.
    pub const ALL: [DieFace; 6] = [
        DieFace::One,
        DieFace::Two,
        DieFace::Three,
        DieFace::Four,
        DieFace::Five,
        DieFace::Six,
    ];

    /// Pip count.
    pub fn value(self) -> u32 {
        match self {
            DieFace::One => 1,
            DieFace::Two => 2,
            DieFace::Three => 3,
            DieFace::Four => 4,
            DieFace::Five => 5,
            DieFace::Six => 6,
        }
    }

    /// Whether this face ends the turn.
    pub fn is_bust(self) -> bool {
        self == DieFace::One
    }
}

impl From<DieFace> for u32 {
    fn from(face: DieFace) -> Self {
        face.value()
    }
}

impl TryFrom<u32> for DieFace {
    type Error = DiceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1..=6 => Ok(Self::ALL[(value - 1) as usize]),
            other => Err(DiceError::OutOfRange(other)),
        }
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Errors building a die source.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DiceError {
    /// A scripted die needs at least one face.
    #[display("Scripted dice need at least one face")]
    EmptyScript,

    /// A raw value was not a face of a six-sided die.
    #[display("{} is not a die face (expected 1-6)", _0)]
    OutOfRange(u32),
}

impl std::error::Error for DiceError {}

/// Anything that can throw a six-sided die.
pub trait Dice {
    /// Throws the die once.
    fn roll(&mut self) -> DieFace;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> DieFace {
        (**self).roll()
    }
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> DieFace {
        (**self).roll()
    }
}

/// Uniformly random die backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Seeds from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeds deterministically, so a session can be replayed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> DieFace {
        let face = DieFace::ALL[self.rng.gen_range(0..DieFace::ALL.len())];
        trace!(%face, "Die thrown");
        face
    }
}

/// Plays back a fixed sequence of faces, starting over when it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<DieFace>,
    cursor: usize,
}

impl ScriptedDice {
    /// Creates a scripted die from faces.
    pub fn new(faces: impl Into<Vec<DieFace>>) -> Result<Self, DiceError> {
        let faces = faces.into();
        if faces.is_empty() {
            return Err(DiceError::EmptyScript);
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Creates a scripted die from raw pip counts.
    pub fn from_values(values: &[u32]) -> Result<Self, DiceError> {
        let faces = values
            .iter()
            .map(|&value| DieFace::try_from(value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(faces)
    }

    /// Number of faces thrown so far.
    pub fn thrown(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> DieFace {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
