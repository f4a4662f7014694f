//! Line identities and sampled input levels.
//!
//! Each monitored switch has a fixed identity that maps one-to-one onto a
//! PORTB bit and onto the emulate routine it triggers. Lines are pulled up,
//! so a closed switch reads as a `0` bit and counts as *active*.

use core::fmt;

use crate::pins;

/// One of the three monitored switch inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LineId {
    Line0 = 0,
    Line1 = 1,
    Line2 = 2,
}

impl LineId {
    /// Every line, in evaluation order.
    pub const ALL: [LineId; pins::LINE_COUNT] = [Self::Line0, Self::Line1, Self::Line2];

    /// Index of this line (and of the emulate routine it drives).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Line0),
            1 => Some(Self::Line1),
            2 => Some(Self::Line2),
            _ => None,
        }
    }

    /// PORTB bit position.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Line0 => pins::LINE0_BIT,
            Self::Line1 => pins::LINE1_BIT,
            Self::Line2 => pins::LINE2_BIT,
        }
    }

    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line{}", self.index())
    }
}

/// A single PINB read. All three line levels come from the same read, so
/// they are consistent with each other for one poll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLevels(u8);

impl LineLevels {
    /// Every line high (nothing pressed).
    pub const IDLE: Self = Self(0xFF);

    pub const fn from_register(raw: u8) -> Self {
        Self(raw)
    }

    /// Build a snapshot in which exactly `active` lines read low.
    pub fn with_active(active: &[LineId]) -> Self {
        let raw = active.iter().fold(0xFF, |raw, line| raw & !line.mask());
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// `true` when the line reads low (switch closed).
    pub const fn is_active(self, line: LineId) -> bool {
        self.0 & line.mask() == 0
    }

    /// Active lines in evaluation order (0, 1, 2).
    pub fn active_lines(self) -> impl Iterator<Item = LineId> {
        LineId::ALL.into_iter().filter(move |&line| self.is_active(line))
    }
}

impl Default for LineLevels {
    fn default() -> Self {
        Self::IDLE
    }
}
