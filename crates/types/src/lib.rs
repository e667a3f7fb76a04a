//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the workspace.
//! Nothing in here knows about block geometry or shape state; these are the plain
//! vocabulary the core crate and any surrounding game speak.
//!
//! # Grid Convention
//!
//! Positions live on an unbounded grid of signed `(column, row)` pairs:
//!
//! - **Columns** grow to the right
//! - **Rows** grow downward (lowering a piece adds one to its row)
//! - **Default start**: column 4, row 0
//!
//! # Orientation Cycle
//!
//! | Orientation | Clockwise | Anticlockwise |
//! |-------------|-----------|---------------|
//! | 0   | 90  | 270 |
//! | 90  | 180 | 0   |
//! | 180 | 270 | 90  |
//! | 270 | 0   | 180 |
//!
//! # Examples
//!
//! ```
//! use tetris_shapes_types::{Orientation, PieceKind, BlockColor};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(parsed.color(), BlockColor::Magenta);
//!
//! // Rotate with wraparound
//! assert_eq!(Orientation::rotate(Orientation::TwoSeventy, true), Orientation::Zero);
//! assert_eq!(Orientation::rotate(Orientation::Zero, false), Orientation::TwoSeventy);
//! ```

use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of blocks making up every shape
pub const BLOCKS_PER_SHAPE: usize = 4;

/// Number of rotational facings
pub const NUM_ORIENTATIONS: usize = 4;

/// Number of piece kinds
pub const NUM_PIECE_KINDS: usize = 7;

/// Default start column for freshly spawned shapes
pub const DEFAULT_START_COLUMN: i32 = 4;

/// Default start row for freshly spawned shapes
pub const DEFAULT_START_ROW: i32 = 0;

/// Rotational facing of a shape
///
/// - **Zero**: spawn facing (0°)
/// - **Ninety**: rotated 90° clockwise
/// - **OneEighty**: rotated 180°
/// - **TwoSeventy**: rotated 270° clockwise (90° anticlockwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "90")]
    Ninety,
    #[serde(rename = "180")]
    OneEighty,
    #[serde(rename = "270")]
    TwoSeventy,
}

impl Orientation {
    /// All facings in clockwise order starting from `Zero`
    pub const ALL: [Orientation; NUM_ORIENTATIONS] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Draw a facing uniformly from the thread-local generator
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Draw a facing uniformly from the given generator
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }

    /// Next facing in the given direction, wrapping at both ends
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_shapes_types::Orientation;
    ///
    /// assert_eq!(Orientation::rotate(Orientation::Zero, true), Orientation::Ninety);
    /// assert_eq!(Orientation::rotate(Orientation::TwoSeventy, true), Orientation::Zero);
    /// assert_eq!(Orientation::rotate(Orientation::Zero, false), Orientation::TwoSeventy);
    /// ```
    pub fn rotate(orientation: Orientation, clockwise: bool) -> Self {
        if clockwise {
            orientation.rotate_cw()
        } else {
            orientation.rotate_ccw()
        }
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Rotate anticlockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    /// Position in the clockwise cycle (0..4)
    pub fn index(&self) -> usize {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 1,
            Orientation::OneEighty => 2,
            Orientation::TwoSeventy => 3,
        }
    }

    /// Facing at the given cycle position, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Clockwise rotation in degrees
    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }

    /// Parse facing from its degree label ("0", "90", "180", "270")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(Orientation::Zero),
            "90" => Some(Orientation::Ninety),
            "180" => Some(Orientation::OneEighty),
            "270" => Some(Orientation::TwoSeventy),
            _ => None,
        }
    }

    /// Degree label
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Zero => "0",
            Orientation::Ninety => "90",
            Orientation::OneEighty => "180",
            Orientation::TwoSeventy => "270",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::ALL[rng.gen_range(0..NUM_ORIENTATIONS)]
    }
}

/// The seven piece kinds
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, 4-in-a-line
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in declaration order
    pub const ALL: [PieceKind; NUM_PIECE_KINDS] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// Accepts the single letter or the long name ("line", "square").
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_shapes_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Square"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" | "line" => Some(PieceKind::I),
            "o" | "square" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::I => "line",
            PieceKind::O => "square",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Fixed block color for this kind
    pub fn color(&self) -> BlockColor {
        match self {
            PieceKind::I => BlockColor::Cyan,
            PieceKind::O => BlockColor::Yellow,
            PieceKind::T => BlockColor::Magenta,
            PieceKind::S => BlockColor::Green,
            PieceKind::Z => BlockColor::Red,
            PieceKind::J => BlockColor::Blue,
            PieceKind::L => BlockColor::Orange,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Distribution<PieceKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.gen_range(0..NUM_PIECE_KINDS)]
    }
}

/// Color label carried by every block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockColor {
    Cyan,
    Yellow,
    Magenta,
    Green,
    Red,
    Blue,
    Orange,
}

impl BlockColor {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Cyan => "cyan",
            BlockColor::Yellow => "yellow",
            BlockColor::Magenta => "magenta",
            BlockColor::Green => "green",
            BlockColor::Red => "red",
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
        }
    }

    /// Small stable code (1-7), 0 is left for "empty" in consumers' cell grids
    pub fn code(&self) -> u8 {
        match self {
            BlockColor::Cyan => 1,
            BlockColor::Yellow => 2,
            BlockColor::Magenta => 3,
            BlockColor::Green => 4,
            BlockColor::Red => 5,
            BlockColor::Blue => 6,
            BlockColor::Orange => 7,
        }
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
