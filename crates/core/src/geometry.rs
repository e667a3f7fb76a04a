//! Geometry module - per-kind block offset tables
//!
//! Every piece kind carries one literal table: for each orientation, the four block
//! offsets relative to the shape's pivot, and the indices of the blocks that sit lowest
//! in their column (the ones an external landing check has to look at).
//!
//! Block indices are stable across orientations: block 0 of the T piece is the same
//! logical cell whichever way the piece faces, so the tables below are each facing's
//! clockwise rotation of the previous one, not a re-sorted cell list.
//!
//! Offsets are `(column_delta, row_delta)` with rows growing downward.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{BlockColor, Orientation, PieceKind, BLOCKS_PER_SHAPE, NUM_ORIENTATIONS};

/// Offset of a single block relative to the pivot
pub type Offset = (i32, i32);

/// Index of a block within a shape (0..4)
pub type BlockIndex = usize;

/// Lookup tables for one piece kind
///
/// An empty slice stands for an undefined entry. Lookups hand it back as-is and
/// [`Geometry::validate`] reports it.
#[derive(Debug)]
pub struct Geometry {
    pub kind: PieceKind,
    pub color: BlockColor,
    /// Indexed by [`Orientation::index`]
    pub offsets: [&'static [Offset]; NUM_ORIENTATIONS],
    /// Indexed by [`Orientation::index`]
    pub bottom_blocks: [&'static [BlockIndex]; NUM_ORIENTATIONS],
}

/// Defect found in a geometry table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{kind} piece has no offsets for orientation {orientation}")]
    MissingOffsets {
        kind: PieceKind,
        orientation: Orientation,
    },
    #[error("{kind} piece facing {orientation} has {count} offsets, expected 4")]
    WrongBlockCount {
        kind: PieceKind,
        orientation: Orientation,
        count: usize,
    },
    #[error("{kind} piece facing {orientation} puts blocks {first} and {second} on the same cell")]
    DuplicateOffset {
        kind: PieceKind,
        orientation: Orientation,
        first: BlockIndex,
        second: BlockIndex,
    },
    #[error("{kind} piece has no bottom blocks for orientation {orientation}")]
    MissingBottomBlocks {
        kind: PieceKind,
        orientation: Orientation,
    },
    #[error("{kind} piece facing {orientation} names bottom block {index}, which does not exist")]
    BottomIndexOutOfRange {
        kind: PieceKind,
        orientation: Orientation,
        index: BlockIndex,
    },
    #[error("{kind} piece facing {orientation} lists bottom block {index} more than once")]
    DuplicateBottomBlock {
        kind: PieceKind,
        orientation: Orientation,
        index: BlockIndex,
    },
    #[error("{kind} piece facing {orientation} lists bottom blocks {found:?}, lowest blocks are {expected:?}")]
    InconsistentBottomBlocks {
        kind: PieceKind,
        orientation: Orientation,
        expected: Vec<BlockIndex>,
        found: Vec<BlockIndex>,
    },
}

impl Geometry {
    /// Block offsets for a facing (empty if the entry is undefined)
    pub fn offsets(&self, orientation: Orientation) -> &'static [Offset] {
        self.offsets[orientation.index()]
    }

    /// Bottom block indices for a facing (empty if the entry is undefined)
    pub fn bottom_blocks(&self, orientation: Orientation) -> &'static [BlockIndex] {
        self.bottom_blocks[orientation.index()]
    }

    /// Check every facing of this table
    ///
    /// Reports the first defect found, walking facings in clockwise order.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for orientation in Orientation::ALL {
            self.validate_orientation(orientation)?;
        }
        Ok(())
    }

    fn validate_orientation(&self, orientation: Orientation) -> Result<(), GeometryError> {
        let kind = self.kind;
        let offsets = self.offsets(orientation);

        if offsets.is_empty() {
            return Err(GeometryError::MissingOffsets { kind, orientation });
        }
        if offsets.len() != BLOCKS_PER_SHAPE {
            return Err(GeometryError::WrongBlockCount {
                kind,
                orientation,
                count: offsets.len(),
            });
        }
        for (first, a) in offsets.iter().enumerate() {
            if let Some(second) = offsets.iter().skip(first + 1).position(|b| b == a) {
                return Err(GeometryError::DuplicateOffset {
                    kind,
                    orientation,
                    first,
                    second: first + 1 + second,
                });
            }
        }

        let bottom = self.bottom_blocks(orientation);
        if bottom.is_empty() {
            return Err(GeometryError::MissingBottomBlocks { kind, orientation });
        }
        if let Some(&index) = bottom.iter().find(|&&i| i >= offsets.len()) {
            return Err(GeometryError::BottomIndexOutOfRange {
                kind,
                orientation,
                index,
            });
        }

        for (i, &index) in bottom.iter().enumerate() {
            if bottom[i + 1..].contains(&index) {
                return Err(GeometryError::DuplicateBottomBlock {
                    kind,
                    orientation,
                    index,
                });
            }
        }

        let expected: Vec<BlockIndex> = lowest_blocks(offsets).into_iter().collect();
        let mut sorted = bottom.to_vec();
        sorted.sort_unstable();
        if sorted != expected {
            return Err(GeometryError::InconsistentBottomBlocks {
                kind,
                orientation,
                expected,
                found: bottom.to_vec(),
            });
        }

        Ok(())
    }
}

/// Indices of the blocks with the greatest row delta in their column, ascending
pub fn lowest_blocks(offsets: &[Offset]) -> ArrayVec<BlockIndex, BLOCKS_PER_SHAPE> {
    offsets
        .iter()
        .enumerate()
        .filter(|&(_, &(col, row))| {
            !offsets
                .iter()
                .any(|&(other_col, other_row)| other_col == col && other_row > row)
        })
        .map(|(i, _)| i)
        .take(BLOCKS_PER_SHAPE)
        .collect()
}

/// Get the table for a piece kind
pub fn geometry(kind: PieceKind) -> &'static Geometry {
    match kind {
        PieceKind::I => &LINE,
        PieceKind::O => &SQUARE,
        PieceKind::T => &T_SHAPE,
        PieceKind::S => &S_SHAPE,
        PieceKind::Z => &Z_SHAPE,
        PieceKind::J => &J_SHAPE,
        PieceKind::L => &L_SHAPE,
    }
}

/// Block offsets for a piece kind and orientation
pub fn offsets(kind: PieceKind, orientation: Orientation) -> &'static [Offset] {
    geometry(kind).offsets(orientation)
}

/// Bottom block indices for a piece kind and orientation
pub fn bottom_blocks(kind: PieceKind, orientation: Orientation) -> &'static [BlockIndex] {
    geometry(kind).bottom_blocks(orientation)
}

/// I piece: horizontal on the pivot row at 0°
static LINE: Geometry = Geometry {
    kind: PieceKind::I,
    color: BlockColor::Cyan,
    offsets: [
        &[(0, 0), (1, 0), (2, 0), (3, 0)],
        &[(2, -1), (2, 0), (2, 1), (2, 2)],
        &[(3, 1), (2, 1), (1, 1), (0, 1)],
        &[(1, 2), (1, 1), (1, 0), (1, -1)],
    ],
    bottom_blocks: [&[0, 1, 2, 3], &[3], &[0, 1, 2, 3], &[0]],
};

/// O piece (same cells for all orientations)
static SQUARE: Geometry = Geometry {
    kind: PieceKind::O,
    color: BlockColor::Yellow,
    offsets: [
        &[(0, 0), (1, 0), (0, 1), (1, 1)],
        &[(0, 0), (1, 0), (0, 1), (1, 1)],
        &[(0, 0), (1, 0), (0, 1), (1, 1)],
        &[(0, 0), (1, 0), (0, 1), (1, 1)],
    ],
    bottom_blocks: [&[2, 3], &[2, 3], &[2, 3], &[2, 3]],
};

static T_SHAPE: Geometry = Geometry {
    kind: PieceKind::T,
    color: BlockColor::Magenta,
    offsets: [
        &[(1, 0), (0, 1), (1, 1), (2, 1)],
        &[(2, 1), (1, 0), (1, 1), (1, 2)],
        &[(1, 2), (2, 1), (1, 1), (0, 1)],
        &[(0, 1), (1, 2), (1, 1), (1, 0)],
    ],
    bottom_blocks: [&[1, 2, 3], &[0, 3], &[0, 1, 3], &[0, 1]],
};

static S_SHAPE: Geometry = Geometry {
    kind: PieceKind::S,
    color: BlockColor::Green,
    offsets: [
        &[(1, 0), (2, 0), (0, 1), (1, 1)],
        &[(2, 1), (2, 2), (1, 0), (1, 1)],
        &[(1, 2), (0, 2), (2, 1), (1, 1)],
        &[(0, 1), (0, 0), (1, 2), (1, 1)],
    ],
    bottom_blocks: [&[1, 2, 3], &[1, 3], &[0, 1, 2], &[0, 2]],
};

static Z_SHAPE: Geometry = Geometry {
    kind: PieceKind::Z,
    color: BlockColor::Red,
    offsets: [
        &[(0, 0), (1, 0), (1, 1), (2, 1)],
        &[(2, 0), (2, 1), (1, 1), (1, 2)],
        &[(2, 2), (1, 2), (1, 1), (0, 1)],
        &[(0, 2), (0, 1), (1, 1), (1, 0)],
    ],
    bottom_blocks: [&[0, 2, 3], &[1, 3], &[0, 1, 3], &[0, 2]],
};

static J_SHAPE: Geometry = Geometry {
    kind: PieceKind::J,
    color: BlockColor::Blue,
    offsets: [
        &[(0, 0), (0, 1), (1, 1), (2, 1)],
        &[(2, 0), (1, 0), (1, 1), (1, 2)],
        &[(2, 2), (2, 1), (1, 1), (0, 1)],
        &[(0, 2), (1, 2), (1, 1), (1, 0)],
    ],
    bottom_blocks: [&[1, 2, 3], &[0, 3], &[0, 2, 3], &[0, 1]],
};

static L_SHAPE: Geometry = Geometry {
    kind: PieceKind::L,
    color: BlockColor::Orange,
    offsets: [
        &[(2, 0), (0, 1), (1, 1), (2, 1)],
        &[(2, 2), (1, 0), (1, 1), (1, 2)],
        &[(0, 2), (2, 1), (1, 1), (0, 1)],
        &[(0, 0), (1, 2), (1, 1), (1, 0)],
    ],
    bottom_blocks: [&[1, 2, 3], &[0, 3], &[0, 1, 2], &[0, 1]],
};
