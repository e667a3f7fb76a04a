//! Shape module - the active piece
//!
//! A [`Shape`] owns a pivot, its current [`Orientation`] and up to four shared
//! [`Block`]s laid out by its kind's [`Geometry`]. Translations move the pivot and the
//! blocks together; `move_to` and the rotations re-derive block cells from the table.
//!
//! Nothing here looks at a board. Rotation is unconditional, so callers use a
//! two-phase protocol: rotate, check the new cells against their board, and on
//! failure rotate back (or `move_to` a known-good anchor).
//!
//! ```
//! use tetris_shapes_core::Shape;
//! use tetris_shapes_core::types::{Orientation, PieceKind};
//!
//! let mut shape = Shape::new(PieceKind::I, 3, 0, Orientation::Zero);
//! assert_eq!(shape.block_positions().as_slice(), &[(3, 0), (4, 0), (5, 0), (6, 0)]);
//!
//! shape.rotate_clockwise();
//! let blocked = shape.block_positions().iter().any(|&(_, row)| row < 0);
//! if blocked {
//!     shape.rotate_anticlockwise();
//! }
//! assert_eq!(shape.orientation(), Orientation::Zero);
//! ```

use std::fmt;
use std::rc::Rc;

use arrayvec::ArrayVec;
use log::{debug, warn};
use rand::Rng;

use crate::block::{Block, BlockHandle};
use crate::geometry::{geometry, Geometry, Offset};
use crate::types::{BlockColor, Orientation, PieceKind, BLOCKS_PER_SHAPE};

/// Block handles of a shape, in table index order
pub type Blocks = ArrayVec<BlockHandle, BLOCKS_PER_SHAPE>;

/// One falling piece
///
/// Equality compares pivots only. [`Shape::identity`] is derived from block contents
/// and is therefore not implied by equality; `Shape` deliberately has no `Hash` impl.
pub struct Shape {
    geometry: &'static Geometry,
    column: i32,
    row: i32,
    orientation: Orientation,
    blocks: Blocks,
}

impl Shape {
    /// Create a shape of `kind` with its pivot at `(column, row)`
    pub fn new(kind: PieceKind, column: i32, row: i32, orientation: Orientation) -> Self {
        Self::from_geometry(geometry(kind), column, row, orientation)
    }

    /// Create a shape with a uniformly random orientation
    pub fn with_random_orientation(kind: PieceKind, column: i32, row: i32) -> Self {
        Self::new(kind, column, row, Orientation::random())
    }

    /// Create a shape with a random orientation drawn from `rng`
    pub fn with_random_orientation_from<R: Rng + ?Sized>(
        kind: PieceKind,
        column: i32,
        row: i32,
        rng: &mut R,
    ) -> Self {
        Self::new(kind, column, row, Orientation::random_with(rng))
    }

    /// Create a shape from an arbitrary table
    ///
    /// If the table has no offsets for `orientation` the shape starts with zero
    /// blocks. That is a table defect; [`Geometry::validate`] catches it up front.
    pub fn from_geometry(
        geometry: &'static Geometry,
        column: i32,
        row: i32,
        orientation: Orientation,
    ) -> Self {
        let offsets = geometry.offsets(orientation);
        if offsets.is_empty() {
            warn!(
                "{} piece has no offsets for orientation {}, shape has no blocks",
                geometry.kind, orientation
            );
        }

        let blocks = offsets
            .iter()
            .take(BLOCKS_PER_SHAPE)
            .map(|&(dc, dr)| {
                Block::handle(column.wrapping_add(dc), row.wrapping_add(dr), geometry.color)
            })
            .collect();

        Self {
            geometry,
            column,
            row,
            orientation,
            blocks,
        }
    }

    /// Pick a kind uniformly and create it at the start position, random orientation
    pub fn random(start_column: i32, start_row: i32) -> Self {
        Self::random_from(start_column, start_row, &mut rand::thread_rng())
    }

    /// Same as [`Shape::random`] with an explicit generator
    pub fn random_from<R: Rng + ?Sized>(start_column: i32, start_row: i32, rng: &mut R) -> Self {
        let kind: PieceKind = rng.gen();
        let shape = Self::with_random_orientation_from(kind, start_column, start_row, rng);
        debug!("spawned {}", shape);
        shape
    }

    pub fn kind(&self) -> PieceKind {
        self.geometry.kind
    }

    pub fn color(&self) -> BlockColor {
        self.geometry.color
    }

    pub fn geometry(&self) -> &'static Geometry {
        self.geometry
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// Pivot as `(column, row)`
    pub fn pivot(&self) -> (i32, i32) {
        (self.column, self.row)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Shared block handles in table index order
    ///
    /// Cloning a handle gives external code write access to that block's position.
    pub fn blocks(&self) -> &[BlockHandle] {
        &self.blocks
    }

    /// Current block cells in table index order
    pub fn block_positions(&self) -> ArrayVec<(i32, i32), BLOCKS_PER_SHAPE> {
        self.blocks.iter().map(|b| b.position()).collect()
    }

    /// Table offsets for the current orientation
    pub fn offsets(&self) -> &'static [Offset] {
        self.geometry.offsets(self.orientation)
    }

    /// Blocks that sit lowest in their column for the current orientation
    ///
    /// Empty if the table has no entry for this orientation. Indices past the shape's
    /// blocks are skipped and at most four handles are returned.
    pub fn bottom_blocks(&self) -> Blocks {
        self.geometry
            .bottom_blocks(self.orientation)
            .iter()
            .filter_map(|&i| self.blocks.get(i))
            .map(Rc::clone)
            .take(BLOCKS_PER_SHAPE)
            .collect()
    }

    /// Translate pivot and every block by the same delta
    ///
    /// Coordinates wrap at the `i32` bounds, so any shift is undone by its negation.
    pub fn shift_by(&mut self, columns: i32, rows: i32) {
        self.column = self.column.wrapping_add(columns);
        self.row = self.row.wrapping_add(rows);
        for block in &self.blocks {
            block.shift_by(columns, rows);
        }
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    /// Re-anchor the pivot and re-derive every block from the table
    ///
    /// Orientation is unchanged. Unlike [`Shape::shift_by`] this also repairs block
    /// positions that external code has written since the last table lookup.
    pub fn move_to(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
        self.layout_blocks(self.orientation);
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate(true);
    }

    pub fn rotate_anticlockwise(&mut self) {
        self.rotate(false);
    }

    fn rotate(&mut self, clockwise: bool) {
        let next = Orientation::rotate(self.orientation, clockwise);
        self.layout_blocks(next);
        self.orientation = next;
    }

    /// Place blocks at pivot + offsets for `orientation`
    ///
    /// A missing table entry leaves the blocks where they are.
    fn layout_blocks(&self, orientation: Orientation) {
        let offsets = self.geometry.offsets(orientation);
        if offsets.is_empty() {
            warn!(
                "{} piece has no offsets for orientation {}, blocks left in place",
                self.geometry.kind, orientation
            );
            return;
        }
        if offsets.len() != self.blocks.len() {
            warn!(
                "{} piece has {} offsets for orientation {} but {} blocks, unmatched blocks left in place",
                self.geometry.kind,
                offsets.len(),
                orientation,
                self.blocks.len()
            );
        }
        for (block, &(dc, dr)) in self.blocks.iter().zip(offsets) {
            block.set_position(self.column.wrapping_add(dc), self.row.wrapping_add(dr));
        }
    }

    /// Whether every block sits at pivot + its table offset
    pub fn is_aligned(&self) -> bool {
        let offsets = self.offsets();
        offsets.len() == self.blocks.len()
            && self
                .blocks
                .iter()
                .zip(offsets)
                .all(|(b, &(dc, dr))| {
                    b.position() == (self.column.wrapping_add(dc), self.row.wrapping_add(dr))
                })
    }

    /// XOR of every block's identity
    ///
    /// Two shapes that compare equal (same pivot) have different identities when
    /// their orientations differ.
    pub fn identity(&self) -> u64 {
        self.blocks.iter().fold(0, |acc, b| acc ^ b.identity())
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("kind", &self.geometry.kind)
            .field("pivot", &(self.column, self.row))
            .field("orientation", &self.orientation)
            .field("blocks", &self.block_positions().as_slice())
            .finish()
    }
}

/// Cloning allocates fresh blocks; the copy shares no handles with the original.
impl Clone for Shape {
    fn clone(&self) -> Self {
        let color = self.geometry.color;
        Self {
            geometry: self.geometry,
            column: self.column,
            row: self.row,
            orientation: self.orientation,
            blocks: self
                .blocks
                .iter()
                .map(|b| Block::handle(b.column(), b.row(), color))
                .collect(),
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column && self.row == other.row
    }
}

impl Eq for Shape {}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} block facing {}:", self.kind(), self.orientation)?;
        for (i, block) in self.blocks.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, block)?;
        }
        Ok(())
    }
}
