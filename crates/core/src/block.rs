//! Block module - a single grid cell shared between a shape and its observers
//!
//! A [`Shape`](crate::shape::Shape) creates its blocks and keeps them aligned with
//! its geometry table, but the handles are reference-counted so code outside the
//! shape (a board settling a locked piece, an animation) can hold them and write
//! positions directly. Such writes are an external mutation point: the shape only
//! re-derives positions on its next `move_to` or rotation.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::types::BlockColor;

/// Shared handle to a block
pub type BlockHandle = Rc<Block>;

/// One cell with a mutable position and a fixed color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    column: Cell<i32>,
    row: Cell<i32>,
    color: BlockColor,
}

impl Block {
    pub fn new(column: i32, row: i32, color: BlockColor) -> Self {
        Self {
            column: Cell::new(column),
            row: Cell::new(row),
            color,
        }
    }

    /// Create a block already wrapped in a shared handle
    pub fn handle(column: i32, row: i32, color: BlockColor) -> BlockHandle {
        Rc::new(Self::new(column, row, color))
    }

    pub fn column(&self) -> i32 {
        self.column.get()
    }

    pub fn row(&self) -> i32 {
        self.row.get()
    }

    pub fn position(&self) -> (i32, i32) {
        (self.column.get(), self.row.get())
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn set_column(&self, column: i32) {
        self.column.set(column);
    }

    pub fn set_row(&self, row: i32) {
        self.row.set(row);
    }

    pub fn set_position(&self, column: i32, row: i32) {
        self.column.set(column);
        self.row.set(row);
    }

    /// Translate by a delta, wrapping at the `i32` bounds
    pub fn shift_by(&self, columns: i32, rows: i32) {
        self.column.set(self.column.get().wrapping_add(columns));
        self.row.set(self.row.get().wrapping_add(rows));
    }

    /// Identity contribution of this block (FNV-1a over column, row and color)
    ///
    /// Two blocks at the same cell with the same color share an identity.
    pub fn identity(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let bytes = self
            .column()
            .to_le_bytes()
            .into_iter()
            .chain(self.row().to_le_bytes())
            .chain([self.color.code()]);
        for b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
        h
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column(), self.row())
    }
}
