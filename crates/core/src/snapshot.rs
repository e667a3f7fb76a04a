use arrayvec::ArrayVec;
use serde::Serialize;

use crate::shape::Shape;
use crate::types::{BlockColor, Orientation, PieceKind, BLOCKS_PER_SHAPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockSnapshot {
    pub column: i32,
    pub row: i32,
    pub color: BlockColor,
}

/// Plain copy of a shape's observable state, for renderers and adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeSnapshot {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub column: i32,
    pub row: i32,
    pub blocks: ArrayVec<BlockSnapshot, BLOCKS_PER_SHAPE>,
    /// Indices into `blocks`
    pub bottom_blocks: ArrayVec<usize, BLOCKS_PER_SHAPE>,
}

impl From<&Shape> for ShapeSnapshot {
    fn from(shape: &Shape) -> Self {
        let blocks: ArrayVec<BlockSnapshot, BLOCKS_PER_SHAPE> = shape
            .blocks()
            .iter()
            .map(|b| BlockSnapshot {
                column: b.column(),
                row: b.row(),
                color: b.color(),
            })
            .collect();
        let bottom_blocks = shape
            .geometry()
            .bottom_blocks(shape.orientation())
            .iter()
            .copied()
            .filter(|&i| i < blocks.len())
            .take(BLOCKS_PER_SHAPE)
            .collect();

        Self {
            kind: shape.kind(),
            orientation: shape.orientation(),
            column: shape.column(),
            row: shape.row(),
            blocks,
            bottom_blocks,
        }
    }
}

impl ShapeSnapshot {
    /// Cells covered by the shape
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.blocks.iter().map(|b| (b.column, b.row))
    }
}
