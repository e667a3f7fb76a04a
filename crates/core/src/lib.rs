//! Core shape logic - pure, deterministic, and testable
//!
//! This crate models one falling piece: its per-kind geometry tables, its orientation
//! state and its four blocks. It has **zero dependencies** on a board, rendering or
//! input, so the surrounding game decides what a legal position is.
//!
//! # Module Structure
//!
//! - [`block`]: a single shared grid cell with mutable position and fixed color
//! - [`geometry`]: literal offset and bottom-block tables for the seven kinds
//! - [`shape`]: the active piece with translation and rotation
//! - [`rng`]: seeded LCG and 7-bag selection
//! - [`factory`]: spawning shapes at a configured start position
//! - [`snapshot`]: serializable copies of a shape for observers
//!
//! # Rotation Protocol
//!
//! Rotation never checks legality. The caller rotates, validates the new block
//! cells against its own board, and reverts on failure:
//!
//! ```
//! use tetris_shapes_core::{ShapeFactory, types::PieceKind};
//!
//! let mut factory = ShapeFactory::seeded(12345);
//! let mut shape = factory.spawn_kind(PieceKind::T);
//!
//! let before = shape.block_positions();
//! shape.rotate_clockwise();
//! let legal = shape.block_positions().iter().all(|&(col, _)| (0..10).contains(&col));
//! if !legal {
//!     shape.rotate_anticlockwise();
//!     assert_eq!(shape.block_positions(), before);
//! }
//! ```

pub mod block;
pub mod factory;
pub mod geometry;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use tetris_shapes_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, BlockHandle};
pub use factory::{FactoryConfig, Selection, ShapeFactory};
pub use geometry::{geometry, Geometry, GeometryError, Offset};
pub use rng::{PieceBag, SimpleRng};
pub use shape::Shape;
pub use snapshot::{BlockSnapshot, ShapeSnapshot};
