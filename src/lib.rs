//! Tetris shapes (workspace facade crate).
//!
//! Re-exports `tetris_shapes::{core, types}` from the crates under `crates/` and adds
//! the startup table check.

pub use tetris_shapes_core as core;
pub use tetris_shapes_types as types;

pub mod check;

pub use check::check_geometry;
