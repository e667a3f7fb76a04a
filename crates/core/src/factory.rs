//! Factory module - spawning shapes at the start position
//!
//! # Environment Variables
//!
//! [`FactoryConfig::from_env`] reads:
//!
//! - `TETRIS_SHAPES_SEED`: RNG seed (u32). Unset means a fresh seed per factory
//! - `TETRIS_SHAPES_START_COLUMN`: pivot column for new shapes (default: 4)
//! - `TETRIS_SHAPES_START_ROW`: pivot row for new shapes (default: 0)
//! - `TETRIS_SHAPES_SELECTION`: `uniform` or `bag` (default: uniform)
//!
//! Unparseable values fall back to the default.

use log::{debug, info};
use rand::Rng;

use crate::rng::{PieceBag, SimpleRng};
use crate::shape::Shape;
use crate::types::{Orientation, PieceKind, DEFAULT_START_COLUMN, DEFAULT_START_ROW};

/// How the next kind is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Independent uniform draw over all seven kinds
    Uniform,
    /// Shuffled 7-bag
    Bag,
}

impl Selection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Some(Selection::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Selection::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Uniform => "uniform",
            Selection::Bag => "bag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConfig {
    pub seed: Option<u32>,
    pub start_column: i32,
    pub start_row: i32,
    pub selection: Selection,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_column: DEFAULT_START_COLUMN,
            start_row: DEFAULT_START_ROW,
            selection: Selection::Uniform,
        }
    }
}

impl FactoryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SHAPES_SEED").and_then(|s| s.trim().parse().ok());
        let start_column = lookup("TETRIS_SHAPES_START_COLUMN")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.start_column);
        let start_row = lookup("TETRIS_SHAPES_START_ROW")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.start_row);
        let selection = lookup("TETRIS_SHAPES_SELECTION")
            .and_then(|s| Selection::from_str(&s))
            .unwrap_or(defaults.selection);

        Self {
            seed,
            start_column,
            start_row,
            selection,
        }
    }
}

/// Spawns shapes at a fixed start position
#[derive(Debug, Clone)]
pub struct ShapeFactory {
    config: FactoryConfig,
    rng: SimpleRng,
    bag: PieceBag,
}

impl ShapeFactory {
    pub fn new(config: FactoryConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_entropy(),
        };
        info!(
            "shape factory: start ({}, {}), {} selection, rng state {}",
            config.start_column,
            config.start_row,
            config.selection.as_str(),
            rng.state()
        );
        Self {
            config,
            rng,
            bag: PieceBag::new(),
        }
    }

    /// Deterministic factory with default placement and uniform selection
    pub fn seeded(seed: u32) -> Self {
        Self::new(FactoryConfig {
            seed: Some(seed),
            ..FactoryConfig::default()
        })
    }

    pub fn from_env() -> Self {
        Self::new(FactoryConfig::from_env())
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Choose the next kind according to the selection mode
    pub fn next_kind(&mut self) -> PieceKind {
        match self.config.selection {
            Selection::Uniform => self.rng.gen(),
            Selection::Bag => self.bag.draw(&mut self.rng),
        }
    }

    /// Next shape at the start position with a random orientation
    pub fn spawn(&mut self) -> Shape {
        let kind = self.next_kind();
        self.spawn_kind(kind)
    }

    /// Shape of the given kind at the start position with a random orientation
    pub fn spawn_kind(&mut self, kind: PieceKind) -> Shape {
        let orientation = Orientation::random_with(&mut self.rng);
        self.spawn_facing(kind, orientation)
    }

    /// Shape of the given kind and orientation at the start position
    pub fn spawn_facing(&self, kind: PieceKind, orientation: Orientation) -> Shape {
        let shape = Shape::new(
            kind,
            self.config.start_column,
            self.config.start_row,
            orientation,
        );
        debug!("spawned {}", shape);
        shape
    }
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new(FactoryConfig::default())
    }
}
