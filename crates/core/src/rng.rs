//! RNG module - seeded generator and 7-bag kind selection
//!
//! [`SimpleRng`] is a small LCG that plugs into the `rand` traits, so every random
//! choice in this crate (orientation, kind, bag order) can be replayed from a seed.
//!
//! [`PieceBag`] implements the "7-bag" selection: each bag holds one of each kind
//! (I, O, T, S, Z, J, L), shuffled, and is drawn until empty before refilling.

use rand::seq::SliceRandom;
use rand::{Error, Rng, RngCore};

use crate::types::{PieceKind, NUM_PIECE_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Current state (re-seeding with it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// 7-bag kind selector
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current bag of kinds
    bag: [PieceKind; NUM_PIECE_KINDS],
    /// Index into current bag
    bag_index: usize,
}

impl PieceBag {
    /// Create an exhausted bag; the first draw shuffles a fresh one
    pub fn new() -> Self {
        Self {
            bag: PieceKind::ALL,
            bag_index: NUM_PIECE_KINDS,
        }
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(rng);
        self.bag_index = 0;
    }

    /// Next kind in the current bag without drawing it
    ///
    /// `None` when the bag is exhausted (the next draw refills it).
    pub fn peek(&self) -> Option<PieceKind> {
        self.bag.get(self.bag_index).copied()
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index.min(NUM_PIECE_KINDS)..]
    }

    /// Draw the next kind, refilling from `rng` when the bag is empty
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PieceKind {
        if self.bag_index >= NUM_PIECE_KINDS {
            self.refill(rng);
        }

        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new()
    }
}
