//! RNG module - deterministic randomness for shape draws and pile growth.
//!
//! A simple LCG keeps the whole simulation reproducible from one seed, which
//! is what the tests lean on. Uses constants from Numerical Recipes.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform 50% coin flip.
    ///
    /// Decides per-column pile growth. Uses a high bit; the low bits of an
    /// LCG alternate with a short period.
    pub fn coin_flip(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }

    /// Pick one of the six catalog shapes uniformly at random.
    pub fn random_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    /// Current internal state (for reseeding a follow-up session).
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
