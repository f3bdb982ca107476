//! Kleiner Pseudo-Zufallsgenerator (xorshift32)
//!
//! Reicht für das Mischen der Palette. Der Seed kommt auf dem
//! Target vom Hardware-RNG, in Tests ist er fest.

/// Ersatz-Seed, weil xorshift mit 0 nie wieder von 0 wegkommt
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Zufallszahl in `0..bound` (`bound` muss > 0 sein)
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
