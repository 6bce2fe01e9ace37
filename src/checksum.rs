//! Weighted modulo 103 check symbol.

/// Divisor of the Code 128 check symbol.
pub const MODULUS: u32 = 103;

/// Running `value × weight` sum over every emitted symbol.
///
/// The start symbol and the symbol right after it both carry weight 1, and
/// each following symbol one more than the previous one. Only the weight
/// modulo 103 matters, so that is what gets multiplied.
#[derive(Debug, Clone, Default)]
pub struct Checksum {
    sum: u32,
    position: u64,
}

impl Checksum {
    pub const fn new() -> Self {
        Self { sum: 0, position: 0 }
    }

    /// Folds `value` in and returns the weight it was given, reduced
    /// modulo 103.
    pub fn push(&mut self, value: u8) -> u32 {
        let weight = (self.position.max(1) % MODULUS as u64) as u32;
        self.sum = (self.sum + value as u32 * weight) % MODULUS;
        self.position += 1;
        weight
    }

    /// Number of symbols folded in so far.
    #[inline]
    pub const fn count(&self) -> u64 {
        self.position
    }

    /// Consumes the accumulator and returns the check symbol value.
    #[inline]
    pub const fn finish(self) -> u8 {
        (self.sum % MODULUS) as u8
    }
}
