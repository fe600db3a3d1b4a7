pub const DEFAULT_SEED: u32 = 1;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// 32-bit linear congruential generator.
///
/// Each draw advances the state and returns the new state, so the sequence
/// for a given seed is fixed across runs and platforms.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Draws a value in `[0, bound)` by plain modulo reduction.
    ///
    /// `bound` must be non-zero.
    #[inline(always)]
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
