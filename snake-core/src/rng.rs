/// A 32-bit linear congruential generator.
///
/// Exists purely to decorrelate blip placement from real time; it is
/// deterministic, seedable, reproducible across runs, and must never be used
/// for anything security-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

/// Numerical Recipes constants, chosen for good low-bit distribution at this
/// word size.
const LCG_A: u32 = 1_664_525;
const LCG_C: u32 = 1_013_904_223;

const DEFAULT_SEED: u32 = 12345;

impl Lcg {
    pub fn new() -> Self {
        Lcg::seeded(DEFAULT_SEED)
    }

    pub fn seeded(seed: u32) -> Self {
        Lcg { state: seed }
    }

    pub fn next(&mut self) -> u32 {
        self.state = LCG_A.wrapping_mul(self.state).wrapping_add(LCG_C);
        self.state
    }

    /// A value in `0..max`. Plain modulo reduction, so non-power-of-two `max`
    /// carries a slight bias towards the low end; acceptable for cosmetic
    /// placement.
    pub fn next_in_range(&mut self, max: u32) -> u32 {
        self.next() % max
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::new()
    }
}
