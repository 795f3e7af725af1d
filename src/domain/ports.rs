use rand::{Rng, RngCore};

/// Supplies uniformly distributed decimal digits to the generator.
///
/// Every [`RngCore`] is a digit source, so callers normally hand in a
/// `StdRng` (seeded for reproducible output) or `rand::thread_rng()`.
pub trait DigitSource {
    /// Returns a digit in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

impl<R: RngCore> DigitSource for R {
    fn next_digit(&mut self) -> u8 {
        self.gen_range(0..=9)
    }
}
