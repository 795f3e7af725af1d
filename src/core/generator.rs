use crate::core::check_digit::append_check_digits;
use crate::domain::model::{CanonicalForm, Cpf, BASE_LEN};
use crate::domain::ports::DigitSource;
use crate::utils::error::{CpfError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_REDRAWS: u32 = 8;

/// Produces random valid identifiers from an owned digit source.
///
/// A base whose nine digits are all the same is redrawn, because the
/// completed identifier would be rejected by the validator. Digits outside
/// `0..=9` from a misbehaving source are reduced modulo 10.
pub struct Generator<S: DigitSource> {
    source: S,
}

impl<S: DigitSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn generate_cpf(&mut self) -> Cpf {
        let mut base = self.draw_base();
        let mut redraws = 0;
        while is_repeated(&base) && redraws < MAX_REDRAWS {
            redraws += 1;
            tracing::debug!(redraws, "redrawing repeated-digit base");
            base = self.draw_base();
        }

        // A source stuck on one digit still has to terminate.
        if is_repeated(&base) {
            tracing::debug!("source keeps repeating one digit, bumping the last base digit");
            base[BASE_LEN - 1] = (base[BASE_LEN - 1] + 1) % 10;
        }

        Cpf::from_digits(append_check_digits(base))
    }

    /// Returns a new identifier, punctuated when `formatted` is set.
    pub fn generate(&mut self, formatted: bool) -> String {
        self.generate_cpf()
            .render(CanonicalForm::from_formatted(formatted))
    }

    pub fn generate_many(&mut self, count: usize, form: CanonicalForm) -> Vec<String> {
        (0..count).map(|_| self.generate_cpf().render(form)).collect()
    }

    fn draw_base(&mut self) -> [u8; BASE_LEN] {
        let mut base = [0u8; BASE_LEN];
        for digit in base.iter_mut() {
            *digit = self.source.next_digit() % 10;
        }
        base
    }
}

impl Generator<StdRng> {
    /// Reproducible generator: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

/// Completes a caller-chosen 9-digit base with its two check digits.
pub fn complete(base: &str) -> Result<Cpf> {
    if base.chars().count() != BASE_LEN {
        return Err(CpfError::InvalidBase {
            message: format!("expected {} digits, got {}", BASE_LEN, base.chars().count()),
        });
    }

    let mut digits = [0u8; BASE_LEN];
    for (position, (slot, c)) in digits.iter_mut().zip(base.chars()).enumerate() {
        *slot = c.to_digit(10).ok_or_else(|| CpfError::InvalidInput {
            message: format!("'{}' at position {} is not a decimal digit", c, position),
        })? as u8;
    }

    if is_repeated(&digits) {
        return Err(CpfError::InvalidBase {
            message: "a base of one repeated digit never yields a valid identifier".to_string(),
        });
    }

    Ok(Cpf::from_digits(append_check_digits(digits)))
}

/// Generates one identifier with the calling thread's RNG.
pub fn generate(formatted: bool) -> String {
    Generator::new(rand::thread_rng()).generate(formatted)
}

fn is_repeated(base: &[u8]) -> bool {
    base.iter().all(|d| *d == base[0])
}
