use crate::adapters::directive::{random_letters, render_directive};
use crate::domain::field::DEFAULT_NUMBER_RANGE;
use crate::domain::provider::ValueProvider;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// [`ValueProvider`] backed by the `fake` crate and a `rand` RNG.
///
/// Use [`FakeValueProvider::thread`] for ordinary randomized tests and
/// [`FakeValueProvider::seeded`] when documents must be reproducible.
#[derive(Debug, Clone)]
pub struct FakeValueProvider<R = ThreadRng> {
    rng: R,
}

impl FakeValueProvider<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for FakeValueProvider<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl FakeValueProvider<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FakeValueProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueProvider for FakeValueProvider<R> {
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(low..=high)
    }

    fn float_in_range(&mut self, min: f64, max: f64) -> f64 {
        let (min, max) = if min.is_finite() && max.is_finite() {
            (min, max)
        } else {
            (DEFAULT_NUMBER_RANGE.0 as f64, DEFAULT_NUMBER_RANGE.1 as f64)
        };
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        if low == high {
            return low;
        }
        if !(high - low).is_finite() {
            // Span overflows f64; sample on halved bounds and scale back
            let value = low + self.rng.gen::<f64>() * (high / 2.0 - low / 2.0) * 2.0;
            return value.clamp(low, high);
        }
        self.rng.gen_range(low..=high)
    }

    fn boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn letters(&mut self, len: usize) -> String {
        random_letters(len, &mut self.rng)
    }

    fn from_directive(&mut self, directive: &str) -> String {
        render_directive(directive, &mut self.rng)
    }

    fn uuid(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.gen())
            .into_uuid()
            .hyphenated()
            .to_string()
    }
}
