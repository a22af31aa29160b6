/// Source of randomized primitive values used by the evaluator.
///
/// Production code uses [`crate::adapters::fake_provider::FakeValueProvider`];
/// tests can swap in a deterministic implementation.
pub trait ValueProvider {
    /// Integer in `[min, max]`, both inclusive.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;

    /// Float in `[min, max]`.
    fn float_in_range(&mut self, min: f64, max: f64) -> f64;

    fn boolean(&mut self) -> bool;

    /// Exactly `len` ASCII letters.
    fn letters(&mut self, len: usize) -> String;

    /// Render a generation directive such as `"{firstname} {lastname}"`.
    fn from_directive(&mut self, directive: &str) -> String;

    /// Hyphenated v4 UUID.
    fn uuid(&mut self) -> String;
}

impl<P: ValueProvider + ?Sized> ValueProvider for &mut P {
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        (**self).int_in_range(min, max)
    }

    fn float_in_range(&mut self, min: f64, max: f64) -> f64 {
        (**self).float_in_range(min, max)
    }

    fn boolean(&mut self) -> bool {
        (**self).boolean()
    }

    fn letters(&mut self, len: usize) -> String {
        (**self).letters(len)
    }

    fn from_directive(&mut self, directive: &str) -> String {
        (**self).from_directive(directive)
    }

    fn uuid(&mut self) -> String {
        (**self).uuid()
    }
}
