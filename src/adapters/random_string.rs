//! Random strings over fixed character sets.

use rand::Rng;

const CHARSET_LOWER_CASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const CHARSET_UPPER_CASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CHARSET_CASE_SENSITIVE: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// `[a-z0-9]`
    LowerCase,
    /// `[A-Z0-9]`
    UpperCase,
    /// `[a-zA-Z0-9]`
    #[default]
    CaseSensitive,
}

impl Charset {
    /// Map a numeric charset code: 1 is lower case, 2 is upper case and
    /// anything else is case sensitive.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::LowerCase,
            2 => Self::UpperCase,
            _ => Self::CaseSensitive,
        }
    }

    fn alphabet(self) -> &'static [u8] {
        match self {
            Self::LowerCase => CHARSET_LOWER_CASE,
            Self::UpperCase => CHARSET_UPPER_CASE,
            Self::CaseSensitive => CHARSET_CASE_SENSITIVE,
        }
    }
}

/// Random string of `length` characters drawn from `charset`, using the
/// thread-local RNG.
pub fn generate_random_string(length: usize, charset: Charset) -> String {
    generate_random_string_with(&mut rand::thread_rng(), length, charset)
}

pub fn generate_random_string_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    charset: Charset,
) -> String {
    let alphabet = charset.alphabet();
    (0..length)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lower_case() {
        let value = generate_random_string(64, Charset::LowerCase);
        assert_eq!(value.len(), 64);
        assert!(value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_upper_case() {
        let value = generate_random_string(64, Charset::UpperCase);
        assert!(value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_case_sensitive() {
        let value = generate_random_string(64, Charset::CaseSensitive);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_zero_length() {
        assert!(generate_random_string(0, Charset::LowerCase).is_empty());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Charset::from_code(1), Charset::LowerCase);
        assert_eq!(Charset::from_code(2), Charset::UpperCase);
        assert_eq!(Charset::from_code(0), Charset::CaseSensitive);
        assert_eq!(Charset::from_code(99), Charset::CaseSensitive);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = generate_random_string_with(&mut StdRng::seed_from_u64(9), 16, Charset::UpperCase);
        let b = generate_random_string_with(&mut StdRng::seed_from_u64(9), 16, Charset::UpperCase);
        assert_eq!(a, b);
    }
}
