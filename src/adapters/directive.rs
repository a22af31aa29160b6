//! Generation directives for string fields.
//!
//! A directive is free text with `{token}` placeholders that are replaced by
//! fake data, e.g. `"{firstname}.{lastname}@example.com"`. Outside of braces
//! `#` becomes a random digit and `?` a random lowercase letter.
//!
//! Supported tokens:
//!
//! | token | value |
//! |---|---|
//! | `firstname`, `lastname`, `name`, `title`, `username` | person data |
//! | `email`, `phone` | contact data |
//! | `street`, `city`, `state`, `country`, `zip` / `postcode` | address data |
//! | `word`, `sentence`, `paragraph` | lorem text |
//! | `uuid`, `bool`, `digit`, `letter` | primitives |
//! | `number:lo,hi` | integer in `[lo, hi]` (default `[0, 100]`) |
//! | `letters:n` | `n` random letters |
//!
//! Unknown tokens are kept verbatim, braces included.

use fake::faker::address::en::{CityName, CountryName, PostCode, StateAbbr, StreetName};
use fake::faker::internet::en::{SafeEmail, Username};
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::faker::name::en::{FirstName, LastName, Name, Title};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Render `directive`, drawing all randomness from `rng`.
pub fn render_directive<R: Rng + ?Sized>(directive: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(directive.len());
    let mut rest = directive;

    while let Some(c) = rest.chars().next() {
        match c {
            '{' => match rest.find('}') {
                Some(end) => {
                    let token = &rest[1..end];
                    match expand_token(token, rng) {
                        Some(value) => result.push_str(&value),
                        None => result.push_str(&rest[..=end]),
                    }
                    rest = &rest[end + 1..];
                    continue;
                }
                None => {
                    // Unterminated placeholder
                    result.push_str(rest);
                    break;
                }
            },
            '#' => result.push(char::from(b'0' + rng.gen_range(0..10u8))),
            '?' => result.push(char::from(rng.gen_range(b'a'..=b'z'))),
            other => result.push(other),
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}

/// `len` random ASCII letters, mixed case.
pub fn random_letters<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(LETTERS[rng.gen_range(0..LETTERS.len())]))
        .collect()
}

fn expand_token<R: Rng + ?Sized>(token: &str, rng: &mut R) -> Option<String> {
    let (name, args) = match token.split_once(':') {
        Some((name, args)) => (name.trim(), Some(args.trim())),
        None => (token.trim(), None),
    };

    let value = match name.to_ascii_lowercase().as_str() {
        "firstname" => FirstName().fake_with_rng::<String, _>(rng),
        "lastname" => LastName().fake_with_rng::<String, _>(rng),
        "name" => Name().fake_with_rng::<String, _>(rng),
        "title" => Title().fake_with_rng::<String, _>(rng),
        "username" => Username().fake_with_rng::<String, _>(rng),
        "email" => SafeEmail().fake_with_rng::<String, _>(rng),
        "phone" => PhoneNumber().fake_with_rng::<String, _>(rng),
        "street" => StreetName().fake_with_rng::<String, _>(rng),
        "city" => CityName().fake_with_rng::<String, _>(rng),
        "state" => StateAbbr().fake_with_rng::<String, _>(rng),
        "country" => CountryName().fake_with_rng::<String, _>(rng),
        "zip" | "postcode" => PostCode().fake_with_rng::<String, _>(rng),
        "word" => Word().fake_with_rng::<String, _>(rng),
        "sentence" => Sentence(3..8).fake_with_rng::<String, _>(rng),
        "paragraph" => Paragraph(1..3).fake_with_rng::<String, _>(rng),
        "uuid" => uuid::Builder::from_random_bytes(rng.gen())
            .into_uuid()
            .hyphenated()
            .to_string(),
        "bool" => rng.gen_bool(0.5).to_string(),
        "digit" => rng.gen_range(0..10).to_string(),
        "letter" => random_letters(1, rng),
        "number" => {
            let (min, max) = match args {
                Some(args) => parse_bounds(args)?,
                None => (0, 100),
            };
            rng.gen_range(min.min(max)..=min.max(max)).to_string()
        }
        "letters" => {
            let len = args?.parse::<usize>().ok()?;
            random_letters(len, rng)
        }
        _ => return None,
    };

    Some(value)
}

fn parse_bounds(args: &str) -> Option<(i64, i64)> {
    let (min, max) = args.split_once(',')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}
