//! Locale-aware string ordering
//!
//! Builds a sort key per string so that placement labels and product names
//! order the way a Polish reader expects ("Łosoś" sorts after "Lody" and
//! before "Makaron"). Case only breaks ties.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

const ALPHABET: &str = "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzźż";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    OtherLetter,
}

/// Precomputed comparison key for one string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(Class, u32)>,
    // Accent marks of letters outside the alphabet, 0 = unaccented
    secondary: Vec<u32>,
    // 0 = lowercase or caseless, 1 = uppercase
    tertiary: Vec<u8>,
    raw: String,
}

fn alphabet_position(c: char) -> Option<u32> {
    ALPHABET.chars().position(|a| a == c).map(|pos| pos as u32)
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let mut primary = Vec::with_capacity(s.len());
        let mut secondary = Vec::with_capacity(s.len());
        let mut tertiary = Vec::with_capacity(s.len());

        // Composed form keeps "ą" or "ó" as one alphabet letter
        for c in s.nfc() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            let mut accent = 0;
            let weight = if c.is_whitespace() {
                (Class::Whitespace, 0)
            } else if let Some(d) = c.to_digit(10) {
                (Class::Digit, d)
            } else if let Some(pos) = alphabet_position(lower) {
                (Class::Letter, pos)
            } else if c.is_alphabetic() {
                // "é" sorts as "e", with the accent as a secondary difference
                let mut parts = std::iter::once(lower).nfd();
                let base = parts.next().unwrap_or(lower);
                accent = parts.next().map_or(0, |mark| mark as u32);
                match alphabet_position(base) {
                    Some(pos) => (Class::Letter, pos),
                    None => (Class::OtherLetter, base as u32),
                }
            } else {
                (Class::Punctuation, c as u32)
            };
            primary.push(weight);
            secondary.push(accent);
            tertiary.push(u8::from(c.is_uppercase()));
        }

        Self {
            primary,
            secondary,
            tertiary,
            raw: s.to_string(),
        }
    }
}

/// Compare two strings with the locale-aware key
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
