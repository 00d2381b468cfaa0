//! Numeric-aware name comparison.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Punctuation
    }
}

/// Compares two names the way a person reads them.
///
/// Runs of ASCII digits compare by numeric value, so `"File 2"` sorts before
/// `"File 10"`. Letters compare by their base form first, ignoring case and
/// accents, so `"éclair"` sorts before `"fig"`. Remaining ties are broken by
/// accents (unaccented first), then by case (lowercase first), then by plain
/// string order, which makes the ordering total.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    compare_folded(&base_letters(a), &base_letters(b))
        .then_with(|| compare_folded(&decomposed(a), &decomposed(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn decomposed(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.nfd().collect())
    }
}

/// The canonical decomposition with combining marks removed.
fn base_letters(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.nfd().filter(|c| !is_combining_mark(*c)).collect())
    }
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        let (l, r) = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => (l, r),
        };

        if l.is_ascii_digit() && r.is_ascii_digit() {
            let ordering = compare_digit_runs(&take_digits(&mut left), &take_digits(&mut right));
            if ordering != Ordering::Equal {
                return ordering;
            }
            continue;
        }

        let ordering = classify(l)
            .cmp(&classify(r))
            .then_with(|| l.to_lowercase().cmp(r.to_lowercase()));
        if ordering != Ordering::Equal {
            return ordering;
        }
        left.next();
        right.next();
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

// Leading zeros do not change the value; "007" and "7" tie here.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (l, r) in a.chars().zip(b.chars()) {
        if l != r && l.to_lowercase().eq(r.to_lowercase()) {
            return if l.is_lowercase() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
    }
    Ordering::Equal
}
