//! Locale-aware string ordering for text columns.
//!
//! A small multi-level comparison in the spirit of the root-locale collation
//! used by browsers: letters compare case- and accent-insensitively first, then
//! accents break ties, then case (lowercase first). Raw byte order is the final
//! tie-break so the ordering stays total.

use std::cmp::Ordering;

/// Primary-level character classes, in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

const ASCII_SYMBOLS: &[char] = &['`', '^', '+', '<', '=', '>', '|', '~', '$'];

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(&c) {
        CharClass::Punctuation
    } else {
        CharClass::Symbol
    }
}

/// Lowercase base letter and whether a diacritic was removed.
fn fold(c: char) -> (char, bool) {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let base = match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => return (other, false),
    };
    (base, true)
}

fn primary(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.chars().map(|c| (classify(c), fold(c).0))
}

fn secondary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(|c| fold(c).1)
}

fn tertiary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Compare two strings the way a user expects an alphabetical column to sort.
pub(crate) fn locale_compare(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.cmp(b))
}
