use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose shape of an editable number
    /// Optional minus, a digit or dot first, then digits/letters/dots
    /// Letters are tolerated after the first character only: "12a3" passes, "a123" does not
    pub static ref LOOSE_NUMBER: Regex = Regex::new(r"^-?[0-9.][0-9a-zA-Z.]*$").unwrap();

    /// Longest numeric run at the start of a loosely valid string
    /// Always matches, possibly with an empty string
    pub static ref NUMERIC_PREFIX: Regex = Regex::new(r"^-?[0-9]*\.?[0-9]*").unwrap();

    /// Leading float literal, trailing garbage ignored
    /// Examples: "12", "-3.5", ".5", "1e3", "12px"
    pub static ref FLOAT_PREFIX: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").unwrap();
}

/// Check if a trimmed, dot-normalized string has the loose shape of a number
pub fn looks_like_number(s: &str) -> bool {
    LOOSE_NUMBER.is_match(s)
}
