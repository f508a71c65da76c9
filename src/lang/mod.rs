/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the TI-Basic language.

*/

#[macro_use]
mod error;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;

/// Line and character index of a command, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// `[A-Zθ][A-Zθ0-9]{0,7}`
pub fn is_program_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_name_letter(c) => {}
        _ => return false,
    }
    s.chars().count() <= 8 && chars.all(|c| is_name_letter(c) || c.is_ascii_digit())
}

/// `[A-Z0-9θ]{1,2}`
pub fn is_label_name(s: &str) -> bool {
    let len = s.chars().count();
    (1..=2).contains(&len) && s.chars().all(|c| is_name_letter(c) || c.is_ascii_digit())
}

/// `∟[A-Zθ][A-Z0-9θ]{0,4}`, accepted with or without the leading `∟`.
pub fn is_list_name(s: &str) -> bool {
    let s = s.strip_prefix('∟').unwrap_or(s);
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_name_letter(c) => {}
        _ => return false,
    }
    s.chars().count() <= 5 && chars.all(|c| is_name_letter(c) || c.is_ascii_digit())
}

fn is_name_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'θ'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_names() {
        assert!(is_program_name("A"));
        assert!(is_program_name("θ1"));
        assert!(is_program_name("ABCDEFGH"));
        assert!(!is_program_name("ABCDEFGHI"));
        assert!(!is_program_name("1ABC"));
        assert!(!is_program_name("abc"));
        assert!(!is_program_name(""));
    }

    #[test]
    fn test_label_names() {
        assert!(is_label_name("A"));
        assert!(is_label_name("99"));
        assert!(is_label_name("θ0"));
        assert!(!is_label_name("ABC"));
        assert!(!is_label_name(""));
        assert!(!is_label_name("a"));
    }

    #[test]
    fn test_list_names() {
        assert!(is_list_name("∟ABC"));
        assert!(is_list_name("∟A1234"));
        assert!(!is_list_name("∟A12345"));
        assert!(!is_list_name("∟1A"));
        assert!(is_list_name("θ"));
    }
}
