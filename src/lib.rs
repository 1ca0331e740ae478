//! # Pro Scout
//!
//! Football player-card analysis: position ratings, body and potential
//! analysis, and role-based development plans.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (attributes, player info, results)
//! - **catalog**: Static weights, roles, face stats and labels
//! - **calculate**: The pure analysis engine
//! - **agents**: AI-powered card scanning
//! - **profile**: Player profile files
//! - **config**: Configuration loading and validation

pub mod agents;
pub mod calculate;
pub mod catalog;
pub mod config;
pub mod models;
pub mod profile;

pub use models::*;

use regex::Regex;
use std::sync::OnceLock;

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(\.\d+)?").expect("valid decimal pattern"))
}

/// Parse the first number in a free-text measurement (e.g. "1,85 m", "78kg").
///
/// The first comma is read as a decimal separator.
pub fn parse_first_number(s: &str) -> Option<f64> {
    let cleaned = s.replacen(',', ".", 1);
    decimal_pattern()
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
}

/// Every number in a free-text range such as "82-86" or "82 86".
pub fn parse_numbers(s: &str) -> Vec<f64> {
    decimal_pattern()
        .find_iter(s)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// The first run of digits as an integer (e.g. "17 years" -> 17).
pub fn parse_first_integer(s: &str) -> Option<u32> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: String = s[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Round half up, matching how card ratings are rounded in game.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_number_plain() {
        assert_eq!(parse_first_number("180"), Some(180.0));
    }

    #[test]
    fn test_parse_first_number_decimal_comma() {
        assert_eq!(parse_first_number("1,85 m"), Some(1.85));
    }

    #[test]
    fn test_parse_first_number_with_suffix() {
        assert_eq!(parse_first_number("78kg"), Some(78.0));
        assert_eq!(parse_first_number("approx. 75.5 kg"), Some(75.5));
    }

    #[test]
    fn test_parse_first_number_invalid() {
        assert_eq!(parse_first_number("abc"), None);
        assert_eq!(parse_first_number(""), None);
    }

    #[test]
    fn test_parse_numbers_range() {
        assert_eq!(parse_numbers("82-86"), vec![82.0, 86.0]);
        assert_eq!(parse_numbers("82 - 86"), vec![82.0, 86.0]);
        assert_eq!(parse_numbers("85"), vec![85.0]);
        assert!(parse_numbers("").is_empty());
    }

    #[test]
    fn test_parse_first_integer() {
        assert_eq!(parse_first_integer("17"), Some(17));
        assert_eq!(parse_first_integer("age 19 (born 2006)"), Some(19));
        assert_eq!(parse_first_integer("unknown"), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(84.5), 85.0);
        assert_eq!(round_half_up(84.49), 84.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }
}
