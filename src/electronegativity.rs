//! # Electronegativity Difference Module
//!
//! ## Aim
//! Resolves a short user-typed string into exactly two chemical element
//! symbols, computes the Pauling electronegativity difference between them
//! and classifies the bond as nonpolar covalent, polar covalent or ionic.
//!
//! ## Main Data Structures and Logic
//! - `resolve()`: greedy longest-match tokenizer over the element table.
//!   At each position a 2-letter candidate is tried before a 1-letter one,
//!   so "He" never splits into H + e. A candidate counts only if it is a
//!   known element with a published electronegativity value.
//! - The literal input `"CO"` (exact, case-sensitive) is a guard clause in
//!   front of the tokenizer and forces the split C + O. This is a narrow
//!   exception for carbon monoxide; other ambiguous pairs such as "Cs"
//!   keep the general greedy behavior.
//! - `classify()`: fixed thresholds on |ΔEN|, 0.4 and 1.7.
//! - `en_difference()`: resolve + lookup + classify, returning an
//!   `EnReport` that can be pretty-printed as a table.
//!
//! All functions are pure and synchronous; every error is a recoverable
//! user-input error with a human-readable message.

use crate::elements::{self, Element};
use log::{debug, info};
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// |ΔEN| at or below this is a nonpolar covalent bond.
pub const NONPOLAR_LIMIT: f64 = 0.4;
/// |ΔEN| at or above this is an ionic bond.
pub const IONIC_LIMIT: f64 = 1.7;

/// Errors from resolving an element pair or looking up its EN data.
#[derive(Debug, Error, PartialEq)]
pub enum EnError {
    #[error("Input is empty. Enter two adjacent element symbols, e.g. 'HF' or 'NaCl'")]
    EmptyInput,
    #[error("Could not identify a valid first element symbol starting with '{0}'")]
    NoFirstElement(String),
    #[error("Input contains only one element symbol ('{0}'). Expected two for EN difference")]
    OnlyOneElement(String),
    #[error("Found '{first}', but could not identify a valid second element symbol starting at index {index}")]
    NoSecondElement { first: String, index: usize },
    #[error("Input contains extra characters after the two expected element symbols")]
    TrailingCharacters,
    #[error("Electronegativity data unavailable for: {}", .0.join(", "))]
    MissingElectronegativity(Vec<String>),
}

/// Bond category predicted from the electronegativity difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BondType {
    NonpolarCovalent,
    PolarCovalent,
    Ionic,
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BondType::NonpolarCovalent => "Nonpolar Covalent",
            BondType::PolarCovalent => "Polar Covalent",
            BondType::Ionic => "Ionic",
        };
        write!(f, "{}", label)
    }
}

/// Classifies an electronegativity difference. Total over all non-negative
/// inputs; both boundaries are on the side stated in the constants.
pub fn classify(difference: f64) -> BondType {
    if difference <= NONPOLAR_LIMIT {
        BondType::NonpolarCovalent
    } else if difference < IONIC_LIMIT {
        BondType::PolarCovalent
    } else {
        BondType::Ionic
    }
}

// A candidate is usable only when the element exists AND carries EN data;
// a symbol without a published value is treated as not found here.
fn match_symbol(chars: &[char], pos: usize) -> Option<(&'static Element, usize)> {
    for len in [2usize, 1] {
        if pos + len <= chars.len() {
            let candidate: String = chars[pos..pos + len].iter().collect();
            if let Some(element) = elements::lookup(&candidate) {
                if element.electronegativity.is_some() {
                    return Some((element, pos + len));
                }
            }
        }
    }
    None
}

fn split_symbols(text: &str) -> Result<(String, String), EnError> {
    let chars: Vec<char> = text.chars().collect();

    let (first, after_first) = match match_symbol(&chars, 0) {
        Some(hit) => hit,
        None => return Err(EnError::NoFirstElement(chars[0].to_string())),
    };
    debug!("first element '{}' consumed {} chars", first.symbol, after_first);

    if after_first == chars.len() {
        return Err(EnError::OnlyOneElement(first.symbol.to_string()));
    }

    let (second, after_second) = match match_symbol(&chars, after_first) {
        Some(hit) => hit,
        None => {
            return Err(EnError::NoSecondElement {
                first: first.symbol.to_string(),
                index: after_first,
            });
        }
    };

    if after_second != chars.len() {
        return Err(EnError::TrailingCharacters);
    }
    Ok((first.symbol.to_string(), second.symbol.to_string()))
}

/// Resolves a string into exactly two element symbols in canonical casing.
/// The whole input must be consumed, with no skipped characters.
pub fn resolve(input: &str) -> Result<(String, String), EnError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(EnError::EmptyInput);
    }
    // Exact uppercase "CO" means carbon monoxide here, not cobalt. The
    // check is case-sensitive on purpose: "Co" stays the cobalt symbol.
    if text == "CO" {
        info!("special case 'CO' resolved as C + O");
        return Ok(("C".to_string(), "O".to_string()));
    }
    split_symbols(text)
}

/// Resolved pair with its EN values, difference and predicted bond type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnReport {
    pub first: String,
    pub second: String,
    pub en_first: f64,
    pub en_second: f64,
    pub difference: f64,
    pub bond: BondType,
}

impl EnReport {
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Symbols"),
            Cell::new(&format!("{}, {}", self.first, self.second)),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("EN values"),
            Cell::new(&format!("{:.2}, {:.2}", self.en_first, self.en_second)),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("|ΔEN|"),
            Cell::new(&format!(
                "|{:.2} - {:.2}| = {:.2}",
                self.en_first, self.en_second, self.difference
            )),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Predicted bond type"),
            Cell::new(&self.bond.to_string()),
        ]));
        table.printstd();
    }
}

/// Resolves the input, looks up both electronegativity values and builds
/// the full report. Missing EN data is a distinct error naming every
/// symbol that lacks a value.
pub fn en_difference(input: &str) -> Result<EnReport, EnError> {
    let (first, second) = resolve(input)?;
    let en_first = elements::electronegativity(&first);
    let en_second = elements::electronegativity(&second);

    match (en_first, en_second) {
        (Some(a), Some(b)) => {
            let difference = (a - b).abs();
            Ok(EnReport {
                first,
                second,
                en_first: a,
                en_second: b,
                difference,
                bond: classify(difference),
            })
        }
        _ => {
            let mut missing = Vec::new();
            if en_first.is_none() {
                missing.push(first);
            }
            if en_second.is_none() {
                missing.push(second);
            }
            Err(EnError::MissingElectronegativity(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_simple_pairs() {
        assert_eq!(resolve("HF").unwrap(), ("H".to_string(), "F".to_string()));
        assert_eq!(
            resolve("NaCl").unwrap(),
            ("Na".to_string(), "Cl".to_string())
        );
        assert_eq!(resolve("KBr").unwrap(), ("K".to_string(), "Br".to_string()));
    }

    #[test]
    fn test_resolve_trims_and_canonicalizes() {
        assert_eq!(
            resolve("  nacl  ").unwrap(),
            ("Na".to_string(), "Cl".to_string())
        );
    }

    #[test]
    fn test_resolve_co_special_case() {
        // exact uppercase forces carbon + oxygen
        assert_eq!(resolve("CO").unwrap(), ("C".to_string(), "O".to_string()));
        // canonical cobalt casing consumes the whole string
        assert_eq!(
            resolve("Co").unwrap_err(),
            EnError::OnlyOneElement("Co".to_string())
        );
    }

    #[test]
    fn test_resolve_greedy_two_letter_priority() {
        // "He" must not split into H + e
        assert_eq!(
            resolve("He").unwrap_err(),
            EnError::OnlyOneElement("He".to_string())
        );
        // the "CO" guard is not generalized: Cs stays cesium
        assert_eq!(
            resolve("Cs").unwrap_err(),
            EnError::OnlyOneElement("Cs".to_string())
        );
        assert_eq!(
            resolve("CsCl").unwrap(),
            ("Cs".to_string(), "Cl".to_string())
        );
    }

    #[test]
    fn test_resolve_failures() {
        assert_eq!(resolve("").unwrap_err(), EnError::EmptyInput);
        assert_eq!(resolve("   ").unwrap_err(), EnError::EmptyInput);
        assert_eq!(
            resolve("Xx").unwrap_err(),
            EnError::NoFirstElement("X".to_string())
        );
        assert_eq!(
            resolve("HQ").unwrap_err(),
            EnError::NoSecondElement {
                first: "H".to_string(),
                index: 1
            }
        );
        assert_eq!(resolve("HeNeXx").unwrap_err(), EnError::TrailingCharacters);
        assert_eq!(resolve("NaClF").unwrap_err(), EnError::TrailingCharacters);
    }

    #[test]
    fn test_resolve_noble_gas_pair() {
        // He and Ne are valid tokens: the table carries EN values for
        // the noble gases, so neither falls back to a 1-letter match
        assert_eq!(
            resolve("HeNe").unwrap(),
            ("He".to_string(), "Ne".to_string())
        );
    }

    #[test]
    fn test_resolve_skips_elements_without_en_data() {
        // Promethium is a real element but has no published EN value, so
        // the tokenizer treats "Pm" as not found and falls back to "P",
        // leaving a dangling 'm'
        assert_eq!(
            resolve("Pm").unwrap_err(),
            EnError::NoSecondElement {
                first: "P".to_string(),
                index: 1
            }
        );
        // both halves carry EN data, so the greedy 2-letter match wins
        assert_eq!(
            resolve("NaF").unwrap(),
            ("Na".to_string(), "F".to_string())
        );
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0), BondType::NonpolarCovalent);
        assert_eq!(classify(0.4), BondType::NonpolarCovalent);
        assert_eq!(classify(0.41), BondType::PolarCovalent);
        assert_eq!(classify(1.69), BondType::PolarCovalent);
        assert_eq!(classify(1.7), BondType::Ionic);
        assert_eq!(classify(3.5), BondType::Ionic);
    }

    #[test]
    fn test_classify_symmetric_over_element_table() {
        let with_en: Vec<f64> = elements::all()
            .iter()
            .filter_map(|e| e.electronegativity)
            .collect();
        for &a in &with_en {
            for &b in &with_en {
                assert_eq!(classify((a - b).abs()), classify((b - a).abs()));
            }
        }
    }

    #[test]
    fn test_en_difference_reports() {
        let report = en_difference("HF").unwrap();
        assert_eq!(report.first, "H");
        assert_eq!(report.second, "F");
        assert_relative_eq!(report.difference, 3.98 - 2.20, epsilon = 1e-9);
        assert_eq!(report.bond, BondType::Ionic);

        let report = en_difference("CO").unwrap();
        assert_relative_eq!(report.difference, 3.44 - 2.55, epsilon = 1e-9);
        assert_eq!(report.bond, BondType::PolarCovalent);

        let report = en_difference("NN").unwrap();
        assert_relative_eq!(report.difference, 0.0);
        assert_eq!(report.bond, BondType::NonpolarCovalent);
    }

    #[test]
    fn test_en_difference_propagates_parse_errors() {
        assert_eq!(en_difference("").unwrap_err(), EnError::EmptyInput);
        assert_eq!(
            en_difference("Xx").unwrap_err(),
            EnError::NoFirstElement("X".to_string())
        );
    }

    #[test]
    fn test_missing_en_error_message() {
        let err = EnError::MissingElectronegativity(vec!["Pm".to_string(), "Eu".to_string()]);
        assert_eq!(
            err.to_string(),
            "Electronegativity data unavailable for: Pm, Eu"
        );
    }
}
