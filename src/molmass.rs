//! # Molar Mass Module
//!
//! Parses a chemical formula into its atomic composition and computes the
//! molar mass from the shared element table.
//!
//! Accepted syntax: element symbols with optional integer counts (`H2O`,
//! `C6H8O6`), parenthesized groups with a trailing multiplier (`Ca(NO3)2`),
//! an optional leading multiplier for the whole formula (`2NaCl`), and
//! phase marks like `(g)` or `(s)`, which are stripped before parsing.
//! Whitespace is ignored. A second uppercase letter that cannot start an
//! element of its own is folded to lowercase, so `NACL` reads as Na + Cl.

use crate::elements;
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

/// Errors for malformed formula strings. All are user-input-class and
/// recoverable.
#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("Formula is empty")]
    EmptyFormula,
    #[error("Unknown element '{0}' in formula")]
    UnknownElement(String),
    #[error("Unexpected character '{ch}' at position {position} in formula")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Unbalanced brackets in formula")]
    UnbalancedBrackets,
}

// Phase marks as they appear in thermodynamic tables, e.g. "H2O(g)".
const PHASE_MARKS: [&str; 8] = [
    "(c)", "(C)", "(l)", "(L)", "(g)", "(G)", "(s)", "(S)",
];

fn filter_phase_marks(formula: &str) -> String {
    let mut formula = formula.to_string();
    for phase in PHASE_MARKS {
        formula = formula.replace(phase, "");
    }
    formula
}

// Reads an integer starting at `pos`; returns (value, next position).
// Absent digits mean a count of 1.
fn read_count(chars: &[char], pos: usize) -> (usize, usize) {
    let mut end = pos;
    let mut count: usize = 0;
    while end < chars.len() && chars[end].is_ascii_digit() {
        let d = chars[end].to_digit(10).unwrap_or(0) as usize;
        count = count.saturating_mul(10).saturating_add(d);
        end += 1;
    }
    if end == pos { (1, pos) } else { (count, end) }
}

/// Parses a chemical formula and returns a map of element symbols to atom
/// counts. Symbols in the result are in canonical casing.
pub fn parse_formula(formula: &str) -> Result<HashMap<String, usize>, FormulaError> {
    let cleaned = filter_phase_marks(&formula.replace(' ', ""));
    if cleaned.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }
    debug!("parsing formula '{}'", cleaned);
    let chars: Vec<char> = cleaned.chars().collect();

    // innermost bracket group sits on top of the stack
    let mut stack: Vec<HashMap<String, usize>> = vec![HashMap::new()];
    let (overall, mut i) = if chars[0].is_ascii_digit() {
        // leading multiplier for the whole formula, e.g. "2NaCl"
        read_count(&chars, 0)
    } else {
        (1, 0)
    };

    while i < chars.len() {
        let c = chars[i];
        if c == '(' {
            stack.push(HashMap::new());
            i += 1;
        } else if c == ')' {
            let group = stack.pop().ok_or(FormulaError::UnbalancedBrackets)?;
            if stack.is_empty() {
                return Err(FormulaError::UnbalancedBrackets);
            }
            let (multiplier, next) = read_count(&chars, i + 1);
            i = next;
            let top = stack.last_mut().ok_or(FormulaError::UnbalancedBrackets)?;
            for (symbol, n) in group {
                // counts saturate like read_count does, absurd multipliers
                // must not panic
                let entry = top.entry(symbol).or_insert(0);
                *entry = entry.saturating_add(n.saturating_mul(multiplier));
            }
        } else if c.is_ascii_uppercase() {
            let mut end = i + 1;
            let symbol: String = if end < chars.len() && chars[end].is_ascii_lowercase() {
                end += 1;
                chars[i..end].iter().collect()
            } else if end < chars.len()
                && chars[end].is_ascii_uppercase()
                && elements::lookup(&chars[end].to_string()).is_none()
            {
                // the next uppercase letter cannot start its own element,
                // fold it into a two-letter symbol: "NA" becomes "Na"
                let folded: String = [c, chars[end].to_ascii_lowercase()].iter().collect();
                if elements::lookup(&folded).is_some() {
                    end += 1;
                    folded
                } else {
                    c.to_string()
                }
            } else {
                c.to_string()
            };
            let element = elements::lookup(&symbol)
                .ok_or_else(|| FormulaError::UnknownElement(symbol.clone()))?;
            let (count, next) = read_count(&chars, end);
            i = next;
            let entry = stack
                .last_mut()
                .ok_or(FormulaError::UnbalancedBrackets)?
                .entry(element.symbol.to_string())
                .or_insert(0);
            *entry = entry.saturating_add(count);
        } else {
            return Err(FormulaError::UnexpectedCharacter { ch: c, position: i });
        }
    }

    if stack.len() != 1 {
        return Err(FormulaError::UnbalancedBrackets);
    }
    let mut counts = stack.pop().ok_or(FormulaError::UnbalancedBrackets)?;
    if counts.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }
    if overall != 1 {
        for n in counts.values_mut() {
            *n = n.saturating_mul(overall);
        }
    }
    debug!("parsed composition: {:?}", counts);
    Ok(counts)
}

/// Molar mass of a formula in g/mol.
pub fn molar_mass(formula: &str) -> Result<f64, FormulaError> {
    let counts = parse_formula(formula)?;
    let mut mass = 0.0;
    for (symbol, count) in &counts {
        let atomic = elements::atomic_mass(symbol)
            .ok_or_else(|| FormulaError::UnknownElement(symbol.clone()))?;
        mass += atomic * *count as f64;
    }
    Ok(mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_formula() {
        let expected = HashMap::from([
            ("C".to_string(), 6),
            ("H".to_string(), 8),
            ("O".to_string(), 6),
        ]);
        assert_eq!(parse_formula("C6H8O6").unwrap(), expected);

        let expected = HashMap::from([
            ("Na".to_string(), 1),
            ("N".to_string(), 2),
            ("O".to_string(), 6),
        ]);
        assert_eq!(parse_formula("Na(NO3)2").unwrap(), expected);

        let expected = HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(parse_formula("H2O").unwrap(), expected);

        let expected = HashMap::from([
            ("C".to_string(), 5),
            ("H".to_string(), 7),
            ("O".to_string(), 2),
        ]);
        assert_eq!(parse_formula("C5H6OOH").unwrap(), expected);
    }

    #[test]
    fn test_parse_formula_folds_second_uppercase() {
        let expected = HashMap::from([("Na".to_string(), 1), ("Cl".to_string(), 1)]);
        assert_eq!(parse_formula("NACL").unwrap(), expected);
        // "CO" in a formula is carbon + oxygen: O starts its own element,
        // so no folding to cobalt happens
        let expected = HashMap::from([("C".to_string(), 1), ("O".to_string(), 1)]);
        assert_eq!(parse_formula("CO").unwrap(), expected);
    }

    #[test]
    fn test_calculate_molar_mass() {
        assert_relative_eq!(molar_mass("H2O(g)").unwrap(), 18.01528, epsilon = 1e-2);
        assert_relative_eq!(molar_mass("NaCl").unwrap(), 58.44, epsilon = 1e-2);
        assert_relative_eq!(molar_mass("C6H8O6").unwrap(), 176.12, epsilon = 1e-2);
        assert_relative_eq!(molar_mass("Ca(NO3)2").unwrap(), 164.093, epsilon = 1e-2);
    }

    #[test]
    fn test_leading_multiplier() {
        assert_relative_eq!(molar_mass("2NaCl").unwrap(), 116.886, epsilon = 1e-2);
        let expected = HashMap::from([("H".to_string(), 4), ("O".to_string(), 2)]);
        assert_eq!(parse_formula("2H2O").unwrap(), expected);
    }

    #[test]
    fn test_huge_counts_saturate() {
        // counts beyond usize saturate instead of overflowing
        let counts = parse_formula("(H2)99999999999999999999999").unwrap();
        assert_eq!(counts["H"], usize::MAX);
        let counts = parse_formula("H99999999999999999999999999").unwrap();
        assert_eq!(counts["H"], usize::MAX);
        let counts = parse_formula("99999999999999999999999999H2").unwrap();
        assert_eq!(counts["H"], usize::MAX);
        assert!(molar_mass("(H2)99999999999999999999999").is_ok());
    }

    #[test]
    fn test_formula_errors() {
        assert_eq!(parse_formula("").unwrap_err(), FormulaError::EmptyFormula);
        assert_eq!(parse_formula("  ").unwrap_err(), FormulaError::EmptyFormula);
        assert_eq!(
            parse_formula("Xq2").unwrap_err(),
            FormulaError::UnknownElement("Xq".to_string())
        );
        assert_eq!(
            parse_formula("(H2O").unwrap_err(),
            FormulaError::UnbalancedBrackets
        );
        assert_eq!(
            parse_formula("H2O)").unwrap_err(),
            FormulaError::UnbalancedBrackets
        );
        assert_eq!(
            parse_formula("H2O!").unwrap_err(),
            FormulaError::UnexpectedCharacter { ch: '!', position: 3 }
        );
        assert_eq!(
            parse_formula("h2o").unwrap_err(),
            FormulaError::UnexpectedCharacter { ch: 'h', position: 0 }
        );
    }
}
