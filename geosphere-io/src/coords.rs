//! Parsing of typed coordinate text such as `0,0,1` or `( 1, 2.5, -3 )`

use geosphere_core::{Error, Result};

/// Parse `x,y,z` into three finite numbers.
///
/// Surrounding whitespace and any parentheses are ignored, as is whitespace
/// around each component. Blank input, or anything other than exactly three
/// comma-separated parts is a [`Error::Format`]; a part that is not a
/// finite real number is a [`Error::Numeric`].
pub fn parse_coordinates(text: &str) -> Result<[f64; 3]> {
    let cleaned: String = text.trim().chars().filter(|c| *c != '(' && *c != ')').collect();
    if cleaned.trim().is_empty() {
        return Err(Error::Format("please enter coordinates".to_string()));
    }

    let parts: Vec<&str> = cleaned.split(',').collect();
    if parts.len() != 3 {
        return Err(Error::Format(format!(
            "expected x,y,z with 3 components, got {}",
            parts.len()
        )));
    }

    let mut coords = [0.0; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = parse_component(part)?;
    }
    Ok(coords)
}

fn parse_component(part: &str) -> Result<f64> {
    let part = part.trim();
    let value: f64 = part
        .parse()
        .map_err(|_| Error::Numeric(format!("'{}' is not a number", part)))?;
    if !value.is_finite() {
        return Err(Error::Numeric(format!("'{}' is not a finite number", part)));
    }
    Ok(value)
}
