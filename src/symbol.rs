use anyhow::{Context, Result};
use regex::Regex;

/// Suffix appended to the array symbol to name its length constant
pub const LENGTH_SUFFIX: &str = "_len";

/// Name of the size constant emitted next to the array `symbol`
pub fn length_symbol(symbol: &str) -> String {
    format!("{symbol}{LENGTH_SUFFIX}")
}

/// Whether `symbol` is usable as a C/C++ identifier.
///
/// Names are never rejected, the caller only uses this to warn.
pub fn is_c_identifier(symbol: &str) -> Result<bool> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").context("Invalid identifier pattern")?;
    Ok(re.is_match(symbol))
}
