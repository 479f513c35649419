//! Value parsers for CLI arguments

use crate::pipeline::PipelineMode;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Accept integers greater than zero
pub fn validate_positive_int(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a positive integer", value)),
    }
}

/// Parse a mode name, listing the valid names on failure
pub fn parse_mode(value: &str) -> Result<PipelineMode, String> {
    PipelineMode::from_str(&value.trim().to_ascii_lowercase()).map_err(|_| {
        let valid: Vec<String> = PipelineMode::iter().map(|m| m.to_string()).collect();
        format!("unknown mode '{}' (expected one of: {})", value, valid.join(", "))
    })
}
