//! Reading the batch of items to score
//!
//! The input is a JSON array of `{ "elementName", "weight", "price" }`
//! objects. Any read or decode failure is fatal to the run.

mod error;

pub use error::{InputError, InputResult};

use crate::scoring::Item;
use std::path::Path;

/// Decode items from JSON text
///
/// `origin` names the source in error messages.
pub fn parse_items(text: &str, origin: &str) -> InputResult<Vec<Item>> {
    serde_json::from_str(text).map_err(|source| InputError::Malformed {
        message: format!("{}: {}", origin, source),
        source,
    })
}

/// Read and decode the items stored at `path`
pub async fn load_items(path: &Path) -> InputResult<Vec<Item>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputError::Read {
            message: format!("Cannot read input file '{}': {}", path.display(), source),
            source,
        })?;

    let items = parse_items(&text, &path.display().to_string())?;
    log::info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}
