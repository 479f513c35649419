//! Input records and their scored counterparts

use serde::{Deserialize, Serialize};

/// One input record to be scored
///
/// Immutable once constructed. Decoded from the JSON field names
/// `elementName`, `weight` and `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "elementName")]
    name: String,
    weight: f64,
    price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64, price: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// An [`Item`] paired with the score the transform produced for it
///
/// Only [`ScoredItem::admit`] creates one, so every value of this type has
/// passed the accept rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    item: Item,
    score: f64,
}

impl ScoredItem {
    /// Apply the accept rule: keep the pair only if `score > 0` and the
    /// item has a non-empty name
    ///
    /// NaN and negative infinity fail `score > 0`; positive infinity passes.
    pub fn admit(item: Item, score: f64) -> Option<Self> {
        if score > 0.0 && !item.name.is_empty() {
            Some(Self { item, score })
        } else {
            None
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_parts(self) -> (Item, f64) {
        (self.item, self.score)
    }
}
