//! Plant/condition structure encoded in category identifiers
//!
//! Identifiers look like `Tomato___Bacterial_spot`: the plant comes before
//! the delimiter and the condition (a disease name or `healthy`) after it.

use crate::io::configuration::{HEALTHY_TOKEN, PLANT_SUFFIXES, TAXON_DELIMITER, WORD_SEPARATOR};

/// Borrowed view of an identifier split into its taxon parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxon<'a> {
    /// Text before the first delimiter, or the whole identifier
    pub plant: &'a str,
    /// Text after the first delimiter; `None` when the delimiter is absent
    pub condition: Option<&'a str>,
}

impl<'a> Taxon<'a> {
    /// Split an identifier at the first delimiter
    pub fn parse(identifier: &'a str) -> Self {
        match identifier.split_once(TAXON_DELIMITER) {
            Some((plant, condition)) => Self {
                plant,
                condition: Some(condition),
            },
            None => Self {
                plant: identifier,
                condition: None,
            },
        }
    }

    /// Whether the condition segment names a healthy state
    ///
    /// Identifiers without a delimiter have no condition and are never healthy.
    pub fn is_healthy(&self) -> bool {
        self.condition
            .is_some_and(|condition| condition.to_lowercase().contains(HEALTHY_TOKEN))
    }
}

/// Replace word separators with spaces and drop surrounding whitespace
pub fn humanize(segment: &str) -> String {
    segment.replace(WORD_SEPARATOR, " ").trim().to_string()
}

/// Key shared by all categories of the same plant
///
/// Known cosmetic qualifiers such as `(maize)` are removed by table lookup,
/// then leftover separators are trimmed: `Corn_(maize)___healthy` -> `Corn`.
/// Identifiers without a delimiter are their own key.
pub fn plant_key(identifier: &str) -> String {
    let taxon = Taxon::parse(identifier);
    if taxon.condition.is_none() {
        return identifier.to_string();
    }

    let mut plant = taxon.plant.to_string();
    for suffix in PLANT_SUFFIXES {
        plant = plant.replace(suffix, "");
    }

    plant
        .trim_matches(|c: char| c == WORD_SEPARATOR || c.is_whitespace())
        .to_string()
}
