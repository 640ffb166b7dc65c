//! Frame element - a beam, column or brace between two nodes

use serde::{Deserialize, Serialize};

/// Structural role of a frame element.
///
/// Dispatch on this category selects the verification path; braces are
/// checked with the column rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Beam,
    Column,
    Brace,
}

/// A frame element in the 2D request model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Element identifier, unique within a request
    pub id: u32,
    /// Start node id
    pub node_i: u32,
    /// End node id
    pub node_j: u32,
    /// Catalog section id
    pub section_id: String,
    /// Structural role
    pub category: ElementCategory,
}

impl Element {
    /// Create a new frame element
    pub fn new(id: u32, node_i: u32, node_j: u32, section_id: &str, category: ElementCategory) -> Self {
        Self {
            id,
            node_i,
            node_j,
            section_id: section_id.to_string(),
            category,
        }
    }
}
