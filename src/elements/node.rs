//! Node - a point in the planar model

use serde::{Deserialize, Serialize};

use super::SupportKind;

/// A node in the 2D request model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, unique within a request
    pub id: u32,
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
    /// Optional support condition
    #[serde(default)]
    pub support: Option<SupportKind>,
}

impl Node {
    /// Create an unsupported node at the given coordinates
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            support: None,
        }
    }

    /// Attach a support condition
    pub fn with_support(mut self, support: SupportKind) -> Self {
        self.support = Some(support);
        self
    }

    /// Euclidean distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
