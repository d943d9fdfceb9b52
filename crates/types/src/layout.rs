//! Alignment, arrangement and shape vocabulary shared by both output trees.
use serde::{Deserialize, Serialize};

/// Cross-axis placement of children inside a column, row or box.
///
/// Unrecognized values from JSON fall back to `Center`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    End,
    #[default]
    #[serde(other)]
    Center,
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Arrangement {
    #[default]
    Start,
    Center,
    End,
    SpaceEvenly,
}

/// Clip, border and background outline. Radii are in the unit of the tree that carries them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum Shape {
    #[default]
    Rectangle,
    RoundedRect { radius: f32 },
}

impl Shape {
    pub fn rounded(radius: f32) -> Self {
        if radius > 0.0 {
            Shape::RoundedRect { radius }
        } else {
            Shape::Rectangle
        }
    }
}
