//! Shared vocabulary for the rclayout renderers.
//!
//! - [`config`] is the JSON schema as it arrives from disk or from the preview host.
//! - [`element`] is the same tree resolved into a closed sum type with defaults applied.
//! - [`defaults`] is the single table of per-kind defaults both renderers rely on.

pub mod color;
pub mod config;
pub mod defaults;
pub mod element;
pub mod layout;

pub use color::{Color, ColorError};
pub use config::{ElementConfig, ElementKind, LayoutConfig};
pub use element::{
    Border, ButtonElement, CardElement, DividerElement, Element, Padding, ParentKind, RowElement,
    Screen, SpacerElement, TextElement,
};
pub use layout::{Alignment, Arrangement, Shape};
