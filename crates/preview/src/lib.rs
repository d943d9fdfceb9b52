//! Live preview rendering.
//!
//! [`render_preview`] turns a [`LayoutConfig`](rclayout_types::LayoutConfig) into a
//! [`Widget`] tree for the host UI toolkit. [`channel`] wires a message source to a
//! [`PreviewSession`] that re-renders whenever a newer config arrives.

mod error;
mod renderer;
mod session;
mod widget;

pub use error::PreviewError;
pub use renderer::{render_preview, render_screen};
pub use session::{
    ConfigSender, DEFAULT_POLL_INTERVAL, INITIAL_POLL_DELAY, PreviewSession, channel,
};
pub use widget::{Insets, Modifier, Widget};
