//! The document side of rclayout.
//!
//! A [`Screen`](rclayout_types::Screen) is walked by [`DocumentBuilder`], which issues
//! calls on a [`DocumentWriter`]. The bundled [`BinaryDocumentWriter`] records those calls
//! as a [`Document`] and encodes it into the compact `.rc` byte format:
//! - Sizes are converted from dp to device pixels with [`DocumentOptions::density`]
//! - Strings are interned once and referenced by [`TextId`]
//! - Click handlers become host actions the remote runtime reports back

mod builder;
mod error;
mod modifiers;
mod ops;
mod options;
mod writer;

pub use builder::{ACTION_BUTTON_CLICKED, DocumentBuilder, build_document};
pub use error::DocumentError;
pub use modifiers::Modifiers;
pub use ops::{
    Document, FORMAT_VERSION, Header, HostAction, MAGIC, Modifier, Operation, TextAlign,
    TextComponent, TextId,
};
pub use options::{DEFAULT_DENSITY, DocumentOptions};
pub use writer::{BinaryDocumentWriter, DocumentWriter};
