//! Converts JSON layout descriptions into binary `.rc` documents and live preview trees.
//!
//! ```no_run
//! use rclayout::{Converter, DocumentOptions};
//!
//! let converter = Converter::new(DocumentOptions::default().with_density(3.0));
//! let report = converter.convert_file("screens/home.json", "out/home.rc")?;
//! println!("{} bytes", report.bytes);
//! # Ok::<(), rclayout::ConvertError>(())
//! ```

pub mod convert;
pub mod error;

pub use convert::{ConversionReport, Converter, OUTPUT_EXTENSION, default_output_path};
pub use error::ConvertError;

pub use rclayout_document::{
    BinaryDocumentWriter, DEFAULT_DENSITY, Document, DocumentBuilder, DocumentOptions,
    DocumentWriter, build_document,
};
pub use rclayout_preview::{ConfigSender, PreviewSession, Widget, render_preview};
pub use rclayout_types::{Color, ElementConfig, ElementKind, LayoutConfig};
