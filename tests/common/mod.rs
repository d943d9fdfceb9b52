#![allow(dead_code)]

pub mod document_assertions;
pub mod fixtures;

use rclayout::{Converter, Document, LayoutConfig, Widget, render_preview};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a JSON fixture into a typed config
pub fn config_from_json(config: &Value) -> Result<LayoutConfig, Box<dyn std::error::Error>> {
    Ok(LayoutConfig::from_json(&serde_json::to_string(config)?)?)
}

/// Convert a JSON fixture into a decoded document with default options
pub fn document_from_json(config: &Value) -> Result<Document, Box<dyn std::error::Error>> {
    let bytes = Converter::default().convert_str(&serde_json::to_string(config)?)?;
    Ok(Document::decode(&bytes)?)
}

/// Render a JSON fixture as a preview widget tree
pub fn preview_from_json(config: &Value) -> Result<Widget, Box<dyn std::error::Error>> {
    Ok(render_preview(&config_from_json(config)?)?)
}
