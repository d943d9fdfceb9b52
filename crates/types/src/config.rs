//! The JSON layout schema.
//!
//! Field names are camelCase on the wire. Unknown fields are ignored at every level so
//! newer hosts can send configs that older converters still accept.
use crate::color::ColorError;
use crate::defaults;
use crate::element::{Element, Screen};
use crate::layout::Alignment;
use serde::{Deserialize, Serialize};

fn default_background() -> String {
    defaults::BACKGROUND_COLOR.to_string()
}

/// Root of a layout description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub scrollable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<i32>,
    #[serde(default)]
    pub elements: Vec<ElementConfig>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            background_color: default_background(),
            scrollable: false,
            padding: None,
            elements: Vec::new(),
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Applies defaults, parses colors and drops elements of unknown kind.
    pub fn resolve(&self) -> Result<Screen, ColorError> {
        Screen::resolve(self)
    }
}

/// The element tag. Tags this build does not know become [`ElementKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Button,
    Spacer,
    Divider,
    Card,
    Row,
    #[serde(other)]
    Unknown,
}

/// One node of the layout tree as written in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementConfig {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_h: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_v: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ElementConfig>>,
}

impl ElementConfig {
    /// A bare element of the given kind with every optional field unset.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            id: String::new(),
            text: None,
            color: None,
            text_color: None,
            font_size: None,
            height: None,
            corner_radius: None,
            border_color: None,
            border_width: None,
            padding_h: None,
            padding_v: None,
            action_name: None,
            align: None,
            children: None,
        }
    }

    pub fn children(&self) -> &[ElementConfig] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn resolve(&self) -> Result<Option<Element>, ColorError> {
        Element::resolve(self)
    }
}
