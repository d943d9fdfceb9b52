use crate::error::DocumentError;
use rclayout_types::{Alignment, Arrangement, Color, Shape};
use serde::{Deserialize, Serialize};

/// Leading bytes of every encoded document.
pub const MAGIC: [u8; 4] = *b"RCLD";
pub const FORMAT_VERSION: u16 = 1;

/// Index into [`Document::texts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextId(pub u32);

/// An action reported back to the host when the runtime sees a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostAction {
    pub action_id: i32,
    pub name: TextId,
}

/// A single recorded modifier. All lengths are in device pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Modifier {
    FillMaxSize,
    FillMaxWidth,
    Background(Color),
    VerticalScroll,
    Padding {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
    Height(f32),
    Clip(Shape),
    Border {
        width: f32,
        color: Color,
        shape: Shape,
    },
    OnClick(HostAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Start,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComponent {
    pub modifiers: Vec<Modifier>,
    pub text: TextId,
    pub color: Color,
    pub font_size: f32,
    pub font_weight: f32,
    pub align: TextAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    RootStart,
    RootEnd,
    ColumnStart {
        modifiers: Vec<Modifier>,
        horizontal: Alignment,
        vertical: Arrangement,
    },
    RowStart {
        modifiers: Vec<Modifier>,
        horizontal: Arrangement,
        vertical: Alignment,
    },
    BoxStart {
        modifiers: Vec<Modifier>,
        horizontal: Alignment,
        vertical: Alignment,
    },
    ContainerEnd,
    Text(TextComponent),
}

impl Operation {
    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Operation::ColumnStart { modifiers, .. }
            | Operation::RowStart { modifiers, .. }
            | Operation::BoxStart { modifiers, .. } => modifiers.as_slice(),
            Operation::Text(text) => text.modifiers.as_slice(),
            Operation::RootStart | Operation::RootEnd | Operation::ContainerEnd => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub version: u16,
    pub width: u32,
    pub height: u32,
    pub density: f32,
}

/// The decoded form of a `.rc` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub header: Header,
    pub texts: Vec<String>,
    pub operations: Vec<Operation>,
}

impl Document {
    pub fn encode(&self) -> Result<Vec<u8>, DocumentError> {
        let mut bytes = MAGIC.to_vec();
        bincode::serialize_into(&mut bytes, self)?;
        Ok(bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Document, DocumentError> {
        let body = bytes.strip_prefix(&MAGIC).ok_or(DocumentError::BadMagic)?;
        Ok(bincode::deserialize(body)?)
    }

    pub fn text(&self, id: TextId) -> Option<&str> {
        self.texts.get(id.0 as usize).map(String::as_str)
    }

    /// Text components in document order.
    pub fn text_components(&self) -> impl Iterator<Item = &TextComponent> {
        self.operations.iter().filter_map(|op| match op {
            Operation::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Names of every click action, in document order.
    pub fn action_names(&self) -> Vec<&str> {
        self.operations
            .iter()
            .flat_map(Operation::modifiers)
            .filter_map(|m| match m {
                Modifier::OnClick(action) => self.text(action.name),
                _ => None,
            })
            .collect()
    }
}
