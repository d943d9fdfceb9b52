use crate::error::DocumentError;
use crate::modifiers::Modifiers;
use crate::ops::{Document, FORMAT_VERSION, Header, Operation, TextComponent, TextId};
use crate::options::DocumentOptions;
use rclayout_types::{Alignment, Arrangement};
use std::collections::HashMap;

/// A trait for document writers, abstracting the container/text primitives the
/// remote runtime understands.
pub trait DocumentWriter {
    fn begin_document(&mut self, options: &DocumentOptions);

    /// Interns a string and returns its id. Adding the same string twice yields the same id.
    fn add_text(&mut self, text: &str) -> TextId;

    fn start_root(&mut self);

    fn end_root(&mut self) -> Result<(), DocumentError>;

    fn start_column(&mut self, modifiers: Modifiers, horizontal: Alignment, vertical: Arrangement);

    fn start_row(&mut self, modifiers: Modifiers, horizontal: Arrangement, vertical: Alignment);

    fn start_box(&mut self, modifiers: Modifiers, horizontal: Alignment, vertical: Alignment);

    /// Closes the innermost column, row or box.
    fn end_container(&mut self) -> Result<(), DocumentError>;

    fn text_component(&mut self, component: TextComponent);

    fn finish(self: Box<Self>) -> Result<Vec<u8>, DocumentError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Root,
    Container,
}

/// Records every call as an [`Operation`] and encodes the result as a [`Document`].
#[derive(Debug, Default)]
pub struct BinaryDocumentWriter {
    header: Option<Header>,
    texts: Vec<String>,
    text_ids: HashMap<String, TextId>,
    operations: Vec<Operation>,
    open: Vec<Open>,
}

impl BinaryDocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn close(&mut self, expected: Open, op: Operation) -> Result<(), DocumentError> {
        match self.open.pop() {
            Some(kind) if kind == expected => {
                self.operations.push(op);
                Ok(())
            }
            _ => Err(DocumentError::UnbalancedContainer),
        }
    }

    /// Finishes without encoding. Used by tests and tooling that inspect the operations.
    pub fn into_document(self) -> Result<Document, DocumentError> {
        if !self.open.is_empty() {
            return Err(DocumentError::UnclosedContainers(self.open.len()));
        }
        let header = self.header.unwrap_or_else(|| {
            let options = DocumentOptions::default();
            Header {
                version: FORMAT_VERSION,
                width: options.width_px(),
                height: options.height_px(),
                density: options.density,
            }
        });
        Ok(Document {
            header,
            texts: self.texts,
            operations: self.operations,
        })
    }
}

impl DocumentWriter for BinaryDocumentWriter {
    fn begin_document(&mut self, options: &DocumentOptions) {
        self.header = Some(Header {
            version: FORMAT_VERSION,
            width: options.width_px(),
            height: options.height_px(),
            density: options.density,
        });
    }

    fn add_text(&mut self, text: &str) -> TextId {
        if let Some(id) = self.text_ids.get(text) {
            return *id;
        }
        let id = TextId(self.texts.len() as u32);
        self.texts.push(text.to_string());
        self.text_ids.insert(text.to_string(), id);
        id
    }

    fn start_root(&mut self) {
        self.open.push(Open::Root);
        self.operations.push(Operation::RootStart);
    }

    fn end_root(&mut self) -> Result<(), DocumentError> {
        self.close(Open::Root, Operation::RootEnd)
    }

    fn start_column(&mut self, modifiers: Modifiers, horizontal: Alignment, vertical: Arrangement) {
        self.open.push(Open::Container);
        self.operations.push(Operation::ColumnStart {
            modifiers: modifiers.into(),
            horizontal,
            vertical,
        });
    }

    fn start_row(&mut self, modifiers: Modifiers, horizontal: Arrangement, vertical: Alignment) {
        self.open.push(Open::Container);
        self.operations.push(Operation::RowStart {
            modifiers: modifiers.into(),
            horizontal,
            vertical,
        });
    }

    fn start_box(&mut self, modifiers: Modifiers, horizontal: Alignment, vertical: Alignment) {
        self.open.push(Open::Container);
        self.operations.push(Operation::BoxStart {
            modifiers: modifiers.into(),
            horizontal,
            vertical,
        });
    }

    fn end_container(&mut self) -> Result<(), DocumentError> {
        self.close(Open::Container, Operation::ContainerEnd)
    }

    fn text_component(&mut self, component: TextComponent) {
        self.operations.push(Operation::Text(component));
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, DocumentError> {
        let document = self.into_document()?;
        log::debug!(
            "Encoding document: {} operations, {} strings",
            document.operations.len(),
            document.texts.len()
        );
        document.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_strings() {
        let mut writer = BinaryDocumentWriter::new();
        let a = writer.add_text("Go");
        let b = writer.add_text("Stop");
        assert_eq!(writer.add_text("Go"), a);
        assert_ne!(a, b);
        let doc = writer.into_document().unwrap();
        assert_eq!(doc.texts, vec!["Go", "Stop"]);
    }

    #[test]
    fn end_without_start_is_an_error() {
        let mut writer = BinaryDocumentWriter::new();
        writer.start_root();
        assert!(matches!(
            writer.end_container(),
            Err(DocumentError::UnbalancedContainer)
        ));
    }

    #[test]
    fn unclosed_containers_fail_to_finish() {
        let mut writer = BinaryDocumentWriter::new();
        writer.start_root();
        writer.start_box(Modifiers::new(), Alignment::Start, Alignment::Start);
        assert!(matches!(
            Box::new(writer).finish(),
            Err(DocumentError::UnclosedContainers(2))
        ));
    }

    #[test]
    fn header_follows_options() {
        let mut writer = BinaryDocumentWriter::new();
        writer.begin_document(&DocumentOptions::new().with_density(2.0));
        writer.start_root();
        writer.end_root().unwrap();
        let bytes = Box::new(writer).finish().unwrap();
        let doc = Document::decode(&bytes).unwrap();
        assert_eq!(doc.header.width, 800);
        assert_eq!(doc.header.height, 1600);
        assert_eq!(doc.header.density, 2.0);
        assert_eq!(doc.operations, vec![Operation::RootStart, Operation::RootEnd]);
    }
}
