use rclayout::Document;
use rclayout_document::{Modifier, Operation};

/// Labels of every text component, in document order
pub fn document_texts(doc: &Document) -> Vec<&str> {
    doc.text_components()
        .filter_map(|component| doc.text(component.text))
        .collect()
}

/// Modifier chains of every box, in document order
pub fn box_modifiers(doc: &Document) -> Vec<&[Modifier]> {
    doc.operations
        .iter()
        .filter(|op| matches!(op, Operation::BoxStart { .. }))
        .map(Operation::modifiers)
        .collect()
}

/// Padding of the first `Padding` modifier in a chain
pub fn first_padding(modifiers: &[Modifier]) -> Option<(f32, f32)> {
    modifiers.iter().find_map(|m| match m {
        Modifier::Padding { left, top, .. } => Some((*left, *top)),
        _ => None,
    })
}
