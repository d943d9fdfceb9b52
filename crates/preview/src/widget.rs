//! The preview widget tree.
//!
//! Widgets are plain owned data; the host toolkit maps each variant onto its own
//! composables. All lengths are in dp and all font sizes in sp, exactly as configured.
use rclayout_types::{Alignment, Arrangement, Color, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub start: f32,
    pub top: f32,
    pub end: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn all(value: f32) -> Self {
        Self::symmetric(value, value)
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            start: horizontal,
            top: vertical,
            end: horizontal,
            bottom: vertical,
        }
    }

    pub fn bottom(value: f32) -> Self {
        Self {
            bottom: value,
            ..Self::default()
        }
    }
}

/// A modifier applied to a widget, outermost first.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    FillMaxSize,
    FillMaxWidth,
    Background { color: Color, shape: Shape },
    VerticalScroll,
    Padding(Insets),
    Height(f32),
    Clip(Shape),
    Border { width: f32, color: Color, shape: Shape },
    /// Reports `action` to the host when the widget is clicked.
    Clickable { action: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Column {
        modifiers: Vec<Modifier>,
        vertical: Arrangement,
        horizontal: Alignment,
        children: Vec<Widget>,
    },
    Row {
        modifiers: Vec<Modifier>,
        horizontal: Arrangement,
        vertical: Alignment,
        children: Vec<Widget>,
    },
    /// A box that stacks its children at `alignment`.
    Container {
        modifiers: Vec<Modifier>,
        alignment: Alignment,
        children: Vec<Widget>,
    },
    Text {
        modifiers: Vec<Modifier>,
        text: String,
        font_size: f32,
        color: Color,
        font_weight: f32,
    },
    Spacer {
        modifiers: Vec<Modifier>,
    },
    Divider {
        thickness: f32,
        color: Color,
    },
}

impl Widget {
    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Widget::Column { modifiers, .. }
            | Widget::Row { modifiers, .. }
            | Widget::Container { modifiers, .. }
            | Widget::Text { modifiers, .. }
            | Widget::Spacer { modifiers } => modifiers.as_slice(),
            Widget::Divider { .. } => &[],
        }
    }

    pub fn children(&self) -> &[Widget] {
        match self {
            Widget::Column { children, .. }
            | Widget::Row { children, .. }
            | Widget::Container { children, .. } => children.as_slice(),
            Widget::Text { .. } | Widget::Spacer { .. } | Widget::Divider { .. } => &[],
        }
    }

    /// Whether the widget stretches to the width of its parent. Dividers always do.
    pub fn fills_width(&self) -> bool {
        matches!(self, Widget::Divider { .. })
            || self
                .modifiers()
                .iter()
                .any(|m| matches!(m, Modifier::FillMaxWidth | Modifier::FillMaxSize))
    }

    pub fn action(&self) -> Option<&str> {
        self.modifiers().iter().find_map(|m| match m {
            Modifier::Clickable { action } => Some(action.as_str()),
            _ => None,
        })
    }

    /// Click actions of this widget and its descendants, depth first.
    pub fn actions(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(action) = self.action() {
            out.push(action);
        }
        for child in self.children() {
            child.collect_actions(out);
        }
    }

    /// Number of widgets in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Widget::count).sum::<usize>()
    }

    /// Text of every text widget in the subtree, depth first.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Widget::Text { text, .. } => vec![text.as_str()],
            _ => self.children().iter().flat_map(Widget::texts).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Widget {
        Widget::Text {
            modifiers: vec![],
            text: s.into(),
            font_size: 16.0,
            color: Color::BLACK,
            font_weight: 400.0,
        }
    }

    #[test]
    fn traversal_helpers() {
        let tree = Widget::Column {
            modifiers: vec![Modifier::FillMaxSize],
            vertical: Arrangement::Center,
            horizontal: Alignment::Center,
            children: vec![
                text("a"),
                Widget::Container {
                    modifiers: vec![Modifier::Clickable {
                        action: "tap".into(),
                    }],
                    alignment: Alignment::Center,
                    children: vec![text("b")],
                },
            ],
        };
        assert_eq!(tree.count(), 4);
        assert_eq!(tree.texts(), vec!["a", "b"]);
        assert_eq!(tree.actions(), vec!["tap"]);
        assert!(tree.fills_width());
        assert!(!tree.children()[1].fills_width());
    }
}
