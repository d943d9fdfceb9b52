//! The resolved element tree.
//!
//! [`Screen`] and [`Element`] are what both renderers walk: every default is already
//! applied and every color parsed, so the preview and the document cannot drift apart.
use crate::color::{Color, ColorError};
use crate::config::{ElementConfig, ElementKind, LayoutConfig};
use crate::defaults;
use crate::layout::Alignment;

/// Horizontal and vertical padding in dp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Padding {
    pub fn new(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal <= 0 && self.vertical <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub width: i32,
    pub color: Color,
}

impl Border {
    /// A border exists only when both a color and a positive width are given.
    fn resolve(color: Option<&str>, width: Option<i32>) -> Result<Option<Border>, ColorError> {
        match (color, width) {
            (Some(color), Some(width)) if width > 0 => Ok(Some(Border {
                width,
                color: Color::parse_hex(color)?,
            })),
            _ => Ok(None),
        }
    }
}

/// The container an element is placed in. Buttons placed directly in a row keep their
/// intrinsic width; everywhere else they fill the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    Column,
    Row,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    pub font_size: i32,
    pub color: Color,
    pub padding: Padding,
    pub bottom_margin: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonElement {
    pub label: String,
    pub action: String,
    pub corner_radius: i32,
    pub background: Color,
    pub text_color: Color,
    pub font_size: i32,
    pub padding: Padding,
    pub border: Option<Border>,
}

impl ButtonElement {
    pub fn fills_width(&self, parent: ParentKind) -> bool {
        parent != ParentKind::Row
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacerElement {
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerElement {
    pub thickness: i32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardElement {
    pub corner_radius: i32,
    pub background: Color,
    pub padding: Padding,
    pub border: Option<Border>,
    pub align: Alignment,
    /// Cards are clickable only when an explicit `actionName` was given.
    pub action: Option<String>,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowElement {
    pub padding_v: i32,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextElement),
    Button(ButtonElement),
    Spacer(SpacerElement),
    Divider(DividerElement),
    Card(CardElement),
    Row(RowElement),
}

fn color_or(value: Option<&str>, default: &str) -> Result<Color, ColorError> {
    Color::parse_hex(value.unwrap_or(default))
}

fn resolve_children(config: &ElementConfig) -> Result<Vec<Element>, ColorError> {
    let mut children = Vec::with_capacity(config.children().len());
    for child in config.children() {
        if let Some(element) = Element::resolve(child)? {
            children.push(element);
        }
    }
    Ok(children)
}

impl Element {
    /// Resolves one configured element. Unknown kinds resolve to `None`.
    pub fn resolve(config: &ElementConfig) -> Result<Option<Element>, ColorError> {
        let element = match config.kind {
            ElementKind::Text => Element::Text(TextElement {
                text: config.text.clone().unwrap_or_default(),
                font_size: config.font_size.unwrap_or(defaults::text::FONT_SIZE),
                color: color_or(config.color.as_deref(), defaults::text::COLOR)?,
                padding: Padding::new(
                    config.padding_h.unwrap_or(0),
                    config.padding_v.unwrap_or(0),
                ),
                bottom_margin: defaults::text::BOTTOM_MARGIN,
            }),
            ElementKind::Button => Element::Button(ButtonElement {
                label: config
                    .text
                    .clone()
                    .unwrap_or_else(|| defaults::button::LABEL.to_string()),
                action: defaults::button_action(
                    config.action_name.as_deref(),
                    &config.id,
                    config.text.as_deref(),
                ),
                corner_radius: config
                    .corner_radius
                    .unwrap_or(defaults::button::CORNER_RADIUS),
                background: color_or(config.color.as_deref(), defaults::button::COLOR)?,
                text_color: color_or(config.text_color.as_deref(), defaults::button::TEXT_COLOR)?,
                font_size: config.font_size.unwrap_or(defaults::button::FONT_SIZE),
                padding: Padding::new(
                    config.padding_h.unwrap_or(defaults::button::PADDING_H),
                    config.padding_v.unwrap_or(defaults::button::PADDING_V),
                ),
                border: Border::resolve(config.border_color.as_deref(), config.border_width)?,
            }),
            ElementKind::Spacer => Element::Spacer(SpacerElement {
                height: config.height.unwrap_or(defaults::spacer::HEIGHT),
            }),
            ElementKind::Divider => Element::Divider(DividerElement {
                thickness: config.height.unwrap_or(defaults::divider::THICKNESS),
                color: color_or(config.color.as_deref(), defaults::divider::COLOR)?,
            }),
            ElementKind::Card => Element::Card(CardElement {
                corner_radius: config.corner_radius.unwrap_or(defaults::card::CORNER_RADIUS),
                background: color_or(config.color.as_deref(), defaults::card::COLOR)?,
                padding: Padding::new(
                    config.padding_h.unwrap_or(defaults::card::PADDING_H),
                    config.padding_v.unwrap_or(defaults::card::PADDING_V),
                ),
                border: Border::resolve(config.border_color.as_deref(), config.border_width)?,
                align: config.align.unwrap_or_default(),
                action: config.action_name.clone(),
                children: resolve_children(config)?,
            }),
            ElementKind::Row => Element::Row(RowElement {
                padding_v: defaults::row::PADDING_V,
                children: resolve_children(config)?,
            }),
            ElementKind::Unknown => {
                log::debug!("Skipping element with unrecognized type (id: '{}')", config.id);
                return Ok(None);
            }
        };
        Ok(Some(element))
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(_) => ElementKind::Text,
            Element::Button(_) => ElementKind::Button,
            Element::Spacer(_) => ElementKind::Spacer,
            Element::Divider(_) => ElementKind::Divider,
            Element::Card(_) => ElementKind::Card,
            Element::Row(_) => ElementKind::Row,
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Card(card) => card.children.as_slice(),
            Element::Row(row) => row.children.as_slice(),
            Element::Text(_) | Element::Button(_) | Element::Spacer(_) | Element::Divider(_) => {
                &[]
            }
        }
    }
}

/// A fully resolved layout: the root column and its elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub background: Color,
    pub scrollable: bool,
    pub padding: i32,
    pub elements: Vec<Element>,
}

impl Screen {
    pub fn resolve(config: &LayoutConfig) -> Result<Screen, ColorError> {
        let mut elements = Vec::with_capacity(config.elements.len());
        for element in &config.elements {
            if let Some(resolved) = Element::resolve(element)? {
                elements.push(resolved);
            }
        }
        Ok(Screen {
            background: Color::parse_hex(&config.background_color)?,
            scrollable: config.scrollable,
            padding: config.padding.unwrap_or(defaults::SCREEN_PADDING),
            elements,
        })
    }

    /// Scrollable screens stack from the top, fixed screens are centered vertically.
    pub fn vertical_arrangement(&self) -> crate::layout::Arrangement {
        if self.scrollable {
            crate::layout::Arrangement::Start
        } else {
            crate::layout::Arrangement::Center
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_one(json: &str) -> Element {
        let config: ElementConfig = serde_json::from_str(json).unwrap();
        Element::resolve(&config).unwrap().unwrap()
    }

    #[test]
    fn bare_button_gets_defaults() {
        let Element::Button(button) = resolve_one(r#"{ "type": "button" }"#) else {
            panic!("expected a button");
        };
        assert_eq!(button.label, "Button");
        assert_eq!(button.action, "button");
        assert_eq!(button.corner_radius, 24);
        assert_eq!(button.background.argb(), 0xFF62_00EA);
        assert_eq!(button.text_color, Color::WHITE);
        assert_eq!(button.font_size, 16);
        assert_eq!(button.padding, Padding::new(32, 14));
        assert_eq!(button.border, None);
    }

    #[test]
    fn button_border_needs_color_and_width() {
        let only_color = resolve_one(r##"{ "type": "button", "borderColor": "#000000" }"##);
        let zero_width = resolve_one(
            r##"{ "type": "button", "borderColor": "#000000", "borderWidth": 0 }"##,
        );
        let both = resolve_one(
            r##"{ "type": "button", "borderColor": "#000000", "borderWidth": 2 }"##,
        );
        for element in [only_color, zero_width] {
            let Element::Button(b) = element else { panic!() };
            assert_eq!(b.border, None);
        }
        let Element::Button(b) = both else { panic!() };
        assert_eq!(
            b.border,
            Some(Border {
                width: 2,
                color: Color::BLACK
            })
        );
    }

    #[test]
    fn button_fill_depends_on_parent() {
        let Element::Button(b) = resolve_one(r#"{ "type": "button" }"#) else { panic!() };
        assert!(b.fills_width(ParentKind::Column));
        assert!(!b.fills_width(ParentKind::Row));
    }

    #[test]
    fn card_defaults_and_action() {
        let Element::Card(card) = resolve_one(r#"{ "type": "card", "id": "c1" }"#) else {
            panic!()
        };
        assert_eq!(card.corner_radius, 16);
        assert_eq!(card.background, Color::WHITE);
        assert_eq!(card.padding, Padding::new(16, 16));
        assert_eq!(card.align, Alignment::Center);
        assert_eq!(card.action, None);

        let Element::Card(card) =
            resolve_one(r#"{ "type": "card", "actionName": "open", "align": "end" }"#)
        else {
            panic!()
        };
        assert_eq!(card.action.as_deref(), Some("open"));
        assert_eq!(card.align, Alignment::End);
    }

    #[test]
    fn unknown_children_are_dropped() {
        let row = resolve_one(
            r#"{ "type": "row", "children": [
                { "type": "text", "text": "a" },
                { "type": "sparkle" },
                { "type": "spacer" }
            ] }"#,
        );
        let kinds: Vec<_> = row.children().iter().map(Element::kind).collect();
        assert_eq!(kinds, vec![ElementKind::Text, ElementKind::Spacer]);
    }

    #[test]
    fn bad_color_propagates() {
        let config: ElementConfig =
            serde_json::from_str(r#"{ "type": "divider", "color": "blue" }"#).unwrap();
        assert!(Element::resolve(&config).is_err());
    }

    #[test]
    fn screen_defaults() {
        let screen = LayoutConfig::default().resolve().unwrap();
        assert_eq!(screen.padding, 24);
        assert_eq!(screen.background.argb(), 0xFFF3_E5F5);
        assert_eq!(
            screen.vertical_arrangement(),
            crate::layout::Arrangement::Center
        );
    }
}
