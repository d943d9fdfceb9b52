use crate::error::DocumentError;
use crate::modifiers::Modifiers;
use crate::ops::{HostAction, TextAlign, TextComponent};
use crate::options::DocumentOptions;
use crate::writer::{BinaryDocumentWriter, DocumentWriter};
use rclayout_types::defaults;
use rclayout_types::{
    Alignment, Arrangement, ButtonElement, CardElement, DividerElement, Element, LayoutConfig,
    ParentKind, RowElement, Screen, Shape, SpacerElement, TextElement,
};

/// Host action id attached to every click handler.
pub const ACTION_BUTTON_CLICKED: i32 = 1001;

/// Resolves `config` and encodes it with the bundled binary writer.
pub fn build_document(
    config: &LayoutConfig,
    options: &DocumentOptions,
) -> Result<Vec<u8>, DocumentError> {
    let screen = config.resolve()?;
    DocumentBuilder::new(Box::new(BinaryDocumentWriter::new()), *options).build(&screen)
}

/// Walks a resolved [`Screen`] and issues the matching writer calls.
pub struct DocumentBuilder {
    writer: Box<dyn DocumentWriter>,
    options: DocumentOptions,
}

impl DocumentBuilder {
    pub fn new(writer: Box<dyn DocumentWriter>, options: DocumentOptions) -> Self {
        Self { writer, options }
    }

    pub fn build(mut self, screen: &Screen) -> Result<Vec<u8>, DocumentError> {
        self.writer.begin_document(&self.options);

        let mut root = Modifiers::new()
            .fill_max_size()
            .background(screen.background);
        if screen.scrollable {
            root = root.vertical_scroll();
        }
        root = root.padding_all(self.dp(screen.padding));

        self.writer.start_root();
        self.writer
            .start_column(root, Alignment::Center, screen.vertical_arrangement());
        for element in &screen.elements {
            self.element(element, ParentKind::Column)?;
        }
        self.writer.end_container()?;
        self.writer.end_root()?;

        self.writer.finish()
    }

    fn dp(&self, value: i32) -> f32 {
        self.options.dp(value)
    }

    fn element(&mut self, element: &Element, parent: ParentKind) -> Result<(), DocumentError> {
        match element {
            Element::Text(text) => self.text(text),
            Element::Button(button) => self.button(button, button.fills_width(parent))?,
            Element::Spacer(spacer) => self.spacer(spacer)?,
            Element::Divider(divider) => self.divider(divider)?,
            Element::Card(card) => self.card(card)?,
            Element::Row(row) => self.row(row)?,
        }
        Ok(())
    }

    fn text(&mut self, el: &TextElement) {
        let mut mods = Modifiers::new().padding(0.0, 0.0, 0.0, self.dp(el.bottom_margin));
        if !el.padding.is_empty() {
            let (h, v) = (self.dp(el.padding.horizontal), self.dp(el.padding.vertical));
            mods = mods.padding(h, v, h, v);
        }
        let text = self.writer.add_text(&el.text);
        self.writer.text_component(TextComponent {
            modifiers: mods.into(),
            text,
            color: el.color,
            font_size: self.options.sp(el.font_size),
            font_weight: defaults::text::FONT_WEIGHT,
            align: TextAlign::Start,
        });
    }

    fn button(&mut self, el: &ButtonElement, fill_width: bool) -> Result<(), DocumentError> {
        let radius = self.dp(el.corner_radius);
        let shape = Shape::rounded(radius);

        let mut mods = Modifiers::new();
        if fill_width {
            mods = mods.fill_max_width();
        }
        mods = mods.clip(shape).background(el.background);
        if let Some(border) = el.border {
            mods = mods.border(self.dp(border.width), border.color, shape);
        }
        let action = HostAction {
            action_id: ACTION_BUTTON_CLICKED,
            name: self.writer.add_text(&el.action),
        };
        let (h, v) = (self.dp(el.padding.horizontal), self.dp(el.padding.vertical));
        mods = mods.on_click(action).padding(h, v, h, v);

        let label = self.writer.add_text(&el.label);
        self.writer
            .start_box(mods, Alignment::Center, Alignment::Center);
        self.writer.text_component(TextComponent {
            modifiers: Vec::new(),
            text: label,
            color: el.text_color,
            font_size: self.options.sp(el.font_size),
            font_weight: defaults::button::FONT_WEIGHT,
            align: TextAlign::Center,
        });
        self.writer.end_container()
    }

    fn spacer(&mut self, el: &SpacerElement) -> Result<(), DocumentError> {
        let mods = Modifiers::new().height(self.dp(el.height));
        self.writer.start_box(mods, Alignment::Start, Alignment::Start);
        self.writer.end_container()
    }

    fn divider(&mut self, el: &DividerElement) -> Result<(), DocumentError> {
        let mods = Modifiers::new()
            .fill_max_width()
            .height(self.dp(el.thickness))
            .background(el.color);
        self.writer.start_box(mods, Alignment::Start, Alignment::Start);
        self.writer.end_container()
    }

    fn card(&mut self, el: &CardElement) -> Result<(), DocumentError> {
        let radius = self.dp(el.corner_radius);
        let shape = Shape::rounded(radius);

        let mut mods = Modifiers::new().fill_max_width();
        if let Some(border) = el.border {
            mods = mods.border(self.dp(border.width), border.color, shape);
        }
        if el.corner_radius > 0 {
            mods = mods.clip(shape);
        }
        mods = mods.background(el.background);
        if let Some(action) = &el.action {
            let name = self.writer.add_text(action);
            mods = mods.on_click(HostAction {
                action_id: ACTION_BUTTON_CLICKED,
                name,
            });
        }
        if !el.padding.is_empty() {
            let (h, v) = (self.dp(el.padding.horizontal), self.dp(el.padding.vertical));
            mods = mods.padding(h, v, h, v);
        }

        self.writer.start_box(mods, Alignment::Start, Alignment::Start);
        self.writer.start_column(
            Modifiers::new().fill_max_width(),
            el.align,
            Arrangement::Start,
        );
        for child in &el.children {
            self.element(child, ParentKind::Column)?;
        }
        self.writer.end_container()?;
        self.writer.end_container()
    }

    fn row(&mut self, el: &RowElement) -> Result<(), DocumentError> {
        let v = self.dp(el.padding_v);
        let mods = Modifiers::new().fill_max_width().padding(0.0, v, 0.0, v);
        self.writer
            .start_row(mods, Arrangement::SpaceEvenly, Alignment::Center);
        for child in &el.children {
            self.element(child, ParentKind::Row)?;
        }
        self.writer.end_container()
    }
}
