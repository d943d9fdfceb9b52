use crate::error::PreviewError;
use crate::widget::{Insets, Modifier, Widget};
use rclayout_types::defaults;
use rclayout_types::{
    Alignment, Arrangement, ButtonElement, CardElement, Element, LayoutConfig, ParentKind,
    RowElement, Screen, Shape,
};

/// Resolves and renders a config. Fails only on malformed colors.
pub fn render_preview(config: &LayoutConfig) -> Result<Widget, PreviewError> {
    let screen = config.resolve()?;
    Ok(render_screen(&screen))
}

pub fn render_screen(screen: &Screen) -> Widget {
    let mut modifiers = vec![
        Modifier::FillMaxSize,
        Modifier::Background {
            color: screen.background,
            shape: Shape::Rectangle,
        },
    ];
    if screen.scrollable {
        modifiers.push(Modifier::VerticalScroll);
    }
    modifiers.push(Modifier::Padding(Insets::all(screen.padding as f32)));

    Widget::Column {
        modifiers,
        vertical: screen.vertical_arrangement(),
        horizontal: Alignment::Center,
        children: render_children(&screen.elements, ParentKind::Column),
    }
}

fn render_children(elements: &[Element], parent: ParentKind) -> Vec<Widget> {
    elements.iter().map(|el| render_element(el, parent)).collect()
}

fn render_element(element: &Element, parent: ParentKind) -> Widget {
    match element {
        Element::Text(el) => {
            let mut modifiers = vec![Modifier::Padding(Insets::bottom(el.bottom_margin as f32))];
            if !el.padding.is_empty() {
                modifiers.push(Modifier::Padding(Insets::symmetric(
                    el.padding.horizontal as f32,
                    el.padding.vertical as f32,
                )));
            }
            Widget::Text {
                modifiers,
                text: el.text.clone(),
                font_size: el.font_size as f32,
                color: el.color,
                font_weight: defaults::text::FONT_WEIGHT,
            }
        }
        Element::Button(el) => button(el, el.fills_width(parent)),
        Element::Spacer(el) => Widget::Spacer {
            modifiers: vec![Modifier::Height(el.height as f32)],
        },
        Element::Divider(el) => Widget::Divider {
            thickness: el.thickness as f32,
            color: el.color,
        },
        Element::Card(el) => card(el),
        Element::Row(el) => row(el),
    }
}

fn button(el: &ButtonElement, fill_width: bool) -> Widget {
    let shape = Shape::rounded(el.corner_radius as f32);

    let mut modifiers = Vec::new();
    if fill_width {
        modifiers.push(Modifier::FillMaxWidth);
    }
    modifiers.push(Modifier::Clip(shape));
    modifiers.push(Modifier::Background {
        color: el.background,
        shape: Shape::Rectangle,
    });
    if let Some(border) = el.border {
        modifiers.push(Modifier::Border {
            width: border.width as f32,
            color: border.color,
            shape,
        });
    }
    modifiers.push(Modifier::Clickable {
        action: el.action.clone(),
    });
    modifiers.push(Modifier::Padding(Insets::symmetric(
        el.padding.horizontal as f32,
        el.padding.vertical as f32,
    )));

    Widget::Container {
        modifiers,
        alignment: Alignment::Center,
        children: vec![Widget::Text {
            modifiers: Vec::new(),
            text: el.label.clone(),
            font_size: el.font_size as f32,
            color: el.text_color,
            font_weight: defaults::button::FONT_WEIGHT,
        }],
    }
}

fn card(el: &CardElement) -> Widget {
    let shape = Shape::rounded(el.corner_radius as f32);

    let mut modifiers = vec![Modifier::FillMaxWidth];
    if el.corner_radius > 0 {
        modifiers.push(Modifier::Clip(shape));
    }
    modifiers.push(Modifier::Background {
        color: el.background,
        shape,
    });
    if let Some(border) = el.border {
        modifiers.push(Modifier::Border {
            width: border.width as f32,
            color: border.color,
            shape,
        });
    }
    if let Some(action) = &el.action {
        modifiers.push(Modifier::Clickable {
            action: action.clone(),
        });
    }
    if !el.padding.is_empty() {
        modifiers.push(Modifier::Padding(Insets::symmetric(
            el.padding.horizontal as f32,
            el.padding.vertical as f32,
        )));
    }

    Widget::Container {
        modifiers,
        alignment: Alignment::Start,
        children: vec![Widget::Column {
            modifiers: vec![Modifier::FillMaxWidth],
            vertical: Arrangement::Start,
            horizontal: el.align,
            children: render_children(&el.children, ParentKind::Column),
        }],
    }
}

fn row(el: &RowElement) -> Widget {
    Widget::Row {
        modifiers: vec![
            Modifier::FillMaxWidth,
            Modifier::Padding(Insets::symmetric(0.0, el.padding_v as f32)),
        ],
        horizontal: Arrangement::SpaceEvenly,
        vertical: Alignment::Center,
        children: render_children(&el.children, ParentKind::Row),
    }
}
