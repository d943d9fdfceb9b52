use crate::ops::{HostAction, Modifier};
use rclayout_types::{Color, Shape};

/// Records a modifier chain in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, modifier: Modifier) -> Self {
        self.0.push(modifier);
        self
    }

    pub fn fill_max_size(self) -> Self {
        self.push(Modifier::FillMaxSize)
    }

    pub fn fill_max_width(self) -> Self {
        self.push(Modifier::FillMaxWidth)
    }

    pub fn background(self, color: Color) -> Self {
        self.push(Modifier::Background(color))
    }

    pub fn vertical_scroll(self) -> Self {
        self.push(Modifier::VerticalScroll)
    }

    pub fn padding(self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.push(Modifier::Padding {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn padding_all(self, value: f32) -> Self {
        self.padding(value, value, value, value)
    }

    pub fn height(self, value: f32) -> Self {
        self.push(Modifier::Height(value))
    }

    pub fn clip(self, shape: Shape) -> Self {
        self.push(Modifier::Clip(shape))
    }

    pub fn border(self, width: f32, color: Color, shape: Shape) -> Self {
        self.push(Modifier::Border {
            width,
            color,
            shape,
        })
    }

    pub fn on_click(self, action: HostAction) -> Self {
        self.push(Modifier::OnClick(action))
    }

    pub fn into_vec(self) -> Vec<Modifier> {
        self.0
    }
}

impl From<Modifiers> for Vec<Modifier> {
    fn from(modifiers: Modifiers) -> Self {
        modifiers.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let chain = Modifiers::new()
            .fill_max_width()
            .background(Color::WHITE)
            .padding_all(4.0);
        assert_eq!(
            chain.into_vec(),
            vec![
                Modifier::FillMaxWidth,
                Modifier::Background(Color::WHITE),
                Modifier::Padding {
                    left: 4.0,
                    top: 4.0,
                    right: 4.0,
                    bottom: 4.0
                },
            ]
        );
    }
}
