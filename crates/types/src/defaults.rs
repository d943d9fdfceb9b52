//! Per-kind defaults. Both renderers only see these through [`crate::element`] resolution.

pub const BACKGROUND_COLOR: &str = "#F3E5F5";
pub const SCREEN_PADDING: i32 = 24;

pub mod text {
    pub const FONT_SIZE: i32 = 16;
    pub const COLOR: &str = "#000000";
    pub const BOTTOM_MARGIN: i32 = 8;
    pub const FONT_WEIGHT: f32 = 400.0;
}

pub mod button {
    pub const LABEL: &str = "Button";
    pub const CORNER_RADIUS: i32 = 24;
    pub const COLOR: &str = "#6200EA";
    pub const TEXT_COLOR: &str = "#FFFFFF";
    pub const FONT_SIZE: i32 = 16;
    pub const PADDING_H: i32 = 32;
    pub const PADDING_V: i32 = 14;
    pub const FONT_WEIGHT: f32 = 600.0;
    /// Action name used when neither `actionName`, `id` nor `text` is set.
    pub const FALLBACK_ACTION: &str = "button";
}

pub mod spacer {
    pub const HEIGHT: i32 = 16;
}

pub mod divider {
    pub const THICKNESS: i32 = 1;
    pub const COLOR: &str = "#CCCCCC";
}

pub mod card {
    pub const CORNER_RADIUS: i32 = 16;
    pub const COLOR: &str = "#FFFFFF";
    pub const PADDING_H: i32 = 16;
    pub const PADDING_V: i32 = 16;
}

pub mod row {
    pub const PADDING_V: i32 = 4;
}

/// Picks the click action for a button: `actionName`, then `id`, then `text`, then
/// [`button::FALLBACK_ACTION`]. Empty strings count as unset.
pub fn button_action(action_name: Option<&str>, id: &str, text: Option<&str>) -> String {
    action_name
        .filter(|s| !s.is_empty())
        .or(Some(id).filter(|s| !s.is_empty()))
        .or(text.filter(|s| !s.is_empty()))
        .unwrap_or(button::FALLBACK_ACTION)
        .to_string()
}
