use serde_json::{Value, json};

/// A screen with default settings and the given root elements
pub fn screen(elements: Value) -> Value {
    json!({ "elements": elements })
}

pub fn text(content: &str) -> Value {
    json!({ "type": "text", "text": content })
}

pub fn button(label: &str) -> Value {
    json!({ "type": "button", "text": label })
}

pub fn row(children: Value) -> Value {
    json!({ "type": "row", "children": children })
}

pub fn card(children: Value) -> Value {
    json!({ "type": "card", "children": children })
}

/// A realistic sign-in screen touching every element kind
pub fn sign_in_screen() -> Value {
    json!({
        "backgroundColor": "#FAFAFA",
        "scrollable": true,
        "padding": 16,
        "appVersion": "2.3.1",
        "elements": [
            { "type": "text", "text": "Welcome back", "fontSize": 28, "color": "#212121" },
            { "type": "spacer", "height": 8 },
            { "type": "divider", "color": "#E0E0E0" },
            {
                "type": "card",
                "align": "start",
                "borderColor": "#BDBDBD",
                "borderWidth": 1,
                "children": [
                    { "type": "text", "text": "Signed in as ada@example.com", "paddingH": 4 },
                    { "type": "button", "id": "switch", "text": "Switch account", "color": "#00000000", "textColor": "#6200EA" }
                ]
            },
            {
                "type": "row",
                "children": [
                    { "type": "button", "text": "Cancel", "actionName": "cancel", "color": "#9E9E9E" },
                    { "type": "button", "text": "Continue", "actionName": "continue" },
                    { "type": "carousel", "items": 3 }
                ]
            },
            { "type": "card", "actionName": "help", "cornerRadius": 0, "children": [
                { "type": "text", "text": "Need help?" }
            ] }
        ]
    })
}
