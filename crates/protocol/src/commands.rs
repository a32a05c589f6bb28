use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each figure. Renderers consume
/// this list sequentially — each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a rectangle outline, optionally filled.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        fill: Option<ThemeToken>,
    },

    /// Draw a text string. `position.y` is the top of the text line and
    /// `position.x` is interpreted according to `align`.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Draw connected line segments through `points`, in order.
    DrawPolyline {
        points: Vec<Point>,
        color: ThemeToken,
        width: f64,
    },

    /// Begin a logical group (e.g. one figure). Renderers may use this for
    /// window titles or layer separation.
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_serialize_with_variant_tag() {
        let cmd = RenderCommand::BeginGroup {
            id: "case-1".into(),
            label: Some("Case 1".into()),
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["BeginGroup"]["id"], "case-1");
        assert_eq!(json["BeginGroup"]["label"], "Case 1");
    }
}
