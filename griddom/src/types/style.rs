use super::{Cursor, Display, Position, TextAlign};

/// Inline style of an element, serialized into the `style` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub display: Option<Display>,
    pub position: Option<Position>,
    pub top: Option<i32>,
    pub left: Option<i32>,
    /// Raw CSS length, e.g. `120px` or `20%`.
    pub width: Option<String>,
    pub padding: Option<String>,
    pub text_align: Option<TextAlign>,
    pub cursor: Option<Cursor>,
    pub opacity: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_css().is_empty()
    }

    /// Serialize to a CSS declaration list. Property order is fixed.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        if let Some(display) = self.display {
            decls.push(format!("display:{}", display.as_css()));
        }
        if let Some(position) = self.position {
            decls.push(format!("position:{}", position.as_css()));
        }
        if let Some(top) = self.top {
            decls.push(format!("top:{top}px"));
        }
        if let Some(left) = self.left {
            decls.push(format!("left:{left}px"));
        }
        if let Some(width) = &self.width {
            decls.push(format!("width:{width}"));
        }
        if let Some(padding) = &self.padding {
            decls.push(format!("padding:{padding}"));
        }
        if let Some(align) = self.text_align {
            decls.push(format!("text-align:{}", align.as_css()));
        }
        if let Some(cursor) = self.cursor {
            decls.push(format!("cursor:{}", cursor.as_css()));
        }
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity:{opacity}"));
        }
        decls.join(";")
    }
}
