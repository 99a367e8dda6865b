use crate::layout::Rect;

/// Host-page events with element targeting.
///
/// Targets are element IDs. A `None` click target means the click landed on
/// something without an ID (page background, foreign markup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary-button click.
    Click {
        target: Option<String>,
        x: i32,
        y: i32,
        /// Bounding rect of the target, when the host can measure it.
        target_rect: Option<Rect>,
    },
    /// Value of a text field changed.
    Input { target: String, value: String },
    /// Pointer entered an element's box.
    PointerEnter { target: String },
    /// Pointer left an element's box.
    PointerLeave { target: String },
}

impl Event {
    /// Click on an element at the origin, without geometry.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            target_rect: None,
        }
    }

    /// Click on an element whose bounding rect is known.
    pub fn click_on(target: impl Into<String>, rect: Rect) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: rect.x,
            y: rect.y,
            target_rect: Some(rect),
        }
    }

    /// Click on the page background.
    pub fn click_background(x: i32, y: i32) -> Self {
        Self::Click {
            target: None,
            x,
            y,
            target_rect: None,
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn pointer_enter(target: impl Into<String>) -> Self {
        Self::PointerEnter {
            target: target.into(),
        }
    }

    pub fn pointer_leave(target: impl Into<String>) -> Self {
        Self::PointerLeave {
            target: target.into(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. } => target.as_deref(),
            Self::Input { target, .. }
            | Self::PointerEnter { target }
            | Self::PointerLeave { target } => Some(target),
        }
    }
}
