use foundation::math::Vec2;

/// Mouse button that started a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index.
    pub fn from_index(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// Pointer input delivered by the host.
///
/// `Enter`/`Leave`/`Down` come from the canvas; `Move`/`Up` are expected from
/// the whole document so a drag keeps going outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down { position: Vec2, button: PointerButton },
    Move { position: Vec2 },
    Up,
}

/// Whether the host should render right away after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Repaint {
    Skip,
    Now,
}
