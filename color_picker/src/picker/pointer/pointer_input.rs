// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A position in the host's client coordinate space. This is the same space that
/// [`crate::SurfaceRect`]s are expressed in, eg: pixels for a GPU host, or cells for a
/// terminal host.
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct ClientPos {
    pub x: f64,
    pub y: f64,
}

impl ClientPos {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Represents a pointer input event dispatched by the host to
/// [`crate::ColorPicker::handle_pointer_input`].
///
/// # Example
///
/// ```rust
/// use r3bl_color_picker::{Button, ClientPos, PointerInput, PointerInputKind};
///
/// let press = PointerInput {
///     pos: ClientPos::new(10.0, 5.0),
///     kind: PointerInputKind::Down(Button::Left),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PointerInput {
    /// Where the event occurred, in client coordinates.
    pub pos: ClientPos,
    pub kind: PointerInputKind,
}

impl PointerInput {
    #[must_use]
    pub fn new(x: f64, y: f64, kind: PointerInputKind) -> Self {
        Self {
            pos: ClientPos::new(x, y),
            kind,
        }
    }
}

/// The subset of pointer interactions the picker cares about. Hosts that can't tell a
/// drag from a move may send [`PointerInputKind::Move`] for both, tracking is driven by
/// press and release.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum PointerInputKind {
    /// Button pressed down at a position.
    Down(Button),
    /// Button released at a position.
    Up(Button),
    /// Pointer moved without any buttons pressed.
    Move,
    /// Pointer moved while a button is held down.
    Drag(Button),
    /// Scroll wheel, or anything else the picker ignores.
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum Button {
    Left,
    Right,
    Middle,
}

/// Terminal cells become client coordinates (column is `x`, row is `y`).
impl From<MouseEvent> for PointerInput {
    fn from(mouse_event: MouseEvent) -> Self {
        PointerInput {
            pos: ClientPos::new(f64::from(mouse_event.column), f64::from(mouse_event.row)),
            kind: mouse_event.kind.into(),
        }
    }
}

impl From<MouseEventKind> for PointerInputKind {
    fn from(mouse_event_kind: MouseEventKind) -> Self {
        match mouse_event_kind {
            MouseEventKind::Down(button) => PointerInputKind::Down(button.into()),
            MouseEventKind::Up(button) => PointerInputKind::Up(button.into()),
            MouseEventKind::Moved => PointerInputKind::Move,
            MouseEventKind::Drag(button) => PointerInputKind::Drag(button.into()),
            MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => PointerInputKind::Other,
        }
    }
}

impl From<MouseButton> for Button {
    fn from(mouse_button: MouseButton) -> Self {
        match mouse_button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            MouseButton::Middle => Button::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_from_crossterm_mouse_event() {
        let it: PointerInput = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
        .into();
        assert_eq2!(it, PointerInput::new(12.0, 3.0, PointerInputKind::Drag(Button::Left)));
    }

    #[test]
    fn test_scroll_is_ignored_kind() {
        let it: PointerInputKind = MouseEventKind::ScrollDown.into();
        assert_eq2!(it, PointerInputKind::Other);
    }
}
