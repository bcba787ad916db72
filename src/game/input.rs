use super::geometry::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    #[default]
    Released,
}

/// Snapshot of the pointer, polled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseState {
    pub position: Point,
    pub left_button: ButtonState,
}

impl MouseState {
    pub const fn new(position: Point, left_button: ButtonState) -> Self {
        MouseState {
            position,
            left_button,
        }
    }

    /// A pointer that is outside every tile.
    pub const fn away() -> Self {
        MouseState::new(Point::new(-1, -1), ButtonState::Released)
    }
}
