#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned integer rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn square_around(center: Point, side: i32) -> Self {
        Rect::new(center.x - side / 2, center.y - side / 2, side, side)
    }

    /// The right and bottom edges are exclusive.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contains() {
        let rect = Rect::new(10, 20, 5, 5);
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(14, 24)));
        assert!(!rect.contains(Point::new(15, 24)));
        assert!(!rect.contains(Point::new(14, 25)));
        assert!(!rect.contains(Point::new(9, 22)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::new(10, 20, 0, 0);
        assert!(!rect.contains(Point::new(10, 20)));
    }

    #[test]
    fn test_square_around() {
        let rect = Rect::square_around(Point::new(400, 300), 500);
        assert_eq!(rect, Rect::new(150, 50, 500, 500));
        assert_eq!(rect.center(), Point::new(400, 300));
    }
}
