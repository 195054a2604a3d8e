//! Points and rectangles in surface coordinates.
//!
//! Coordinates grow rightwards and downwards. A [`Rect`] contains its
//! top and left edges but not its bottom and right edges, so adjacent
//! regions never both contain a point on their shared edge.

/// A position on the tracking surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the straight-line distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_engine::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// assert_eq!(a.distance_to(Point::new(3.0, 4.0)), 5.0);
    /// ```
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, never negative.
    pub width: f64,
    /// Height, never negative.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle, clamping negative sizes to zero.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `true` if the point lies inside the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_engine::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
    /// assert!(rect.contains(Point::new(0.0, 0.0)));
    /// assert!(!rect.contains(Point::new(10.0, 2.0)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns the four corners: top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.x, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Mean distance from `point` to the four corners.
    #[must_use]
    pub fn corner_distance(&self, point: Point) -> f64 {
        self.corners()
            .iter()
            .map(|corner| corner.distance_to(point))
            .sum::<f64>()
            / 4.0
    }
}
