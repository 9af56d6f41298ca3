// Geometry primitives in integer screen pixels.
// Screen coordinates: origin top-left, y grows downward. Rects are half-open,
// so two rects that share an edge do not intersect.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, Sub},
};

/// Screen position in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position, growing downward.
    pub y: i32,
}

impl Point {
    /// Point at `(x, y)`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Component-wise difference, used as a pointer delta.
impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Window extent in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Size {
    /// Size of `w` by `h`.
    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Axis-aligned window frame: top-left origin plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Rect with top-left `(x, y)` and size `w` by `h`.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect from an origin and a size.
    #[inline]
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.w, size.h)
    }

    /// Left edge (inclusive).
    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }
    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }
    /// Top edge (inclusive).
    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }
    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Center point, rounded toward the origin.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Both dimensions strictly positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// True when `other` lies entirely inside `self` (edges may coincide).
    pub fn contains(&self, other: &Self) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// True when the two rects share a region of positive area.
    pub fn intersects(&self, other: &Self) -> bool {
        overlap_1d(self.left(), self.right(), other.left(), other.right()) > 0
            && overlap_1d(self.top(), self.bottom(), other.top(), other.bottom()) > 0
    }

    /// Whether `p` falls inside the half-open rect.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Same size, shifted by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Same size, moved to `origin`.
    #[inline]
    pub fn with_origin(&self, origin: Point) -> Self {
        Self::from_parts(origin, self.size())
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.origin(), self.size())
    }
}

/// Length of the overlap between `[a1, a2)` and `[b1, b2)`, zero if disjoint.
#[inline]
pub fn overlap_1d(a1: i32, a2: i32, b1: i32, b2: i32) -> i32 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0)
}
