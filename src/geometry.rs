//! Viewport-space geometry shared by the tooltip engine and the visibility detector.
//!
//! All coordinates are CSS pixels relative to the top-left corner of the viewport,
//! `y` growing downwards, matching what `getBoundingClientRect()` reports.

/// A point in viewport space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal offset from the viewport's left edge.
    pub x: f32,
    /// Vertical offset from the viewport's top edge.
    pub y: f32,
}

impl Point {
    /// Construct a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// An axis-aligned bounding box in viewport space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width; negative widths are treated as zero.
    pub width: f32,
    /// Height; negative heights are treated as zero.
    pub height: f32,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width.max(0.0)
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height.max(0.0)
    }

    /// Area, never negative.
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grow (positive `margin`) or shrink (negative `margin`) on every side.
    ///
    /// Shrinking past zero collapses the rectangle to an empty one centred on
    /// the original.
    pub fn inflate(&self, margin: f32) -> Rect {
        let width = self.width.max(0.0) + 2.0 * margin;
        let height = self.height.max(0.0) + 2.0 * margin;
        Rect {
            x: if width > 0.0 { self.x - margin } else { self.x + self.width.max(0.0) / 2.0 },
            y: if height > 0.0 { self.y - margin } else { self.y + self.height.max(0.0) / 2.0 },
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Overlapping region of two rectangles, `None` when they do not overlap
    /// with a positive area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > left && bottom > top {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// `true` if `p` lies inside or on the border.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Bottom-left corner, the anchor used for keyboard-focus tooltips.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }
}

/// The browser viewport (the intersection root).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Inner width in pixels.
    pub width: f32,
    /// Inner height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Construct a viewport of the given inner size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The viewport as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}
