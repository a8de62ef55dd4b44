//! Geometry primitives shared across the pager

/// Sentinel for a dimension that has not been measured yet
pub const INVALID_SIZE: i32 = -1;

/// Integer rectangle, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Float rectangle, used for sub-pixel image bounds from the solver
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Which view edges the image currently touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    /// An image at (or smaller than) the view touches every edge
    pub fn all() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

/// Image rotation, restricted to the quarter turns cameras produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// A rotation value that is not a multiple of 90 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation(pub i32);

impl std::fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid rotation: {} degrees", self.0)
    }
}

impl std::error::Error for InvalidRotation {}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// A 90- or 270-degree turn swaps an image's width and height
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Pick the on-screen variant of a dimension pair: `swapped` under a
    /// quarter turn, `original` otherwise
    pub fn rotated(self, original: i32, swapped: i32) -> i32 {
        if self.is_quarter_turn() {
            swapped
        } else {
            original
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = InvalidRotation;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees.rem_euclid(360) {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(InvalidRotation(degrees)),
        }
    }
}

/// Gap between an image edge and the view edge when the image is centered;
/// zero once the image is at least as wide as the view
pub fn gap_to_side(image_width: i32, view_width: i32) -> i32 {
    ((view_width - image_width) / 2).max(0)
}
