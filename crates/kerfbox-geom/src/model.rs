//! Panel geometry model.
//!
//! Every generation request produces a set of [`Panel`]s, each owning its
//! outline, cut primitives, and engrave primitives. Panels never reference
//! each other; mating features line up only because they are derived from
//! the same parameter set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink by `m` on every side. Width/height floor at zero.
    pub fn inset(&self, m: f64) -> Rect {
        Rect {
            x: self.x + m,
            y: self.y + m,
            w: (self.w - 2.0 * m).max(0.0),
            h: (self.h - 2.0 * m).max(0.0),
        }
    }

    /// Grow by `m` on every side.
    pub fn expand(&self, m: f64) -> Rect {
        Rect {
            x: self.x - m,
            y: self.y - m,
            w: self.w + 2.0 * m,
            h: self.h + 2.0 * m,
        }
    }

    /// Strict overlap test; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x + self.w <= other.x
            || other.x + other.w <= self.x
            || self.y + self.h <= other.y
            || other.y + other.h <= self.y)
    }
}

/// Panel perimeter: a plain rectangle or a closed joint path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Outline {
    Rect { w: f64, h: f64 },
    Path(Vec<Point>),
}

/// Internal geometry removed from a panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Cut {
    Rect(Rect),
    Circle { cx: f64, cy: f64, r: f64 },
    Path(Vec<Point>),
}

impl Cut {
    /// Axis-aligned bounding box of the cut.
    pub fn bbox(&self) -> Rect {
        match self {
            Cut::Rect(r) => *r,
            Cut::Circle { cx, cy, r } => Rect::new(cx - r, cy - r, 2.0 * r, 2.0 * r),
            Cut::Path(points) => bbox_of(points),
        }
    }
}

/// Text engraving mark. Rotation is in degrees, anchored at (x, y).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMark {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub rotation: f64,
}

/// Surface mark, never removed material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Engrave {
    Text(TextMark),
    Path(Vec<Point>),
}

/// Identity of a panel within one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelRole {
    WallFront,
    WallBack,
    WallLeft,
    WallRight,
    Floor,
    Divider(u8),
}

impl PanelRole {
    pub fn name(&self) -> String {
        match self {
            PanelRole::WallFront => "wall_front".to_string(),
            PanelRole::WallBack => "wall_back".to_string(),
            PanelRole::WallLeft => "wall_left".to_string(),
            PanelRole::WallRight => "wall_right".to_string(),
            PanelRole::Floor => "floor".to_string(),
            PanelRole::Divider(i) => format!("divider_{}", i + 1),
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            PanelRole::WallFront | PanelRole::WallBack | PanelRole::WallLeft | PanelRole::WallRight
        )
    }

    /// Side walls carry rotated text so reading runs floor-to-top.
    pub fn is_side_wall(&self) -> bool {
        matches!(self, PanelRole::WallLeft | PanelRole::WallRight)
    }
}

/// One flat part to be cut from the sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub role: PanelRole,
    /// Nominal (un-joined) size.
    pub base_w: f64,
    pub base_h: f64,
    /// Bounding box including protruding tabs; what the packer sees.
    pub w: f64,
    pub h: f64,
    pub outline: Outline,
    pub cuts: Vec<Cut>,
    pub engraves: Vec<Engrave>,
}

impl Panel {
    pub fn new_rect(role: PanelRole, w: f64, h: f64) -> Self {
        Self {
            role,
            base_w: w,
            base_h: h,
            w,
            h,
            outline: Outline::Rect { w, h },
            cuts: Vec::new(),
            engraves: Vec::new(),
        }
    }
}

/// Sheet-relative origin of one panel. Panels are never rotated on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub role: PanelRole,
    pub x: f64,
    pub y: f64,
}

/// Bounding box of a point run. Empty input yields a zero rect at the origin.
pub fn bbox_of(points: &[Point]) -> Rect {
    if points.is_empty() {
        return Rect::new(0.0, 0.0, 0.0, 0.0);
    }
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}
