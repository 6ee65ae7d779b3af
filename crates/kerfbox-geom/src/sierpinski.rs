//! Sierpinski triangle generation for fractal engraving.
//!
//! An equilateral triangle is fitted (centered, maximal) inside a rectangle,
//! then recursively subdivided: each triangle splits into the three corner
//! sub-triangles via its edge midpoints, so only leaves are kept and the
//! central sub-triangle is implicitly removed. Depth `d` yields exactly
//! `3^d` leaves. Recursion is sequential; at the depths used (<= 6) there is
//! nothing to parallelize and keepout filtering stays deterministic.

use crate::model::{bbox_of, Point, Rect};

/// One leaf triangle. `a` is the apex, `b` bottom-left, `c` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn bbox(&self) -> Rect {
        bbox_of(&[self.a, self.b, self.c])
    }

    /// Closed outline (first point repeated last).
    pub fn to_path(&self) -> Vec<Point> {
        vec![self.a, self.b, self.c, self.a]
    }
}

fn mid(p: Point, q: Point) -> Point {
    Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Fit an equilateral triangle inside `rect`, centered, apex up.
fn equilateral_in_rect(rect: &Rect) -> Triangle {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        let p = Point::new(rect.x, rect.y);
        return Triangle { a: p, b: p, c: p };
    }

    let side_by_width = rect.w;
    let side_by_height = rect.h * 2.0 / 3f64.sqrt();
    let side = side_by_width.min(side_by_height);
    let tri_h = side * 3f64.sqrt() / 2.0;

    let cx = rect.x + rect.w / 2.0;
    let cy = rect.y + rect.h / 2.0;

    Triangle {
        a: Point::new(cx, cy - tri_h / 2.0),
        b: Point::new(cx - side / 2.0, cy + tri_h / 2.0),
        c: Point::new(cx + side / 2.0, cy + tri_h / 2.0),
    }
}

fn subdivide(t: Triangle, depth: u32, out: &mut Vec<Triangle>) {
    if depth == 0 {
        out.push(t);
        return;
    }
    let ab = mid(t.a, t.b);
    let ac = mid(t.a, t.c);
    let bc = mid(t.b, t.c);
    subdivide(Triangle { a: t.a, b: ab, c: ac }, depth - 1, out);
    subdivide(Triangle { a: ab, b: t.b, c: bc }, depth - 1, out);
    subdivide(Triangle { a: ac, b: bc, c: t.c }, depth - 1, out);
}

/// Leaf triangles of a Sierpinski triangle fitted to `rect` after an
/// additional `inset`.
pub fn leaf_triangles(rect: &Rect, depth: u32, inset: f64) -> Vec<Triangle> {
    let tri = equilateral_in_rect(&rect.inset(inset));
    let mut out = Vec::with_capacity(3usize.pow(depth));
    subdivide(tri, depth, &mut out);
    out
}

/// Leaf triangles with keepout filtering: any leaf whose bounding box
/// intersects a keepout rectangle is dropped whole, never clipped. Keepouts
/// should already include any desired padding.
pub fn leaf_triangles_clipped(
    rect: &Rect,
    depth: u32,
    inset: f64,
    keepouts: &[Rect],
) -> Vec<Triangle> {
    leaf_triangles(rect, depth, inset)
        .into_iter()
        .filter(|t| {
            let bb = t.bbox();
            !keepouts.iter().any(|k| bb.intersects(k))
        })
        .collect()
}
