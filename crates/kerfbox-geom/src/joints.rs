//! Finger-joint outline construction.
//!
//! Walls interlock with each other and with the floor through two features
//! per treated edge, centered a fixed margin in from each corner:
//! - top edge: plain (open box, no lid)
//! - right edge: two outward male tabs
//! - bottom edge: two outward male tabs (into the floor)
//! - left edge: two inward female pockets (receives the mating wall's tabs)
//!
//! The floor receives two female pockets near each corner of all four edges.
//!
//! Outlines are emitted as one closed path walked clockwise from the
//! top-left corner. All four edges share a single walker parameterized by
//! [`EdgeDir`]; detours are inserted in monotone order along each walk, so
//! the path never doubles back over itself.

use kerfbox_core::CutConfig;

use crate::kerf;
use crate::model::{Outline, Panel, Point};
use crate::validate::PhysicalParams;

/// Edge of a rectangular panel, named in panel coordinates (y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDir {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeDir {
    /// Clockwise walk order around the perimeter.
    pub const CLOCKWISE: [EdgeDir; 4] = [EdgeDir::Top, EdgeDir::Right, EdgeDir::Bottom, EdgeDir::Left];

    fn span(&self, w: f64, h: f64) -> f64 {
        match self {
            EdgeDir::Top | EdgeDir::Bottom => w,
            EdgeDir::Left | EdgeDir::Right => h,
        }
    }

    /// Map a walk position to panel coordinates. `t` is the distance along
    /// the clockwise walk from the edge's start corner; `d` is the offset
    /// perpendicular to the edge, positive outward.
    fn project(&self, t: f64, d: f64, w: f64, h: f64) -> Point {
        match self {
            EdgeDir::Top => Point::new(t, -d),
            EdgeDir::Right => Point::new(w + d, t),
            EdgeDir::Bottom => Point::new(w - t, h + d),
            EdgeDir::Left => Point::new(-d, h - t),
        }
    }

    /// Convert a coordinate along the edge axis into walk distance.
    fn to_walk(&self, pos: f64, w: f64, h: f64) -> f64 {
        match self {
            EdgeDir::Top | EdgeDir::Right => pos,
            EdgeDir::Bottom => w - pos,
            EdgeDir::Left => h - pos,
        }
    }
}

/// One rectangular detour on an edge, in walk coordinates. Positive depth
/// protrudes outward (tab), negative indents inward (pocket).
#[derive(Debug, Clone, Copy)]
struct EdgeFeature {
    center: f64,
    width: f64,
    depth: f64,
}

/// Feature centers along an edge of length `edge_len`: one a margin in from
/// each end. Precondition (validated upstream by the dimension checks):
/// `edge_len >= 2 * (margin + feature_w)` keeps the two features apart.
pub fn corner_centers(edge_len: f64, feature_w: f64, margin: f64) -> [f64; 2] {
    [
        margin + feature_w / 2.0,
        edge_len - margin - feature_w / 2.0,
    ]
}

fn push_unique(path: &mut Vec<Point>, p: Point) {
    if let Some(last) = path.last() {
        if (p.x - last.x).abs() < 1e-9 && (p.y - last.y).abs() < 1e-9 {
            return;
        }
    }
    path.push(p);
}

/// Append one edge of the perimeter walk, inserting detours in ascending
/// walk order, and finish at the edge's end corner.
fn walk_edge(path: &mut Vec<Point>, dir: EdgeDir, w: f64, h: f64, features: &mut [EdgeFeature]) {
    features.sort_by(|a, b| a.center.partial_cmp(&b.center).unwrap_or(std::cmp::Ordering::Equal));

    for f in features.iter() {
        let a = f.center - f.width / 2.0;
        let b = f.center + f.width / 2.0;
        push_unique(path, dir.project(a, 0.0, w, h));
        push_unique(path, dir.project(a, f.depth, w, h));
        push_unique(path, dir.project(b, f.depth, w, h));
        push_unique(path, dir.project(b, 0.0, w, h));
    }
    push_unique(path, dir.project(dir.span(w, h), 0.0, w, h));
}

/// Wall outline: plain top, tabs right and bottom, pockets left.
pub fn wall_outline(base_w: f64, base_h: f64, cfg: &CutConfig, kerf_mm: f64) -> Outline {
    let m = cfg.min_edge_margin;
    let fw = kerf::finger_feature_w_draw(cfg, kerf_mm);
    let tab_d = kerf::finger_tab_depth_draw(cfg, kerf_mm);
    let pocket_d = kerf::finger_pocket_depth_draw(cfg, kerf_mm);

    let ys = corner_centers(base_h, fw, m);
    let xs = corner_centers(base_w, fw, m);

    let mut path = vec![Point::new(0.0, 0.0)];

    for dir in EdgeDir::CLOCKWISE {
        let mut features: Vec<EdgeFeature> = match dir {
            EdgeDir::Top => Vec::new(),
            EdgeDir::Right => ys
                .iter()
                .map(|&y| EdgeFeature {
                    center: dir.to_walk(y, base_w, base_h),
                    width: fw,
                    depth: tab_d,
                })
                .collect(),
            EdgeDir::Bottom => xs
                .iter()
                .map(|&x| EdgeFeature {
                    center: dir.to_walk(x, base_w, base_h),
                    width: fw,
                    depth: tab_d,
                })
                .collect(),
            EdgeDir::Left => ys
                .iter()
                .map(|&y| EdgeFeature {
                    center: dir.to_walk(y, base_w, base_h),
                    width: fw,
                    depth: -pocket_d,
                })
                .collect(),
        };
        walk_edge(&mut path, dir, base_w, base_h, &mut features);
    }

    Outline::Path(path)
}

/// Floor outline: two pockets near each corner of every edge, sized to
/// receive the wall bottom tabs.
pub fn floor_outline(base_w: f64, base_h: f64, cfg: &CutConfig, kerf_mm: f64) -> Outline {
    let m = cfg.min_edge_margin;
    let fw = kerf::finger_feature_w_draw(cfg, kerf_mm);
    let pocket_d = kerf::finger_pocket_depth_draw(cfg, kerf_mm);

    let mut path = vec![Point::new(0.0, 0.0)];

    for dir in EdgeDir::CLOCKWISE {
        let span = dir.span(base_w, base_h);
        // Corner centers are symmetric, so walk coordinates equal edge
        // coordinates on every edge.
        let mut features: Vec<EdgeFeature> = corner_centers(span, fw, m)
            .iter()
            .map(|&c| EdgeFeature {
                center: c,
                width: fw,
                depth: -pocket_d,
            })
            .collect();
        walk_edge(&mut path, dir, base_w, base_h, &mut features);
    }

    Outline::Path(path)
}

/// Overwrite the default rectangle outlines with joint paths. Dividers stay
/// plain rectangles.
pub fn apply_joint_outlines(panels: &mut [Panel], params: &PhysicalParams, cfg: &CutConfig) {
    for panel in panels.iter_mut() {
        if panel.role.is_wall() {
            panel.outline = wall_outline(panel.base_w, panel.base_h, cfg, params.kerf);
        } else if panel.role == crate::model::PanelRole::Floor {
            panel.outline = floor_outline(panel.base_w, panel.base_h, cfg, params.kerf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(outline: Outline) -> Vec<Point> {
        match outline {
            Outline::Path(p) => p,
            Outline::Rect { .. } => panic!("expected joint path"),
        }
    }

    fn assert_closed(path: &[Point]) {
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert!((first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9);
    }

    #[test]
    fn test_wall_outline_closed_and_shaped() {
        let cfg = CutConfig::default();
        let path = path_of(wall_outline(152.4, 76.2, &cfg, 0.1));
        assert_closed(&path);
        // 1 start + 1 top corner + 3 edges of (2 detours x 4 points + corner)
        assert_eq!(path.len(), 29);
    }

    #[test]
    fn test_wall_outline_two_detours_per_treated_edge() {
        let cfg = CutConfig::default();
        let (w, h) = (152.4, 76.2);
        let path = path_of(wall_outline(w, h, &cfg, 0.1));
        let tab_d = 3.1;
        let pocket_d = 2.9;

        // right-edge tabs protrude past x = w
        let right = path.iter().filter(|p| (p.x - (w + tab_d)).abs() < 1e-9).count();
        assert_eq!(right, 4, "two tabs x two outer vertices");
        // bottom-edge tabs protrude past y = h
        let bottom = path.iter().filter(|p| (p.y - (h + tab_d)).abs() < 1e-9).count();
        assert_eq!(bottom, 4);
        // left-edge pockets indent to x = pocket depth
        let left = path.iter().filter(|p| (p.x - pocket_d).abs() < 1e-9).count();
        assert_eq!(left, 4);
        // top edge is plain: nothing above y = 0
        assert!(path.iter().all(|p| p.y > -1e-9));
    }

    #[test]
    fn test_wall_outline_edges_walk_monotonically() {
        // The right edge must be visited top-to-bottom: y values of points on
        // or beyond x = w never decrease. The original emitted the two tabs
        // in the wrong order, which made the outline double back.
        let cfg = CutConfig::default();
        let (w, h) = (152.4, 76.2);
        let path = path_of(wall_outline(w, h, &cfg, 0.1));
        let right_ys: Vec<f64> = path
            .iter()
            .filter(|p| p.x >= w - 1e-9 && p.y > 1e-9 && p.y < h - 1e-9)
            .map(|p| p.y)
            .collect();
        for pair in right_ys.windows(2) {
            assert!(pair[1] >= pair[0] - 1e-9, "right edge doubles back");
        }
    }

    #[test]
    fn test_floor_outline_closed_with_eight_pockets() {
        let cfg = CutConfig::default();
        let (w, h) = (152.4, 101.6);
        let path = path_of(floor_outline(w, h, &cfg, 0.1));
        assert_closed(&path);
        // 1 start + 4 edges of (2 detours x 4 points + corner)
        assert_eq!(path.len(), 37);

        let pocket_d = 2.9;
        // top-edge pockets indent downward to y = pocket depth
        let top = path.iter().filter(|p| (p.y - pocket_d).abs() < 1e-9).count();
        assert_eq!(top, 4);
        // nothing protrudes outside the base rectangle
        assert!(path
            .iter()
            .all(|p| p.x > -1e-9 && p.x < w + 1e-9 && p.y > -1e-9 && p.y < h + 1e-9));
    }

    #[test]
    fn test_corner_centers() {
        let [a, b] = corner_centers(100.0, 12.0, 6.0);
        assert_eq!(a, 12.0);
        assert_eq!(b, 88.0);
    }
}
