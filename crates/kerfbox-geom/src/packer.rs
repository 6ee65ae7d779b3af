//! Shelf packing onto one stock sheet.
//!
//! Deterministic greedy layout: panels sorted by bounding-box height
//! descending (stable, so ties keep construction order), placed left to
//! right, with a new row whenever the current one runs out of width. A fixed
//! gap separates panels and forms the leading sheet margin. The moment a row
//! placement would exceed the sheet height the whole request is rejected;
//! there is no overflow onto a second sheet.

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::model::{Panel, Placement};

/// Pack all panels, or report that the set cannot fit.
pub fn shelf_pack(
    panels: &[Panel],
    sheet_w: f64,
    sheet_h: f64,
    gap: f64,
) -> GenerateResult<Vec<Placement>> {
    let infeasible = || GenerateError::LayoutInfeasible { sheet_w, sheet_h };

    let mut order: Vec<usize> = (0..panels.len()).collect();
    order.sort_by(|&a, &b| {
        panels[b]
            .h
            .partial_cmp(&panels[a].h)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut x = gap;
    let mut y = gap;
    let mut row_h = 0.0f64;
    let mut placed = Vec::with_capacity(panels.len());

    for idx in order {
        let panel = &panels[idx];
        let (w, h) = (panel.w, panel.h);

        // wider than the sheet itself: no row can ever hold it
        if gap + w + gap > sheet_w {
            return Err(infeasible());
        }

        if x + w + gap > sheet_w {
            x = gap;
            y += row_h + gap;
            row_h = 0.0;
        }

        if y + h + gap > sheet_h {
            return Err(infeasible());
        }

        debug!(panel = %panel.role.name(), x, y, "placed");
        placed.push(Placement {
            role: panel.role,
            x,
            y,
        });
        x += w + gap;
        row_h = row_h.max(h);
    }

    Ok(placed)
}
