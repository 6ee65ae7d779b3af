//! End-to-end pipeline tests: validation boundary, generation, packing.

use kerfbox_core::CutConfig;
use kerfbox_geom::{
    generate, validate_inputs, Cut, Engrave, GenerateError, Outline, PanelRole, ParameterError,
    RawBoxInputs, WallDecorInput,
};

fn incline_box() -> RawBoxInputs {
    RawBoxInputs {
        length_in: 6.0,
        width_in: 4.0,
        height_in: 3.0,
        front: WallDecorInput {
            text: true,
            text_content: "Incline".to_string(),
            ..Default::default()
        },
        left: WallDecorInput {
            text: true,
            text_content: "Left".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_incline_box_generates_with_rotated_left_text() {
    let cfg = CutConfig::default();
    let params = validate_inputs(&incline_box(), &cfg).unwrap();
    let layout = generate(&params, &cfg).unwrap();

    assert_eq!(layout.panels.len(), 5);
    assert_eq!(layout.placements.len(), 5);

    let front = layout
        .panels
        .iter()
        .find(|p| p.role == PanelRole::WallFront)
        .unwrap();
    let front_text = front
        .engraves
        .iter()
        .find_map(|e| match e {
            Engrave::Text(t) => Some(t),
            _ => None,
        })
        .expect("front wall text engraving");
    assert_eq!(front_text.content, "Incline");
    assert_eq!(front_text.rotation, 0.0);

    let left = layout
        .panels
        .iter()
        .find(|p| p.role == PanelRole::WallLeft)
        .unwrap();
    let left_text = left
        .engraves
        .iter()
        .find_map(|e| match e {
            Engrave::Text(t) => Some(t),
            _ => None,
        })
        .expect("left wall text engraving");
    assert_eq!(left_text.content, "Left");
    assert_eq!(left_text.rotation, 90.0);

    // undecorated walls carry no marks
    let back = layout
        .panels
        .iter()
        .find(|p| p.role == PanelRole::WallBack)
        .unwrap();
    assert!(back.engraves.is_empty());
}

#[test]
fn test_oversized_box_fails_packing() {
    let cfg = CutConfig::default();
    let raw = RawBoxInputs {
        length_in: 12.0,
        width_in: 12.0,
        height_in: 12.0,
        ..Default::default()
    };
    let params = validate_inputs(&raw, &cfg).unwrap();
    let err = generate(&params, &cfg).unwrap_err();
    assert!(matches!(err, GenerateError::LayoutInfeasible { .. }));
}

#[test]
fn test_tall_box_fails_on_sheet_height() {
    let cfg = CutConfig::default();
    // each wall fits a row on its own but the rows stack past the sheet
    let raw = RawBoxInputs {
        length_in: 8.0,
        width_in: 8.0,
        height_in: 8.0,
        ..Default::default()
    };
    let params = validate_inputs(&raw, &cfg).unwrap();
    let err = generate(&params, &cfg).unwrap_err();
    assert!(matches!(err, GenerateError::LayoutInfeasible { .. }));
}

#[test]
fn test_bad_divider_spacing_rejected_before_geometry() {
    let cfg = CutConfig::default();
    let raw = RawBoxInputs {
        length_in: 6.0,
        width_in: 4.0,
        height_in: 3.0,
        num_dividers: 2,
        divider_pos1_in: Some(2.0),
        divider_pos2_in: Some(2.1),
        ..Default::default()
    };
    let err = validate_inputs(&raw, &cfg).unwrap_err();
    assert!(matches!(err, ParameterError::DividerSpacing { .. }));
}

#[test]
fn test_divider_panels_and_slots_line_up() {
    let cfg = CutConfig::default();
    let raw = RawBoxInputs {
        length_in: 6.0,
        width_in: 4.0,
        height_in: 3.0,
        num_dividers: 2,
        divider_pos1_in: Some(2.0),
        divider_pos2_in: Some(4.0),
        ..Default::default()
    };
    let params = validate_inputs(&raw, &cfg).unwrap();
    let layout = generate(&params, &cfg).unwrap();

    assert_eq!(layout.panels.len(), 7);
    let dividers: Vec<_> = layout
        .panels
        .iter()
        .filter(|p| matches!(p.role, PanelRole::Divider(_)))
        .collect();
    assert_eq!(dividers.len(), 2);

    // positions stayed strictly increasing through validation
    assert!(params.divider_positions[0] < params.divider_positions[1]);

    // front and back walls carry one slot per divider at matching x centers
    for role in [PanelRole::WallFront, PanelRole::WallBack] {
        let wall = layout.panels.iter().find(|p| p.role == role).unwrap();
        let mut slot_centers: Vec<f64> = wall
            .cuts
            .iter()
            .filter_map(|c| match c {
                Cut::Rect(r) if r.h > 30.0 => Some(r.x + r.w / 2.0),
                _ => None,
            })
            .collect();
        slot_centers.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(slot_centers.len(), 2);
        for (center, pos) in slot_centers.iter().zip(&params.divider_positions) {
            assert!((center - (params.thickness + pos)).abs() < 1e-9);
        }
    }
}

#[test]
fn test_joint_outlines_are_closed_paths() {
    let cfg = CutConfig::default();
    let params = validate_inputs(&incline_box(), &cfg).unwrap();
    let layout = generate(&params, &cfg).unwrap();

    for panel in &layout.panels {
        if panel.role.is_wall() || panel.role == PanelRole::Floor {
            match &panel.outline {
                Outline::Path(points) => {
                    let first = points.first().unwrap();
                    let last = points.last().unwrap();
                    assert!(
                        (first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9,
                        "{} outline not closed",
                        panel.role.name()
                    );
                }
                Outline::Rect { .. } => panic!("{} kept a plain outline", panel.role.name()),
            }
        }
    }
}

#[test]
fn test_placements_within_sheet_and_disjoint() {
    let cfg = CutConfig::default();
    let params = validate_inputs(&incline_box(), &cfg).unwrap();
    let layout = generate(&params, &cfg).unwrap();

    let boxes: Vec<(f64, f64, f64, f64)> = layout
        .placements
        .iter()
        .map(|pl| {
            let p = layout.panels.iter().find(|p| p.role == pl.role).unwrap();
            (pl.x, pl.y, p.w, p.h)
        })
        .collect();

    for b in &boxes {
        assert!(b.0 >= 0.0 && b.1 >= 0.0);
        assert!(b.0 + b.2 <= layout.sheet_w + 1e-9);
        assert!(b.1 + b.3 <= layout.sheet_h + 1e-9);
    }
    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            let (a, b) = (boxes[i], boxes[j]);
            let disjoint =
                a.0 + a.2 <= b.0 || b.0 + b.2 <= a.0 || a.1 + a.3 <= b.1 || b.1 + b.3 <= a.1;
            assert!(disjoint, "placements {} and {} overlap", i, j);
        }
    }
}

#[test]
fn test_identical_inputs_identical_output() {
    let cfg = CutConfig::default();
    let params = validate_inputs(&incline_box(), &cfg).unwrap();
    let a = generate(&params, &cfg).unwrap();
    let b = generate(&params, &cfg).unwrap();

    assert_eq!(a.panels.len(), b.panels.len());
    for (pa, pb) in a.placements.iter().zip(b.placements.iter()) {
        assert_eq!(pa, pb);
    }
    for (pa, pb) in a.panels.iter().zip(b.panels.iter()) {
        assert_eq!(pa.cuts.len(), pb.cuts.len());
        assert_eq!(pa.engraves.len(), pb.engraves.len());
    }
}
