use super::*;
use crate::core::{Control, Keyframe};

fn l_path() -> Path {
    let mut path = Path::starting_at(DVec2::ZERO, 0.0);
    path.line_to(DVec2::new(5.0, 0.0), 90.0)
        .line_to(DVec2::new(5.0, 5.0), 90.0);
    path
}

#[test]
fn test_builder_verkettet_segmente_per_id_und_wert() {
    let path = l_path();

    assert_eq!(path.segment_count(), 2);
    assert_eq!(path.segments[1].start, path.segments[0].end);
    assert_eq!(path.segments[1].start.id, path.segments[0].end.id);
    assert!(path.validate().is_ok());
}

#[test]
fn test_builder_vergibt_eindeutige_ids() {
    let mut path = Path::starting_at(DVec2::ZERO, 0.0);
    path.cubic_to(
        DVec2::new(1.0, 2.0),
        DVec2::new(3.0, 2.0),
        DVec2::new(4.0, 0.0),
        0.0,
    );

    let ids: Vec<u64> = path.segments[0].controls().iter().map(Control::id).collect();
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(ids.len(), 4);
    assert_eq!(deduped.len(), 4);
    assert_eq!(path.segments[0].degree(), 3);
}

#[test]
fn test_controls_nur_knoten_tragen_heading() {
    let mut path = Path::starting_at(DVec2::ZERO, 45.0);
    path.quad_to(DVec2::new(1.0, 1.0), DVec2::new(2.0, 0.0), -90.0);

    let controls = path.segments[0].controls();
    assert_eq!(controls[0].heading(), Some(45.0));
    assert_eq!(controls[1].heading(), None);
    assert_eq!(controls[2].heading(), Some(270.0));
}

#[test]
fn test_validate_erkennt_gebrochene_kette() {
    let mut path = l_path();
    path.segments[1].start.position = DVec2::new(6.0, 0.0);

    assert_eq!(path.validate(), Err(PathError::BrokenChain { segment: 1 }));
}

#[test]
fn test_validate_erkennt_unsortierte_keyframes() {
    let mut path = l_path();
    path.segments[0].keyframes = vec![
        Keyframe::new(0.8, 0.5, false),
        Keyframe::new(0.2, 0.5, false),
    ];

    assert_eq!(
        path.validate(),
        Err(PathError::UnsortedKeyframes { segment: 0 })
    );
}

#[test]
fn test_validate_erkennt_keyframe_ausserhalb() {
    let mut path = l_path();
    path.segments[1].keyframes = vec![Keyframe::new(0.2, 1.5, false)];

    assert_eq!(
        path.validate(),
        Err(PathError::KeyframeOutOfRange {
            segment: 1,
            index: 0
        })
    );
}

#[test]
fn test_add_keyframe_sortiert_und_klemmt() {
    let mut path = l_path();
    let segment = &mut path.segments[0];
    segment.add_keyframe(Keyframe::new(0.7, 0.3, false));
    segment.add_keyframe(Keyframe::new(0.1, 2.0, true));

    assert_eq!(segment.keyframes[0], Keyframe::new(0.1, 1.0, true));
    assert_eq!(segment.keyframes[1].x_pos, 0.7);
    assert!(segment.keyframes_sorted());
}

#[test]
fn test_move_knot_aktualisiert_beide_segmente() {
    let mut path = l_path();
    let shared_id = path.segments[0].end.id;

    assert!(path.move_knot(shared_id, DVec2::new(6.0, 1.0)));
    assert_eq!(path.segments[0].end.position, DVec2::new(6.0, 1.0));
    assert_eq!(path.segments[1].start.position, DVec2::new(6.0, 1.0));
    assert!(path.validate().is_ok());
}

#[test]
fn test_from_segments_setzt_id_zaehler_fort() {
    let original = l_path();
    let mut restored = Path::from_segments(original.segments.clone());
    restored.line_to(DVec2::new(0.0, 5.0), 180.0);

    let max_original = original
        .segments
        .iter()
        .flat_map(|s| s.controls())
        .map(|c| c.id())
        .max()
        .unwrap();
    assert!(restored.segments[2].end.id > max_original);
    assert!(restored.validate().is_ok());
}
