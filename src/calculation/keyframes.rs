//! Geschwindigkeitsprofil aus Segment-Keyframes.
//!
//! Jeder Keyframe ist für den Punktbereich bis zum nächsten Keyframe
//! "zuständig". Innerhalb des Bereichs wird linear zwischen beiden
//! `y_pos`-Werten gerampt; `follow_curve` drückt die Geschwindigkeit
//! zusätzlich über den Krümmungs-Proxy `delta` nach unten.

use super::result::{IndexRange, KeyframeIndexing, Point};
use crate::core::{Keyframe, Segment};
use crate::shared::{PathConfig, ValueRange};

/// Bildet alle Keyframes auf absolute Punktindizes ab.
///
/// Vorangestellt ist immer der virtuelle Start-Keyframe `(0, 1)` bei Index 0.
/// Segment-Keyframes landen bei `from + floor(len · x_pos)` ihres Segmentbereichs.
pub fn index_keyframes(
    segments: &[Segment],
    segment_indexes: &[IndexRange],
) -> Vec<KeyframeIndexing> {
    let mut indexed = Vec::with_capacity(1 + segments.iter().map(|s| s.keyframes.len()).sum::<usize>());
    indexed.push(KeyframeIndexing {
        index: 0,
        keyframe: Keyframe::path_start(),
        segment_index: None,
    });

    for (segment_index, (segment, range)) in segments.iter().zip(segment_indexes).enumerate() {
        for keyframe in &segment.keyframes {
            let offset = (range.len() as f64 * keyframe.x_pos).floor().max(0.0) as usize;
            indexed.push(KeyframeIndexing {
                index: range.from + offset,
                keyframe: *keyframe,
                segment_index: Some(segment_index),
            });
        }
    }
    indexed
}

/// Setzt `speed` aller Punkte anhand der indizierten Keyframes.
pub fn apply_speeds(points: &mut [Point], keyframes: &[KeyframeIndexing], config: &PathConfig) {
    let len = points.len();
    for (position, current) in keyframes.iter().enumerate() {
        let next = keyframes.get(position + 1);
        let start = current.index.min(len);
        let end = next.map_or(len, |n| n.index).clamp(start, len);
        let responsible = end - start;

        let y_from = current.keyframe.y_pos;
        let y_to = next.map_or(y_from, |n| n.keyframe.y_pos);

        for (i, point) in points[start..end].iter_mut().enumerate() {
            let y = y_from + (y_to - y_from) * i as f64 / responsible as f64;
            let mut speed = config.speed_limit.lerp(y);
            if current.keyframe.follow_curve {
                if let Some(limit) =
                    curve_clamp(point.delta, &config.application_range, &config.speed_limit)
                {
                    speed = speed.min(limit);
                }
            }
            point.speed = speed;
        }
    }
}

/// Obergrenze der Geschwindigkeit aus dem Krümmungs-Proxy `delta`.
///
/// - `0 < delta < application.from` → `speed_limit.from`
/// - `delta > application.to` → `speed_limit.to`
/// - dazwischen linear zwischen beiden Grenzen
///
/// Ist einer der beiden Bereiche leer, entfällt die Interpolation (`None`).
pub fn curve_clamp(delta: f64, application: &ValueRange, speed_limit: &ValueRange) -> Option<f64> {
    if delta != 0.0 && delta < application.from {
        return Some(speed_limit.from);
    }
    if delta > application.to {
        return Some(speed_limit.to);
    }
    if application.is_degenerate() || speed_limit.is_degenerate() {
        return None;
    }
    if delta >= application.from {
        let ratio = (delta - application.from) / application.span();
        return Some(speed_limit.lerp(ratio));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    fn points(count: usize, delta: f64) -> Vec<Point> {
        (0..count)
            .map(|i| Point::new(DVec2::new(i as f64, 0.0), delta, i as f64))
            .collect()
    }

    fn config(speed: (f64, f64), application: (f64, f64)) -> PathConfig {
        PathConfig {
            speed_limit: ValueRange::new(speed.0, speed.1),
            application_range: ValueRange::new(application.0, application.1),
            ..PathConfig::default()
        }
    }

    #[test]
    fn test_curve_clamp_unterhalb_begrenzt_auf_minimum() {
        let clamp = curve_clamp(1.0, &ValueRange::new(2.0, 8.0), &ValueRange::new(10.0, 90.0));
        assert_eq!(clamp, Some(10.0));
    }

    #[test]
    fn test_curve_clamp_oberhalb_begrenzt_auf_maximum() {
        let clamp = curve_clamp(10.0, &ValueRange::new(2.0, 8.0), &ValueRange::new(10.0, 90.0));
        assert_eq!(clamp, Some(90.0));
    }

    #[test]
    fn test_curve_clamp_interpoliert_im_bereich() {
        let clamp = curve_clamp(5.0, &ValueRange::new(2.0, 8.0), &ValueRange::new(10.0, 90.0));
        assert_abs_diff_eq!(clamp.unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_clamp_delta_null_wird_ignoriert() {
        let clamp = curve_clamp(0.0, &ValueRange::new(2.0, 8.0), &ValueRange::new(10.0, 90.0));
        assert_eq!(clamp, None);
    }

    #[test]
    fn test_curve_clamp_leere_bereiche_ohne_interpolation() {
        let application = ValueRange::new(4.0, 4.0);
        let speed = ValueRange::new(10.0, 90.0);
        assert_eq!(curve_clamp(4.0, &application, &speed), None);
        assert_eq!(curve_clamp(1.0, &application, &speed), Some(10.0));
        assert_eq!(curve_clamp(5.0, &application, &speed), Some(90.0));

        let flat_speed = ValueRange::new(30.0, 30.0);
        assert_eq!(curve_clamp(5.0, &ValueRange::new(2.0, 8.0), &flat_speed), None);
    }

    #[test]
    fn test_index_keyframes_start_keyframe_und_segment_offsets() {
        let mut path = crate::core::Path::starting_at(DVec2::ZERO, 0.0);
        path.line_to(DVec2::new(10.0, 0.0), 0.0)
            .line_to(DVec2::new(20.0, 0.0), 0.0);
        path.segments[1].add_keyframe(Keyframe::new(0.5, 0.4, false));

        let ranges = [IndexRange::new(0, 10), IndexRange::new(10, 21)];
        let indexed = index_keyframes(&path.segments, &ranges);

        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].index, 0);
        assert_eq!(indexed[0].segment_index, None);
        assert_eq!(indexed[0].keyframe, Keyframe::path_start());
        assert_eq!(indexed[1].index, 10 + 5);
        assert_eq!(indexed[1].segment_index, Some(1));
    }

    #[test]
    fn test_apply_speeds_rampe_zwischen_keyframes() {
        let mut pts = points(10, 1.0);
        let keyframes = [
            KeyframeIndexing {
                index: 0,
                keyframe: Keyframe::path_start(),
                segment_index: None,
            },
            KeyframeIndexing {
                index: 5,
                keyframe: Keyframe::new(0.5, 0.0, false),
                segment_index: Some(0),
            },
        ];
        apply_speeds(&mut pts, &keyframes, &config((0.0, 100.0), (0.5, 1.0)));

        let speeds: Vec<f64> = pts.iter().map(|p| p.speed).collect();
        for (i, expected) in [100.0, 80.0, 60.0, 40.0, 20.0].iter().enumerate() {
            assert_abs_diff_eq!(speeds[i], *expected, epsilon = 1e-9);
        }
        // Letzter Keyframe hält seinen Wert bis zum Ende
        assert!(speeds[5..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_apply_speeds_follow_curve_senkt_nur_ab() {
        let mut pts = points(4, 10.0);
        pts[1].delta = 1.0;
        let keyframes = [KeyframeIndexing {
            index: 0,
            keyframe: Keyframe::new(0.0, 0.5, true),
            segment_index: Some(0),
        }];
        apply_speeds(&mut pts, &keyframes, &config((0.0, 100.0), (2.0, 8.0)));

        // Rampe 50, Clamp oberhalb = 100 → min bleibt 50
        assert_abs_diff_eq!(pts[0].speed, 50.0);
        // delta 1 < 2 → speed_limit.from
        assert_abs_diff_eq!(pts[1].speed, 0.0);
    }

    #[test]
    fn test_apply_speeds_keyframe_hinter_ende_ist_leer() {
        let mut pts = points(3, 1.0);
        let keyframes = [
            KeyframeIndexing {
                index: 0,
                keyframe: Keyframe::path_start(),
                segment_index: None,
            },
            KeyframeIndexing {
                index: 3,
                keyframe: Keyframe::new(1.0, 0.2, false),
                segment_index: Some(0),
            },
        ];
        apply_speeds(&mut pts, &keyframes, &config((0.0, 100.0), (0.5, 1.0)));

        assert_abs_diff_eq!(pts[0].speed, 100.0);
        assert!(pts[2].speed > 20.0);
    }
}
