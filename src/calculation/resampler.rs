//! Gleichmässige Neuverteilung nach Bogenlänge ("gen2").
//!
//! Die dichte gen1-Folge wird über ihre kumulierte Bogenlänge neu
//! parametrisiert. Jeder Ausgabepunkt bekommt exakt seine Ziel-Bogenlänge
//! als `integral`, der Abstand ist damit per Konstruktion gleichmässig.
//! Headings und Segmentgrenzen aus gen1 bleiben als Marker erhalten.

use super::assembler::Gen1;
use super::result::{IndexRange, Point};
use crate::shared::MAX_OUTPUT_POINTS;

/// Ergebnis der Neuverteilung.
#[derive(Debug, Clone, Default)]
pub struct Resampled {
    pub points: Vec<Point>,
    /// Ein Bereich pro Segment, lückenlos über `points`
    pub segment_indexes: Vec<IndexRange>,
}

/// Anzahl Schritte des gleichmässigen Laufs `t ∈ [0, 1)` mit `t = k / N`, `N = ttd / density`.
///
/// Höchstens [`MAX_OUTPUT_POINTS`]; `calculate` lehnt längere Läufe vorher ab.
pub fn uniform_step_count(ttd: f64, density: f64) -> usize {
    if !(ttd > 0.0) || !(density > 0.0) {
        return 1;
    }
    let n = ttd / density;
    if !n.is_finite() {
        return 1;
    }
    let count = (n - 1e-9).ceil().max(1.0);
    if count > MAX_OUTPUT_POINTS as f64 {
        return MAX_OUTPUT_POINTS;
    }
    count as usize
}

/// Verteilt `gen1` gleichmässig mit Abstand `density` und schliesst mit dem
/// exakten Pfadende ab.
///
/// Ein Punkt, bei dessen Erzeugung der Cursor eine Segmentgrenze überquert,
/// trägt `is_last_point_of_segment` zusammen mit dem zuletzt überquerten
/// Heading; er ist zugleich der erste Punkt des neuen Segmentbereichs.
/// Der angehängte Endpunkt liegt exakt auf dem letzten Knoten
/// (`delta = 0`, `integral = ttd`, `speed = 0`) und ist ebenfalls markiert.
///
/// `segment_count` ist die Anzahl Segmente hinter `gen1`; das Ergebnis enthält
/// immer genau so viele Indexbereiche (übersprungene Segmente bekommen leere).
pub fn resample(gen1: &Gen1, density: f64, segment_count: usize) -> Resampled {
    let samples = &gen1.samples;
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Resampled::default();
    };

    let count = uniform_step_count(gen1.ttd, density);
    let mut points: Vec<Point> = Vec::with_capacity(count + 1);
    let mut ranges = RangeBuilder::new(segment_count);

    if samples.len() >= 2 {
        let mut cursor = 1;
        for k in 0..count {
            // t · ttd mit t = k / N
            let target = k as f64 * density;

            let mut heading = None;
            let mut crossed = 0;
            while cursor < samples.len() - 1 && samples[cursor].integral < target {
                if let Some(h) = samples[cursor].heading {
                    heading = Some(h);
                }
                if samples[cursor].is_last_point_of_segment {
                    crossed += 1;
                }
                cursor += 1;
            }
            if crossed > 0 {
                ranges.close(points.len(), crossed);
            }

            let p1 = &samples[cursor - 1];
            let p2 = &samples[cursor];
            let ratio = (target - p1.integral) / (p2.integral - p1.integral);
            let (position, delta) = if ratio.is_finite() {
                let ratio = ratio.clamp(0.0, 1.0);
                (
                    p1.position.lerp(p2.position, ratio),
                    p1.delta + (p2.delta - p1.delta) * ratio,
                )
            } else {
                (p1.position, p1.delta)
            };

            let mut point = Point::new(position, delta, target);
            point.heading = heading;
            point.is_last_point_of_segment = crossed > 0;
            points.push(point);
        }
    } else {
        points.push(Point::new(first.position, first.delta, 0.0));
    }

    if let Some(start) = points.first_mut() {
        start.heading = first.heading;
    }

    // Exaktes Pfadende, egal wo der gleichmässige Lauf gelandet ist
    let mut terminal = Point::new(last.position, 0.0, gen1.ttd);
    terminal.heading = last.heading;
    terminal.is_last_point_of_segment = true;
    points.push(terminal);

    let segment_indexes = ranges.finish(points.len());
    log::debug!(
        "gen2: {} Punkte in {} Segmentbereichen (Dichte {:.4})",
        points.len(),
        segment_indexes.len(),
        density
    );
    Resampled {
        points,
        segment_indexes,
    }
}

/// Baut die Segment-Indexbereiche während des Laufs auf.
struct RangeBuilder {
    ranges: Vec<IndexRange>,
    open_from: usize,
    segment_count: usize,
}

impl RangeBuilder {
    fn new(segment_count: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(segment_count),
            open_from: 0,
            segment_count,
        }
    }

    /// Schliesst den offenen Bereich bei `at`. Jede weitere überquerte Grenze
    /// ergibt einen leeren Bereich.
    fn close(&mut self, at: usize, crossed: usize) {
        self.ranges.push(IndexRange::new(self.open_from, at));
        for _ in 1..crossed {
            self.ranges.push(IndexRange::new(at, at));
        }
        self.open_from = at;
    }

    fn finish(mut self, len: usize) -> Vec<IndexRange> {
        self.ranges.push(IndexRange::new(self.open_from, len));
        while self.ranges.len() < self.segment_count {
            self.ranges.push(IndexRange::new(len, len));
        }
        self.ranges
    }
}
