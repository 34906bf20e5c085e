//! Dichte Rohabtastung eines Segments ("gen1").
//!
//! Das Segment wird im Parameterraum mit fester Schrittweite abgetastet. Die
//! Abstände sind dadurch ungleichmässig, aber dicht genug für eine genaue
//! Bogenlängen-Schätzung.

use super::bezier::bezier_point;
use super::result::Point;
use crate::core::Segment;
use crate::shared::{PathConfig, MAX_RAW_SAMPLES_PER_SEGMENT};

/// Anzahl Schleifen-Samples für eine Parameter-Schrittweite `interval`.
///
/// Feste Anzahl statt `t += interval`, damit die Samplezahl plattformunabhängig ist.
/// Der Endpunkt t = 1 kommt separat hinzu. Höchstens [`MAX_RAW_SAMPLES_PER_SEGMENT`].
pub fn loop_sample_count(interval: f64) -> usize {
    let count = ((1.0 / interval) - 1e-9).ceil();
    if !(count <= MAX_RAW_SAMPLES_PER_SEGMENT as f64) {
        return MAX_RAW_SAMPLES_PER_SEGMENT;
    }
    count.max(1.0) as usize
}

/// Tastet `segment` ab und liefert die gen1-Punkte.
///
/// `start_integral` ist die bisherige Bogenlänge des Pfads, damit die
/// Distanz über Segmentgrenzen stetig bleibt. Der erste Punkt trägt das
/// Heading des Startknotens, der letzte liegt exakt auf dem Endknoten und
/// ist als Segmentende markiert. Danach werden die Deltas reskaliert
/// (siehe [`normalize_curvature`]).
pub fn sample_segment(segment: &Segment, config: &PathConfig, start_integral: f64) -> Vec<Point> {
    let interval = config.sample_interval();
    let controls = segment.control_positions();
    let steps = loop_sample_count(interval);

    let mut samples: Vec<Point> = Vec::with_capacity(steps + 1);
    let mut integral = start_integral;

    for i in 0..steps {
        let t = i as f64 * interval;
        let position = bezier_point(&controls, t);
        let delta = samples
            .last()
            .map(|prev| prev.position.distance(position))
            .unwrap_or(0.0);
        integral += delta;
        samples.push(Point::new(position, delta, integral));
    }

    if let Some(first) = samples.first_mut() {
        first.heading = Some(segment.start.heading());
    }

    // Exakter Endknoten, unabhängig davon wo der letzte Schritt gelandet ist
    let end = segment.end.position;
    let delta = samples
        .last()
        .map(|prev| prev.position.distance(end))
        .unwrap_or(0.0);
    integral += delta;
    let mut last = Point::new(end, delta, integral);
    last.heading = Some(segment.end.heading());
    last.is_last_point_of_segment = true;
    samples.push(last);

    normalize_curvature(
        &mut samples,
        interval,
        start_integral,
        config.density_in_path_units(),
    );

    log::trace!(
        "Segment abgetastet: {} Samples, Länge {:.4}",
        samples.len(),
        integral - start_integral
    );
    samples
}

/// Skaliert die Deltas eines Segments, damit sie segmentübergreifend als
/// Krümmungs-Proxy vergleichbar sind.
///
/// `ratio = (1 / interval) / (Segmentlänge / density)`. Bei Segmentlänge 0
/// bleiben die Deltas unverändert.
pub fn normalize_curvature(samples: &mut [Point], interval: f64, start_integral: f64, density: f64) {
    let Some(last) = samples.last() else {
        return;
    };
    let segment_length = last.integral - start_integral;
    if segment_length <= 0.0 {
        return;
    }
    let ratio = (1.0 / interval) / (segment_length / density);
    if !ratio.is_finite() {
        return;
    }
    for sample in samples.iter_mut() {
        sample.delta *= ratio;
    }
}
