//! Punktberechnung: Bézier-Pfad → gleichmässig verteilte Punkte mit Geschwindigkeit.
//!
//! Datenfluss strikt vorwärts:
//! - `bezier`    : Bernstein-Auswertung beliebigen Grades
//! - `sampler`   : dichte Rohabtastung je Segment (gen1) + Krümmungs-Reskalierung
//! - `assembler` : Verkettung aller Segmente, Gesamtstrecke (ttd)
//! - `resampler` : gleichmässige Neuverteilung nach Bogenlänge (gen2)
//! - `keyframes` : Keyframe-Indizes und Geschwindigkeitsprofil
//!
//! Die Berechnung ist rein: kein interner Zustand, kein I/O. Caching liegt beim Aufrufer.

pub mod assembler;
pub mod bezier;
pub mod keyframes;
pub mod resampler;
pub mod result;
pub mod sampler;

pub use result::{IndexRange, KeyframeIndexing, Point, PointCalculationResult};

use crate::core::Path;
use crate::shared::{PathConfig, MAX_OUTPUT_POINTS};

/// Berechnet die Punktfolge eines Pfads.
///
/// Ein Pfad ohne Segmente ergibt ein leeres Ergebnis mit `ttd = 0`, ebenso
/// eine ungültige Konfiguration (z.B. nicht-positive oder zu feine
/// Punktdichte) und ein Pfad, der mehr als [`MAX_OUTPUT_POINTS`] Punkte
/// ergäbe. Beides mit Warnung im Log.
///
/// Der Endpunkt behält `speed = 0`; Keyframes wirken nur auf die Punkte davor.
pub fn calculate(path: &Path, config: &PathConfig) -> PointCalculationResult {
    if path.is_empty() {
        return PointCalculationResult::empty();
    }

    if let Err(e) = config.validate() {
        log::warn!("Berechnung übersprungen: {}", e);
        return PointCalculationResult::empty();
    }
    let density = config.density_in_path_units();

    let gen1 = assembler::assemble(&path.segments, config);
    let output_points = gen1.ttd / density;
    if !(output_points <= MAX_OUTPUT_POINTS as f64) {
        log::warn!(
            "Berechnung übersprungen: ttd {:.4}{} bei Dichte {} ergäbe mehr als {} Punkte",
            gen1.ttd,
            config.unit.symbol(),
            config.point_density,
            MAX_OUTPUT_POINTS
        );
        return PointCalculationResult::empty();
    }
    let resampled = resampler::resample(&gen1, density, path.segment_count());

    let mut points = resampled.points;
    let keyframe_indexes = keyframes::index_keyframes(&path.segments, &resampled.segment_indexes);
    if let Some((_terminal, body)) = points.split_last_mut() {
        keyframes::apply_speeds(body, &keyframe_indexes, config);
    }

    log::debug!(
        "Berechnung fertig: {} Punkte, {} Keyframes, ttd {:.4}{}",
        points.len(),
        keyframe_indexes.len(),
        gen1.ttd,
        config.unit.symbol()
    );

    PointCalculationResult {
        ttd: gen1.ttd,
        points,
        segment_indexes: resampled.segment_indexes,
        keyframe_indexes,
    }
}
