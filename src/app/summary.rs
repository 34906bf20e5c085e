//! Kennzahlen eines Berechnungsergebnisses für Log und CLI.

use crate::calculation::PointCalculationResult;

/// Zusammenfassung eines [`PointCalculationResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationSummary {
    pub point_count: usize,
    pub segment_count: usize,
    pub ttd: f64,
    /// Kleinste Zielgeschwindigkeit (0 bei leerem Ergebnis)
    pub min_speed: f64,
    /// Grösste Zielgeschwindigkeit (0 bei leerem Ergebnis)
    pub max_speed: f64,
}

pub fn summarize(result: &PointCalculationResult) -> CalculationSummary {
    let (min_speed, max_speed) = result
        .points
        .iter()
        .map(|p| p.speed)
        .fold(None, |acc: Option<(f64, f64)>, s| match acc {
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
            None => Some((s, s)),
        })
        .unwrap_or((0.0, 0.0));

    CalculationSummary {
        point_count: result.points.len(),
        segment_count: result.segment_indexes.len(),
        ttd: result.ttd,
        min_speed,
        max_speed,
    }
}

impl std::fmt::Display for CalculationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Punkte in {} Segmenten, ttd {:.3}, Geschwindigkeit {:.2}–{:.2}",
            self.point_count, self.segment_count, self.ttd, self.min_speed, self.max_speed
        )
    }
}
