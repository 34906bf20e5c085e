//! Verkettet die gen1-Abtastungen aller Segmente zu einer Pfad-Folge.

use super::result::Point;
use super::sampler::sample_segment;
use crate::core::Segment;
use crate::shared::PathConfig;

/// Dichte, ungleichmässige Abtastung des ganzen Pfads.
#[derive(Debug, Clone, Default)]
pub struct Gen1 {
    pub samples: Vec<Point>,
    /// Gesamte Fahrstrecke = `integral` des letzten Samples
    pub ttd: f64,
}

/// Tastet alle Segmente ab und hängt sie aneinander.
///
/// Ab dem zweiten Segment entfällt jeweils das erste Sample, weil es das
/// Endsample des Vorgängers dupliziert. Die laufende Bogenlänge wird als
/// Startwert an das nächste Segment weitergereicht.
pub fn assemble(segments: &[Segment], config: &PathConfig) -> Gen1 {
    let mut samples: Vec<Point> = Vec::new();
    let mut path_ttd = 0.0;

    for (index, segment) in segments.iter().enumerate() {
        let segment_samples = sample_segment(segment, config, path_ttd);
        if let Some(last) = segment_samples.last() {
            path_ttd = last.integral;
        }
        let skip = usize::from(index > 0);
        samples.extend(segment_samples.into_iter().skip(skip));
    }

    let ttd = samples.last().map(|p| p.integral).unwrap_or(0.0);
    log::debug!(
        "gen1: {} Segmente → {} Samples, ttd {:.4}",
        segments.len(),
        samples.len(),
        ttd
    );
    Gen1 { samples, ttd }
}
