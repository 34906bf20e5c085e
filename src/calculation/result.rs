//! Ausgabetypen der Punktberechnung.

use crate::core::Keyframe;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein berechneter Abtastpunkt. Wird nur von der Engine erzeugt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub position: DVec2,
    /// Abstand zum Vorgänger, nach der Segment-Reskalierung ein Krümmungs-Proxy
    pub delta: f64,
    /// Kumulierte Bogenlänge ab Pfadbeginn
    pub integral: f64,
    /// Zielgeschwindigkeit
    pub speed: f64,
    /// Heading in Grad, nur an Knoten-Übergängen gesetzt
    pub heading: Option<f64>,
    /// Letzter Punkt eines Segments
    pub is_last_point_of_segment: bool,
}

impl Point {
    /// Punkt ohne Heading, Geschwindigkeit und Segmentmarker.
    pub fn new(position: DVec2, delta: f64, integral: f64) -> Self {
        Self {
            position,
            delta,
            integral,
            speed: 0.0,
            heading: None,
            is_last_point_of_segment: false,
        }
    }
}

/// Halboffener Indexbereich `[from, to)` in `points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexRange {
    pub from: usize,
    pub to: usize,
}

impl IndexRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.from..self.to).contains(&index)
    }
}

/// Ein Keyframe mit seinem absoluten Index in `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyframeIndexing {
    pub index: usize,
    pub keyframe: Keyframe,
    /// Besitzendes Segment, `None` für den virtuellen Start-Keyframe
    pub segment_index: Option<usize>,
}

/// Einziges Ergebnis einer Berechnung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCalculationResult {
    /// Gesamte Fahrstrecke (total travel distance)
    pub ttd: f64,
    pub points: Vec<Point>,
    /// `segment_indexes[i]` gehört zu Segment i, lückenlos und überlappungsfrei
    pub segment_indexes: Vec<IndexRange>,
    pub keyframe_indexes: Vec<KeyframeIndexing>,
}

impl PointCalculationResult {
    /// Leeres Ergebnis mit `ttd = 0`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkte von Segment `segment`, leer bei ungültigem Index.
    pub fn segment_points(&self, segment: usize) -> &[Point] {
        self.segment_indexes
            .get(segment)
            .and_then(|range| self.points.get(range.from..range.to))
            .unwrap_or(&[])
    }
}
