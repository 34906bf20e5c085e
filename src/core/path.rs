//! Der Pfad: eine verkettete Liste von Bézier-Segmenten.

use super::vector::is_finite;
use super::{Knot, Segment, ShapeControl};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Verletzte Pfad-Invariante, gefunden von [`Path::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("Segment {segment}: Startknoten stimmt nicht mit dem Endknoten des Vorgängers überein")]
    BrokenChain { segment: usize },
    #[error("Segment {segment}: Kontrollpunkt mit nicht-endlicher Koordinate")]
    NonFiniteCoordinate { segment: usize },
    #[error("Segment {segment}: Keyframes sind nicht nach x_pos sortiert")]
    UnsortedKeyframes { segment: usize },
    #[error("Segment {segment}: Keyframe {index} liegt ausserhalb von [0, 1]")]
    KeyframeOutOfRange { segment: usize, index: usize },
}

/// Vollständiger Pfad aus verketteten Segmenten.
///
/// Invariante: `segments[i].start == segments[i - 1].end` (Wert und ID) für i > 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Segmente in Fahrtreihenfolge
    pub segments: Vec<Segment>,
    /// Startknoten, solange noch kein Segment existiert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<Knot>,
    /// Nächste freie Kontrollpunkt-ID
    #[serde(default)]
    next_control_id: u64,
}

impl Path {
    /// Erstellt einen leeren Pfad ohne Segmente.
    pub fn new() -> Self {
        Self::default()
    }

    /// Beginnt einen Pfad an `position` mit dem Start-Heading `heading` (Grad).
    pub fn starting_at(position: DVec2, heading: f64) -> Self {
        let mut path = Self::new();
        let id = path.allocate_id();
        path.origin = Some(Knot::new(id, position, heading));
        path
    }

    /// Erstellt einen Pfad direkt aus Segmenten (z.B. nach dem Laden).
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let next_control_id = segments
            .iter()
            .flat_map(|s| s.controls())
            .map(|c| c.id() + 1)
            .max()
            .unwrap_or(0);
        Self {
            segments,
            origin: None,
            next_control_id,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Aktueller Endknoten des Pfads (Startknoten bei leerem Pfad).
    pub fn last_knot(&self) -> Option<Knot> {
        self.segments.last().map(|s| s.end).or(self.origin)
    }

    /// Hängt eine Gerade (Grad 1) an.
    pub fn line_to(&mut self, end: DVec2, heading: f64) -> &mut Self {
        self.curve_to(&[], end, heading)
    }

    /// Hängt eine quadratische Bézier-Kurve an.
    pub fn quad_to(&mut self, control: DVec2, end: DVec2, heading: f64) -> &mut Self {
        self.curve_to(&[control], end, heading)
    }

    /// Hängt eine kubische Bézier-Kurve an.
    pub fn cubic_to(&mut self, cp1: DVec2, cp2: DVec2, end: DVec2, heading: f64) -> &mut Self {
        self.curve_to(&[cp1, cp2], end, heading)
    }

    /// Hängt eine Bézier-Kurve beliebigen Grades an.
    ///
    /// Der neue Startknoten ist der bisherige Endknoten (gleiche ID), damit die
    /// Ketten-Invariante per Konstruktion gilt. Ohne Startknoten beginnt der Pfad
    /// im Ursprung mit Heading 0.
    pub fn curve_to(&mut self, shape: &[DVec2], end: DVec2, heading: f64) -> &mut Self {
        let start = match self.last_knot() {
            Some(knot) => knot,
            None => {
                let id = self.allocate_id();
                Knot::new(id, DVec2::ZERO, 0.0)
            }
        };
        let shape = shape
            .iter()
            .map(|&position| ShapeControl::new(self.allocate_id(), position))
            .collect();
        let end_id = self.allocate_id();
        self.segments
            .push(Segment::new(start, shape, Knot::new(end_id, end, heading)));
        self.origin = None;
        self
    }

    /// Verschiebt einen Knoten und hält dabei beide angrenzenden Segmente konsistent.
    ///
    /// Gibt `false` zurück wenn kein Knoten mit dieser ID existiert oder er gesperrt ist.
    pub fn move_knot(&mut self, knot_id: u64, position: DVec2) -> bool {
        let mut moved = false;
        for segment in &mut self.segments {
            for knot in [&mut segment.start, &mut segment.end] {
                if knot.id == knot_id && !knot.locked {
                    knot.position = position;
                    moved = true;
                }
            }
        }
        moved
    }

    /// Prüft die Pfad-Invarianten. Die Berechnung selbst setzt sie voraus.
    pub fn validate(&self) -> Result<(), PathError> {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 && segment.start != self.segments[index - 1].end {
                return Err(PathError::BrokenChain { segment: index });
            }
            if !segment.controls().iter().all(|c| is_finite(c.position())) {
                return Err(PathError::NonFiniteCoordinate { segment: index });
            }
            if let Some(kf_index) = segment.keyframes.iter().position(|k| !k.is_in_range()) {
                return Err(PathError::KeyframeOutOfRange {
                    segment: index,
                    index: kf_index,
                });
            }
            if !segment.keyframes_sorted() {
                return Err(PathError::UnsortedKeyframes { segment: index });
            }
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_control_id;
        self.next_control_id += 1;
        id
    }
}

#[cfg(test)]
mod tests;
