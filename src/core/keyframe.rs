//! Geschwindigkeits-Keyframes, lokal zu einem Segment.

use serde::{Deserialize, Serialize};

/// Normierter (Position, Zielgeschwindigkeit)-Marker innerhalb eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Lage im Punktbereich des Segments, [0, 1)
    pub x_pos: f64,
    /// Normierte Zielgeschwindigkeit, [0, 1]
    pub y_pos: f64,
    /// Geschwindigkeit zusätzlich an die Krümmung anpassen
    #[serde(default)]
    pub follow_curve: bool,
}

impl Keyframe {
    pub fn new(x_pos: f64, y_pos: f64, follow_curve: bool) -> Self {
        Self {
            x_pos,
            y_pos,
            follow_curve,
        }
    }

    /// Virtueller Start-Keyframe jedes Pfads: 100 % Geschwindigkeit ab Index 0.
    pub fn path_start() -> Self {
        Self::new(0.0, 1.0, false)
    }

    /// `true` wenn beide Werte in [0, 1] liegen.
    pub fn is_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.x_pos) && (0.0..=1.0).contains(&self.y_pos)
    }
}
