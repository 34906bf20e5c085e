//! Ein Bézier-Segment zwischen zwei Knoten.

use super::{Control, Keyframe, Knot, ShapeControl};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Bézier-Kurve vom Grad `shape.len() + 1` zwischen `start` und `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Erster Knoten (identisch mit `end` des Vorgänger-Segments)
    pub start: Knot,
    /// Innere Form-Punkte in Kurvenreihenfolge
    #[serde(default)]
    pub shape: Vec<ShapeControl>,
    /// Letzter Knoten
    pub end: Knot,
    /// Keyframes, sortiert nach `x_pos`
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl Segment {
    /// Erstellt ein Segment ohne Keyframes.
    pub fn new(start: Knot, shape: Vec<ShapeControl>, end: Knot) -> Self {
        Self {
            start,
            shape,
            end,
            keyframes: Vec::new(),
        }
    }

    /// Grad der Kurve (Anzahl Kontrollpunkte − 1).
    pub fn degree(&self) -> usize {
        self.shape.len() + 1
    }

    /// Alle Kontrollpunkte `[c0, …, cn]` in Reihenfolge.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = Vec::with_capacity(self.shape.len() + 2);
        controls.push(Control::Knot(self.start));
        controls.extend(self.shape.iter().copied().map(Control::Shape));
        controls.push(Control::Knot(self.end));
        controls
    }

    /// Nur die Positionen der Kontrollpunkte, Eingabe für die Bézier-Auswertung.
    pub fn control_positions(&self) -> Vec<DVec2> {
        let mut positions = Vec::with_capacity(self.shape.len() + 2);
        positions.push(self.start.position);
        positions.extend(self.shape.iter().map(|c| c.position));
        positions.push(self.end.position);
        positions
    }

    /// Fügt einen Keyframe ein und hält die Liste nach `x_pos` sortiert.
    ///
    /// Werte ausserhalb von [0, 1] werden geklemmt.
    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        let keyframe = Keyframe::new(
            keyframe.x_pos.clamp(0.0, 1.0),
            keyframe.y_pos.clamp(0.0, 1.0),
            keyframe.follow_curve,
        );
        let index = self
            .keyframes
            .partition_point(|existing| existing.x_pos <= keyframe.x_pos);
        self.keyframes.insert(index, keyframe);
    }

    /// `true` wenn die Keyframes aufsteigend nach `x_pos` sortiert sind.
    pub fn keyframes_sorted(&self) -> bool {
        self.keyframes.windows(2).all(|w| w[0].x_pos <= w[1].x_pos)
    }
}
