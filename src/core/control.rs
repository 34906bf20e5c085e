//! Kontrollpunkte eines Segments: Knoten (Endpunkte mit Heading) und Form-Punkte.

use super::vector::normalize_heading;
use glam::DVec2;
use serde::{Deserialize, Deserializer, Serialize};

/// Endpunkt eines Segments ("Knot"). Nur Knoten tragen ein Heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knot {
    /// Identität, wird von benachbarten Segmenten geteilt
    pub id: u64,
    /// Position in Pfad-Längeneinheiten
    pub position: DVec2,
    /// Heading in Grad, immer in [0, 360)
    #[serde(deserialize_with = "deserialize_heading")]
    heading: f64,
    /// Gegen Verschieben gesperrt
    #[serde(default)]
    pub locked: bool,
    /// Im Editor sichtbar
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Knot {
    /// Erstellt einen sichtbaren, ungesperrten Knoten. Das Heading wird normalisiert.
    pub fn new(id: u64, position: DVec2, heading: f64) -> Self {
        Self {
            id,
            position,
            heading: normalize_heading(heading),
            locked: false,
            visible: true,
        }
    }

    /// Heading in Grad [0, 360).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Setzt das Heading (wird auf [0, 360) normalisiert).
    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize_heading(degrees);
    }
}

/// Innerer Form-Punkt eines Segments (ohne Heading).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeControl {
    pub id: u64,
    pub position: DVec2,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl ShapeControl {
    pub fn new(id: u64, position: DVec2) -> Self {
        Self {
            id,
            position,
            locked: false,
            visible: true,
        }
    }
}

/// Ein beliebiger Kontrollpunkt eines Segments.
///
/// Die Unterscheidung Knoten/Form-Punkt steckt im Typ, nicht in einem Laufzeit-Flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Knot(Knot),
    Shape(ShapeControl),
}

impl Control {
    pub fn id(&self) -> u64 {
        match self {
            Control::Knot(knot) => knot.id,
            Control::Shape(shape) => shape.id,
        }
    }

    pub fn position(&self) -> DVec2 {
        match self {
            Control::Knot(knot) => knot.position,
            Control::Shape(shape) => shape.position,
        }
    }

    /// Heading nur für Knoten, Form-Punkte liefern `None`.
    pub fn heading(&self) -> Option<f64> {
        match self {
            Control::Knot(knot) => Some(knot.heading()),
            Control::Shape(_) => None,
        }
    }
}

/// Serde-Default für `visible` (ältere Pfad-Dateien ohne Feld).
fn default_visible() -> bool {
    true
}

/// Normalisiert geladene Headings auf [0, 360).
fn deserialize_heading<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(normalize_heading)
}
