//! Vektor-Hilfsfunktionen auf Basis von `glam::DVec2`.
//!
//! glam liefert Translation, Skalierung, Distanz und `lerp` bereits selbst.
//! Hier liegen nur die Operationen, die glam nicht kennt. Alle Funktionen
//! geben neue Werte zurück und verändern ihre Argumente nicht.

use glam::DVec2;

/// Spiegelt `point` am Zentrum `center` (Punktspiegelung).
///
/// Entspricht `2·center − point`, z.B. für gegenüberliegende Tangenten-Handles.
pub fn mirror_about(point: DVec2, center: DVec2) -> DVec2 {
    2.0 * center - point
}

/// Normalisiert einen Winkel in Grad auf das Intervall [0, 360).
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid kann bei sehr kleinen negativen Werten exakt 360.0 liefern
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// `true` wenn beide Komponenten endlich sind.
pub fn is_finite(point: DVec2) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
