//! Core-Domänentypen: Kontrollpunkte, Keyframes, Segmente, Pfad.

pub mod control;
pub mod keyframe;
/// Datenmodell eines Bézier-Pfads
///
/// - Path: verkettete Segmente
/// - Segment: Bézier-Kurve zwischen zwei Knoten, mit Keyframes
/// - Knot/ShapeControl: Endpunkte mit Heading bzw. innere Form-Punkte
pub mod path;
pub mod segment;
pub mod vector;

pub use control::{Control, Knot, ShapeControl};
pub use keyframe::Keyframe;
pub use path::{Path, PathError};
pub use segment::Segment;
