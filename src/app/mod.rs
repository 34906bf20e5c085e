//! Host-Schicht für die Binary: Dateizugriff und Ergebnis-Zusammenfassung.
//!
//! Die Berechnung selbst liegt in `calculation` und kennt kein I/O.

pub mod file_io;
mod summary;

pub use file_io::{load_path, parse_path, write_result};
pub use summary::{summarize, CalculationSummary};
