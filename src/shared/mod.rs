//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration und Längeneinheiten, die von `calculation`
//! und `app` gemeinsam genutzt werden.

pub mod options;
pub mod units;

pub use options::{ConfigError, PathConfig, ValueRange};
pub use options::{
    DEFAULT_POINT_DENSITY_CM, MAX_OUTPUT_POINTS, MAX_RAW_SAMPLES_PER_SEGMENT,
    RAW_SAMPLES_PER_DENSITY_UNIT,
};
pub use units::{Length, LengthUnit};
