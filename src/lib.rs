//! Path Speed Planner Library.
//! Punktberechnung als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod calculation;
pub mod core;
pub mod shared;

pub use app::{load_path, summarize, write_result, CalculationSummary};
pub use calculation::{calculate, IndexRange, KeyframeIndexing, Point, PointCalculationResult};
pub use core::{Control, Keyframe, Knot, Path, PathError, Segment, ShapeControl};
pub use shared::{ConfigError, Length, LengthUnit, PathConfig, ValueRange};
