//! Zentrale Konfiguration der Punktberechnung.
//!
//! `PathConfig` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::units::{Length, LengthUnit};
use serde::{Deserialize, Serialize};

// ── Punktdichte ─────────────────────────────────────────────────────

/// Standard-Abstand der Ausgabepunkte in Zentimetern.
pub const DEFAULT_POINT_DENSITY_CM: f64 = 1.0;
/// Rohsamples je Dichte-Einheit für die Bogenlängen-Schätzung.
pub const RAW_SAMPLES_PER_DENSITY_UNIT: f64 = 200.0;
/// Obergrenze der Rohsamples pro Segment (entspricht 0.0002 cm Punktdichte).
pub const MAX_RAW_SAMPLES_PER_SEGMENT: usize = 1_000_000;
/// Obergrenze der Ausgabepunkte einer Berechnung.
pub const MAX_OUTPUT_POINTS: usize = 10_000_000;

// ── Geschwindigkeit ─────────────────────────────────────────────────

/// Untere physikalische Geschwindigkeitsgrenze.
pub const DEFAULT_SPEED_FROM: f64 = 0.0;
/// Obere physikalische Geschwindigkeitsgrenze.
pub const DEFAULT_SPEED_TO: f64 = 100.0;

// ── Krümmungs-Anpassung ─────────────────────────────────────────────

/// Untere Schwelle des Krümmungs-Proxys (reskaliertes Delta).
pub const DEFAULT_APPLICATION_FROM: f64 = 0.5;
/// Obere Schwelle des Krümmungs-Proxys.
pub const DEFAULT_APPLICATION_TO: f64 = 1.0;

/// Fehlerhafte Konfiguration, gefunden von [`PathConfig::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Punktdichte muss endlich und > 0 sein (ist {0})")]
    InvalidDensity(f64),
    #[error(
        "Punktdichte {0} cm ergibt mehr als {max} Rohsamples pro Segment",
        max = MAX_RAW_SAMPLES_PER_SEGMENT
    )]
    DensityTooFine(f64),
    #[error("Bereich `{name}` enthält nicht-endliche Werte")]
    NonFiniteRange { name: &'static str },
}

/// Zahlenbereich `{from, to}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub from: f64,
    pub to: f64,
}

impl ValueRange {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// `to − from`
    pub fn span(&self) -> f64 {
        self.to - self.from
    }

    /// Leerer Bereich: Interpolation innerhalb ist undefiniert.
    pub fn is_degenerate(&self) -> bool {
        self.to == self.from
    }

    /// Lineare Interpolation `from + span · ratio`.
    pub fn lerp(&self, ratio: f64) -> f64 {
        self.from + self.span() * ratio
    }

    fn is_finite(&self) -> bool {
        self.from.is_finite() && self.to.is_finite()
    }
}

/// Konfiguration einer Punktberechnung.
/// Wird als `path_speed_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Einheit der Pfad-Koordinaten
    #[serde(default)]
    pub unit: LengthUnit,
    /// Gewünschter Abstand der Ausgabepunkte
    pub point_density: Length,
    /// Physikalische Geschwindigkeitsgrenzen
    pub speed_limit: ValueRange,
    /// Schwellen des Krümmungs-Proxys für `follow_curve`-Keyframes
    pub application_range: ValueRange,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Centimeter,
            point_density: Length::centimeters(DEFAULT_POINT_DENSITY_CM),
            speed_limit: ValueRange::new(DEFAULT_SPEED_FROM, DEFAULT_SPEED_TO),
            application_range: ValueRange::new(DEFAULT_APPLICATION_FROM, DEFAULT_APPLICATION_TO),
        }
    }
}

impl PathConfig {
    /// Parameter-Schrittweite der Rohabtastung: `Dichte in cm / 200`.
    pub fn sample_interval(&self) -> f64 {
        self.point_density.to_centimeters() / RAW_SAMPLES_PER_DENSITY_UNIT
    }

    /// Punktdichte in der Koordinaten-Einheit des Pfads.
    pub fn density_in_path_units(&self) -> f64 {
        self.point_density.to(self.unit)
    }

    /// Prüft, ob eine Berechnung mit dieser Konfiguration definiert ist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let density = self.point_density.value;
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::InvalidDensity(density));
        }
        let raw_samples = 1.0 / self.sample_interval();
        if !(raw_samples <= MAX_RAW_SAMPLES_PER_SEGMENT as f64) {
            return Err(ConfigError::DensityTooFine(
                self.point_density.to_centimeters(),
            ));
        }
        if !self.speed_limit.is_finite() {
            return Err(ConfigError::NonFiniteRange {
                name: "speed_limit",
            });
        }
        if !self.application_range.is_finite() {
            return Err(ConfigError::NonFiniteRange {
                name: "application_range",
            });
        }
        Ok(())
    }

    /// Lädt die Konfiguration aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<PathConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => {
                        log::info!("Konfiguration geladen aus: {}", path.display());
                        config
                    }
                    Err(e) => {
                        log::warn!("Konfiguration ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Konfigurationsdatei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Konfigurationsdatei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Konfiguration als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Konfiguration gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Konfigurationsdatei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("path_speed_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("path_speed_planner.toml")
    }
}
